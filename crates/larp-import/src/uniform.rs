//! Uniform rows: `name, group, color, gender, american_size, european_size,
//! chest_min, chest_max, waist_min, waist_max`.

use larp_core::{
  event::NewGroup,
  store::LarpStore,
  text::is_blank,
  uniform::{UniformDisplay, UniformKey},
};

use crate::{resolve::Resolver, row::UniformRow};

/// Import one uniform row: resolve the uniform (and its group, when the
/// column is not blank), then append the size the row describes.
///
/// Sizes are never deduplicated; importing the same row twice leaves two
/// identical sizes on the uniform.
pub async fn import_uniform_row<S: LarpStore>(
  store: &S,
  event_name: &str,
  row: &UniformRow,
) -> Result<String, S::Error> {
  let resolver = Resolver::new(store);
  let event = resolver.event(event_name).await?.record;

  let group = if is_blank(&row.group) {
    None
  } else {
    let input = NewGroup {
      event_id: event.event_id,
      name:     row.group.clone(),
      weapon:   String::new(),
    };
    Some(resolver.group(input).await?.record)
  };

  let uniform = resolver
    .uniform(UniformKey {
      name:     row.name.clone(),
      group_id: group.as_ref().map(|g| g.group_id),
    })
    .await?
    .record;

  let size = store.add_uniform_size(uniform.uniform_id, row.size()).await?;
  tracing::debug!(uniform = %uniform.uniform_id, label = %size.label(), "added size");

  let display = UniformDisplay { uniform: &uniform, group: group.as_ref() };
  Ok(format!("{display} - {}", size.display(&uniform)))
}
