//! The entity resolver: look a record up by its natural key and create it
//! only when the lookup comes back empty.
//!
//! Lookup and create are separate [`LarpStore`] calls, so the pair is not
//! atomic. Two imports racing on the same key can both miss the lookup; the
//! loser's create then fails on the store's uniqueness constraint.

use std::future::Future;

use larp_core::{
  event::{
    AssignmentKey, Character, CharacterAssignment, Event, Group, NewAssignment, NewCharacter,
    NewGroup, Race,
  },
  player::{PlayerAccount, PlayerName},
  store::{EntityKind, LarpStore},
  uniform::{Uniform, UniformKey},
};

/// A record plus whether this call created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
  pub record:  T,
  pub created: bool,
}

async fn resolve_with<T, E, F, Fut>(
  kind: EntityKind,
  found: Result<Option<T>, E>,
  create: F,
) -> Result<Resolved<T>, E>
where
  F: FnOnce() -> Fut,
  Fut: Future<Output = Result<T, E>>,
{
  if let Some(record) = found? {
    return Ok(Resolved { record, created: false });
  }
  let record = create().await?;
  tracing::debug!(%kind, "created");
  Ok(Resolved { record, created: true })
}

/// Resolve-or-create for every kind the importer upserts.
pub struct Resolver<'s, S> {
  store: &'s S,
}

impl<'s, S: LarpStore> Resolver<'s, S> {
  pub fn new(store: &'s S) -> Self { Self { store } }

  pub async fn event(&self, name: &str) -> Result<Resolved<Event>, S::Error> {
    resolve_with(
      EntityKind::Event,
      self.store.find_event(name.to_owned()).await,
      || self.store.create_event(name.to_owned()),
    )
    .await
  }

  pub async fn group(&self, input: NewGroup) -> Result<Resolved<Group>, S::Error> {
    let found = self.store.find_group(input.key()).await;
    resolve_with(EntityKind::Group, found, || self.store.create_group(input)).await
  }

  pub async fn race(&self, name: &str) -> Result<Resolved<Race>, S::Error> {
    resolve_with(
      EntityKind::Race,
      self.store.find_race(name.to_owned()).await,
      || self.store.create_race(name.to_owned()),
    )
    .await
  }

  pub async fn character(&self, input: NewCharacter) -> Result<Resolved<Character>, S::Error> {
    let found = self.store.find_character(input.key()).await;
    resolve_with(EntityKind::Character, found, || self.store.create_character(input)).await
  }

  pub async fn player(&self, name: PlayerName) -> Result<Resolved<PlayerAccount>, S::Error> {
    let found = self.store.find_player(name.clone()).await;
    resolve_with(EntityKind::Player, found, || self.store.create_player(name)).await
  }

  pub async fn assignment(
    &self,
    input: NewAssignment,
  ) -> Result<Resolved<CharacterAssignment>, S::Error> {
    let key = AssignmentKey {
      run:          input.run,
      character_id: input.character_id,
      player_id:    input.player_id,
    };
    let found = self.store.find_assignment(key).await;
    resolve_with(EntityKind::Assignment, found, || self.store.create_assignment(input)).await
  }

  pub async fn uniform(&self, key: UniformKey) -> Result<Resolved<Uniform>, S::Error> {
    let found = self.store.find_uniform(key.clone()).await;
    resolve_with(EntityKind::Uniform, found, || self.store.create_uniform(key)).await
  }
}
