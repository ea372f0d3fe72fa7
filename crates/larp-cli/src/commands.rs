//! Subcommand bodies. Each prints to stdout and returns `anyhow` errors.

use std::path::Path;

use anyhow::{Context as _, bail};
use larp_core::{
  player::MeasurementUpdate,
  roster,
  store::LarpStore,
  uniform::{Uniform, UniformDisplay},
};
use larp_store_sqlite::SqliteStore;
use uuid::Uuid;

pub async fn import(
  store: &SqliteStore,
  event_name: &str,
  file: &Path,
  file_type: &str,
) -> anyhow::Result<()> {
  let data = tokio::fs::read(file)
    .await
    .with_context(|| format!("failed to read {}", file.display()))?;
  let report = larp_import::process(store, event_name, &data, file_type)
    .await
    .with_context(|| format!("failed to import {}", file.display()))?;
  for line in report {
    println!("{line}");
  }
  Ok(())
}

pub async fn uniforms(store: &SqliteStore) -> anyhow::Result<()> {
  for uniform in store.list_uniforms().await? {
    let group = match uniform.group_id {
      Some(group_id) => store.get_group(group_id).await?,
      None => None,
    };
    println!("{}  {}", uniform.uniform_id, UniformDisplay { uniform: &uniform, group: group.as_ref() });
  }
  Ok(())
}

/// A uniform by id, or the first one with a matching name.
async fn find_uniform(store: &SqliteStore, needle: &str) -> anyhow::Result<Uniform> {
  if let Ok(id) = Uuid::parse_str(needle)
    && let Some(uniform) = store.get_uniform(id).await?
  {
    return Ok(uniform);
  }
  store
    .list_uniforms()
    .await?
    .into_iter()
    .find(|u| u.name == needle)
    .with_context(|| format!("no uniform named {needle:?}"))
}

pub async fn sizes(store: &SqliteStore, uniform: &str, json: bool) -> anyhow::Result<()> {
  let uniform = find_uniform(store, uniform).await?;
  let report = roster::uniform_report(store, uniform.uniform_id).await?;

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
    return Ok(());
  }

  println!("{}", UniformDisplay { uniform: &report.uniform, group: report.group.as_ref() });
  for fit in &report.players {
    let sizes: Vec<String> = fit.sizes.iter().map(|s| s.label()).collect();
    let sizes = if sizes.is_empty() { "no fit".to_owned() } else { sizes.join(", ") };
    println!(
      "  {:<24} chest {:>3} waist {:>3}  {sizes}",
      fit.player.display_name(),
      fit.measurement.chest,
      fit.measurement.waist,
    );
  }
  println!();
  for q in &report.quantities {
    println!("  {:<12} {:>3}", q.label, q.quantity);
  }
  println!("  {:<12} {:>3}", "total", larp_core::quantity::total(&report.quantities));
  Ok(())
}

pub async fn measure(
  store: &SqliteStore,
  username: &str,
  update: MeasurementUpdate,
) -> anyhow::Result<()> {
  let Some(player) = store.find_player_by_username(username.to_owned()).await? else {
    bail!("no player with username {username:?}");
  };
  let m = roster::update_measurement(store, player.player_id, update).await?;
  println!(
    "{}: chest {} waist {} arm {} shoulder {} torso {} body {}",
    player.display_name(),
    m.chest,
    m.waist,
    m.arm_length,
    m.shoulder_length,
    m.torso_length,
    m.body_length,
  );
  Ok(())
}

pub async fn runs(store: &SqliteStore) -> anyhow::Result<()> {
  for event in store.list_events().await? {
    let runs = roster::number_of_runs(store, event.event_id).await?;
    println!("{}  {:<24} {runs}", event.event_id, event.name);
  }
  Ok(())
}

pub async fn players(store: &SqliteStore, event_name: &str, run: u32) -> anyhow::Result<()> {
  let Some(event) = store.find_event(event_name.to_owned()).await? else {
    bail!("no event named {event_name:?}");
  };
  let runs = roster::players_information(store, event.event_id).await?;
  let Some(infos) = runs.get(&run) else {
    bail!("{} has no assignments in run {run}", event.name);
  };
  for info in infos {
    println!(
      "{:<24} {:<20} chest {:>3} waist {:>3}  comments: {}",
      info.player,
      info.character,
      info.measurement.chest,
      info.measurement.waist,
      info.booking.comments.as_deref().unwrap_or(""),
    );
  }
  Ok(())
}
