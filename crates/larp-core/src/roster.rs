//! Read models assembled from a [`LarpStore`]: group rosters, uniform size
//! reports, and per-run player information for an event.
//!
//! Measurement profiles and bookings are created on first access, so these
//! functions may write.

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::{
  Error, Result,
  event::{Character, CharacterAssignment, Event, Group},
  fit::{self, FitTier},
  player::{Booking, BookingKey, BookingUpdate, MeasurementUpdate, PlayerAccount, PlayerMeasurement},
  quantity::{self, SizeQuantity},
  store::{EntityKind, LarpStore},
  uniform::{Uniform, UniformSize},
};

// ─── Measurements and bookings ───────────────────────────────────────────────

/// The player's measurement profile, created (all zeros) if absent.
pub async fn measurement_for<S: LarpStore>(store: &S, player_id: Uuid) -> Result<PlayerMeasurement> {
  if let Some(existing) = store.find_measurement(player_id).await.map_err(Error::store)? {
    return Ok(existing);
  }
  store.create_measurement(player_id).await.map_err(Error::store)
}

/// Replace every field of the player's measurement profile.
pub async fn update_measurement<S: LarpStore>(
  store: &S,
  player_id: Uuid,
  update: MeasurementUpdate,
) -> Result<PlayerMeasurement> {
  let mut measurement = measurement_for(store, player_id).await?;
  measurement.apply(update);
  store.save_measurement(measurement.clone()).await.map_err(Error::store)?;
  Ok(measurement)
}

/// The booking for (player, event, run), created if absent.
pub async fn booking_for<S: LarpStore>(store: &S, key: BookingKey) -> Result<Booking> {
  if let Some(existing) = store.find_booking(key).await.map_err(Error::store)? {
    return Ok(existing);
  }
  store.create_booking(key).await.map_err(Error::store)
}

/// Point a booking at a named bus stop and accommodation. Both must already
/// exist.
pub async fn update_booking<S: LarpStore>(
  store: &S,
  key: BookingKey,
  update: BookingUpdate,
) -> Result<Booking> {
  let bus_stop = store
    .find_bus_stop(update.bus_stop.clone())
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::UnknownBusStop(update.bus_stop.clone()))?;
  let accommodation = store
    .find_accommodation(update.accommodation.clone())
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::UnknownAccommodation(update.accommodation.clone()))?;

  let mut booking = booking_for(store, key).await?;
  booking.bus_stop_id = Some(bus_stop.bus_stop_id);
  booking.accommodation_id = Some(accommodation.accommodation_id);
  booking.sleeping_bag = update.sleeping_bag;
  booking.comments = update.comments;
  store.save_booking(booking.clone()).await.map_err(Error::store)?;
  Ok(booking)
}

// ─── Groups ──────────────────────────────────────────────────────────────────

/// Every assignment of every character in the group, paired with its
/// character. `run` restricts to one run.
pub async fn group_assignments<S: LarpStore>(
  store: &S,
  group_id: Uuid,
  run: Option<u32>,
) -> Result<Vec<(Character, CharacterAssignment)>> {
  let characters = store.list_characters(group_id).await.map_err(Error::store)?;
  let mut out = Vec::new();
  for character in characters {
    let assignments = store
      .list_assignments(character.character_id, run)
      .await
      .map_err(Error::store)?;
    out.extend(assignments.into_iter().map(|a| (character.clone(), a)));
  }
  Ok(out)
}

/// The distinct measurement profiles of every player assigned in the group,
/// in first-seen order.
pub async fn group_player_profiles<S: LarpStore>(
  store: &S,
  group_id: Uuid,
) -> Result<Vec<PlayerMeasurement>> {
  let mut profiles: Vec<PlayerMeasurement> = Vec::new();
  for (_, assignment) in group_assignments(store, group_id, None).await? {
    if profiles.iter().any(|p| p.player_id == assignment.player_id) {
      continue;
    }
    profiles.push(measurement_for(store, assignment.player_id).await?);
  }
  Ok(profiles)
}

// ─── Uniform size report ─────────────────────────────────────────────────────

/// One roster player with their recommended sizes.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerFit {
  pub player:      PlayerAccount,
  pub measurement: PlayerMeasurement,
  pub tier:        Option<FitTier>,
  pub sizes:       Vec<UniformSize>,
  /// The player's assignments within the uniform's group.
  pub assignments: Vec<CharacterAssignment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UniformReport {
  pub uniform:    Uniform,
  pub group:      Option<Group>,
  pub players:    Vec<PlayerFit>,
  pub quantities: Vec<SizeQuantity>,
}

/// Run the size matcher for everyone in the uniform's group and tally order
/// quantities. A uniform without a group yields no players and all-zero
/// quantities.
pub async fn uniform_report<S: LarpStore>(store: &S, uniform_id: Uuid) -> Result<UniformReport> {
  let uniform = store
    .get_uniform(uniform_id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound { kind: EntityKind::Uniform, id: uniform_id })?;
  let sizes = store.list_uniform_sizes(uniform_id).await.map_err(Error::store)?;

  let group = match uniform.group_id {
    Some(group_id) => store.get_group(group_id).await.map_err(Error::store)?,
    None => None,
  };

  let Some(group) = group else {
    let quantities = quantity::aggregate(&sizes, &[]);
    return Ok(UniformReport { uniform, group: None, players: Vec::new(), quantities });
  };

  let profiles = group_player_profiles(store, group.group_id).await?;
  let assignments = group_assignments(store, group.group_id, None).await?;

  let mut players = Vec::with_capacity(profiles.len());
  for measurement in &profiles {
    let player = store
      .get_player(measurement.player_id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound { kind: EntityKind::Player, id: measurement.player_id })?;
    let recommendation = fit::recommend(&sizes, measurement.chest, measurement.waist);
    players.push(PlayerFit {
      player,
      measurement: measurement.clone(),
      tier: recommendation.tier,
      sizes: recommendation.sizes.into_iter().cloned().collect(),
      assignments: assignments
        .iter()
        .filter(|(_, a)| a.player_id == measurement.player_id)
        .map(|(_, a)| a.clone())
        .collect(),
    });
  }

  let quantities = quantity::aggregate(&sizes, &profiles);
  Ok(UniformReport { uniform, group: Some(group), players, quantities })
}

// ─── Event information ───────────────────────────────────────────────────────

/// All assignments in the event's groups, optionally for one run.
async fn event_assignments<S: LarpStore>(
  store: &S,
  event: &Event,
  run: Option<u32>,
) -> Result<Vec<(Character, CharacterAssignment)>> {
  let groups = store.list_groups(event.event_id).await.map_err(Error::store)?;
  let mut out = Vec::new();
  for group in groups {
    out.extend(group_assignments(store, group.group_id, run).await?);
  }
  Ok(out)
}

fn highest_run(assignments: &[(Character, CharacterAssignment)]) -> u32 {
  assignments.iter().map(|(_, a)| a.run).max().unwrap_or(0)
}

async fn get_event<S: LarpStore>(store: &S, event_id: Uuid) -> Result<Event> {
  store
    .get_event(event_id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound { kind: EntityKind::Event, id: event_id })
}

/// The highest run number assigned in the event, 0 when nothing is assigned.
pub async fn number_of_runs<S: LarpStore>(store: &S, event_id: Uuid) -> Result<u32> {
  let event = get_event(store, event_id).await?;
  Ok(highest_run(&event_assignments(store, &event, None).await?))
}

/// What organisers need to know about one assigned player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerInfo {
  pub player:      String,
  pub character:   String,
  pub run:         u32,
  pub measurement: PlayerMeasurement,
  pub booking:     Booking,
}

/// Player information grouped by run, in run order. Only runs that have at
/// least one assignment appear.
pub async fn players_information<S: LarpStore>(
  store: &S,
  event_id: Uuid,
) -> Result<BTreeMap<u32, Vec<PlayerInfo>>> {
  let event = get_event(store, event_id).await?;
  let assignments = event_assignments(store, &event, None).await?;
  let mut runs: BTreeMap<u32, Vec<PlayerInfo>> = BTreeMap::new();

  for (character, assignment) in assignments {
    let player = store
      .get_player(assignment.player_id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound { kind: EntityKind::Player, id: assignment.player_id })?;
    let measurement = measurement_for(store, player.player_id).await?;
    let booking = booking_for(store, BookingKey {
      player_id: player.player_id,
      event_id,
      run: assignment.run,
    })
    .await?;

    runs.entry(assignment.run).or_default().push(PlayerInfo {
      player: player.display_name(),
      character: character.name,
      run: assignment.run,
      measurement,
      booking,
    });
  }

  Ok(runs)
}
