//! The `LarpStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `larp-store-sqlite`).
//! The importer and the reports depend on this abstraction, not on any
//! concrete backend.
//!
//! Every kind that the importer upserts has a separate `find_*` (lookup by
//! natural key) and `create_*` (unconditional insert). Composing the two is
//! the caller's job; see `larp_import::resolve`.

use std::future::Future;

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use uuid::Uuid;

use crate::{
  event::{
    AssignmentKey, Character, CharacterAssignment, CharacterKey, Event, Group,
    GroupKey, NewAssignment, NewCharacter, NewGroup, Race,
  },
  player::{
    Accommodation, Booking, BookingKey, BusStop, PlayerAccount, PlayerMeasurement,
    PlayerName,
  },
  uniform::{NewUniformSize, Uniform, UniformKey, UniformSize},
};

/// The kinds of record the store holds. Used in logs and errors.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
  Event,
  Group,
  Race,
  Character,
  Player,
  Assignment,
  Uniform,
  UniformSize,
  Measurement,
  Booking,
  Accommodation,
  BusStop,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a LARP store backend.
///
/// Natural keys are expected to be unique. A backend that cannot guarantee
/// it must return the oldest match from `find_*`.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait LarpStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Events ────────────────────────────────────────────────────────────

  fn find_event(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Option<Event>, Self::Error>> + Send + '_;

  fn create_event(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Event, Self::Error>> + Send + '_;

  fn get_event(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Event>, Self::Error>> + Send + '_;

  fn list_events(&self) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send + '_;

  // ── Groups and races ──────────────────────────────────────────────────

  fn find_group(
    &self,
    key: GroupKey,
  ) -> impl Future<Output = Result<Option<Group>, Self::Error>> + Send + '_;

  fn create_group(
    &self,
    input: NewGroup,
  ) -> impl Future<Output = Result<Group, Self::Error>> + Send + '_;

  fn get_group(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Group>, Self::Error>> + Send + '_;

  /// All groups of an event, oldest first.
  fn list_groups(
    &self,
    event_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Group>, Self::Error>> + Send + '_;

  fn find_race(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Option<Race>, Self::Error>> + Send + '_;

  fn create_race(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Race, Self::Error>> + Send + '_;

  // ── Characters and assignments ────────────────────────────────────────

  fn find_character(
    &self,
    key: CharacterKey,
  ) -> impl Future<Output = Result<Option<Character>, Self::Error>> + Send + '_;

  fn create_character(
    &self,
    input: NewCharacter,
  ) -> impl Future<Output = Result<Character, Self::Error>> + Send + '_;

  /// All characters in a group, oldest first.
  fn list_characters(
    &self,
    group_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Character>, Self::Error>> + Send + '_;

  fn find_assignment(
    &self,
    key: AssignmentKey,
  ) -> impl Future<Output = Result<Option<CharacterAssignment>, Self::Error>> + Send + '_;

  fn create_assignment(
    &self,
    input: NewAssignment,
  ) -> impl Future<Output = Result<CharacterAssignment, Self::Error>> + Send + '_;

  /// Assignments of a character, optionally restricted to one run, oldest
  /// first.
  fn list_assignments(
    &self,
    character_id: Uuid,
    run: Option<u32>,
  ) -> impl Future<Output = Result<Vec<CharacterAssignment>, Self::Error>> + Send + '_;

  // ── Players ───────────────────────────────────────────────────────────

  fn find_player(
    &self,
    name: PlayerName,
  ) -> impl Future<Output = Result<Option<PlayerAccount>, Self::Error>> + Send + '_;

  fn find_player_by_username(
    &self,
    username: String,
  ) -> impl Future<Output = Result<Option<PlayerAccount>, Self::Error>> + Send + '_;

  fn create_player(
    &self,
    name: PlayerName,
  ) -> impl Future<Output = Result<PlayerAccount, Self::Error>> + Send + '_;

  fn get_player(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<PlayerAccount>, Self::Error>> + Send + '_;

  fn find_measurement(
    &self,
    player_id: Uuid,
  ) -> impl Future<Output = Result<Option<PlayerMeasurement>, Self::Error>> + Send + '_;

  /// Persist a fresh, all-zero measurement profile for a player.
  fn create_measurement(
    &self,
    player_id: Uuid,
  ) -> impl Future<Output = Result<PlayerMeasurement, Self::Error>> + Send + '_;

  /// Overwrite an existing profile (matched by `measurement_id`).
  fn save_measurement(
    &self,
    measurement: PlayerMeasurement,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Bookings ──────────────────────────────────────────────────────────

  fn find_booking(
    &self,
    key: BookingKey,
  ) -> impl Future<Output = Result<Option<Booking>, Self::Error>> + Send + '_;

  fn create_booking(
    &self,
    key: BookingKey,
  ) -> impl Future<Output = Result<Booking, Self::Error>> + Send + '_;

  /// Overwrite an existing booking (matched by `booking_id`).
  fn save_booking(
    &self,
    booking: Booking,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn find_accommodation(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Option<Accommodation>, Self::Error>> + Send + '_;

  fn create_accommodation(
    &self,
    event_id: Option<Uuid>,
    name: String,
  ) -> impl Future<Output = Result<Accommodation, Self::Error>> + Send + '_;

  fn find_bus_stop(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Option<BusStop>, Self::Error>> + Send + '_;

  fn create_bus_stop(
    &self,
    event_id: Option<Uuid>,
    name: String,
  ) -> impl Future<Output = Result<BusStop, Self::Error>> + Send + '_;

  // ── Uniforms ──────────────────────────────────────────────────────────

  fn find_uniform(
    &self,
    key: UniformKey,
  ) -> impl Future<Output = Result<Option<Uniform>, Self::Error>> + Send + '_;

  fn create_uniform(
    &self,
    key: UniformKey,
  ) -> impl Future<Output = Result<Uniform, Self::Error>> + Send + '_;

  fn get_uniform(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Uniform>, Self::Error>> + Send + '_;

  /// All uniforms, oldest first.
  fn list_uniforms(&self) -> impl Future<Output = Result<Vec<Uniform>, Self::Error>> + Send + '_;

  /// Append a size to a uniform. Sizes are never deduplicated.
  fn add_uniform_size(
    &self,
    uniform_id: Uuid,
    input: NewUniformSize,
  ) -> impl Future<Output = Result<UniformSize, Self::Error>> + Send + '_;

  /// The sizes of a uniform in the order they were added.
  fn list_uniform_sizes(
    &self,
    uniform_id: Uuid,
  ) -> impl Future<Output = Result<Vec<UniformSize>, Self::Error>> + Send + '_;
}
