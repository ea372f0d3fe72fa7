//! Player accounts and the per-player data organisers collect: body
//! measurements for uniforms, and travel/lodging bookings per run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text::is_blank;

// ─── Account ─────────────────────────────────────────────────────────────────

/// The identity triple derived from a free-text "first last" name. Doubles as
/// the natural key of a [`PlayerAccount`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName {
  pub username:   String,
  pub first_name: String,
  pub last_name:  String,
}

impl PlayerName {
  /// Derive the identity triple from a full name. Returns `None` when the
  /// name is blank.
  ///
  /// The username is the whitespace-separated tokens joined with `_`; the
  /// first name is the first token and the last name the remaining tokens
  /// joined with a single space.
  pub fn derive(full_name: &str) -> Option<Self> {
    if is_blank(full_name) {
      return None;
    }
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    Some(Self {
      username:   tokens.join("_"),
      first_name: tokens[0].to_owned(),
      last_name:  tokens[1..].join(" "),
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAccount {
  pub player_id:  Uuid,
  pub username:   String,
  pub first_name: String,
  pub last_name:  String,
  pub created_at: DateTime<Utc>,
}

impl PlayerAccount {
  /// `"{first} {last}"`, with the separating space kept even when the last
  /// name is empty.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  /// The full name, or the username when the account has no name parts.
  pub fn display_name(&self) -> String {
    if self.first_name.is_empty() && self.last_name.is_empty() {
      self.username.clone()
    } else {
      self.full_name()
    }
  }
}

// ─── Measurements ────────────────────────────────────────────────────────────

/// Body measurements, in centimetres. A fresh profile is all zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMeasurement {
  pub measurement_id:  Uuid,
  pub player_id:       Uuid,
  pub chest:           i32,
  pub arm_length:      i32,
  pub waist:           i32,
  pub shoulder_length: i32,
  pub torso_length:    i32,
  pub body_length:     i32,
  pub gender:          Option<String>,
}

impl PlayerMeasurement {
  pub fn empty(player_id: Uuid) -> Self {
    Self {
      measurement_id: Uuid::new_v4(),
      player_id,
      chest: 0,
      arm_length: 0,
      waist: 0,
      shoulder_length: 0,
      torso_length: 0,
      body_length: 0,
      gender: None,
    }
  }

  pub fn apply(&mut self, update: MeasurementUpdate) {
    self.chest = update.chest;
    self.arm_length = update.arm_length;
    self.waist = update.waist;
    self.shoulder_length = update.shoulder_length;
    self.torso_length = update.torso_length;
    self.body_length = update.body_length;
    self.gender = update.gender;
  }
}

/// Replacement values for every field of a [`PlayerMeasurement`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementUpdate {
  pub chest:           i32,
  pub arm_length:      i32,
  pub waist:           i32,
  pub shoulder_length: i32,
  pub torso_length:    i32,
  pub body_length:     i32,
  pub gender:          Option<String>,
}

// ─── Bookings ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accommodation {
  pub accommodation_id: Uuid,
  pub event_id:         Option<Uuid>,
  pub name:             String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusStop {
  pub bus_stop_id: Uuid,
  pub event_id:    Option<Uuid>,
  pub name:        String,
}

/// Comments a booking starts with.
pub const DEFAULT_BOOKING_COMMENTS: &str = "no";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
  pub booking_id:       Uuid,
  pub player_id:        Uuid,
  pub event_id:         Uuid,
  pub run:              u32,
  pub bus_stop_id:      Option<Uuid>,
  pub accommodation_id: Option<Uuid>,
  pub sleeping_bag:     Option<bool>,
  pub comments:         Option<String>,
}

impl Booking {
  pub fn new(key: BookingKey) -> Self {
    Self {
      booking_id:       Uuid::new_v4(),
      player_id:        key.player_id,
      event_id:         key.event_id,
      run:              key.run,
      bus_stop_id:      None,
      accommodation_id: None,
      sleeping_bag:     None,
      comments:         Some(DEFAULT_BOOKING_COMMENTS.to_owned()),
    }
  }
}

/// Natural key of a [`Booking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingKey {
  pub player_id: Uuid,
  pub event_id:  Uuid,
  pub run:       u32,
}

/// A booking change as entered by the player; places are given by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingUpdate {
  pub bus_stop:      String,
  pub accommodation: String,
  pub sleeping_bag:  Option<bool>,
  pub comments:      Option<String>,
}
