//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings and UUIDs as hyphenated
//! lowercase strings. Each `Raw*` type holds one row exactly as read; its
//! `from_row` expects the columns in the order of the matching `*_COLUMNS`
//! constant.

use chrono::{DateTime, Utc};
use larp_core::{
  event::{Character, CharacterAssignment, Event, Group, Race},
  player::{Accommodation, Booking, BusStop, PlayerAccount, PlayerMeasurement},
  uniform::{Uniform, UniformSize},
};
use rusqlite::Row;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Scalars ─────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn encode_opt_uuid(id: Option<Uuid>) -> Option<String> { id.map(encode_uuid) }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

pub fn decode_opt_uuid(s: Option<String>) -> Result<Option<Uuid>> {
  s.as_deref().map(decode_uuid).transpose()
}

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn decode_run(run: i64) -> Result<u32> {
  u32::try_from(run).map_err(|_| Error::Decode(format!("run out of range: {run}")))
}

// ─── Column lists ────────────────────────────────────────────────────────────

pub const EVENT_COLUMNS: &str = "event_id, name";
pub const GROUP_COLUMNS: &str = "group_id, event_id, name, weapon";
pub const RACE_COLUMNS: &str = "race_id, name";
pub const CHARACTER_COLUMNS: &str =
  "character_id, name, group_id, race_id, character_type, rank, sheet";
pub const PLAYER_COLUMNS: &str = "player_id, username, first_name, last_name, created_at";
pub const ASSIGNMENT_COLUMNS: &str =
  "assignment_id, run, character_id, player_id, gender, discord_email, assigned_at";
pub const MEASUREMENT_COLUMNS: &str = "measurement_id, player_id, chest, arm_length, waist, \
                                       shoulder_length, torso_length, body_length, gender";
pub const BOOKING_COLUMNS: &str = "booking_id, player_id, event_id, run, bus_stop_id, \
                                   accommodation_id, sleeping_bag, comments";
pub const ACCOMMODATION_COLUMNS: &str = "accommodation_id, event_id, name";
pub const BUS_STOP_COLUMNS: &str = "bus_stop_id, event_id, name";
pub const UNIFORM_COLUMNS: &str = "uniform_id, name, group_id";
pub const SIZE_COLUMNS: &str = "size_id, uniform_id, gender, american_size, european_size, \
                                chest_min, chest_max, waist_min, waist_max";

// ─── Row types ───────────────────────────────────────────────────────────────

pub struct RawEvent {
  pub event_id: String,
  pub name:     String,
}

impl RawEvent {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { event_id: row.get(0)?, name: row.get(1)? })
  }

  pub fn into_event(self) -> Result<Event> {
    Ok(Event { event_id: decode_uuid(&self.event_id)?, name: self.name })
  }
}

pub struct RawGroup {
  pub group_id: String,
  pub event_id: String,
  pub name:     String,
  pub weapon:   String,
}

impl RawGroup {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      group_id: row.get(0)?,
      event_id: row.get(1)?,
      name:     row.get(2)?,
      weapon:   row.get(3)?,
    })
  }

  pub fn into_group(self) -> Result<Group> {
    Ok(Group {
      group_id: decode_uuid(&self.group_id)?,
      event_id: decode_uuid(&self.event_id)?,
      name:     self.name,
      weapon:   self.weapon,
    })
  }
}

pub struct RawRace {
  pub race_id: String,
  pub name:    String,
}

impl RawRace {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { race_id: row.get(0)?, name: row.get(1)? })
  }

  pub fn into_race(self) -> Result<Race> {
    Ok(Race { race_id: decode_uuid(&self.race_id)?, name: self.name })
  }
}

pub struct RawCharacter {
  pub character_id:   String,
  pub name:           String,
  pub group_id:       Option<String>,
  pub race_id:        Option<String>,
  pub character_type: Option<String>,
  pub rank:           String,
  pub sheet:          String,
}

impl RawCharacter {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      character_id:   row.get(0)?,
      name:           row.get(1)?,
      group_id:       row.get(2)?,
      race_id:        row.get(3)?,
      character_type: row.get(4)?,
      rank:           row.get(5)?,
      sheet:          row.get(6)?,
    })
  }

  pub fn into_character(self) -> Result<Character> {
    Ok(Character {
      character_id:   decode_uuid(&self.character_id)?,
      name:           self.name,
      group_id:       decode_opt_uuid(self.group_id)?,
      race_id:        decode_opt_uuid(self.race_id)?,
      character_type: self.character_type,
      rank:           self.rank,
      sheet:          self.sheet,
    })
  }
}

pub struct RawPlayer {
  pub player_id:  String,
  pub username:   String,
  pub first_name: String,
  pub last_name:  String,
  pub created_at: String,
}

impl RawPlayer {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      player_id:  row.get(0)?,
      username:   row.get(1)?,
      first_name: row.get(2)?,
      last_name:  row.get(3)?,
      created_at: row.get(4)?,
    })
  }

  pub fn into_player(self) -> Result<PlayerAccount> {
    Ok(PlayerAccount {
      player_id:  decode_uuid(&self.player_id)?,
      username:   self.username,
      first_name: self.first_name,
      last_name:  self.last_name,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

pub struct RawAssignment {
  pub assignment_id: String,
  pub run:           i64,
  pub character_id:  String,
  pub player_id:     String,
  pub gender:        Option<String>,
  pub discord_email: Option<String>,
  pub assigned_at:   String,
}

impl RawAssignment {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      assignment_id: row.get(0)?,
      run:           row.get(1)?,
      character_id:  row.get(2)?,
      player_id:     row.get(3)?,
      gender:        row.get(4)?,
      discord_email: row.get(5)?,
      assigned_at:   row.get(6)?,
    })
  }

  pub fn into_assignment(self) -> Result<CharacterAssignment> {
    Ok(CharacterAssignment {
      assignment_id: decode_uuid(&self.assignment_id)?,
      run:           decode_run(self.run)?,
      character_id:  decode_uuid(&self.character_id)?,
      player_id:     decode_uuid(&self.player_id)?,
      gender:        self.gender,
      discord_email: self.discord_email,
      assigned_at:   decode_dt(&self.assigned_at)?,
    })
  }
}

pub struct RawMeasurement {
  pub measurement_id:  String,
  pub player_id:       String,
  pub chest:           i32,
  pub arm_length:      i32,
  pub waist:           i32,
  pub shoulder_length: i32,
  pub torso_length:    i32,
  pub body_length:     i32,
  pub gender:          Option<String>,
}

impl RawMeasurement {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      measurement_id:  row.get(0)?,
      player_id:       row.get(1)?,
      chest:           row.get(2)?,
      arm_length:      row.get(3)?,
      waist:           row.get(4)?,
      shoulder_length: row.get(5)?,
      torso_length:    row.get(6)?,
      body_length:     row.get(7)?,
      gender:          row.get(8)?,
    })
  }

  pub fn into_measurement(self) -> Result<PlayerMeasurement> {
    Ok(PlayerMeasurement {
      measurement_id:  decode_uuid(&self.measurement_id)?,
      player_id:       decode_uuid(&self.player_id)?,
      chest:           self.chest,
      arm_length:      self.arm_length,
      waist:           self.waist,
      shoulder_length: self.shoulder_length,
      torso_length:    self.torso_length,
      body_length:     self.body_length,
      gender:          self.gender,
    })
  }
}

pub struct RawBooking {
  pub booking_id:       String,
  pub player_id:        String,
  pub event_id:         String,
  pub run:              i64,
  pub bus_stop_id:      Option<String>,
  pub accommodation_id: Option<String>,
  pub sleeping_bag:     Option<bool>,
  pub comments:         Option<String>,
}

impl RawBooking {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      booking_id:       row.get(0)?,
      player_id:        row.get(1)?,
      event_id:         row.get(2)?,
      run:              row.get(3)?,
      bus_stop_id:      row.get(4)?,
      accommodation_id: row.get(5)?,
      sleeping_bag:     row.get(6)?,
      comments:         row.get(7)?,
    })
  }

  pub fn into_booking(self) -> Result<Booking> {
    Ok(Booking {
      booking_id:       decode_uuid(&self.booking_id)?,
      player_id:        decode_uuid(&self.player_id)?,
      event_id:         decode_uuid(&self.event_id)?,
      run:              decode_run(self.run)?,
      bus_stop_id:      decode_opt_uuid(self.bus_stop_id)?,
      accommodation_id: decode_opt_uuid(self.accommodation_id)?,
      sleeping_bag:     self.sleeping_bag,
      comments:         self.comments,
    })
  }
}

/// Accommodations and bus stops share a shape: id, optional event, name.
pub struct RawPlace {
  pub place_id: String,
  pub event_id: Option<String>,
  pub name:     String,
}

impl RawPlace {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { place_id: row.get(0)?, event_id: row.get(1)?, name: row.get(2)? })
  }

  pub fn into_accommodation(self) -> Result<Accommodation> {
    Ok(Accommodation {
      accommodation_id: decode_uuid(&self.place_id)?,
      event_id:         decode_opt_uuid(self.event_id)?,
      name:             self.name,
    })
  }

  pub fn into_bus_stop(self) -> Result<BusStop> {
    Ok(BusStop {
      bus_stop_id: decode_uuid(&self.place_id)?,
      event_id:    decode_opt_uuid(self.event_id)?,
      name:        self.name,
    })
  }
}

pub struct RawUniform {
  pub uniform_id: String,
  pub name:       String,
  pub group_id:   Option<String>,
}

impl RawUniform {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { uniform_id: row.get(0)?, name: row.get(1)?, group_id: row.get(2)? })
  }

  pub fn into_uniform(self) -> Result<Uniform> {
    Ok(Uniform {
      uniform_id: decode_uuid(&self.uniform_id)?,
      name:       self.name,
      group_id:   decode_opt_uuid(self.group_id)?,
    })
  }
}

pub struct RawSize {
  pub size_id:       String,
  pub uniform_id:    String,
  pub gender:        Option<String>,
  pub american_size: String,
  pub european_size: String,
  pub chest_min:     i32,
  pub chest_max:     i32,
  pub waist_min:     i32,
  pub waist_max:     i32,
}

impl RawSize {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      size_id:       row.get(0)?,
      uniform_id:    row.get(1)?,
      gender:        row.get(2)?,
      american_size: row.get(3)?,
      european_size: row.get(4)?,
      chest_min:     row.get(5)?,
      chest_max:     row.get(6)?,
      waist_min:     row.get(7)?,
      waist_max:     row.get(8)?,
    })
  }

  pub fn into_size(self) -> Result<UniformSize> {
    Ok(UniformSize {
      size_id:       decode_uuid(&self.size_id)?,
      uniform_id:    decode_uuid(&self.uniform_id)?,
      gender:        self.gender,
      american_size: self.american_size,
      european_size: self.european_size,
      chest_min:     self.chest_min,
      chest_max:     self.chest_max,
      waist_min:     self.waist_min,
      waist_max:     self.waist_max,
    })
  }
}
