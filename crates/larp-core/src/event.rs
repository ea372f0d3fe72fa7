//! Events, the groups and races within them, characters, and the
//! assignments that hand a character to a player for one run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Event ───────────────────────────────────────────────────────────────────

/// A LARP. Names are looked up but not enforced unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub event_id: Uuid,
  pub name:     String,
}

// ─── Group ───────────────────────────────────────────────────────────────────

/// A faction or unit within one event. An empty name stands for "no group".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
  pub group_id: Uuid,
  pub event_id: Uuid,
  pub name:     String,
  pub weapon:   String,
}

/// Natural key of a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupKey {
  pub event_id: Uuid,
  pub name:     String,
}

/// Input for creating a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
  pub event_id: Uuid,
  pub name:     String,
  pub weapon:   String,
}

impl From<GroupKey> for NewGroup {
  fn from(key: GroupKey) -> Self {
    Self { event_id: key.event_id, name: key.name, weapon: String::new() }
  }
}

impl NewGroup {
  pub fn key(&self) -> GroupKey {
    GroupKey { event_id: self.event_id, name: self.name.clone() }
  }
}

// ─── Race ────────────────────────────────────────────────────────────────────

/// A species or origin. Races are global: two events that use the same race
/// name share one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
  pub race_id: Uuid,
  pub name:    String,
}

// ─── Character ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
  pub character_id:   Uuid,
  pub name:           String,
  pub group_id:       Option<Uuid>,
  pub race_id:        Option<Uuid>,
  pub character_type: Option<String>,
  pub rank:           String,
  pub sheet:          String,
}

/// Natural key of a [`Character`]. The same name under a different group or
/// race is a different character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterKey {
  pub name:     String,
  pub group_id: Option<Uuid>,
  pub race_id:  Option<Uuid>,
}

/// Input for creating a [`Character`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCharacter {
  pub name:           String,
  pub group_id:       Option<Uuid>,
  pub race_id:        Option<Uuid>,
  pub character_type: Option<String>,
  pub rank:           String,
  pub sheet:          String,
}

impl NewCharacter {
  pub fn key(&self) -> CharacterKey {
    CharacterKey {
      name:     self.name.clone(),
      group_id: self.group_id,
      race_id:  self.race_id,
    }
  }
}

// ─── Assignment ──────────────────────────────────────────────────────────────

/// Links a character to a player for one run of the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAssignment {
  pub assignment_id: Uuid,
  pub run:           u32,
  pub character_id:  Uuid,
  pub player_id:     Uuid,
  pub gender:        Option<String>,
  pub discord_email: Option<String>,
  pub assigned_at:   DateTime<Utc>,
}

/// Natural key of a [`CharacterAssignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentKey {
  pub run:          u32,
  pub character_id: Uuid,
  pub player_id:    Uuid,
}

/// Input for creating a [`CharacterAssignment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
  pub run:           u32,
  pub character_id:  Uuid,
  pub player_id:     Uuid,
  pub gender:        Option<String>,
  pub discord_email: Option<String>,
}

impl From<AssignmentKey> for NewAssignment {
  fn from(key: AssignmentKey) -> Self {
    Self {
      run:           key.run,
      character_id:  key.character_id,
      player_id:     key.player_id,
      gender:        None,
      discord_email: None,
    }
  }
}
