//! [`SqliteStore`]: the SQLite implementation of [`LarpStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{OptionalExtension as _, Row, params_from_iter, types::Value};
use uuid::Uuid;

use larp_core::{
  event::{
    AssignmentKey, Character, CharacterAssignment, CharacterKey, Event, Group,
    GroupKey, NewAssignment, NewCharacter, NewGroup, Race,
  },
  player::{
    Accommodation, Booking, BookingKey, BusStop, PlayerAccount, PlayerMeasurement,
    PlayerName,
  },
  store::LarpStore,
  uniform::{NewUniformSize, Uniform, UniformKey, UniformSize},
};

use crate::{
  Error, Result,
  encode::{
    ACCOMMODATION_COLUMNS, ASSIGNMENT_COLUMNS, BOOKING_COLUMNS, BUS_STOP_COLUMNS,
    CHARACTER_COLUMNS, EVENT_COLUMNS, GROUP_COLUMNS, MEASUREMENT_COLUMNS, PLAYER_COLUMNS,
    RACE_COLUMNS, RawAssignment, RawBooking, RawCharacter, RawEvent, RawGroup,
    RawMeasurement, RawPlace, RawPlayer, RawRace, RawSize, RawUniform, SIZE_COLUMNS,
    UNIFORM_COLUMNS, encode_dt, encode_opt_uuid, encode_uuid,
  },
  schema::SCHEMA,
};

fn uuid_value(id: Uuid) -> Value { Value::from(encode_uuid(id)) }

fn opt_uuid_value(id: Option<Uuid>) -> Value { Value::from(encode_opt_uuid(id)) }

// ─── Store ───────────────────────────────────────────────────────────────────

/// A LARP store backed by a single SQLite file.
///
/// Clones share one reference-counted connection.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a query expected to return at most one row.
  async fn fetch_optional<R, F>(&self, sql: String, params: Vec<Value>, from_row: F) -> Result<Option<R>>
  where
    R: Send + 'static,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<R> + Send + 'static,
  {
    let raw = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(&sql, params_from_iter(params), from_row).optional()?)
      })
      .await?;
    Ok(raw)
  }

  /// Run a query and collect every row.
  async fn fetch_all<R, F>(&self, sql: String, params: Vec<Value>, from_row: F) -> Result<Vec<R>>
  where
    R: Send + 'static,
    F: FnMut(&Row<'_>) -> rusqlite::Result<R> + Send + 'static,
  {
    let raws = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(params_from_iter(params), from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(raws)
  }

  /// Run a statement and return the number of affected rows.
  async fn execute(&self, sql: &'static str, params: Vec<Value>) -> Result<usize> {
    let changed = self
      .conn
      .call(move |conn| Ok(conn.execute(sql, params_from_iter(params))?))
      .await?;
    Ok(changed)
  }

  async fn find_place(&self, table: &'static str, columns: &str, name: String) -> Result<Option<RawPlace>> {
    self
      .fetch_optional(
        format!("SELECT {columns} FROM {table} WHERE name = ?1 ORDER BY rowid LIMIT 1"),
        vec![Value::from(name)],
        RawPlace::from_row,
      )
      .await
  }
}

// ─── LarpStore impl ──────────────────────────────────────────────────────────

impl LarpStore for SqliteStore {
  type Error = Error;

  // ── Events ────────────────────────────────────────────────────────────────

  async fn find_event(&self, name: String) -> Result<Option<Event>> {
    // Event names are not unique; the oldest row wins.
    let raw = self
      .fetch_optional(
        format!("SELECT {EVENT_COLUMNS} FROM events WHERE name = ?1 ORDER BY rowid LIMIT 1"),
        vec![Value::from(name)],
        RawEvent::from_row,
      )
      .await?;
    raw.map(RawEvent::into_event).transpose()
  }

  async fn create_event(&self, name: String) -> Result<Event> {
    let event = Event { event_id: Uuid::new_v4(), name };
    self
      .execute(
        "INSERT INTO events (event_id, name) VALUES (?1, ?2)",
        vec![uuid_value(event.event_id), Value::from(event.name.clone())],
      )
      .await?;
    Ok(event)
  }

  async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
    let raw = self
      .fetch_optional(
        format!("SELECT {EVENT_COLUMNS} FROM events WHERE event_id = ?1"),
        vec![uuid_value(id)],
        RawEvent::from_row,
      )
      .await?;
    raw.map(RawEvent::into_event).transpose()
  }

  async fn list_events(&self) -> Result<Vec<Event>> {
    let raws = self
      .fetch_all(
        format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY rowid"),
        vec![],
        RawEvent::from_row,
      )
      .await?;
    raws.into_iter().map(RawEvent::into_event).collect()
  }

  // ── Groups and races ──────────────────────────────────────────────────────

  async fn find_group(&self, key: GroupKey) -> Result<Option<Group>> {
    let raw = self
      .fetch_optional(
        format!("SELECT {GROUP_COLUMNS} FROM event_groups WHERE event_id = ?1 AND name = ?2"),
        vec![uuid_value(key.event_id), Value::from(key.name)],
        RawGroup::from_row,
      )
      .await?;
    raw.map(RawGroup::into_group).transpose()
  }

  async fn create_group(&self, input: NewGroup) -> Result<Group> {
    let group = Group {
      group_id: Uuid::new_v4(),
      event_id: input.event_id,
      name:     input.name,
      weapon:   input.weapon,
    };
    self
      .execute(
        "INSERT INTO event_groups (group_id, event_id, name, weapon) VALUES (?1, ?2, ?3, ?4)",
        vec![
          uuid_value(group.group_id),
          uuid_value(group.event_id),
          Value::from(group.name.clone()),
          Value::from(group.weapon.clone()),
        ],
      )
      .await?;
    Ok(group)
  }

  async fn get_group(&self, id: Uuid) -> Result<Option<Group>> {
    let raw = self
      .fetch_optional(
        format!("SELECT {GROUP_COLUMNS} FROM event_groups WHERE group_id = ?1"),
        vec![uuid_value(id)],
        RawGroup::from_row,
      )
      .await?;
    raw.map(RawGroup::into_group).transpose()
  }

  async fn list_groups(&self, event_id: Uuid) -> Result<Vec<Group>> {
    let raws = self
      .fetch_all(
        format!("SELECT {GROUP_COLUMNS} FROM event_groups WHERE event_id = ?1 ORDER BY rowid"),
        vec![uuid_value(event_id)],
        RawGroup::from_row,
      )
      .await?;
    raws.into_iter().map(RawGroup::into_group).collect()
  }

  async fn find_race(&self, name: String) -> Result<Option<Race>> {
    let raw = self
      .fetch_optional(
        format!("SELECT {RACE_COLUMNS} FROM races WHERE name = ?1"),
        vec![Value::from(name)],
        RawRace::from_row,
      )
      .await?;
    raw.map(RawRace::into_race).transpose()
  }

  async fn create_race(&self, name: String) -> Result<Race> {
    let race = Race { race_id: Uuid::new_v4(), name };
    self
      .execute(
        "INSERT INTO races (race_id, name) VALUES (?1, ?2)",
        vec![uuid_value(race.race_id), Value::from(race.name.clone())],
      )
      .await?;
    Ok(race)
  }

  // ── Characters and assignments ────────────────────────────────────────────

  async fn find_character(&self, key: CharacterKey) -> Result<Option<Character>> {
    // `IS` rather than `=` so that a NULL group or race matches NULL.
    let raw = self
      .fetch_optional(
        format!(
          "SELECT {CHARACTER_COLUMNS} FROM characters
           WHERE name = ?1 AND group_id IS ?2 AND race_id IS ?3"
        ),
        vec![
          Value::from(key.name),
          opt_uuid_value(key.group_id),
          opt_uuid_value(key.race_id),
        ],
        RawCharacter::from_row,
      )
      .await?;
    raw.map(RawCharacter::into_character).transpose()
  }

  async fn create_character(&self, input: NewCharacter) -> Result<Character> {
    let character = Character {
      character_id:   Uuid::new_v4(),
      name:           input.name,
      group_id:       input.group_id,
      race_id:        input.race_id,
      character_type: input.character_type,
      rank:           input.rank,
      sheet:          input.sheet,
    };
    self
      .execute(
        "INSERT INTO characters (
           character_id, name, group_id, race_id, character_type, rank, sheet
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        vec![
          uuid_value(character.character_id),
          Value::from(character.name.clone()),
          opt_uuid_value(character.group_id),
          opt_uuid_value(character.race_id),
          Value::from(character.character_type.clone()),
          Value::from(character.rank.clone()),
          Value::from(character.sheet.clone()),
        ],
      )
      .await?;
    Ok(character)
  }

  async fn list_characters(&self, group_id: Uuid) -> Result<Vec<Character>> {
    let raws = self
      .fetch_all(
        format!("SELECT {CHARACTER_COLUMNS} FROM characters WHERE group_id = ?1 ORDER BY rowid"),
        vec![uuid_value(group_id)],
        RawCharacter::from_row,
      )
      .await?;
    raws.into_iter().map(RawCharacter::into_character).collect()
  }

  async fn find_assignment(&self, key: AssignmentKey) -> Result<Option<CharacterAssignment>> {
    let raw = self
      .fetch_optional(
        format!(
          "SELECT {ASSIGNMENT_COLUMNS} FROM assignments
           WHERE run = ?1 AND character_id = ?2 AND player_id = ?3"
        ),
        vec![
          Value::from(i64::from(key.run)),
          uuid_value(key.character_id),
          uuid_value(key.player_id),
        ],
        RawAssignment::from_row,
      )
      .await?;
    raw.map(RawAssignment::into_assignment).transpose()
  }

  async fn create_assignment(&self, input: NewAssignment) -> Result<CharacterAssignment> {
    let assignment = CharacterAssignment {
      assignment_id: Uuid::new_v4(),
      run:           input.run,
      character_id:  input.character_id,
      player_id:     input.player_id,
      gender:        input.gender,
      discord_email: input.discord_email,
      assigned_at:   Utc::now(),
    };
    self
      .execute(
        "INSERT INTO assignments (
           assignment_id, run, character_id, player_id, gender, discord_email, assigned_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        vec![
          uuid_value(assignment.assignment_id),
          Value::from(i64::from(assignment.run)),
          uuid_value(assignment.character_id),
          uuid_value(assignment.player_id),
          Value::from(assignment.gender.clone()),
          Value::from(assignment.discord_email.clone()),
          Value::from(encode_dt(assignment.assigned_at)),
        ],
      )
      .await?;
    Ok(assignment)
  }

  async fn list_assignments(
    &self,
    character_id: Uuid,
    run:          Option<u32>,
  ) -> Result<Vec<CharacterAssignment>> {
    let raws = self
      .fetch_all(
        format!(
          "SELECT {ASSIGNMENT_COLUMNS} FROM assignments
           WHERE character_id = ?1 AND (?2 IS NULL OR run = ?2)
           ORDER BY rowid"
        ),
        vec![uuid_value(character_id), Value::from(run.map(i64::from))],
        RawAssignment::from_row,
      )
      .await?;
    raws.into_iter().map(RawAssignment::into_assignment).collect()
  }

  // ── Players ───────────────────────────────────────────────────────────────

  async fn find_player(&self, name: PlayerName) -> Result<Option<PlayerAccount>> {
    let raw = self
      .fetch_optional(
        format!(
          "SELECT {PLAYER_COLUMNS} FROM players
           WHERE username = ?1 AND first_name = ?2 AND last_name = ?3"
        ),
        vec![
          Value::from(name.username),
          Value::from(name.first_name),
          Value::from(name.last_name),
        ],
        RawPlayer::from_row,
      )
      .await?;
    raw.map(RawPlayer::into_player).transpose()
  }

  async fn find_player_by_username(&self, username: String) -> Result<Option<PlayerAccount>> {
    let raw = self
      .fetch_optional(
        format!("SELECT {PLAYER_COLUMNS} FROM players WHERE username = ?1 ORDER BY rowid LIMIT 1"),
        vec![Value::from(username)],
        RawPlayer::from_row,
      )
      .await?;
    raw.map(RawPlayer::into_player).transpose()
  }

  async fn create_player(&self, name: PlayerName) -> Result<PlayerAccount> {
    let player = PlayerAccount {
      player_id:  Uuid::new_v4(),
      username:   name.username,
      first_name: name.first_name,
      last_name:  name.last_name,
      created_at: Utc::now(),
    };
    self
      .execute(
        "INSERT INTO players (player_id, username, first_name, last_name, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        vec![
          uuid_value(player.player_id),
          Value::from(player.username.clone()),
          Value::from(player.first_name.clone()),
          Value::from(player.last_name.clone()),
          Value::from(encode_dt(player.created_at)),
        ],
      )
      .await?;
    Ok(player)
  }

  async fn get_player(&self, id: Uuid) -> Result<Option<PlayerAccount>> {
    let raw = self
      .fetch_optional(
        format!("SELECT {PLAYER_COLUMNS} FROM players WHERE player_id = ?1"),
        vec![uuid_value(id)],
        RawPlayer::from_row,
      )
      .await?;
    raw.map(RawPlayer::into_player).transpose()
  }

  async fn find_measurement(&self, player_id: Uuid) -> Result<Option<PlayerMeasurement>> {
    let raw = self
      .fetch_optional(
        format!("SELECT {MEASUREMENT_COLUMNS} FROM measurements WHERE player_id = ?1"),
        vec![uuid_value(player_id)],
        RawMeasurement::from_row,
      )
      .await?;
    raw.map(RawMeasurement::into_measurement).transpose()
  }

  async fn create_measurement(&self, player_id: Uuid) -> Result<PlayerMeasurement> {
    let measurement = PlayerMeasurement::empty(player_id);
    self
      .execute(
        "INSERT INTO measurements (measurement_id, player_id) VALUES (?1, ?2)",
        vec![uuid_value(measurement.measurement_id), uuid_value(player_id)],
      )
      .await?;
    Ok(measurement)
  }

  async fn save_measurement(&self, m: PlayerMeasurement) -> Result<()> {
    let changed = self
      .execute(
        "UPDATE measurements SET
           chest = ?2, arm_length = ?3, waist = ?4, shoulder_length = ?5,
           torso_length = ?6, body_length = ?7, gender = ?8
         WHERE measurement_id = ?1",
        vec![
          uuid_value(m.measurement_id),
          Value::from(m.chest),
          Value::from(m.arm_length),
          Value::from(m.waist),
          Value::from(m.shoulder_length),
          Value::from(m.torso_length),
          Value::from(m.body_length),
          Value::from(m.gender),
        ],
      )
      .await?;
    if changed == 0 {
      return Err(Error::NotFound { kind: "measurement", id: m.measurement_id });
    }
    Ok(())
  }

  // ── Bookings ──────────────────────────────────────────────────────────────

  async fn find_booking(&self, key: BookingKey) -> Result<Option<Booking>> {
    let raw = self
      .fetch_optional(
        format!(
          "SELECT {BOOKING_COLUMNS} FROM bookings
           WHERE player_id = ?1 AND event_id = ?2 AND run = ?3"
        ),
        vec![
          uuid_value(key.player_id),
          uuid_value(key.event_id),
          Value::from(i64::from(key.run)),
        ],
        RawBooking::from_row,
      )
      .await?;
    raw.map(RawBooking::into_booking).transpose()
  }

  async fn create_booking(&self, key: BookingKey) -> Result<Booking> {
    let booking = Booking::new(key);
    self
      .execute(
        "INSERT INTO bookings (booking_id, player_id, event_id, run, comments)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        vec![
          uuid_value(booking.booking_id),
          uuid_value(booking.player_id),
          uuid_value(booking.event_id),
          Value::from(i64::from(booking.run)),
          Value::from(booking.comments.clone()),
        ],
      )
      .await?;
    Ok(booking)
  }

  async fn save_booking(&self, b: Booking) -> Result<()> {
    let changed = self
      .execute(
        "UPDATE bookings SET
           bus_stop_id = ?2, accommodation_id = ?3, sleeping_bag = ?4, comments = ?5
         WHERE booking_id = ?1",
        vec![
          uuid_value(b.booking_id),
          opt_uuid_value(b.bus_stop_id),
          opt_uuid_value(b.accommodation_id),
          Value::from(b.sleeping_bag),
          Value::from(b.comments),
        ],
      )
      .await?;
    if changed == 0 {
      return Err(Error::NotFound { kind: "booking", id: b.booking_id });
    }
    Ok(())
  }

  async fn find_accommodation(&self, name: String) -> Result<Option<Accommodation>> {
    let raw = self.find_place("accommodations", ACCOMMODATION_COLUMNS, name).await?;
    raw.map(RawPlace::into_accommodation).transpose()
  }

  async fn create_accommodation(&self, event_id: Option<Uuid>, name: String) -> Result<Accommodation> {
    let accommodation = Accommodation { accommodation_id: Uuid::new_v4(), event_id, name };
    self
      .execute(
        "INSERT INTO accommodations (accommodation_id, event_id, name) VALUES (?1, ?2, ?3)",
        vec![
          uuid_value(accommodation.accommodation_id),
          opt_uuid_value(event_id),
          Value::from(accommodation.name.clone()),
        ],
      )
      .await?;
    Ok(accommodation)
  }

  async fn find_bus_stop(&self, name: String) -> Result<Option<BusStop>> {
    let raw = self.find_place("bus_stops", BUS_STOP_COLUMNS, name).await?;
    raw.map(RawPlace::into_bus_stop).transpose()
  }

  async fn create_bus_stop(&self, event_id: Option<Uuid>, name: String) -> Result<BusStop> {
    let bus_stop = BusStop { bus_stop_id: Uuid::new_v4(), event_id, name };
    self
      .execute(
        "INSERT INTO bus_stops (bus_stop_id, event_id, name) VALUES (?1, ?2, ?3)",
        vec![
          uuid_value(bus_stop.bus_stop_id),
          opt_uuid_value(event_id),
          Value::from(bus_stop.name.clone()),
        ],
      )
      .await?;
    Ok(bus_stop)
  }

  // ── Uniforms ──────────────────────────────────────────────────────────────

  async fn find_uniform(&self, key: UniformKey) -> Result<Option<Uniform>> {
    let raw = self
      .fetch_optional(
        format!("SELECT {UNIFORM_COLUMNS} FROM uniforms WHERE name = ?1 AND group_id IS ?2"),
        vec![Value::from(key.name), opt_uuid_value(key.group_id)],
        RawUniform::from_row,
      )
      .await?;
    raw.map(RawUniform::into_uniform).transpose()
  }

  async fn create_uniform(&self, key: UniformKey) -> Result<Uniform> {
    let uniform = Uniform { uniform_id: Uuid::new_v4(), name: key.name, group_id: key.group_id };
    self
      .execute(
        "INSERT INTO uniforms (uniform_id, name, group_id) VALUES (?1, ?2, ?3)",
        vec![
          uuid_value(uniform.uniform_id),
          Value::from(uniform.name.clone()),
          opt_uuid_value(uniform.group_id),
        ],
      )
      .await?;
    Ok(uniform)
  }

  async fn get_uniform(&self, id: Uuid) -> Result<Option<Uniform>> {
    let raw = self
      .fetch_optional(
        format!("SELECT {UNIFORM_COLUMNS} FROM uniforms WHERE uniform_id = ?1"),
        vec![uuid_value(id)],
        RawUniform::from_row,
      )
      .await?;
    raw.map(RawUniform::into_uniform).transpose()
  }

  async fn list_uniforms(&self) -> Result<Vec<Uniform>> {
    let raws = self
      .fetch_all(
        format!("SELECT {UNIFORM_COLUMNS} FROM uniforms ORDER BY rowid"),
        vec![],
        RawUniform::from_row,
      )
      .await?;
    raws.into_iter().map(RawUniform::into_uniform).collect()
  }

  async fn add_uniform_size(&self, uniform_id: Uuid, input: NewUniformSize) -> Result<UniformSize> {
    let size = UniformSize {
      size_id: Uuid::new_v4(),
      uniform_id,
      gender: input.gender,
      american_size: input.american_size,
      european_size: input.european_size,
      chest_min: input.chest_min,
      chest_max: input.chest_max,
      waist_min: input.waist_min,
      waist_max: input.waist_max,
    };
    self
      .execute(
        "INSERT INTO uniform_sizes (
           size_id, uniform_id, gender, american_size, european_size,
           chest_min, chest_max, waist_min, waist_max
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        vec![
          uuid_value(size.size_id),
          uuid_value(uniform_id),
          Value::from(size.gender.clone()),
          Value::from(size.american_size.clone()),
          Value::from(size.european_size.clone()),
          Value::from(size.chest_min),
          Value::from(size.chest_max),
          Value::from(size.waist_min),
          Value::from(size.waist_max),
        ],
      )
      .await?;
    Ok(size)
  }

  async fn list_uniform_sizes(&self, uniform_id: Uuid) -> Result<Vec<UniformSize>> {
    let raws = self
      .fetch_all(
        format!("SELECT {SIZE_COLUMNS} FROM uniform_sizes WHERE uniform_id = ?1 ORDER BY rowid"),
        vec![uuid_value(uniform_id)],
        RawSize::from_row,
      )
      .await?;
    raws.into_iter().map(RawSize::into_size).collect()
  }
}
