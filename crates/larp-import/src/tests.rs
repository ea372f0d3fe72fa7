//! End-to-end import tests against an in-memory `SqliteStore`.

use larp_core::{
  Error as CoreError,
  player::{BookingKey, BookingUpdate, MeasurementUpdate, PlayerName},
  quantity,
  roster,
  store::LarpStore,
};
use larp_store_sqlite::SqliteStore;

use crate::{
  character::import_character_row,
  process, process_str,
  row::CharacterRow,
};

const EVENT: &str = "Ad Astra";

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn character_row(fields: [&str; 6]) -> CharacterRow {
  let record = csv::StringRecord::from(fields.to_vec());
  CharacterRow::from_record(&record)
}

async fn import(s: &SqliteStore, file_type: &str, csv: &str) -> Vec<String> {
  process_str(s, EVENT, csv, file_type).await
}

// ─── Character rows ──────────────────────────────────────────────────────────

#[tokio::test]
async fn character_row_assigns_player() {
  let s = store().await;
  let row = character_row(["1", "Werner Mikolasch", "Ono", "agriculture teacher", "Rhea", "lieutenant"]);
  let status = import_character_row(&s, EVENT, &row).await.unwrap();
  assert_eq!(status, "Character Ono assigned to Werner Mikolasch");

  let player = s
    .find_player(PlayerName::derive("Werner Mikolasch").unwrap())
    .await
    .unwrap()
    .unwrap();
  assert_eq!(player.username, "Werner_Mikolasch");
}

#[tokio::test]
async fn character_row_without_player() {
  let s = store().await;
  for player in ["", " "] {
    let row = character_row(["1", player, "Fuertes", "artist teacher", "Kepler", "lieutenant"]);
    let status = import_character_row(&s, EVENT, &row).await.unwrap();
    assert_eq!(status, "User invalid");
  }
}

#[tokio::test]
async fn character_row_without_character() {
  let s = store().await;
  let row = character_row(["2", "Samuel Bascomb", "", "", "", ""]);
  let status = import_character_row(&s, EVENT, &row).await.unwrap();
  assert_eq!(status, "Created user Samuel Bascomb. Character invalid");
  // No character columns means no event either.
  assert!(s.find_event(EVENT.into()).await.unwrap().is_none());

  let row = character_row(["2", "", "", "", "", ""]);
  let status = import_character_row(&s, EVENT, &row).await.unwrap();
  assert_eq!(status, "User invalid. Character invalid");
}

#[tokio::test]
async fn character_row_with_only_group_creates_blank_character() {
  let s = store().await;
  let row = character_row(["1", "", "", "Scientists", "", ""]);
  let status = import_character_row(&s, EVENT, &row).await.unwrap();
  assert_eq!(status, "User invalid");

  let event = s.find_event(EVENT.into()).await.unwrap().unwrap();
  let groups = s.list_groups(event.event_id).await.unwrap();
  assert_eq!(groups.len(), 1);
  assert_eq!(groups[0].name, "Scientists");

  let characters = s.list_characters(groups[0].group_id).await.unwrap();
  assert_eq!(characters.len(), 1);
  assert_eq!(characters[0].name, "");
  assert!(s.find_race("".into()).await.unwrap().is_some());
}

#[tokio::test]
async fn character_row_rejects_bad_run() {
  let s = store().await;
  for run in ["x", "0", "-1"] {
    let row = character_row([run, "Ana Perez", "Ono", "Pilots", "Terrans", ""]);
    let status = import_character_row(&s, EVENT, &row).await.unwrap();
    assert_eq!(status, format!("Run {run} invalid"));
  }
  assert!(s.find_player(PlayerName::derive("Ana Perez").unwrap()).await.unwrap().is_none());
}

#[tokio::test]
async fn blank_run_defaults_to_first() {
  let s = store().await;
  let row = character_row(["", "Ana", "Ono", "Pilots", "Terrans", ""]);
  assert_eq!(
    import_character_row(&s, EVENT, &row).await.unwrap(),
    "Character Ono assigned to Ana "
  );

  let event = s.find_event(EVENT.into()).await.unwrap().unwrap();
  assert_eq!(roster::number_of_runs(&s, event.event_id).await.unwrap(), 1);
}

#[tokio::test]
async fn character_rank_is_stored_on_create() {
  let s = store().await;
  let row = character_row(["1", "Ana", "Athena", "Pilots", "Terrans", "captain"]);
  import_character_row(&s, EVENT, &row).await.unwrap();

  let event = s.find_event(EVENT.into()).await.unwrap().unwrap();
  let group = &s.list_groups(event.event_id).await.unwrap()[0];
  let characters = s.list_characters(group.group_id).await.unwrap();
  assert_eq!(characters[0].rank, "captain");
}

// ─── Dispatcher ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn process_data_without_errors() {
  let s = store().await;
  let data = "run,player,character,group,planet,rank
1,Werner Mikolasch,Ono,agriculture teacher,Rhea,lieutenant
2,Fabio,Fuertes,artist teacher,Kepler,lieutenant";
  let report = import(&s, "character", data).await;
  assert_eq!(report, [
    "Character Ono assigned to Werner Mikolasch",
    "Character Fuertes assigned to Fabio ",
  ]);
}

#[tokio::test]
async fn process_data_with_invalid_users() {
  let s = store().await;
  let data = "run,player,character,group,planet,rank
    1,,Fuertes,artist teacher,Kepler,lieutenant
    2, ,Ono,agriculture teacher,Rhea,lieutenant";
  let report = import(&s, "character", data).await;
  assert_eq!(report, ["User invalid", "User invalid"]);
}

#[tokio::test]
async fn process_data_with_wrong_character() {
  let s = store().await;
  let data = "run,player,character,group,planet,rank\n2,Samuel Bascomb,,,,";
  let report = import(&s, "character", data).await;
  assert_eq!(report, ["Created user Samuel Bascomb. Character invalid"]);
}

#[tokio::test]
async fn reimport_is_idempotent() {
  let s = store().await;
  let data = "run,player,character,group,planet,rank\n1,Werner Mikolasch,Ono,Pilots,Rhea,";

  let first = import(&s, "character", data).await;
  assert_eq!(first, ["Character Ono assigned to Werner Mikolasch"]);
  let second = import(&s, "character", data).await;
  assert_eq!(second, ["Not assigned."]);

  assert_eq!(s.list_events().await.unwrap().len(), 1);
  let event = s.find_event(EVENT.into()).await.unwrap().unwrap();
  let group = &s.list_groups(event.event_id).await.unwrap()[0];
  let characters = s.list_characters(group.group_id).await.unwrap();
  assert_eq!(characters.len(), 1);
  let assignments = s.list_assignments(characters[0].character_id, None).await.unwrap();
  assert_eq!(assignments.len(), 1);
}

#[tokio::test]
async fn unknown_file_type_reports_every_row() {
  let s = store().await;
  let data = "run,player,character,group,planet,rank\n1,Ana,Ono,Pilots,Rhea,\n2,Fabio,Fuertes,Pilots,Kepler,";
  let report = import(&s, "bookings", data).await;
  assert_eq!(report, [
    "File type bookings not recognised",
    "File type bookings not recognised",
  ]);
  assert!(s.list_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_type_tags_match_exactly() {
  let s = store().await;
  let data = "run,player,character,group,planet,rank\n1,Ana,Ono,Pilots,Rhea,";
  for tag in ["Characters", " CHARACTER", "character ", "uniforms"] {
    let report = import(&s, tag, data).await;
    assert_eq!(report, [format!("File type {tag} not recognised")]);
  }
  assert!(s.list_events().await.unwrap().is_empty());
  assert!(s.list_uniforms().await.unwrap().is_empty());
}

#[tokio::test]
async fn header_only_upload_is_empty() {
  let s = store().await;
  assert!(import(&s, "character", "run,player,character,group,planet,rank\n").await.is_empty());
  assert!(import(&s, "character", "").await.is_empty());
}

#[tokio::test]
async fn blank_lines_are_skipped() {
  let s = store().await;
  let data = "run,player,character,group,planet,rank\n\n1,Ana,Ono,Pilots,Rhea,\n\n";
  let report = import(&s, "character", data).await;
  assert_eq!(report, ["Character Ono assigned to Ana "]);
}

#[tokio::test]
async fn process_rejects_invalid_utf8() {
  let s = store().await;
  let err = process(&s, EVENT, b"header\n\xff\xfe", "character").await.unwrap_err();
  assert!(matches!(err, crate::Error::Utf8(_)));
}

// ─── Uniform rows ────────────────────────────────────────────────────────────

const PILOTS: &str = "name,group,color,gender,american_size,european_size,chest_min,chest_max,waist_min,waist_max
|Pilots (black, red)|,Pilots,|black, red|,women,S,38,86,90,70,74
|Pilots (black, red)|,Pilots,|black, red|,women,M,40,90,94,74,78
|Pilots (black, red)|,Pilots,|black, red|,women,M,42,94,98,78,82
|Pilots (black, red)|,Pilots,|black, red|,women,L,44,98,102,82,86
|Pilots (black, red)|,Pilots,|black, red|,women,L,46,102,107,86,91
|Pilots (black, red)|,Pilots,|black, red|,women,XL,48,107,113,91,97";

#[tokio::test]
async fn uniform_rows_attach_sizes() {
  let s = store().await;
  let report = import(&s, "uniform", PILOTS).await;
  assert_eq!(report.len(), 6);
  assert_eq!(
    report[3],
    "Pilots (black, red) - Pilots - women. L/44 chest(98,102) waist(82,86)"
  );

  let uniforms = s.list_uniforms().await.unwrap();
  assert_eq!(uniforms.len(), 1);
  let sizes = s.list_uniform_sizes(uniforms[0].uniform_id).await.unwrap();
  assert_eq!(sizes.len(), 6);
}

#[tokio::test]
async fn uniform_rows_without_group() {
  let s = store().await;
  let data = "header
,,,women,L,44,98,102,82,86
, ,,women,L,44,98,102,82,86";
  let report = import(&s, "uniform", data).await;
  assert_eq!(report, [
    " - group not assigned - women. L/44 chest(98,102) waist(82,86)",
    " - group not assigned - women. L/44 chest(98,102) waist(82,86)",
  ]);

  // Both rows land on the same group-less uniform, sizes duplicated.
  let uniforms = s.list_uniforms().await.unwrap();
  assert_eq!(uniforms.len(), 1);
  assert_eq!(uniforms[0].group_id, None);
  assert_eq!(s.list_uniform_sizes(uniforms[0].uniform_id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn uniform_rows_with_missing_fields() {
  let s = store().await;
  let data = "header
,Pilots,,,L,44,98,102,82,86
,Pilots,,women,,44,98,102,82,86
,Pilots,,women,L,,98,102,82,86
,Pilots,,women,L,44,,,,";
  let report = import(&s, "uniform", data).await;
  assert_eq!(report, [
    " - Pilots - unisex. L/44 chest(98,102) waist(82,86)",
    " - Pilots - women. 44 chest(98,102) waist(82,86)",
    " - Pilots - women. L chest(98,102) waist(82,86)",
    " - Pilots - women. L/44 chest(0,0) waist(0,0)",
  ]);
}

// ─── Reports ─────────────────────────────────────────────────────────────────

async fn measure(s: &SqliteStore, name: &str, chest: i32, waist: i32) {
  let player = s
    .find_player(PlayerName::derive(name).unwrap())
    .await
    .unwrap()
    .unwrap();
  roster::update_measurement(s, player.player_id, MeasurementUpdate {
    chest,
    waist,
    ..Default::default()
  })
  .await
  .unwrap();
}

async fn seeded() -> SqliteStore {
  let s = store().await;
  import(&s, "character", "header
1,Ana Perez,Athena,Pilots,Terrans,captain
2,Werner Mikolasch,Ono,Pilots,Rhea,lieutenant
2,Fabio,Fuertes,Pilots,Kepler,")
  .await;
  import(&s, "uniform", PILOTS).await;
  measure(&s, "Ana Perez", 96, 80).await;
  measure(&s, "Werner Mikolasch", 100, 84).await;
  s
}

#[tokio::test]
async fn uniform_report_tallies_top_candidates() {
  let s = seeded().await;
  let uniform = s.list_uniforms().await.unwrap().remove(0);
  let report = roster::uniform_report(&s, uniform.uniform_id).await.unwrap();

  assert_eq!(report.group.as_ref().map(|g| g.name.as_str()), Some("Pilots"));
  assert_eq!(report.players.len(), 3);

  let ana = report
    .players
    .iter()
    .find(|p| p.player.username == "Ana_Perez")
    .unwrap();
  assert_eq!(ana.sizes.len(), 1);
  assert_eq!(ana.sizes[0].label(), "M / 42");
  assert_eq!(ana.assignments.len(), 1);

  // Fabio has no measurements; 0/0 fits nothing.
  let fabio = report.players.iter().find(|p| p.player.username == "Fabio").unwrap();
  assert!(fabio.sizes.is_empty());
  assert_eq!(fabio.tier, None);

  let by_label = |label: &str| {
    report.quantities.iter().find(|q| q.label == label).map(|q| q.quantity)
  };
  assert_eq!(by_label("M / 42"), Some(1));
  assert_eq!(by_label("L / 44"), Some(1));
  assert_eq!(quantity::total(&report.quantities), 2);
}

#[tokio::test]
async fn uniform_report_without_group_is_empty() {
  let s = store().await;
  import(&s, "uniform", "header\nJumpsuit,,,,M,40,90,94,74,78").await;
  let uniform = s.list_uniforms().await.unwrap().remove(0);

  let report = roster::uniform_report(&s, uniform.uniform_id).await.unwrap();
  assert!(report.group.is_none());
  assert!(report.players.is_empty());
  assert_eq!(report.quantities.len(), 1);
  assert_eq!(quantity::total(&report.quantities), 0);
}

#[tokio::test]
async fn players_information_groups_by_run() {
  let s = seeded().await;
  let event = s.find_event(EVENT.into()).await.unwrap().unwrap();
  assert_eq!(roster::number_of_runs(&s, event.event_id).await.unwrap(), 2);

  let runs = roster::players_information(&s, event.event_id).await.unwrap();
  assert_eq!(runs.keys().copied().collect::<Vec<_>>(), [1, 2]);
  let first = &runs[&1];
  assert_eq!(first.len(), 1);
  assert_eq!(first[0].player, "Ana Perez");
  assert_eq!(first[0].character, "Athena");
  assert_eq!(first[0].measurement.chest, 96);
  assert_eq!(first[0].booking.comments.as_deref(), Some("no"));

  let mut second: Vec<_> = runs[&2].iter().map(|info| info.character.as_str()).collect();
  second.sort();
  assert_eq!(second, ["Fuertes", "Ono"]);
}

#[tokio::test]
async fn players_information_handles_sparse_large_runs() {
  let s = store().await;
  let report = import(&s, "character", "header\n4294967295,Ana,Ono,Pilots,Rhea,").await;
  assert_eq!(report, ["Character Ono assigned to Ana "]);

  let event = s.find_event(EVENT.into()).await.unwrap().unwrap();
  assert_eq!(roster::number_of_runs(&s, event.event_id).await.unwrap(), u32::MAX);

  let runs = roster::players_information(&s, event.event_id).await.unwrap();
  assert_eq!(runs.len(), 1);
  assert_eq!(runs[&u32::MAX][0].character, "Ono");
}

#[tokio::test]
async fn update_booking_requires_known_places() {
  let s = seeded().await;
  let event = s.find_event(EVENT.into()).await.unwrap().unwrap();
  let ana = s
    .find_player(PlayerName::derive("Ana Perez").unwrap())
    .await
    .unwrap()
    .unwrap();
  let key = BookingKey { player_id: ana.player_id, event_id: event.event_id, run: 1 };

  let update = BookingUpdate {
    bus_stop:      "Central".into(),
    accommodation: "Barracks".into(),
    sleeping_bag:  Some(true),
    comments:      None,
  };
  let err = roster::update_booking(&s, key, update.clone()).await.unwrap_err();
  assert!(matches!(err, CoreError::UnknownBusStop(ref stop) if stop == "Central"));

  s.create_bus_stop(Some(event.event_id), "Central".into()).await.unwrap();
  let err = roster::update_booking(&s, key, update.clone()).await.unwrap_err();
  assert!(matches!(err, CoreError::UnknownAccommodation(_)));

  s.create_accommodation(Some(event.event_id), "Barracks".into()).await.unwrap();
  let booking = roster::update_booking(&s, key, update).await.unwrap();
  assert_eq!(booking.sleeping_bag, Some(true));
  assert_eq!(booking.comments, None);
  assert_eq!(s.find_booking(key).await.unwrap(), Some(booking));
}

// ─── Store failures ──────────────────────────────────────────────────────────

mod failing {
  use larp_core::{
    event::{
      AssignmentKey, Character, CharacterAssignment, CharacterKey, Event, Group, GroupKey,
      NewAssignment, NewCharacter, NewGroup, Race,
    },
    player::{
      Accommodation, Booking, BookingKey, BusStop, PlayerAccount, PlayerMeasurement, PlayerName,
    },
    store::LarpStore,
    uniform::{NewUniformSize, Uniform, UniformKey, UniformSize},
  };
  use larp_store_sqlite::{Error, SqliteStore};
  use uuid::Uuid;

  /// Delegates to `SqliteStore`, but refuses to write one character name
  /// and one american size label.
  pub struct FailingStore {
    pub inner:            SqliteStore,
    pub refuse_character: &'static str,
    pub refuse_size:      &'static str,
  }

  fn refused(what: &str) -> Error { Error::Decode(format!("write refused: {what}")) }

  impl LarpStore for FailingStore {
    type Error = Error;

    async fn find_event(&self, name: String) -> Result<Option<Event>, Error> {
      self.inner.find_event(name).await
    }
    async fn create_event(&self, name: String) -> Result<Event, Error> {
      self.inner.create_event(name).await
    }
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, Error> {
      self.inner.get_event(id).await
    }
    async fn list_events(&self) -> Result<Vec<Event>, Error> { self.inner.list_events().await }

    async fn find_group(&self, key: GroupKey) -> Result<Option<Group>, Error> {
      self.inner.find_group(key).await
    }
    async fn create_group(&self, input: NewGroup) -> Result<Group, Error> {
      self.inner.create_group(input).await
    }
    async fn get_group(&self, id: Uuid) -> Result<Option<Group>, Error> {
      self.inner.get_group(id).await
    }
    async fn list_groups(&self, event_id: Uuid) -> Result<Vec<Group>, Error> {
      self.inner.list_groups(event_id).await
    }
    async fn find_race(&self, name: String) -> Result<Option<Race>, Error> {
      self.inner.find_race(name).await
    }
    async fn create_race(&self, name: String) -> Result<Race, Error> {
      self.inner.create_race(name).await
    }

    async fn find_character(&self, key: CharacterKey) -> Result<Option<Character>, Error> {
      self.inner.find_character(key).await
    }
    async fn create_character(&self, input: NewCharacter) -> Result<Character, Error> {
      if input.name == self.refuse_character {
        return Err(refused(&input.name));
      }
      self.inner.create_character(input).await
    }
    async fn list_characters(&self, group_id: Uuid) -> Result<Vec<Character>, Error> {
      self.inner.list_characters(group_id).await
    }
    async fn find_assignment(
      &self,
      key: AssignmentKey,
    ) -> Result<Option<CharacterAssignment>, Error> {
      self.inner.find_assignment(key).await
    }
    async fn create_assignment(&self, input: NewAssignment) -> Result<CharacterAssignment, Error> {
      self.inner.create_assignment(input).await
    }
    async fn list_assignments(
      &self,
      character_id: Uuid,
      run: Option<u32>,
    ) -> Result<Vec<CharacterAssignment>, Error> {
      self.inner.list_assignments(character_id, run).await
    }

    async fn find_player(&self, name: PlayerName) -> Result<Option<PlayerAccount>, Error> {
      self.inner.find_player(name).await
    }
    async fn find_player_by_username(
      &self,
      username: String,
    ) -> Result<Option<PlayerAccount>, Error> {
      self.inner.find_player_by_username(username).await
    }
    async fn create_player(&self, name: PlayerName) -> Result<PlayerAccount, Error> {
      self.inner.create_player(name).await
    }
    async fn get_player(&self, id: Uuid) -> Result<Option<PlayerAccount>, Error> {
      self.inner.get_player(id).await
    }
    async fn find_measurement(&self, player_id: Uuid) -> Result<Option<PlayerMeasurement>, Error> {
      self.inner.find_measurement(player_id).await
    }
    async fn create_measurement(&self, player_id: Uuid) -> Result<PlayerMeasurement, Error> {
      self.inner.create_measurement(player_id).await
    }
    async fn save_measurement(&self, measurement: PlayerMeasurement) -> Result<(), Error> {
      self.inner.save_measurement(measurement).await
    }

    async fn find_booking(&self, key: BookingKey) -> Result<Option<Booking>, Error> {
      self.inner.find_booking(key).await
    }
    async fn create_booking(&self, key: BookingKey) -> Result<Booking, Error> {
      self.inner.create_booking(key).await
    }
    async fn save_booking(&self, booking: Booking) -> Result<(), Error> {
      self.inner.save_booking(booking).await
    }
    async fn find_accommodation(&self, name: String) -> Result<Option<Accommodation>, Error> {
      self.inner.find_accommodation(name).await
    }
    async fn create_accommodation(
      &self,
      event_id: Option<Uuid>,
      name: String,
    ) -> Result<Accommodation, Error> {
      self.inner.create_accommodation(event_id, name).await
    }
    async fn find_bus_stop(&self, name: String) -> Result<Option<BusStop>, Error> {
      self.inner.find_bus_stop(name).await
    }
    async fn create_bus_stop(&self, event_id: Option<Uuid>, name: String) -> Result<BusStop, Error> {
      self.inner.create_bus_stop(event_id, name).await
    }

    async fn find_uniform(&self, key: UniformKey) -> Result<Option<Uniform>, Error> {
      self.inner.find_uniform(key).await
    }
    async fn create_uniform(&self, key: UniformKey) -> Result<Uniform, Error> {
      self.inner.create_uniform(key).await
    }
    async fn get_uniform(&self, id: Uuid) -> Result<Option<Uniform>, Error> {
      self.inner.get_uniform(id).await
    }
    async fn list_uniforms(&self) -> Result<Vec<Uniform>, Error> { self.inner.list_uniforms().await }
    async fn add_uniform_size(
      &self,
      uniform_id: Uuid,
      input: NewUniformSize,
    ) -> Result<UniformSize, Error> {
      if input.american_size == self.refuse_size {
        return Err(refused(&input.american_size));
      }
      self.inner.add_uniform_size(uniform_id, input).await
    }
    async fn list_uniform_sizes(&self, uniform_id: Uuid) -> Result<Vec<UniformSize>, Error> {
      self.inner.list_uniform_sizes(uniform_id).await
    }
  }
}

async fn failing_store() -> failing::FailingStore {
  failing::FailingStore {
    inner:            store().await,
    refuse_character: "Fuertes",
    refuse_size:      "M",
  }
}

#[tokio::test]
async fn failed_character_row_does_not_stop_later_rows() {
  let s = failing_store().await;
  let data = "run,player,character,group,planet,rank
1,Werner Mikolasch,Ono,Pilots,Rhea,
2,Fabio,Fuertes,Pilots,Kepler,
2,Ana,Athena,Pilots,Terrans,";
  let report = process_str(&s, EVENT, data, "character").await;
  assert_eq!(report, [
    "Character Ono assigned to Werner Mikolasch".to_owned(),
    r#"Character info NOT PROCESSED. ['2', 'Fabio', 'Fuertes', 'Pilots', 'Kepler', '']"#.to_owned(),
    "Character Athena assigned to Ana ".to_owned(),
  ]);

  let event = s.inner.find_event(EVENT.into()).await.unwrap().unwrap();
  let group = &s.inner.list_groups(event.event_id).await.unwrap()[0];
  let names: Vec<_> = s
    .inner
    .list_characters(group.group_id)
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.name)
    .collect();
  assert_eq!(names, ["Ono", "Athena"]);
}

#[tokio::test]
async fn failed_uniform_row_does_not_stop_later_rows() {
  let s = failing_store().await;
  let data = "header
Flight suit,Pilots,,women,S,38,86,90,70,74
Flight suit,Pilots,,women,M,40,90,94,74,78
Flight suit,Pilots,,women,L,44,98,102,82,86";
  let report = process_str(&s, EVENT, data, "uniform").await;
  assert_eq!(report.len(), 3);
  assert_eq!(report[0], "Flight suit - Pilots - women. S/38 chest(86,90) waist(70,74)");
  assert_eq!(
    report[1],
    "Uniform info NOT PROCESSED. ['Flight suit', 'Pilots', '', 'women', 'M', '40', '90', '94', '74', '78']"
  );
  assert_eq!(report[2], "Flight suit - Pilots - women. L/44 chest(98,102) waist(82,86)");

  let uniform = s.inner.list_uniforms().await.unwrap().remove(0);
  let labels: Vec<_> = s
    .inner
    .list_uniform_sizes(uniform.uniform_id)
    .await
    .unwrap()
    .iter()
    .map(|size| size.label())
    .collect();
  assert_eq!(labels, ["S / 38", "L / 44"]);
}
