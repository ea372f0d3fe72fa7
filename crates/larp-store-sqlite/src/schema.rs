//! SQL schema for the LARP SQLite store.
//!
//! Natural keys are UNIQUE so that a lookup never sees two matches. Nullable
//! key columns go through `IFNULL` in expression indexes, since SQLite treats
//! NULLs as distinct in plain UNIQUE constraints. Event names are the one
//! exception: they are not unique and lookups take the oldest row.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS events (
    event_id TEXT PRIMARY KEY,
    name     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS event_groups (
    group_id TEXT PRIMARY KEY,
    event_id TEXT NOT NULL REFERENCES events(event_id) ON DELETE CASCADE,
    name     TEXT NOT NULL DEFAULT '',   -- '' means no group
    weapon   TEXT NOT NULL DEFAULT '',
    UNIQUE (event_id, name)
);

-- Races are global, not scoped per event.
CREATE TABLE IF NOT EXISTS races (
    race_id TEXT PRIMARY KEY,
    name    TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS characters (
    character_id   TEXT PRIMARY KEY,
    name           TEXT NOT NULL,
    group_id       TEXT REFERENCES event_groups(group_id) ON DELETE SET NULL,
    race_id        TEXT REFERENCES races(race_id)   ON DELETE SET NULL,
    character_type TEXT,
    rank           TEXT NOT NULL DEFAULT '',
    sheet          TEXT NOT NULL DEFAULT ''
);
CREATE UNIQUE INDEX IF NOT EXISTS characters_key_idx
    ON characters(name, IFNULL(group_id, ''), IFNULL(race_id, ''));

CREATE TABLE IF NOT EXISTS players (
    player_id  TEXT PRIMARY KEY,
    username   TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL,
    created_at TEXT NOT NULL,   -- ISO 8601 UTC
    UNIQUE (username, first_name, last_name)
);

CREATE TABLE IF NOT EXISTS assignments (
    assignment_id TEXT PRIMARY KEY,
    run           INTEGER NOT NULL DEFAULT 1 CHECK (run > 0),
    character_id  TEXT NOT NULL REFERENCES characters(character_id) ON DELETE CASCADE,
    player_id     TEXT NOT NULL REFERENCES players(player_id)       ON DELETE CASCADE,
    gender        TEXT,
    discord_email TEXT,
    assigned_at   TEXT NOT NULL,
    UNIQUE (run, character_id, player_id)
);

CREATE TABLE IF NOT EXISTS measurements (
    measurement_id  TEXT PRIMARY KEY,
    player_id       TEXT NOT NULL UNIQUE REFERENCES players(player_id) ON DELETE CASCADE,
    chest           INTEGER NOT NULL DEFAULT 0,
    arm_length      INTEGER NOT NULL DEFAULT 0,
    waist           INTEGER NOT NULL DEFAULT 0,
    shoulder_length INTEGER NOT NULL DEFAULT 0,
    torso_length    INTEGER NOT NULL DEFAULT 0,
    body_length     INTEGER NOT NULL DEFAULT 0,
    gender          TEXT
);

CREATE TABLE IF NOT EXISTS accommodations (
    accommodation_id TEXT PRIMARY KEY,
    event_id         TEXT REFERENCES events(event_id) ON DELETE SET NULL,
    name             TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bus_stops (
    bus_stop_id TEXT PRIMARY KEY,
    event_id    TEXT REFERENCES events(event_id) ON DELETE SET NULL,
    name        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bookings (
    booking_id       TEXT PRIMARY KEY,
    player_id        TEXT NOT NULL REFERENCES players(player_id) ON DELETE CASCADE,
    event_id         TEXT NOT NULL REFERENCES events(event_id)   ON DELETE CASCADE,
    run              INTEGER NOT NULL DEFAULT 1,
    bus_stop_id      TEXT REFERENCES bus_stops(bus_stop_id)           ON DELETE SET NULL,
    accommodation_id TEXT REFERENCES accommodations(accommodation_id) ON DELETE SET NULL,
    sleeping_bag     INTEGER,   -- NULL = not answered
    comments         TEXT,
    UNIQUE (player_id, event_id, run)
);

CREATE TABLE IF NOT EXISTS uniforms (
    uniform_id TEXT PRIMARY KEY,
    name       TEXT NOT NULL,
    group_id   TEXT REFERENCES event_groups(group_id) ON DELETE SET NULL
);
CREATE UNIQUE INDEX IF NOT EXISTS uniforms_key_idx
    ON uniforms(name, IFNULL(group_id, ''));

-- Sizes are append-only and never deduplicated; rowid order is catalogue order.
CREATE TABLE IF NOT EXISTS uniform_sizes (
    size_id       TEXT PRIMARY KEY,
    uniform_id    TEXT NOT NULL REFERENCES uniforms(uniform_id) ON DELETE CASCADE,
    gender        TEXT,
    american_size TEXT NOT NULL DEFAULT '',
    european_size TEXT NOT NULL DEFAULT '',
    chest_min     INTEGER NOT NULL DEFAULT 0,
    chest_max     INTEGER NOT NULL DEFAULT 0,
    waist_min     INTEGER NOT NULL DEFAULT 0,
    waist_max     INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS events_name_idx         ON events(name);
CREATE INDEX IF NOT EXISTS characters_group_idx    ON characters(group_id);
CREATE INDEX IF NOT EXISTS assignments_char_idx    ON assignments(character_id);
CREATE INDEX IF NOT EXISTS uniform_sizes_owner_idx ON uniform_sizes(uniform_id);

PRAGMA user_version = 1;
";
