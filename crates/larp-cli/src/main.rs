//! `larp`: command-line admin tool for LARP events.
//!
//! # Usage
//!
//! ```text
//! larp import characters.csv --type character
//! larp import uniforms.csv --type uniform --event "Ad Astra"
//! larp sizes "Pilots (black, red)" --json
//! larp measure Ana_Perez --chest 96 --waist 80
//! larp players --run 2
//! ```
//!
//! Settings come from `larp.toml` (or `--config`) and `LARP_*` environment
//! variables. Logs go to stderr; command output to stdout.

mod commands;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use larp_store_sqlite::SqliteStore;
use settings::LarpConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "larp", version, about = "LARP event admin: CSV import and uniform sizing")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "larp.toml")]
  config: PathBuf,

  /// Event to work on, overriding `event_name` from the config.
  #[arg(long, global = true)]
  event: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Import a CSV file and print one status line per data row.
  Import {
    file: PathBuf,
    /// Row schema of the file: `character` or `uniform`.
    #[arg(long = "type", value_name = "TYPE")]
    file_type: String,
  },

  /// List uniforms with their group.
  Uniforms,

  /// Recommended sizes and order quantities for one uniform.
  Sizes {
    /// Uniform id or name.
    uniform: String,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Set a player's body measurements (centimetres).
  Measure {
    /// Player username, e.g. `Ana_Perez`.
    player: String,
    #[arg(long, default_value_t = 0)]
    chest: i32,
    #[arg(long, default_value_t = 0)]
    waist: i32,
    #[arg(long, default_value_t = 0)]
    arm_length: i32,
    #[arg(long, default_value_t = 0)]
    shoulder_length: i32,
    #[arg(long, default_value_t = 0)]
    torso_length: i32,
    #[arg(long, default_value_t = 0)]
    body_length: i32,
    #[arg(long)]
    gender: Option<String>,
  },

  /// Number of runs of every event.
  Runs,

  /// Player, character, measurements and booking for one run of the event.
  Players {
    #[arg(long, default_value_t = 1)]
    run: u32,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let cfg = LarpConfig::load(&cli.config, cli.event.clone())?;

  let store = SqliteStore::open(&cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.store_path))?;
  tracing::debug!(store = ?cfg.store_path, event = %cfg.event_name, "store opened");

  match cli.command {
    Command::Import { file, file_type } => {
      commands::import(&store, &cfg.event_name, &file, &file_type).await
    }
    Command::Uniforms => commands::uniforms(&store).await,
    Command::Sizes { uniform, json } => commands::sizes(&store, &uniform, json).await,
    Command::Measure {
      player,
      chest,
      waist,
      arm_length,
      shoulder_length,
      torso_length,
      body_length,
      gender,
    } => {
      let update = larp_core::player::MeasurementUpdate {
        chest,
        arm_length,
        waist,
        shoulder_length,
        torso_length,
        body_length,
        gender,
      };
      commands::measure(&store, &player, update).await
    }
    Command::Runs => commands::runs(&store).await,
    Command::Players { run } => commands::players(&store, &cfg.event_name, run).await,
  }
}
