#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

use std::fs::{self, File};
use std::io::BufWriter;

use anyhow::{Context, Result};
use log::info;

pub const SKIRMISH_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod character;
pub mod cli;
pub mod command;
pub mod config;
pub mod container;
pub mod error;
pub mod health;
pub mod idgen;
pub mod item;
pub mod replay;
pub mod script;
pub mod session;
pub mod style;
pub mod transcript;
pub mod world;

// Re-exports for convenience
pub use character::{Character, Role};
pub use config::{SessionConfig, load_config};
pub use error::{GameError, ParseError};
pub use item::{Item, ItemCategory, ItemKind};
pub use replay::{ReplaySummary, run_replay};
pub use session::Session;
pub use transcript::{Event, Transcript};
pub use world::WorldObject;

/// Replay the script named by `config` and write its transcript.
///
/// The output file is written even when the script turns out to be malformed, so that
/// everything produced before the bad line is kept.
///
/// # Errors
/// - the input cannot be read or the output cannot be written
/// - the script is malformed
pub fn run_session(config: &SessionConfig) -> Result<ReplaySummary> {
    let script = fs::read_to_string(&config.input)
        .with_context(|| format!("reading script '{}'", config.input.display()))?;

    let mut session = Session::new();
    let mut transcript = Transcript::new();
    let outcome = run_replay(&mut session, &mut transcript, &script);

    let file = File::create(&config.output)
        .with_context(|| format!("creating transcript '{}'", config.output.display()))?;
    transcript
        .write_to(&mut BufWriter::new(file))
        .with_context(|| format!("writing transcript '{}'", config.output.display()))?;
    if config.echo {
        transcript.echo();
    }

    let summary = outcome.with_context(|| format!("replaying script '{}'", config.input.display()))?;
    info!(
        "{} character(s) still standing at the end of the session",
        session.roster().size()
    );
    Ok(summary)
}
