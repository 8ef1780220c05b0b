#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Skirmish **
//! Replays a fantasy skirmish script into a narrated transcript

use skirmish_engine::cli::Cli;
use skirmish_engine::{SKIRMISH_VERSION, load_config, run_session};

use anyhow::{Context, Result};
use clap::Parser;

use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: skirmish {SKIRMISH_VERSION}");
    let cli = Cli::parse();
    let config = cli.apply(load_config(&cli.config));
    info!(
        "replaying '{}' into '{}'",
        config.input.display(),
        config.output.display()
    );

    let summary = run_session(&config).context("while running skirmish session")?;
    info!(
        "Done: {} command(s) replayed, {} failed.",
        summary.executed, summary.failed
    );
    Ok(())
}
