//! Session configuration and loader.
//!
//! A session needs to know where to read its script, where to write its transcript, and
//! whether to echo the transcript to the terminal. These come from an optional TOML file
//! (`skirmish.toml` by default); any value missing from the file takes its default.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked for when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "skirmish.toml";
pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Where a session reads and writes, and how loudly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Script to replay
    pub input: PathBuf,
    /// Transcript destination (overwritten)
    pub output: PathBuf,
    /// Also print the styled transcript to stdout
    pub echo: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            echo: false,
        }
    }
}

/// Loads session configuration from a TOML file, falling back to defaults on error.
///
/// This function never fails. A missing or malformed file is logged and the defaults
/// are returned instead.
pub fn load_config(toml_path: &Path) -> SessionConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!("session config loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load session config from '{}': {:#}. Using defaults.",
                toml_path.display(),
                e
            );
            SessionConfig::default()
        },
    }
}

/// Attempts to load session configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn try_load_config(toml_path: &Path) -> Result<SessionConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading session config from '{}'", toml_path.display()))?;
    let config: SessionConfig =
        toml::from_str(&text).with_context(|| format!("parsing session config from '{}'", toml_path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.toml"));
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.input, PathBuf::from("input.txt"));
        assert!(!config.echo);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = config_file("echo = true\noutput = \"battle.log\"\n");
        let config = load_config(file.path());
        assert!(config.echo);
        assert_eq!(config.output, PathBuf::from("battle.log"));
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
    }

    #[test]
    fn malformed_file_is_an_error_but_loads_defaults() {
        let file = config_file("echo = \"loud\"\n");
        assert!(try_load_config(file.path()).is_err());
        assert_eq!(load_config(file.path()), SessionConfig::default());
    }
}
