//! Command-line interface.
//!
//! Flags given on the command line override whatever the config file says.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_CONFIG_FILE, SessionConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Replays a skirmish script and writes its transcript.")]
pub struct Cli {
    /// Script to replay [default: from config, else input.txt]
    pub input: Option<PathBuf>,
    /// Transcript destination [default: from config, else output.txt]
    pub output: Option<PathBuf>,
    /// Also print the styled transcript to stdout.
    #[arg(long)]
    pub echo: bool,
    /// Session config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl Cli {
    /// Layer the command-line values over `config`.
    pub fn apply(&self, mut config: SessionConfig) -> SessionConfig {
        if let Some(input) = &self.input {
            config.input.clone_from(input);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        config.echo |= self.echo;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keep_config_values() {
        let cli = Cli::parse_from(["skirmish"]);
        assert_eq!(cli.config, PathBuf::from("skirmish.toml"));
        let config = SessionConfig {
            input: "fight.txt".into(),
            output: "fight.log".into(),
            echo: true,
        };
        assert_eq!(cli.apply(config.clone()), config);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["skirmish", "a.txt", "b.txt", "--echo", "--config", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        let config = cli.apply(SessionConfig::default());
        assert_eq!(config.input, PathBuf::from("a.txt"));
        assert_eq!(config.output, PathBuf::from("b.txt"));
        assert!(config.echo);
    }
}
