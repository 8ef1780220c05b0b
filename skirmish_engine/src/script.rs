//! Script reader.
//!
//! A script starts with the number of commands `N` on its first non-blank line, followed by
//! one command per line. Blank lines are ignored everywhere. Lines past the `N`th command
//! are not read; a script that ends early simply yields fewer commands.
use std::iter::Enumerate;
use std::str::Lines;

use log::{info, warn};

use crate::command::{Command, parse_command};
use crate::error::ParseError;

/// A parsed command together with the (1-based) line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Lazily parses the commands of a script, one per call to `next`.
///
/// Parsing is lazy so that commands before a malformed line are still carried out.
pub struct ScriptReader<'a> {
    lines: Enumerate<Lines<'a>>,
    declared: usize,
    remaining: usize,
}

impl<'a> ScriptReader<'a> {
    /// Read the command count and prepare to iterate over the commands.
    ///
    /// # Errors
    /// - `BadCount` if the first non-blank line is missing or not a non-negative integer
    pub fn new(script: &'a str) -> Result<ScriptReader<'a>, ParseError> {
        let mut lines = script.lines().enumerate();
        let (idx, count_line) = next_non_blank(&mut lines).unwrap_or((0, ""));
        let declared: usize = count_line.trim().parse().map_err(|_| ParseError::BadCount {
            line: idx + 1,
            found: count_line.trim().to_string(),
        })?;
        info!("script declares {declared} command(s)");
        Ok(ScriptReader {
            lines,
            declared,
            remaining: declared,
        })
    }

    /// Number of commands the script says it contains.
    pub fn declared(&self) -> usize {
        self.declared
    }
}

impl Iterator for ScriptReader<'_> {
    type Item = Result<ScriptLine, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            if next_non_blank(&mut self.lines).is_some() {
                warn!("ignoring script lines beyond the declared {} command(s)", self.declared);
            }
            return None;
        }
        let Some((idx, text)) = next_non_blank(&mut self.lines) else {
            warn!(
                "script ended after {} of {} declared command(s)",
                self.declared - self.remaining,
                self.declared
            );
            self.remaining = 0;
            return None;
        };
        self.remaining -= 1;
        let line = idx + 1;
        Some(parse_command(line, text).map(|command| ScriptLine { line, command }))
    }
}

fn next_non_blank<'a>(lines: &mut Enumerate<Lines<'a>>) -> Option<(usize, &'a str)> {
    lines.find(|(_, text)| !text.trim().is_empty())
}
