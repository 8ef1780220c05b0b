//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.
//!
//! Styling is only ever applied to the echoed copy of the transcript; the
//! transcript file is always plain text.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn arrival_style(&self) -> ColoredString;
    fn action_style(&self) -> ColoredString;
    fn death_style(&self) -> ColoredString;
    fn speech_style(&self) -> ColoredString;
    fn listing_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn arrival_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60)
    }
    fn action_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn death_style(&self) -> ColoredString {
        self.bold().truecolor(200, 50, 50)
    }
    fn speech_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn listing_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn arrival_style(&self) -> ColoredString {
        self.as_str().arrival_style()
    }
    fn action_style(&self) -> ColoredString {
        self.as_str().action_style()
    }
    fn death_style(&self) -> ColoredString {
        self.as_str().death_style()
    }
    fn speech_style(&self) -> ColoredString {
        self.as_str().speech_style()
    }
    fn listing_style(&self) -> ColoredString {
        self.as_str().listing_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
