//! Error Module
//!
//! Two kinds of failure exist while replaying a script:
//!
//! - [`GameError`]: a command was well-formed but cannot be carried out (missing character,
//!   full container, illegal target...). These are scoped to a single command: the session
//!   records `Error caught` in the transcript and moves on to the next command.
//! - [`ParseError`]: the script itself is malformed. These are fatal and end the session.

use thiserror::Error;

/// Domain errors raised by containers, items, characters and the session.
///
/// Each variant carries the names involved so the failure can be logged in detail, but the
/// transcript only ever shows the fixed failure marker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no living character named '{0}'")]
    CharacterDoesNotExist(String),
    #[error("'{user}' does not own item '{item}'")]
    CharacterDoesNotOwnItem { user: String, item: String },
    #[error("illegal health value ({0}): must be positive")]
    IllegalHealthValue(i32),
    #[error("illegal damage value ({0}): must be positive")]
    IllegalDamageValue(i32),
    #[error("'{target}' is not an allowed target of spell '{spell}'")]
    NotAllowedTarget { spell: String, target: String },
    #[error("container is full (capacity {0})")]
    FullContainer(usize),
    #[error("'{holder}' cannot hold or use {kind}s")]
    IllegalItemType { holder: String, kind: String },
    #[error("element '{0}' not found")]
    ElementNotFound(String),
    #[error("a character named '{0}' already exists")]
    DuplicateCharacterName(String),
    #[error("an item named '{0}' is already held in that container")]
    DuplicateItemName(String),
}

/// Fatal problems with the structure of a script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: missing or invalid command count '{found}'")]
    BadCount { line: usize, found: String },
    #[error("line {line}: unrecognized command '{input}'")]
    UnknownCommand { line: usize, input: String },
    #[error("line {line}: expected an integer, found '{found}'")]
    NotAnInteger { line: usize, found: String },
    #[error("line {line}: declared {declared} trailing operands but found {found}")]
    CountMismatch { line: usize, declared: i32, found: usize },
}
