//! Script replay and command handling.
//!
//! A session is driven by replaying a script from top to bottom. This module holds the
//! dispatch loop; its submodules implement the handlers for each family of commands.
//!
//! Every handler follows the same rule: look everything up and validate every
//! precondition first, then mutate. A handler that returns an error has therefore changed
//! nothing, and the loop records the failure marker and moves on.

pub mod action;
pub mod create;
pub mod show;
pub mod talk;

pub use action::*;
pub use create::*;
pub use show::*;
pub use talk::*;

use log::{debug, info, warn};

use crate::command::Command;
use crate::error::ParseError;
use crate::script::{ScriptLine, ScriptReader};
use crate::session::Session;
use crate::transcript::Transcript;

/// Counts reported once a replay completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub executed: usize,
    pub failed: usize,
}

/// Replay every command of `script` against `session`, recording results in `transcript`.
///
/// Domain errors are caught per command. A malformed script line stops the replay; the
/// transcript keeps everything produced up to that line.
///
/// # Errors
/// - any `ParseError` from the count line or a command line
pub fn run_replay(session: &mut Session, transcript: &mut Transcript, script: &str) -> Result<ReplaySummary, ParseError> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    let mut summary = ReplaySummary::default();
    for entry in ScriptReader::new(script)? {
        let ScriptLine { line, command } = entry?;
        debug!("line {line}: {command:?}");
        let result = match &command {
            CreateCharacter { role, name, initial_hp } => {
                create_character_handler(session, transcript, *role, name, *initial_hp)
            },
            CreateWeapon { owner, name, damage } => create_weapon_handler(session, transcript, owner, name, *damage),
            CreatePotion { owner, name, heal_value } => {
                create_potion_handler(session, transcript, owner, name, *heal_value)
            },
            CreateSpell { owner, name, targets } => create_spell_handler(session, transcript, owner, name, targets),
            Attack { attacker, target, weapon } => attack_handler(session, transcript, attacker, target, weapon),
            Cast { caster, target, spell } => cast_handler(session, transcript, caster, target, spell),
            Drink { supplier, drinker, potion } => drink_handler(session, transcript, supplier, drinker, potion),
            Dialogue { speaker, words } => dialogue_handler(session, transcript, speaker, words),
            ShowCharacters => {
                show_characters_handler(session, transcript);
                Ok(())
            },
            ShowItems { owner, category } => show_items_handler(session, transcript, owner, *category),
        };
        summary.executed += 1;
        match result {
            Ok(()) => transcript.commit(),
            Err(e) => {
                warn!("line {line}: command failed: {e}");
                summary.failed += 1;
                transcript.fail();
            },
        }
    }
    info!(
        "replay finished: {} command(s) executed, {} failed",
        summary.executed, summary.failed
    );
    Ok(summary)
}
