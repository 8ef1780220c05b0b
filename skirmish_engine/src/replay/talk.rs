//! `replay::talk` module
//!
//! Handler for `Dialogue` commands.

use crate::error::GameError;
use crate::session::Session;
use crate::transcript::{Event, Transcript};

/// Speaker name that needs no roster entry.
pub const NARRATOR: &str = "Narrator";

/// Records a line of speech. Anyone but the narrator must be a living character.
///
/// # Errors
/// - `CharacterDoesNotExist` if the speaker is neither the narrator nor alive
pub fn dialogue_handler(
    session: &Session,
    transcript: &mut Transcript,
    speaker: &str,
    words: &[String],
) -> Result<(), GameError> {
    if speaker != NARRATOR {
        session.character_by_name(speaker)?;
    }
    transcript.push(Event::Dialogue {
        speaker: speaker.to_string(),
        speech: words.join(" "),
    });
    Ok(())
}
