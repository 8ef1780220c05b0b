//! Transcript module.
//!
//! Handlers never write output themselves. They push [`Event`]s into the [`Transcript`],
//! which holds them as pending until the command finishes. A command that succeeds has its
//! events committed; a command that fails has them discarded and a single
//! [`Event::ErrorCaught`] recorded instead, so a failed command never leaves half of its
//! narration behind.
use std::io::{self, Write};

use colored::ColoredString;
use log::{debug, info};
use variantly::Variantly;

use crate::character::Role;
use crate::item::ItemCategory;
use crate::style::GameStyle;

/// Fixed line recorded for every failed command.
pub const ERROR_MARKER: &str = "Error caught";

/// Something that happened during the replay, worth one transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Event {
    CharacterCreated { role: Role, name: String },
    ItemObtained { owner: String, category: ItemCategory, item: String },
    Attack { attacker: String, target: String, weapon: String },
    Cast { caster: String, target: String, spell: String },
    Drink { supplier: String, drinker: String, potion: String },
    Death(String),
    Dialogue { speaker: String, speech: String },
    /// A sorted `Show` listing, already newline-terminated.
    Listing(String),
    ErrorCaught,
}
impl Event {
    /// Plain text of the event, including its line break.
    pub fn render(&self) -> String {
        match self {
            Event::CharacterCreated { role, name } => format!("A new {role} came to town, {name}.\n"),
            Event::ItemObtained { owner, category, item } => {
                format!("{owner} just obtained a new {category} called {item}.\n")
            },
            Event::Attack { attacker, target, weapon } => {
                format!("{attacker} attacks {target} with their {weapon}!\n")
            },
            Event::Cast { caster, target, spell } => format!("{caster} casts {spell} on {target}!\n"),
            Event::Drink { supplier, drinker, potion } => {
                format!("{drinker} drinks {potion} from {supplier}.\n")
            },
            Event::Death(name) => format!("{name} has died...\n"),
            Event::Dialogue { speaker, speech } => format!("{speaker}: {speech}\n"),
            Event::Listing(listing) => listing.clone(),
            Event::ErrorCaught => format!("{ERROR_MARKER}\n"),
        }
    }

    /// The event's text (without the line break) styled for a terminal.
    pub fn styled(&self) -> ColoredString {
        let text = self.render();
        let text = text.trim_end_matches('\n');
        match self {
            Event::CharacterCreated { .. } | Event::ItemObtained { .. } => text.arrival_style(),
            Event::Attack { .. } | Event::Cast { .. } | Event::Drink { .. } => text.action_style(),
            Event::Death(_) => text.death_style(),
            Event::Dialogue { .. } => text.speech_style(),
            Event::Listing(_) => text.listing_style(),
            Event::ErrorCaught => text.error_style(),
        }
    }
}

/// Ordered record of everything a session has produced.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    committed: Vec<Event>,
    pending: Vec<Event>,
    failures: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the command currently being processed.
    pub fn push(&mut self, event: Event) {
        self.pending.push(event);
    }

    /// Keep everything queued by the current command.
    pub fn commit(&mut self) {
        self.committed.append(&mut self.pending);
    }

    /// Drop everything queued by the current command and record the failure marker.
    pub fn fail(&mut self) {
        if !self.pending.is_empty() {
            debug!("discarding {} pending transcript event(s)", self.pending.len());
            self.pending.clear();
        }
        self.failures += 1;
        self.committed.push(Event::ErrorCaught);
    }

    pub fn events(&self) -> &[Event] {
        &self.committed
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// The full plain-text transcript.
    pub fn render(&self) -> String {
        self.committed.iter().map(Event::render).collect()
    }

    /// Write the plain-text transcript to `out`.
    ///
    /// # Errors
    /// - any I/O error from the writer
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for event in &self.committed {
            out.write_all(event.render().as_bytes())?;
        }
        out.flush()?;
        info!("{} transcript event(s) written", self.committed.len());
        Ok(())
    }

    /// Print the transcript to stdout with terminal styling.
    pub fn echo(&self) {
        for event in &self.committed {
            println!("{}", event.styled());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_their_lines() {
        let created = Event::CharacterCreated {
            role: Role::Fighter,
            name: "Rex".into(),
        };
        assert_eq!(created.render(), "A new fighter came to town, Rex.\n");

        let obtained = Event::ItemObtained {
            owner: "Rex".into(),
            category: ItemCategory::Weapon,
            item: "Sword".into(),
        };
        assert_eq!(obtained.render(), "Rex just obtained a new weapon called Sword.\n");

        let drink = Event::Drink {
            supplier: "Ann".into(),
            drinker: "Rex".into(),
            potion: "Elixir".into(),
        };
        assert_eq!(drink.render(), "Rex drinks Elixir from Ann.\n");

        assert_eq!(Event::Death("Rex".into()).render(), "Rex has died...\n");
        assert_eq!(Event::ErrorCaught.render(), "Error caught\n");
    }

    #[test]
    fn failure_discards_pending_events() {
        let mut transcript = Transcript::new();
        transcript.push(Event::Death("Rex".into()));
        transcript.commit();

        transcript.push(Event::Cast {
            caster: "Mona".into(),
            target: "Rex".into(),
            spell: "Doom".into(),
        });
        transcript.fail();

        assert_eq!(transcript.events(), &[Event::Death("Rex".into()), Event::ErrorCaught]);
        assert_eq!(transcript.failures(), 1);
        assert_eq!(transcript.render(), "Rex has died...\nError caught\n");
    }

    #[test]
    fn write_to_matches_render() {
        let mut transcript = Transcript::new();
        transcript.push(Event::Listing("Axe:4 Sword:10 \n".into()));
        transcript.push(Event::Dialogue {
            speaker: "Narrator".into(),
            speech: "It begins".into(),
        });
        transcript.commit();

        let mut out = Vec::new();
        transcript.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), transcript.render());
        assert_eq!(transcript.render(), "Axe:4 Sword:10 \nNarrator: It begins\n");
    }

    #[test]
    fn styled_text_has_no_line_break() {
        colored::control::set_override(false);
        let styled = Event::ErrorCaught.styled();
        assert_eq!(styled.to_string(), ERROR_MARKER);
    }
}
