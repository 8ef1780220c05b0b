//! Health Module
//!
//! Tracks hit points for characters.
//!
//! Health is a plain signed integer with no upper bound: healing always adds the full
//! amount, and damage may drive it to zero or below, which means the character is dead.
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Hit points of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthState {
    current_hp: i32,
}
impl HealthState {
    /// Starting health for a newly created character.
    ///
    /// # Errors
    /// - `IllegalHealthValue` if `initial_hp` is not positive
    pub fn new(initial_hp: i32) -> Result<HealthState, GameError> {
        if initial_hp <= 0 {
            return Err(GameError::IllegalHealthValue(initial_hp));
        }
        Ok(HealthState { current_hp: initial_hp })
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Subtract damage. Saturates rather than wrapping.
    pub fn damage(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Add healing. Saturates rather than wrapping.
    pub fn heal(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_add(amount);
    }
}

/// Possible life states for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, variantly::Variantly)]
pub enum LifeState {
    Alive,
    Dead,
}
