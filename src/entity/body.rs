//! Vital activity state shared by every breathing entity

use serde::{Deserialize, Serialize};

/// Activity latches of an entity's body
///
/// Each flag starts false and is only ever set to true by its action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub breathing: bool,
    pub thinking: bool,
    pub eating: bool,
}

impl Vitals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breathe(&mut self) {
        self.breathing = true;
    }

    pub fn think(&mut self) {
        self.thinking = true;
    }

    pub fn eat(&mut self) {
        self.eating = true;
    }

    /// Check if any activity has been latched
    pub fn is_active(&self) -> bool {
        self.breathing || self.thinking || self.eating
    }
}
