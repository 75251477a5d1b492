use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Kind};
use crate::entity::body::Vitals;
use crate::entity::capability::{Alive, Animal};

/// A dog. Never thinks, so `vitals.thinking` stays false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dog {
    pub id: EntityId,
    pub vitals: Vitals,
    pub carnivore: bool,
    pub alive: bool,
}

impl Dog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alive(mut self, alive: bool) -> Self {
        self.alive = alive;
        self
    }

    pub fn with_carnivore(mut self, carnivore: bool) -> Self {
        self.carnivore = carnivore;
        self
    }

    pub fn kind(&self) -> Kind {
        Kind::Dog
    }
}

impl Alive for Dog {
    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Animal for Dog {
    fn breathe(&mut self) {
        self.vitals.breathe();
    }

    fn eat(&mut self) {
        self.vitals.eat();
    }

    fn is_carnivore(&self) -> bool {
        self.carnivore
    }
}
