//! Plants only expose the vegetal capability

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Kind};
use crate::entity::capability::{Alive, Vegetal};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantClass {
    #[default]
    Flowering,
    Conifer,
    Fern,
    Moss,
}

impl PlantClass {
    pub fn label(&self) -> &'static str {
        match self {
            PlantClass::Flowering => "flowering",
            PlantClass::Conifer => "conifer",
            PlantClass::Fern => "fern",
            PlantClass::Moss => "moss",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plant {
    pub id: EntityId,
    pub class: PlantClass,
    pub alive: bool,
}

impl Plant {
    pub fn new(class: PlantClass) -> Self {
        Self {
            class,
            ..Self::default()
        }
    }

    pub fn with_alive(mut self, alive: bool) -> Self {
        self.alive = alive;
        self
    }

    pub fn kind(&self) -> Kind {
        Kind::Plant
    }
}

impl Alive for Plant {
    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Vegetal for Plant {
    fn classification(&self) -> &'static str {
        self.class.label()
    }
}
