//! The demo scenario: two people and a dog
//!
//! Entities are built blank, given their life state, sex and diet, and only
//! then handed to the behavior functions.

use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::Sex;
use crate::entity::{Dog, Person};
use crate::simulation::behavior::{
    is_entity_alive, report_animal_breathing, report_human_breathing, CarnivoreTally,
};
use crate::simulation::narration::Narrator;

/// Outcome of one scenario run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub lines: Vec<String>,
    pub total_carnivores: u32,
    pub dog_alive: bool,
    pub man: Person,
    pub woman: Person,
    pub dog: Dog,
}

impl ScenarioReport {
    /// JSON snapshot of the final entity state
    pub fn snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn run_scenario(mut narrator: Narrator) -> ScenarioReport {
    let mut man = Person::default();
    man.alive = true;
    tracing::info!(id = ?man.id, kind = %man.kind(), "spawned");
    report_human_breathing(&mut man, &mut narrator);

    let mut woman = Person::default();
    woman.sex = Sex::Woman;
    woman.alive = true;
    tracing::info!(id = ?woman.id, kind = %woman.kind(), "spawned");
    report_human_breathing(&mut woman, &mut narrator);

    let mut tally = CarnivoreTally::new();
    let mut dog = Dog::default();
    dog.carnivore = true;
    dog.alive = true;
    tracing::info!(id = ?dog.id, kind = %dog.kind(), "spawned");
    report_animal_breathing(&mut dog, &mut narrator);
    tally.record(&dog);

    narrator.say(format!("Total carnivores {}", tally.total()));

    let dog_alive = is_entity_alive(&dog);
    narrator.say(format!("Am I alive = {}", dog_alive));

    ScenarioReport {
        lines: narrator.into_lines(),
        total_carnivores: tally.total(),
        dog_alive,
        man,
        woman,
        dog,
    }
}
