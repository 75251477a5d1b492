pub mod behavior;
pub mod narration;
pub mod scenario;

pub use behavior::{
    count_carnivore, is_entity_alive, report_animal_breathing, report_animal_eating,
    report_human_breathing, report_human_eating, report_human_thinking, CarnivoreTally,
};
pub use narration::Narrator;
pub use scenario::{run_scenario, ScenarioReport};
