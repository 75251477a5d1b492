//! Integration tests for the demo scenario
//!
//! These tests drive the public API the way the binary does:
//! - People and dogs narrate their breathing
//! - Carnivores are tallied with addition
//! - Life state is reported through the narrowest capability

use living_beings::entity::{Alive, Animal, Dog, Human, Person, Plant, PlantClass, Vegetal};
use living_beings::simulation::{
    count_carnivore, is_entity_alive, report_animal_breathing, report_human_breathing,
    run_scenario, CarnivoreTally, Narrator,
};

#[test]
fn test_full_scenario_output() {
    let report = run_scenario(Narrator::capture());

    assert_eq!(
        report.lines,
        vec![
            "I am a Man and I am breathing",
            "I am a Woman and I am breathing",
            "I am an animal and I am breathing",
            "Total carnivores 1",
            "Am I alive = true",
        ]
    );
    assert_eq!(report.total_carnivores, 1);
    assert!(report.dog_alive);
}

#[test]
fn test_two_carnivores_add_up() {
    // A pack where the counter used to be overwritten instead of summed
    let mut rex = Dog::new().with_carnivore(true).with_alive(true);
    let mut fido = Dog::new().with_carnivore(true).with_alive(true);
    let mut narrator = Narrator::capture();
    let mut tally = CarnivoreTally::new();

    report_animal_breathing(&mut rex, &mut narrator);
    tally.record(&rex);
    report_animal_breathing(&mut fido, &mut narrator);
    tally.record(&fido);

    assert_eq!(tally.total(), 2);
    assert_eq!(narrator.len(), 2);
}

#[test]
fn test_mixed_household_through_trait_objects() {
    let mut people: Vec<Box<dyn Human>> = vec![
        Box::new(Person::man().with_alive(true)),
        Box::new(Person::woman().with_alive(true)),
    ];
    let mut narrator = Narrator::capture();

    for person in people.iter_mut() {
        report_human_breathing(person.as_mut(), &mut narrator);
    }

    assert_eq!(
        narrator.lines(),
        &[
            "I am a Man and I am breathing".to_string(),
            "I am a Woman and I am breathing".to_string(),
        ]
    );
    assert!(people.iter().all(|p| p.is_alive()));
}

#[test]
fn test_alive_check_ignores_variant() {
    let dead_dog = Dog::new().with_carnivore(true);
    let live_fern = Plant::new(PlantClass::Fern).with_alive(true);
    let living_woman = Person::woman().with_alive(true);

    let beings: [&dyn Alive; 3] = [&dead_dog, &live_fern, &living_woman];
    let alive: Vec<bool> = beings.iter().map(|b| is_entity_alive(*b)).collect();

    assert_eq!(alive, vec![false, true, true]);
    assert_eq!(live_fern.classification(), "fern");
    assert_eq!(count_carnivore(&dead_dog), 1);
    assert!(dead_dog.is_carnivore());
}
