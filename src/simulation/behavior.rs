//! Behavior functions over capability sets
//!
//! Every function is generic over the narrowest capability it needs and
//! accepts trait objects as well (`?Sized`). None of them can fail, and
//! none of them touch an entity's life state.

use crate::entity::capability::{Alive, Animal, Human};
use crate::simulation::narration::Narrator;

/// Make a human breathe and say so
pub fn report_human_breathing<H: Human + ?Sized>(human: &mut H, narrator: &mut Narrator) {
    human.breathe();
    narrator.say(format!("I am a {} and I am breathing", human.sex()));
}

pub fn report_human_thinking<H: Human + ?Sized>(human: &mut H, narrator: &mut Narrator) {
    human.think();
    narrator.say(format!("I am a {} and I am thinking", human.sex()));
}

pub fn report_human_eating<H: Human + ?Sized>(human: &mut H, narrator: &mut Narrator) {
    human.eat();
    narrator.say(format!("I am a {} and I am eating", human.sex()));
}

/// Make an animal breathe and say so
pub fn report_animal_breathing<A: Animal + ?Sized>(animal: &mut A, narrator: &mut Narrator) {
    animal.breathe();
    narrator.say("I am an animal and I am breathing");
}

pub fn report_animal_eating<A: Animal + ?Sized>(animal: &mut A, narrator: &mut Narrator) {
    animal.eat();
    narrator.say("I am an animal and I am eating");
}

/// 1 for a carnivore, 0 otherwise
pub fn count_carnivore<A: Animal + ?Sized>(animal: &A) -> u32 {
    if animal.is_carnivore() {
        1
    } else {
        0
    }
}

pub fn is_entity_alive<V: Alive + ?Sized>(being: &V) -> bool {
    being.is_alive()
}

/// Running count of carnivores seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarnivoreTally {
    total: u32,
}

impl CarnivoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one animal's contribution and return the new total
    pub fn record<A: Animal + ?Sized>(&mut self, animal: &A) -> u32 {
        self.total += count_carnivore(animal);
        self.total
    }

    pub fn record_all<'a, I>(&mut self, animals: I) -> u32
    where
        I: IntoIterator<Item = &'a dyn Animal>,
    {
        for animal in animals {
            self.record(animal);
        }
        self.total
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}
