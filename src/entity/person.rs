//! People: women and men share one representation

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Kind, Sex};
use crate::entity::body::Vitals;
use crate::entity::capability::{Alive, Human};

/// A person
///
/// A man is a person whose `sex` is `Sex::Man`; he carries no fields a woman
/// doesn't have.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    pub id: EntityId,
    pub age: u32,
    /// Meters
    pub height: f32,
    /// Kilograms
    pub weight: f32,
    pub vitals: Vitals,
    pub sex: Sex,
    pub alive: bool,
}

impl Person {
    pub fn woman() -> Self {
        Self {
            sex: Sex::Woman,
            ..Self::default()
        }
    }

    pub fn man() -> Self {
        Self {
            sex: Sex::Man,
            ..Self::default()
        }
    }

    pub fn with_alive(mut self, alive: bool) -> Self {
        self.alive = alive;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_build(mut self, height: f32, weight: f32) -> Self {
        self.height = height;
        self.weight = weight;
        self
    }

    pub fn is_woman(&self) -> bool {
        self.sex == Sex::Woman
    }

    pub fn kind(&self) -> Kind {
        Kind::Person
    }
}

impl Alive for Person {
    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Human for Person {
    fn breathe(&mut self) {
        self.vitals.breathe();
    }

    fn think(&mut self) {
        self.vitals.think();
    }

    fn eat(&mut self) {
        self.vitals.eat();
    }

    fn sex(&self) -> &'static str {
        self.sex.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_person_is_blank_man() {
        let p = Person::default();
        assert_eq!(p.age, 0);
        assert_eq!(p.height, 0.0);
        assert_eq!(p.weight, 0.0);
        assert!(!p.alive);
        assert!(!p.is_woman());
        assert!(!p.vitals.is_active());
        assert_eq!(p.sex(), "Man");
    }

    #[test]
    fn test_woman_reports_woman() {
        let p = Person::woman();
        assert!(p.is_woman());
        assert_eq!(p.sex(), "Woman");
    }

    #[test]
    fn test_actions_latch_flags() {
        let mut p = Person::man().with_alive(true);
        p.think();
        p.eat();
        assert!(p.vitals.thinking);
        assert!(p.vitals.eating);
        assert!(!p.vitals.breathing);
        p.breathe();
        assert!(p.vitals.breathing);
    }

    #[test]
    fn test_breathing_does_not_revive() {
        let mut p = Person::woman();
        p.breathe();
        assert!(!p.is_alive());
    }

    #[test]
    fn test_builders() {
        let p = Person::woman().with_age(34).with_build(1.68, 61.5);
        assert_eq!(p.age, 34);
        assert_eq!(p.height, 1.68);
        assert_eq!(p.weight, 61.5);
        assert_eq!(p.kind(), Kind::Person);
    }
}
