//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Sex of a person
///
/// Defaults to `Man`: a person nobody marked as a woman reports as a man.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Woman,
    #[default]
    Man,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Woman => "Woman",
            Sex::Man => "Man",
        }
    }
}

/// Kind of entity, used for logging and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Person,
    Dog,
    Plant,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Person => "person",
            Kind::Dog => "dog",
            Kind::Plant => "plant",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ids_are_unique() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sex_default_is_man() {
        assert_eq!(Sex::default(), Sex::Man);
    }

    #[test]
    fn test_sex_labels() {
        assert_eq!(Sex::Woman.label(), "Woman");
        assert_eq!(Sex::Man.label(), "Man");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Dog.to_string(), "dog");
        assert_eq!(Kind::Person.to_string(), "person");
    }
}
