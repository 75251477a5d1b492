pub mod body;
pub mod capability;
pub mod dog;
pub mod person;
pub mod plant;

pub use body::Vitals;
pub use capability::{Alive, Animal, Human, Vegetal};
pub use dog::Dog;
pub use person::Person;
pub use plant::{Plant, PlantClass};
