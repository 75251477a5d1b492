//! Living Beings - capability-based polymorphism over people, animals and plants

pub mod core;
pub mod entity;
pub mod simulation;
