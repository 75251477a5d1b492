//! Capability sets an entity can expose to behavior functions
//!
//! `Alive` is the narrowest set. `Human`, `Animal` and `Vegetal` all extend
//! it, so anything that fits a wider set can be handed to code that only
//! needs to know whether it is alive.

/// Anything that can be alive or dead
pub trait Alive {
    /// Stored life state, returned unmodified
    fn is_alive(&self) -> bool;
}

pub trait Human: Alive {
    fn breathe(&mut self);
    fn think(&mut self);
    fn eat(&mut self);

    /// `"Woman"` or `"Man"`
    fn sex(&self) -> &'static str;
}

pub trait Animal: Alive {
    fn breathe(&mut self);
    fn eat(&mut self);
    fn is_carnivore(&self) -> bool;
}

pub trait Vegetal: Alive {
    /// Botanical classification label
    fn classification(&self) -> &'static str;
}
