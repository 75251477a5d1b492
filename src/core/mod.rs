pub mod config;
pub mod error;
pub mod types;

pub use config::RunConfig;
pub use error::{BeingError, Result};
