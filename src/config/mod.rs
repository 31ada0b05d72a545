//! Flag declaration file and resolver defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, FlagEntry, OutputFormat};
