//! Configuration module for tavily-search
//!
//! Settings come from an optional YAML file; the API key only from the environment.

mod settings;

pub use settings::*;
