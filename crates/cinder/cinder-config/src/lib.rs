mod config;

pub use config::{CinderConfig, ConfigError};
