use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug)]
pub struct CinderConfig {
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
    #[serde(default = "defaults::capacity")]
    pub capacity: usize,
    #[serde(default = "defaults::samples")]
    pub samples: Vec<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

mod defaults {
    pub fn log_level() -> String {
        "info".into()
    }

    pub fn capacity() -> usize {
        16
    }

    pub fn samples() -> Vec<u32> {
        vec![5]
    }
}

impl Default for CinderConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level(),
            capacity: defaults::capacity(),
            samples: defaults::samples(),
        }
    }
}

impl CinderConfig {
    pub fn load(path: impl AsRef<Path> + ToString) -> Result<Self, ConfigError> {
        let toml_to_str = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let cinder_config: CinderConfig = toml::from_str(&toml_to_str)?;
        Ok(cinder_config)
    }
}
