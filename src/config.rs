//! Runtime configuration of the list system, resolved once at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PAGE_SIZE_VAR: &str = "PHARMACY_PAGE_SIZE";
pub const BUFFER_SIZE_VAR: &str = "PHARMACY_CHANNEL_BUFFER";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a number: {value:?}")]
    NotANumber { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListConfig {
    /// Prescriptions requested per page.
    pub page_size: u32,
    /// Mailbox capacity of each section actor.
    pub buffer_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            buffer_size: 32,
        }
    }
}

impl ListConfig {
    /// Reads overrides from `PHARMACY_PAGE_SIZE` and `PHARMACY_CHANNEL_BUFFER`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(PAGE_SIZE_VAR) {
            config.page_size = parse(PAGE_SIZE_VAR, &value)?;
        }
        if let Some(value) = lookup(BUFFER_SIZE_VAR) {
            config.buffer_size = parse(BUFFER_SIZE_VAR, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Zero { key: PAGE_SIZE_VAR });
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::Zero { key: BUFFER_SIZE_VAR });
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        key,
        value: value.to_string(),
    })
}
