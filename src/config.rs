use crate::error::{IndexError, Result};
use std::env;

pub const DEFAULT_THROTTLE_MS: u64 = 1000;

/// Store connectivity settings, loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the record store.
    pub database_url: String,
    /// Table holding the monthly disclosure records.
    pub monthly_table: String,
    /// Delay between successive score writes, in milliseconds.
    pub throttle_ms: u64,
}

impl Config {
    /// Load settings from the process environment, reading a `.env` file
    /// first when one is present.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = require(&lookup, "DATABASE_URL")?;
        let monthly_table = require(&lookup, "MONTHLY_TABLE")?;
        validate_table_name(&monthly_table)?;

        let throttle_ms = match lookup("THROTTLE_MS") {
            Some(raw) => raw.parse().map_err(|_| IndexError::InvalidConfig {
                name: "THROTTLE_MS".to_string(),
                value: raw,
            })?,
            None => DEFAULT_THROTTLE_MS,
        };

        Ok(Self {
            database_url,
            monthly_table,
            throttle_ms,
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(IndexError::MissingEnv(name.to_string())),
    }
}

// The table name is spliced into SQL text, so it is restricted to plain
// identifier characters.
fn validate_table_name(name: &str) -> Result<()> {
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(IndexError::InvalidConfig {
            name: "MONTHLY_TABLE".to_string(),
            value: name.to_string(),
        })
    }
}
