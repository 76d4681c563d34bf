use crate::query::KeyPolicy;
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_city: String,
    pub key_policy: KeyPolicy,
    /// Where listing pages are written as JSON, if anywhere
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: "Bangalore".to_string(),
            key_policy: KeyPolicy::Permissive,
            output_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            default_city: lookup("MARKET_DEFAULT_CITY").unwrap_or(defaults.default_city),
            key_policy: match lookup("MARKET_KEY_POLICY") {
                Some(raw) => raw
                    .parse::<KeyPolicy>()
                    .context("MARKET_KEY_POLICY must be `permissive` or `strict`")?,
                None => defaults.key_policy,
            },
            output_dir: lookup("MARKET_OUTPUT_DIR").map(PathBuf::from),
        })
    }
}
