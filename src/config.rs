use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Solver configuration.
///
/// Every field has a built-in default matching the live game, so the
/// config file is optional and may set any subset of fields.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OracleConfig {
    /// Date whose rotation index is zero.
    #[serde(default = "default_anchor")]
    pub anchor: NaiveDate,

    /// URL of the published color rotation.
    #[serde(default = "default_colors_url")]
    pub colors_url: String,

    /// Cipher key used by friend-challenge links.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
            colors_url: default_colors_url(),
            key: default_key(),
        }
    }
}

impl OracleConfig {
    /// Loads configuration from `path`, or the built-in defaults when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&text).context("failed to parse TOML config")
    }
}

fn default_anchor() -> NaiveDate {
    // The first Colordle puzzle ran on August 7, 2023.
    NaiveDate::from_ymd_opt(2023, 8, 7).expect("anchor date is valid")
}

fn default_colors_url() -> String {
    "https://colordle.ryantanen.com/colors.json".to_string()
}

fn default_key() -> String {
    "q2wedrfghjklkjnb".to_string()
}
