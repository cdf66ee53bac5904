//! Retrieval of the published color rotation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

/// Shape of the colors document published by the game server.
#[derive(Debug, Deserialize)]
pub struct ColorsDoc {
    /// Ordered rotation of color names, indexed by day offset.
    pub colors: Vec<String>,
}

/// Fetches and parses the color rotation from `url`.
///
/// A non-success HTTP status is an error; the fetch is not retried.
pub fn fetch_colors(url: &str) -> Result<ColorsDoc> {
    debug!(url, "fetching color rotation");
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("failed to fetch color rotation from {url}"))?;
    let status = response.status();
    if !status.is_success() {
        bail!("color rotation request to {url} returned {status}");
    }
    response
        .json()
        .with_context(|| format!("failed to parse color rotation from {url} as JSON"))
}

/// Reads the color rotation from a local JSON file.
pub fn read_colors_file(path: &Path) -> Result<ColorsDoc> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read colors file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse colors file: {}", path.display()))
}
