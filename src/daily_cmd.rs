//! Daily command: resolve the normal-mode color for a calendar date.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use oracle_schedule::{daily_entry, day_index};

use crate::cli::DailyArgs;
use crate::config::OracleConfig;
use crate::fetch;

/// Run the daily resolution pipeline.
pub fn run(args: DailyArgs) -> Result<()> {
    let _cmd = info_span!("daily").entered();

    let config = OracleConfig::load(args.config.as_deref())?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let url = args.url.unwrap_or(config.colors_url);

    let doc = match &args.colors_file {
        Some(path) => fetch::read_colors_file(path)?,
        None => fetch::fetch_colors(&url)?,
    };
    info!(n_colors = doc.colors.len(), "color rotation loaded");

    let index = day_index(config.anchor, date);
    info!(%date, anchor = %config.anchor, index, "resolved day index");

    let color = daily_entry(&doc.colors, index)
        .with_context(|| format!("no color scheduled for {date}"))?;

    println!("{date}: {color}");
    Ok(())
}
