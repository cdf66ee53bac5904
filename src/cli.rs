use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Colordle answer solver.
#[derive(Parser)]
#[command(
    name = "colordle-oracle",
    version,
    about = "Computes the answer the Colordle server expects"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the normal-mode daily color from the published rotation.
    Daily(DailyArgs),
    /// Decode the color hidden in a friend-challenge link.
    Friend(FriendArgs),
}

/// Arguments for the `daily` subcommand.
#[derive(clap::Args)]
pub struct DailyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the rotation URL from config.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Read the rotation from a local JSON file instead of fetching it.
    #[arg(long)]
    pub colors_file: Option<PathBuf>,

    /// Resolve for this date instead of today (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `friend` subcommand.
#[derive(clap::Args)]
pub struct FriendArgs {
    /// Friend-challenge share link carrying the encoded `c` parameter.
    pub link: Option<String>,

    /// Raw encoded token, bypassing link extraction.
    #[arg(short, long, conflicts_with = "link")]
    pub token: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the cipher key from config.
    #[arg(short, long)]
    pub key: Option<String>,
}
