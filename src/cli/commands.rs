use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedwatch")]
#[command(about = "Single-feed watcher with email and Telegram notifications")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the feed and notify new articles
    Run {
        /// Dry run - don't send notifications or record anything, just show what would be sent
        #[arg(long)]
        dry_run: bool,
    },

    /// List recently notified articles
    Recent {
        /// Maximum number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },
}
