use clap::Parser;

use feedwatch::cli::{Cli, Commands};
use feedwatch::config::Config;
use feedwatch::domain::Notification;
use feedwatch::errors::{FeedwatchError, FeedwatchResult};
use feedwatch::feed::RssFetcher;
use feedwatch::notify::NotifierRegistry;
use feedwatch::services::RunService;
use feedwatch::storage::sqlite::{SqliteSeenRepository, SqliteStorage};
use feedwatch::storage::SeenRepository;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> FeedwatchResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize storage
    let storage = SqliteStorage::new(&config.db_path)?;
    let seen_repo = SqliteSeenRepository::new(storage);

    match cli.command {
        Commands::Run { dry_run } => cmd_run(seen_repo, &config, dry_run),
        Commands::Recent { limit } => cmd_recent(seen_repo, limit),
    }
}

fn cmd_run(seen_repo: SqliteSeenRepository, config: &Config, dry_run: bool) -> FeedwatchResult<()> {
    let registry = NotifierRegistry::from_config(config)?;

    if !dry_run && registry.is_empty() {
        return Err(FeedwatchError::Config(
            "no notification channels configured (set FEEDWATCH_SMTP_HOST or FEEDWATCH_TELEGRAM_BOT_TOKEN)"
                .to_string(),
        ));
    }

    let fetcher = RssFetcher::new(&config.feed_url);
    let service = RunService::new(fetcher, seen_repo, registry, &config.feed_title);

    println!("Fetching {}...", config.feed_url);

    if dry_run {
        let pending = service.pending()?;

        if pending.is_empty() {
            println!("No new articles.");
            return Ok(());
        }

        for article in &pending {
            let notification = Notification::from_article(&config.feed_title, article);
            println!("  [DRY RUN] {}", notification.format());
        }
        println!("Dry run complete. Would notify {} articles.", pending.len());

        return Ok(());
    }

    let summary = service.run()?;

    for title in &summary.notified {
        println!("  Sent: {}", title);
    }
    for (title, error) in &summary.failures {
        println!("  FAILED: {}: {}", title, error);
    }
    println!(
        "Run complete: {} notified, {} skipped, {} failed.",
        summary.notified.len(),
        summary.skipped,
        summary.failures.len()
    );

    if !summary.is_clean() {
        return Err(FeedwatchError::RunFailed(summary.failures.len()));
    }

    Ok(())
}

fn cmd_recent(seen_repo: SqliteSeenRepository, limit: u32) -> FeedwatchResult<()> {
    let entries = seen_repo.recent(limit)?;

    if entries.is_empty() {
        println!("No articles notified yet.");
        return Ok(());
    }

    for entry in entries {
        let date = if entry.date.is_empty() {
            "no date"
        } else {
            entry.date.as_str()
        };
        println!(
            "  {} [{}] notified {}",
            entry.title,
            date,
            entry.notified_at.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
