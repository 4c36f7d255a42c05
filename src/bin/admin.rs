//! CLI administration tool for shorturl.
//!
//! Read-only inspection of links and counters without going through the
//! HTTP API. Never allocates codes or writes rows.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- link show 42
//! cargo run --bin admin -- link find https://www.example.com
//! cargo run --bin admin -- counter show
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorturl::domain::entities::{LINK_SEQUENCE, ShortLink};
use shorturl::domain::repositories::{LinkRepository, SequenceAllocator};
use shorturl::infrastructure::persistence::{PgLinkRepository, PgSequenceAllocator};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting shorturl storage.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show link count and counter values
    Stats,

    /// Look up short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Inspect sequence counters
    Counter {
        #[command(subcommand)]
        action: CounterAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// Show the link for a short code
    Show {
        /// Numeric short code
        code: i64,
    },

    /// Show the link for an exact original URL
    Find {
        /// Original URL, matched byte for byte
        url: String,
    },
}

#[derive(Subcommand)]
enum CounterAction {
    /// Show the last value issued by a counter
    Show {
        /// Counter name
        #[arg(default_value = LINK_SEQUENCE)]
        name: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    let links = PgLinkRepository::new(pool.clone());
    let counters = PgSequenceAllocator::new(pool.clone());

    match cli.command {
        Commands::Stats => handle_stats(&links, &counters).await?,
        Commands::Link { action } => handle_link_action(action, &links).await?,
        Commands::Counter { action } => handle_counter_action(action, &counters).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays the number of stored links and every counter value.
async fn handle_stats(links: &PgLinkRepository, counters: &PgSequenceAllocator) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count = links
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!(
        "  Links:    {}",
        links_count.to_string().bright_green().bold()
    );

    let all = counters
        .list_counters()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list counters: {}", e))?;

    if all.is_empty() {
        println!("  Counters: {}", "none yet".yellow());
    } else {
        println!("  Counters:");
        for counter in &all {
            println!(
                "    {:<20} {}",
                counter.name.cyan(),
                counter.value.to_string().bright_green()
            );
        }
    }
    println!();

    Ok(())
}

async fn handle_link_action(action: LinkAction, links: &PgLinkRepository) -> Result<()> {
    let link = match &action {
        LinkAction::Show { code } => links.find_by_code(*code).await,
        LinkAction::Find { url } => links.find_by_original_url(url).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match link {
        Some(link) => print_link(&link),
        None => println!("{}", "Link not found".yellow()),
    }

    Ok(())
}

fn print_link(link: &ShortLink) {
    println!("{}", "Short link".bright_blue().bold());
    println!();
    println!(
        "  Code:     {}",
        link.short_code.to_string().bright_yellow().bold()
    );
    println!("  URL:      {}", link.original_url.cyan());
    println!(
        "  Created:  {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();
}

async fn handle_counter_action(
    action: CounterAction,
    counters: &PgSequenceAllocator,
) -> Result<()> {
    match action {
        CounterAction::Show { name } => {
            let value = counters
                .current(&name)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            match value {
                Some(value) => println!(
                    "  {}: {}",
                    name.cyan(),
                    value.to_string().bright_green().bold()
                ),
                None => println!(
                    "  {}: {}",
                    name.cyan(),
                    "never allocated".yellow()
                ),
            }
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
