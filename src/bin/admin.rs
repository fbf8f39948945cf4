//! CLI administration tool for shortlink.
//!
//! Inspects and maintains stored links and checks the database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links, oldest first
//! cargo run --bin admin -- links list
//!
//! # Show a single link
//! cargo run --bin admin -- links get 42
//!
//! # Delete a link (asks for confirmation unless -y)
//! cargo run --bin admin -- links delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`), plus
//! `BASE_URL`.

use shortlink::AppError;
use shortlink::application::services::UrlService;
use shortlink::config::{Config, mask_connection_string};
use shortlink::domain::RequestContext;
use shortlink::infrastructure::persistence::PgUrlRepository;
use shortlink::server::connect_pool;
use shortlink::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type AdminService = UrlService<PgUrlRepository, RandomAliasGenerator>;

/// CLI tool for managing shortlink.
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
    /// Inspect and maintain links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Show a single link
    Get {
        /// Link ID
        id: i64,
    },

    /// Delete a link
    Delete {
        /// Link ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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
    let config = Config::from_env()?;

    let pool = connect_pool(&config)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&config.database_url)
            )
        })?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &config, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands through the same service the server uses.
async fn handle_link_action(action: LinkAction, config: &Config, pool: PgPool) -> Result<()> {
    let service: AdminService = UrlService::new(
        Arc::new(PgUrlRepository::new(Arc::new(pool))),
        Arc::new(RandomAliasGenerator::from_os_rng()),
        config.base_url.clone(),
    );
    let ctx = RequestContext::new("admin-cli");

    match action {
        LinkAction::List => list_links(&service, &ctx).await?,
        LinkAction::Get { id } => show_link(&service, &ctx, id).await?,
        LinkAction::Delete { id, yes } => delete_link(&service, &ctx, id, yes).await?,
    }

    Ok(())
}

/// Prints every link, oldest first.
async fn list_links(service: &AdminService, ctx: &RequestContext) -> Result<()> {
    let links = service
        .list(ctx)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "No links stored".yellow());
        return Ok(());
    }

    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    for link in &links {
        println!(
            "  {:>6}  {}  {}  {}",
            link.id.to_string().bright_black(),
            link.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black(),
            link.alias.cyan(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_green().bold());

    Ok(())
}

/// Prints a single link.
async fn show_link(service: &AdminService, ctx: &RequestContext, id: i64) -> Result<()> {
    let link = match service.get(ctx, id).await {
        Ok(link) => link,
        Err(AppError::NotFound) => {
            println!("{}", format!("❌ Link {id} not found").red());
            return Ok(());
        }
        Err(e) => anyhow::bail!("Database error: {}", e),
    };

    println!("  ID:       {}", link.id.to_string().bright_black());
    println!("  Alias:    {}", link.alias.cyan());
    println!("  URL:      {}", link.original_url);
    println!("  Created:  {}", link.created_at.to_rfc3339());
    println!("  Clicks:   {}", link.clicks);

    Ok(())
}

/// Deletes a link after confirmation.
///
/// Requires confirmation (default: No) unless `--yes` is given.
async fn delete_link(
    service: &AdminService,
    ctx: &RequestContext,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let link = match service.get(ctx, id).await {
        Ok(link) => link,
        Err(AppError::NotFound) => {
            println!("{}", "⚠️  Link not found, nothing to delete".yellow());
            return Ok(());
        }
        Err(e) => anyhow::bail!("Database error: {}", e),
    };

    println!("  Alias: {}", link.alias.cyan());
    println!("  URL:   {}", link.original_url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(ctx, id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delete_with_yes() {
        let cli = Cli::try_parse_from(["admin", "links", "delete", "7", "-y"]).unwrap();

        match cli.command {
            Commands::Links {
                action: LinkAction::Delete { id, yes },
            } => {
                assert_eq!(id, 7);
                assert!(yes);
            }
            _ => panic!("unexpected command"),
        }
    }
}
