//! CLI administration tool for email-capture.
//!
//! Inspects and appends to the subscriber list without going through the
//! HTTP page. The tool never removes subscribers.
//!
//! # Usage
//!
//! ```bash
//! # Show every stored subscriber
//! cargo run --bin admin -- subscribers list
//!
//! # Subscribe an address through the normal write path
//! cargo run --bin admin -- subscribers add someone@example.com
//!
//! # Check store configuration and connectivity
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `KV_URL`, `KV_TOKEN`, `STORE_KEY`, `STORE_TIMEOUT_MS`.

use email_capture::application::services::DegradedReason;
use email_capture::config::{self, Config, StoreConfig};
use email_capture::domain::entities::Outcome;
use email_capture::server::build_subscription_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// CLI tool for managing email-capture.
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
    /// Inspect or extend the subscriber list
    Subscribers {
        #[command(subcommand)]
        action: SubscriberAction,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Subscriber list subcommands.
#[derive(Subcommand)]
enum SubscriberAction {
    /// List all subscribers in signup order
    List,

    /// Subscribe an email address
    Add {
        /// Email address (prompted for if omitted)
        email: Option<String>,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store configuration and connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Subscribers { action } => handle_subscriber_action(action, &config).await?,
        Commands::Store { action } => match action {
            StoreAction::Check => check_store(&config).await?,
        },
    }

    Ok(())
}

/// Dispatches subscriber commands.
async fn handle_subscriber_action(action: SubscriberAction, config: &Config) -> Result<()> {
    match action {
        SubscriberAction::List => list_subscribers(config).await,
        SubscriberAction::Add { email } => add_subscriber(config, email).await,
    }
}

/// Lists subscribers with their position in the list.
///
/// # Output Format
///
/// ```text
/// 📋 Subscribers (key: emails)
///
///   #    Email
///   ──────────────────────────────────────────
///   1    a@x.com
///   2    b@x.com
///
///   Total: 2
/// ```
async fn list_subscribers(config: &Config) -> Result<()> {
    let service = build_subscription_service(config).await;

    println!(
        "{} {}",
        "📋 Subscribers".bright_blue().bold(),
        format!("(key: {})", service.list_key()).bright_black()
    );
    println!();

    let subscribers = service
        .list_subscribers()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read subscribers: {}", e))?;

    let Some(subscribers) = subscribers else {
        let hint = match service.degraded_reason() {
            Some(DegradedReason::Unreachable) => {
                "  Store did not answer (check KV_URL, KV_TOKEN and network access)"
            }
            _ => "  Store is not configured (set KV_URL and KV_TOKEN)",
        };
        println!("{}", hint.yellow());
        return Ok(());
    };

    if subscribers.is_empty() {
        println!("{}", "  No subscribers yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {}",
        "#".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "─".repeat(42).bright_black());

    for (index, email) in subscribers.iter().enumerate() {
        println!(
            "  {:<4} {}",
            (index + 1).to_string().bright_black(),
            email.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        subscribers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Subscribes an address through the same write path the page uses.
async fn add_subscriber(config: &Config, email: Option<String>) -> Result<()> {
    println!("{}", "✉️  Add Subscriber".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Email address")
            .allow_empty(true)
            .interact_text()?,
    };

    let service = build_subscription_service(config).await;
    let outcome = service.subscribe(&email).await;

    match &outcome {
        Outcome::Success { message, id } => {
            println!("{} {}", "✅".green(), message.green().bold());
            println!("  {}", format!("id: {id}").bright_black());
        }
        Outcome::Failure { message, id } => {
            println!("{} {}", "❌".red(), message.red().bold());
            println!("  {}", format!("id: {id}").bright_black());
        }
    }
    println!();

    Ok(())
}

/// Reports whether the store is configured and answering.
async fn check_store(config: &Config) -> Result<()> {
    println!("{}", "🔍 Store Check".bright_blue().bold());
    println!();

    match &config.store {
        StoreConfig::Missing => {
            println!("  Mode:  {}", "DEGRADED".yellow().bold());
            println!("  {}", "KV_URL and KV_TOKEN must both be set".bright_black());
        }
        StoreConfig::Configured { .. } => {
            let service = build_subscription_service(config).await;
            let healthy = service.store_healthy().await;

            println!("  Mode:  {}", "CONFIGURED".green().bold());
            println!("  Key:   {}", config.store_key.cyan());
            println!(
                "  PING:  {}",
                if healthy { "OK".green() } else { "FAILED".red() }
            );
        }
    }
    println!();

    Ok(())
}
