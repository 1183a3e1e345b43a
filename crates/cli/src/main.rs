//! Clementine CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run back-office database migrations
//! clem migrate
//!
//! # Insert sample data for local development
//! clem seed
//!
//! # Mint a development bearer token (requires CLEMENTINE_AUTH_* env vars)
//! clem token --subject dev@clementine.dev --ttl-minutes 60
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed database with sample data
//! - `token` - Mint a development bearer token

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clem")]
#[command(author, version, about = "Clementine CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run back-office database migrations
    Migrate,
    /// Seed the database with sample data for local development
    Seed,
    /// Mint a development bearer token
    Token {
        /// Token subject (who the token is for)
        #[arg(short, long, default_value = "dev@clementine.dev")]
        subject: String,

        /// Token lifetime in minutes
        #[arg(short, long, default_value_t = 60)]
        ttl_minutes: i64,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Token {
            subject,
            ttl_minutes,
        } => commands::token::mint(&subject, ttl_minutes)?,
    }
    Ok(())
}
