//! Database migration command.
//!
//! Migrations live in `crates/api/migrations/` and are embedded into the
//! API library at compile time. They are only ever run from here, never on
//! server startup.

use tracing::info;

use clementine_api::db;

/// Run back-office database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or a migration cannot be applied.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;

    info!("Connecting to back-office database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Running migrations...");
    db::MIGRATOR.run(&pool).await?;

    info!("Migrations complete!");
    Ok(())
}
