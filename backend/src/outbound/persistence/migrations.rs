//! Embedded schema migrations.
//!
//! Migrations run over a blocking `PgConnection`; call [`run_migrations`]
//! before the async runtime starts or from a blocking task.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::ConnectionError;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

/// Migrations compiled from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {0}")]
    Connection(#[from] ConnectionError),
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
}

/// Apply every pending migration and return the number applied.
///
/// # Errors
///
/// Returns [`MigrationError`] when connecting fails or a migration errors.
pub fn run_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let mut connection = PgConnection::establish(database_url)?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;

    for version in &applied {
        info!(%version, "migration applied");
    }
    Ok(applied.len())
}
