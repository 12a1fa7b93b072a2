//! PostgreSQL persistence adapters using Diesel.
//!
//! Adapters translate between domain types and Diesel rows and map database
//! failures onto port errors. Row structs and table definitions stay private
//! to this module.
//!
//! # Example
//!
//! ```rust,no_run
//! use backend::outbound::persistence::{
//!     DbPool, DieselListingRepository, DieselUserDirectory, PoolConfig,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/listings")).await?;
//! let users = DieselUserDirectory::new(pool.clone());
//! let listings = DieselListingRepository::new(pool);
//! # let _ = (users, listings);
//! # Ok(())
//! # }
//! ```

mod diesel_listing_repository;
mod diesel_user_directory;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_listing_repository::{DieselListingRepository, INSERT_CHUNK_SIZE};
pub use diesel_user_directory::DieselUserDirectory;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
