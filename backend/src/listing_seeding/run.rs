//! Operator-facing seeding run.
//!
//! Wires the Diesel adapters, the system clock and a `fake`-backed generator
//! into a [`ListingSeeder`], and logs the run so it can be reproduced from
//! its RNG seed.

use std::sync::Arc;

use listing_data::{BoundsError, FakeRecordGenerator};
use mockable::DefaultClock;
use ortho_config::OrthoError;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::{ListingRepository, UserDirectory};
use crate::domain::{
    DEFAULT_LISTING_COUNT, ListingSeedOutcome, ListingSeedRequest, ListingSeeder,
    ListingSeedingError,
};
use crate::listing_seeding::config::ListingSeedSettings;
use crate::outbound::persistence::{
    DbPool, DieselListingRepository, DieselUserDirectory, MigrationError, PoolError,
};

/// Options taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCommandOptions {
    /// Number of listings to create.
    pub count: usize,
    /// Delete every existing listing first.
    pub delete_existing: bool,
    /// Fixed RNG seed; a random one is drawn and logged when absent.
    pub rng_seed: Option<u64>,
}

impl Default for SeedCommandOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_LISTING_COUNT,
            delete_existing: false,
            rng_seed: None,
        }
    }
}

/// Errors returned by a seeding run.
#[derive(Debug, Error)]
pub enum SeedRunError {
    /// Settings could not be loaded.
    #[error("failed to load listing seed settings")]
    Settings {
        /// Loader error from OrthoConfig.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Configured bounds are invalid.
    #[error("invalid listing bounds: {0}")]
    Bounds(#[from] BoundsError),
    /// The connection pool could not be built.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// Schema migrations failed.
    #[error(transparent)]
    Migration(#[from] MigrationError),
    /// Seeding itself failed.
    #[error(transparent)]
    Seeding(#[from] ListingSeedingError),
}

/// Seed listings through an already-built seeder.
///
/// Bounds are validated before the seeder touches storage.
///
/// # Errors
///
/// Returns [`SeedRunError::Bounds`] for invalid settings and
/// [`SeedRunError::Seeding`] for failures inside the run.
pub async fn seed_listings_with<U, L>(
    seeder: &ListingSeeder<U, L>,
    settings: &ListingSeedSettings,
    options: SeedCommandOptions,
) -> Result<ListingSeedOutcome, SeedRunError>
where
    U: UserDirectory,
    L: ListingRepository,
{
    let bounds = settings.bounds()?;
    let mut generator = options.rng_seed.map_or_else(
        FakeRecordGenerator::from_random_seed,
        FakeRecordGenerator::from_seed,
    );

    info!(
        count = options.count,
        delete_existing = options.delete_existing,
        rng_seed = generator.seed(),
        "listing seeding started"
    );
    if options.delete_existing {
        warn!("existing listings will be deleted before insert");
    }

    let request = ListingSeedRequest {
        count: options.count,
        delete_existing: options.delete_existing,
        bounds,
    };
    let outcome = seeder.seed(request, &mut generator).await?;

    info!(
        created = outcome.created,
        deleted = outcome.deleted,
        owner_count = outcome.owner_count,
        rng_seed = generator.seed(),
        "listing seeding finished"
    );
    Ok(outcome)
}

/// Seed listings into the PostgreSQL database behind `pool`.
///
/// # Examples
///
/// ```rust,no_run
/// use backend::listing_seeding::{ListingSeedSettings, SeedCommandOptions, run_listing_seed};
/// use backend::outbound::persistence::{DbPool, PoolConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/listings")).await?;
/// let settings = ListingSeedSettings::load_from_environment()?;
/// let outcome = run_listing_seed(&pool, &settings, SeedCommandOptions::default()).await?;
/// println!("Successfully created {} listings.", outcome.created);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// See [`seed_listings_with`].
pub async fn run_listing_seed(
    pool: &DbPool,
    settings: &ListingSeedSettings,
    options: SeedCommandOptions,
) -> Result<ListingSeedOutcome, SeedRunError> {
    let seeder = ListingSeeder::new(
        Arc::new(DieselUserDirectory::new(pool.clone())),
        Arc::new(DieselListingRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    );
    seed_listings_with(&seeder, settings, options).await
}
