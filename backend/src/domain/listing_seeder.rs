//! Listing seeding orchestration.
//!
//! Loads the existing users, generates synthetic listings owned by them and
//! hands the validated batch to the listing repository port. Users are
//! checked before anything is written, so a run without users never deletes
//! existing listings.

use std::sync::Arc;

use listing_data::{
    GenerationError, ListingBounds, SyntheticRecordGenerator, generate_listing_seeds,
};
use mockable::Clock;
use thiserror::Error;

use crate::domain::ports::{
    ListingRepository, ListingRepositoryError, ListingSeedBatch, UserDirectory,
    UserDirectoryError,
};
use crate::domain::{ListingValidationError, NewListing};

/// Number of listings generated when the caller does not ask for a count.
pub const DEFAULT_LISTING_COUNT: usize = 10;

/// Parameters for a single seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSeedRequest {
    /// Number of listings to generate.
    pub count: usize,
    /// Remove all existing listings before inserting the new ones.
    pub delete_existing: bool,
    /// Price and date bounds for generated listings.
    pub bounds: ListingBounds,
}

impl Default for ListingSeedRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_LISTING_COUNT,
            delete_existing: false,
            bounds: ListingBounds::default(),
        }
    }
}

/// Result of a completed seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSeedOutcome {
    /// Number of listings requested.
    pub requested: usize,
    /// Number of listings inserted.
    pub created: usize,
    /// Number of pre-existing listings removed.
    pub deleted: usize,
    /// Number of users listings were distributed across.
    pub owner_count: usize,
}

/// Errors raised while seeding listings.
#[derive(Debug, Error)]
pub enum ListingSeedingError {
    /// No users exist to own the generated listings.
    #[error("no users found; create at least one user before seeding listings")]
    NoUsers,
    /// Reading the existing users failed.
    #[error("failed to load users: {0}")]
    Users(#[from] UserDirectoryError),
    /// Listing generation failed.
    #[error("listing generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated listing failed domain validation.
    #[error("generated listing failed validation: {0}")]
    InvalidListing(#[from] ListingValidationError),
    /// Persisting the listings failed; nothing was written.
    #[error("listing persistence error: {0}")]
    Persistence(#[from] ListingRepositoryError),
}

/// Service that seeds the listing store with synthetic listings.
#[derive(Clone)]
pub struct ListingSeeder<U, L> {
    users: Arc<U>,
    listings: Arc<L>,
    clock: Arc<dyn Clock>,
}

impl<U, L> ListingSeeder<U, L> {
    /// Create a seeder over the given ports.
    ///
    /// The clock supplies "today" for the availability window.
    pub fn new(users: Arc<U>, listings: Arc<L>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            listings,
            clock,
        }
    }
}

impl<U, L> ListingSeeder<U, L>
where
    U: UserDirectory,
    L: ListingRepository,
{
    /// Generate `request.count` listings and persist them.
    ///
    /// # Errors
    ///
    /// Returns [`ListingSeedingError::NoUsers`] before any write when no users
    /// exist, and propagates directory, generation, validation and
    /// persistence failures. A persistence failure leaves the listing store
    /// unchanged.
    pub async fn seed<G>(
        &self,
        request: ListingSeedRequest,
        generator: &mut G,
    ) -> Result<ListingSeedOutcome, ListingSeedingError>
    where
        G: SyntheticRecordGenerator + ?Sized,
    {
        let owners = self.users.list_user_ids().await?;
        if owners.is_empty() {
            return Err(ListingSeedingError::NoUsers);
        }

        let today = self.clock.utc().date_naive();
        let seeds =
            generate_listing_seeds(generator, &owners, request.count, &request.bounds, today)?;
        let listings = seeds
            .into_iter()
            .map(NewListing::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let write = self
            .listings
            .write_seed_batch(ListingSeedBatch {
                delete_existing: request.delete_existing,
                listings,
            })
            .await?;

        Ok(ListingSeedOutcome {
            requested: request.count,
            created: write.inserted,
            deleted: write.deleted,
            owner_count: owners.len(),
        })
    }
}
