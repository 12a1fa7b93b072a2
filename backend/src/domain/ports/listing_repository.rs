//! Port abstraction for writing seeded listings.
//!
//! A seed batch optionally clears the listing table and then inserts the new
//! listings. Adapters must apply both steps atomically so a failed insert
//! never leaves the table emptied.

use async_trait::async_trait;

use crate::domain::NewListing;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by listing repository adapters.
    pub enum ListingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "listing repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "listing repository query failed: {message}",
    }
}

/// Listings to persist in one atomic write.
#[derive(Debug, Clone, Default)]
pub struct ListingSeedBatch {
    /// Remove every existing listing before inserting.
    pub delete_existing: bool,
    /// Validated listings to insert.
    pub listings: Vec<NewListing>,
}

/// Row counts reported by a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingSeedWrite {
    /// Listings removed by the delete step; zero when no delete ran.
    pub deleted: usize,
    /// Listings inserted.
    pub inserted: usize,
}

/// Port for persisting seeded listings.
///
/// Implementations must:
/// - Delete all listings first when `delete_existing` is set.
/// - Insert every listing in the batch.
/// - Roll back all changes if any step fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Apply the batch and report how many rows were deleted and inserted.
    async fn write_seed_batch(
        &self,
        batch: ListingSeedBatch,
    ) -> Result<ListingSeedWrite, ListingRepositoryError>;
}
