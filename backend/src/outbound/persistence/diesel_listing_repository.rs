//! PostgreSQL-backed listing repository.
//!
//! Applies a seed batch inside one transaction: the optional delete and every
//! insert chunk commit together or not at all.

use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{
    ListingRepository, ListingRepositoryError, ListingSeedBatch, ListingSeedWrite,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::NewListingRow;
use super::pool::DbPool;
use super::schema::listings;

/// Rows per `INSERT` statement.
///
/// Each row binds seven parameters; PostgreSQL caps a statement at 65 535.
pub const INSERT_CHUNK_SIZE: usize = 1_000;

/// Diesel implementation of [`ListingRepository`].
#[derive(Clone)]
pub struct DieselListingRepository {
    pool: DbPool,
}

impl DieselListingRepository {
    /// Create a repository writing through `pool`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use backend::outbound::persistence::{DbPool, DieselListingRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/listings")).await?;
    /// let repository = DieselListingRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for DieselListingRepository {
    async fn write_seed_batch(
        &self,
        batch: ListingSeedBatch,
    ) -> Result<ListingSeedWrite, ListingRepositoryError> {
        let ListingSeedBatch {
            delete_existing,
            listings: new_listings,
        } = batch;
        let rows: Vec<NewListingRow<'_>> = new_listings.iter().map(NewListingRow::from).collect();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ListingRepositoryError::connection))?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                let deleted = if delete_existing {
                    diesel::delete(listings::table).execute(conn).await?
                } else {
                    0
                };

                let mut inserted = 0;
                for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
                    inserted += diesel::insert_into(listings::table)
                        .values(chunk)
                        .execute(conn)
                        .await?;
                    debug!(inserted, total = rows.len(), "listing chunk inserted");
                }

                Ok(ListingSeedWrite { deleted, inserted })
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| {
            map_diesel_error(
                err,
                ListingRepositoryError::query,
                ListingRepositoryError::connection,
            )
        })
    }
}
