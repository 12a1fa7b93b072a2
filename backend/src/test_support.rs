//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`. Only
//! compiled for tests or with the `test-support` feature.

pub mod clock {
    //! Fixed clock for deterministic "today".

    use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
    use mockable::Clock;

    /// Clock pinned to a single instant.
    #[derive(Debug, Clone, Copy)]
    pub struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl FixtureClock {
        /// Pin the clock to `utc_now`.
        pub fn new(utc_now: DateTime<Utc>) -> Self {
            Self { utc_now }
        }

        /// Pin the clock to midnight UTC on `date`.
        pub fn on_date(date: NaiveDate) -> Self {
            Self::new(date.and_time(NaiveTime::MIN).and_utc())
        }
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }
}

pub mod listing_store {
    //! In-memory user and listing store.
    //!
    //! Implements both seeding ports over one shared state, applying a batch
    //! all-or-nothing like the PostgreSQL adapter does.

    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use async_trait::async_trait;

    use crate::domain::ports::{
        ListingRepository, ListingRepositoryError, ListingSeedBatch, ListingSeedWrite,
        UserDirectory, UserDirectoryError,
    };
    use crate::domain::{NewListing, UserId};

    #[derive(Debug, Default)]
    struct StoreState {
        users: Vec<UserId>,
        listings: Vec<NewListing>,
        fail_inserts: bool,
        batches_written: usize,
    }

    /// Shared in-memory store; clones see the same state.
    #[derive(Debug, Clone, Default)]
    pub struct InMemoryListingStore {
        state: Arc<Mutex<StoreState>>,
    }

    impl InMemoryListingStore {
        /// Create an empty store.
        pub fn new() -> Self {
            Self::default()
        }

        fn lock(&self) -> MutexGuard<'_, StoreState> {
            self.state.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Add `count` freshly generated users and return their ids.
        pub fn add_users(&self, count: usize) -> Vec<UserId> {
            let ids: Vec<UserId> = (0..count).map(|_| UserId::random()).collect();
            self.lock().users.extend(ids.iter().copied());
            ids
        }

        /// Insert listings directly, bypassing the port.
        pub fn insert_listings(&self, listings: impl IntoIterator<Item = NewListing>) {
            self.lock().listings.extend(listings);
        }

        /// Make every subsequent batch fail at the insert step.
        pub fn fail_inserts(&self) {
            self.lock().fail_inserts = true;
        }

        /// Snapshot of the stored users.
        pub fn users(&self) -> Vec<UserId> {
            self.lock().users.clone()
        }

        /// Snapshot of the stored listings.
        pub fn listings(&self) -> Vec<NewListing> {
            self.lock().listings.clone()
        }

        /// Number of stored listings.
        pub fn listing_count(&self) -> usize {
            self.lock().listings.len()
        }

        /// Number of batches committed.
        pub fn batches_written(&self) -> usize {
            self.lock().batches_written
        }
    }

    #[async_trait]
    impl UserDirectory for InMemoryListingStore {
        async fn list_user_ids(&self) -> Result<Vec<UserId>, UserDirectoryError> {
            Ok(self.users())
        }
    }

    #[async_trait]
    impl ListingRepository for InMemoryListingStore {
        async fn write_seed_batch(
            &self,
            batch: ListingSeedBatch,
        ) -> Result<ListingSeedWrite, ListingRepositoryError> {
            let mut state = self.lock();

            // Stage the write so a failure leaves state untouched.
            let mut staged = if batch.delete_existing {
                Vec::new()
            } else {
                state.listings.clone()
            };
            let deleted = state.listings.len() - staged.len();

            if state.fail_inserts {
                return Err(ListingRepositoryError::query("insert rejected by test store"));
            }
            if let Some(orphan) = batch
                .listings
                .iter()
                .find(|listing| !state.users.contains(listing.owner()))
            {
                return Err(ListingRepositoryError::query(format!(
                    "owner {} does not exist",
                    orphan.owner()
                )));
            }

            let inserted = batch.listings.len();
            staged.extend(batch.listings);
            state.listings = staged;
            state.batches_written += 1;

            Ok(ListingSeedWrite { deleted, inserted })
        }
    }
}

pub mod listings {
    //! Listing builders.

    use chrono::NaiveDate;
    use listing_data::ListingSeed;
    use rust_decimal::Decimal;

    use crate::domain::{ListingValidationError, NewListing, UserId};

    /// Build a valid listing owned by `owner`, starting on `start_date`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingValidationError`] if `start_date` is the last
    /// representable day.
    pub fn sample_listing(
        owner: UserId,
        start_date: NaiveDate,
    ) -> Result<NewListing, ListingValidationError> {
        let end_date = start_date.succ_opt().unwrap_or(start_date);
        NewListing::try_from(ListingSeed {
            owner,
            title: "Existing listing".to_owned(),
            description: "Created before the seeding run.".to_owned(),
            price: Decimal::new(5_000, 2),
            start_date,
            end_date,
            address: "1 Main Street, Springfield, IL 62701".to_owned(),
        })
    }
}
