//! Deterministic synthetic listing generation for seeding demonstration data.
//!
//! This crate produces believable, reproducible listing records from a seeded
//! random source. It is independent of backend domain types: owners are
//! passed in as opaque values and copied onto each generated record.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Validated generation bounds (price range, date window, stay length)
//! - A [`SyntheticRecordGenerator`] capability that callers can substitute
//! - A `fake`-backed implementation seeded from a `u64`
//! - Bulk listing generation with uniformly chosen owners
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use listing_data::{FakeRecordGenerator, ListingBounds, generate_listing_seeds};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date");
//! let owners = ["alice", "bob", "carol"];
//! let mut generator = FakeRecordGenerator::from_seed(42);
//!
//! let listings = generate_listing_seeds(
//!     &mut generator,
//!     &owners,
//!     5,
//!     &ListingBounds::default(),
//!     today,
//! )
//! .expect("generation succeeds");
//!
//! assert_eq!(listings.len(), 5);
//! assert!(listings.iter().all(|listing| listing.end_date > listing.start_date));
//! ```

mod bounds;
mod error;
mod generator;
mod seed;
mod synthetic;

pub use bounds::{
    DEFAULT_DAYS_AFTER, DEFAULT_DAYS_BEFORE, DEFAULT_MAX_STAY_DAYS, DEFAULT_PRICE_MAX_CENTS,
    DEFAULT_PRICE_MIN_CENTS, DateWindow, ListingBounds, MAX_PRICE_CENTS, PRICE_SCALE, PriceRange,
    is_valid_price_scale,
};
pub use error::{BoundsError, GenerationError};
pub use generator::generate_listing_seeds;
pub use seed::ListingSeed;
pub use synthetic::{FakeRecordGenerator, SyntheticRecordGenerator, TITLE_MAX};
