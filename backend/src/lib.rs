//! Listing seeding backend.
//!
//! - `domain`: listing and user types, ports and the `ListingSeeder` service.
//! - `outbound`: Diesel/PostgreSQL adapters and embedded migrations.
//! - `listing_seeding`: settings and the operator-facing run used by the
//!   `seed-listings` binary.

pub mod domain;
pub mod listing_seeding;
pub mod outbound;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
