//! Domain primitives, ports and the listing seeding service.
//!
//! Public surface:
//! - `UserId` — identifier of an existing user, the owner of a listing.
//! - `NewListing` — validated listing awaiting insertion.
//! - `ListingSeeder` — orchestrates user lookup, generation and persistence.

pub mod listing;
pub mod listing_seeder;
pub mod ports;
pub mod user;

pub use self::listing::{ListingValidationError, NewListing};
pub use self::listing_seeder::{
    DEFAULT_LISTING_COUNT, ListingSeedOutcome, ListingSeedRequest, ListingSeeder,
    ListingSeedingError,
};
pub use self::user::UserId;
