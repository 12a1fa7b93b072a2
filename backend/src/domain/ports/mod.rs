//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod listing_repository;
mod user_directory;

#[cfg(test)]
pub use listing_repository::MockListingRepository;
pub use listing_repository::{
    ListingRepository, ListingRepositoryError, ListingSeedBatch, ListingSeedWrite,
};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory, UserDirectoryError};
