//! `seed-listings` command support: settings and the seeding run.

pub mod config;
pub mod run;

pub use config::ListingSeedSettings;
pub use run::{SeedCommandOptions, SeedRunError, run_listing_seed, seed_listings_with};
