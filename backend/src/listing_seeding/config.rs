//! Listing seeding configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::sync::Arc;

use listing_data::{
    BoundsError, DEFAULT_DAYS_AFTER, DEFAULT_DAYS_BEFORE, DEFAULT_MAX_STAY_DAYS,
    DEFAULT_PRICE_MAX_CENTS, DEFAULT_PRICE_MIN_CENTS, DateWindow, ListingBounds, PRICE_SCALE,
    PriceRange,
};
use ortho_config::{OrthoConfig, OrthoError};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Generation bounds for `seed-listings`.
///
/// Prices are whole cents. Unset values fall back to 10.00 to 1000.00, start
/// dates 30 days either side of today, and stays of at most 30 nights.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LISTING_SEED")]
pub struct ListingSeedSettings {
    /// Lowest generated price, in cents.
    #[ortho_config(default = DEFAULT_PRICE_MIN_CENTS)]
    pub price_min_cents: i64,
    /// Highest generated price, in cents.
    #[ortho_config(default = DEFAULT_PRICE_MAX_CENTS)]
    pub price_max_cents: i64,
    /// Days before today the earliest start date may fall.
    #[ortho_config(default = DEFAULT_DAYS_BEFORE)]
    pub days_before: u32,
    /// Days after today the latest start date may fall.
    #[ortho_config(default = DEFAULT_DAYS_AFTER)]
    pub days_after: u32,
    /// Longest stay in nights.
    #[ortho_config(default = DEFAULT_MAX_STAY_DAYS)]
    pub max_stay_days: u32,
}

impl Default for ListingSeedSettings {
    fn default() -> Self {
        Self {
            price_min_cents: DEFAULT_PRICE_MIN_CENTS,
            price_max_cents: DEFAULT_PRICE_MAX_CENTS,
            days_before: DEFAULT_DAYS_BEFORE,
            days_after: DEFAULT_DAYS_AFTER,
            max_stay_days: DEFAULT_MAX_STAY_DAYS,
        }
    }
}

impl ListingSeedSettings {
    /// Load settings from the environment and configuration files only.
    ///
    /// Command-line arguments belong to the binary's own parser, so none are
    /// forwarded here.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when a source cannot be parsed or merged.
    pub fn load_from_environment() -> Result<Self, Arc<OrthoError>> {
        Self::load_from_iter([OsString::from("seed-listings")])
    }

    /// Build validated generation bounds from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError`] when the configured prices or stay length are
    /// invalid.
    pub fn bounds(&self) -> Result<ListingBounds, BoundsError> {
        let price = PriceRange::new(
            Decimal::new(self.price_min_cents, PRICE_SCALE),
            Decimal::new(self.price_max_cents, PRICE_SCALE),
        )?;
        let dates = DateWindow::new(self.days_before, self.days_after, self.max_stay_days)?;

        Ok(ListingBounds::new(price, dates))
    }
}
