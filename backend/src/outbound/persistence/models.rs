//! Diesel row types for the listing tables.

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::NewListing;

use super::schema::listings;

/// Insertable row for a new listing.
///
/// `id`, `created_at` and `updated_at` are left to column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = listings)]
pub(crate) struct NewListingRow<'a> {
    pub owner_id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub price: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: &'a str,
}

impl<'a> From<&'a NewListing> for NewListingRow<'a> {
    fn from(listing: &'a NewListing) -> Self {
        Self {
            owner_id: *listing.owner().as_uuid(),
            title: listing.title(),
            description: listing.description(),
            price: listing.price(),
            start_date: listing.start_date(),
            end_date: listing.end_date(),
            address: listing.address(),
        }
    }
}
