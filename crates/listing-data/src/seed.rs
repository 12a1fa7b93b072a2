//! Generated listing record type.
//!
//! This type is independent of backend domain types; callers convert it into
//! their own listing representation at the point of use.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A generated listing attributed to an owner of type `O`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use listing_data::ListingSeed;
/// use rust_decimal::Decimal;
///
/// let listing = ListingSeed {
///     owner: 7_u32,
///     title: "Quiet loft".to_owned(),
///     description: "Close to the station.".to_owned(),
///     price: Decimal::new(12_500, 2),
///     start_date: NaiveDate::from_ymd_opt(2026, 4, 1).expect("valid date"),
///     end_date: NaiveDate::from_ymd_opt(2026, 4, 5).expect("valid date"),
///     address: "12 Elm Street, Springfield, IL 62701".to_owned(),
/// };
///
/// assert_eq!(listing.stay_nights(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSeed<O> {
    /// Owner the listing is attributed to.
    pub owner: O,
    /// Short title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Price with at most two decimal places.
    pub price: Decimal,
    /// First day of availability.
    pub start_date: NaiveDate,
    /// Last day of availability, strictly after `start_date`.
    pub end_date: NaiveDate,
    /// Single-line postal address.
    pub address: String,
}

impl<O> ListingSeed<O> {
    /// Number of nights between the start and end dates.
    #[must_use]
    pub fn stay_nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
