//! Validated bounds for generated listing prices and dates.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{BoundsError, GenerationError};

/// Number of decimal places carried by generated prices.
pub const PRICE_SCALE: u32 = 2;

/// Largest storable price in cents (99,999,999.99), the capacity of a
/// `NUMERIC(10, 2)` column.
pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;

/// Default lower price bound in cents (10.00).
pub const DEFAULT_PRICE_MIN_CENTS: i64 = 1_000;

/// Default upper price bound in cents (1000.00).
pub const DEFAULT_PRICE_MAX_CENTS: i64 = 100_000;

/// Default number of days before "today" a stay may start.
pub const DEFAULT_DAYS_BEFORE: u32 = 30;

/// Default number of days after "today" a stay may start.
pub const DEFAULT_DAYS_AFTER: u32 = 30;

/// Default maximum stay length in days.
pub const DEFAULT_MAX_STAY_DAYS: u32 = 30;

/// Returns `true` when `price` carries at most [`PRICE_SCALE`] decimal places.
///
/// # Example
///
/// ```
/// use listing_data::is_valid_price_scale;
/// use rust_decimal::Decimal;
///
/// assert!(is_valid_price_scale(Decimal::new(1999, 2)));
/// assert!(!is_valid_price_scale(Decimal::new(19_999, 3)));
/// ```
#[must_use]
pub fn is_valid_price_scale(price: Decimal) -> bool {
    price.round_dp(PRICE_SCALE) == price
}

/// Inclusive price range with cent precision.
///
/// # Example
///
/// ```
/// use listing_data::PriceRange;
/// use rust_decimal::Decimal;
///
/// let range = PriceRange::new(Decimal::new(1000, 2), Decimal::new(5000, 2))
///     .expect("valid range");
/// assert!(range.contains(Decimal::new(2500, 2)));
/// assert!(!range.contains(Decimal::new(5001, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min_cents: i64,
    max_cents: i64,
}

impl PriceRange {
    /// Builds a range from decimal bounds.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError`] if the minimum is not positive, the bounds are
    /// inverted, either bound has more than two decimal places, or the
    /// maximum exceeds [`MAX_PRICE_CENTS`].
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, BoundsError> {
        if min <= Decimal::ZERO {
            return Err(BoundsError::NonPositivePrice { min });
        }
        if min > max {
            return Err(BoundsError::InvertedPriceRange { min, max });
        }

        let min_cents = to_cents(min)?;
        let max_cents = to_cents(max)?;
        if max_cents > MAX_PRICE_CENTS {
            return Err(BoundsError::PriceOutOfRange { value: max });
        }

        Ok(Self {
            min_cents,
            max_cents,
        })
    }

    /// Lower bound, inclusive.
    #[must_use]
    pub fn min(&self) -> Decimal {
        Decimal::new(self.min_cents, PRICE_SCALE)
    }

    /// Upper bound, inclusive.
    #[must_use]
    pub fn max(&self) -> Decimal {
        Decimal::new(self.max_cents, PRICE_SCALE)
    }

    /// Returns `true` when `price` lies within the range.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min() && price <= self.max()
    }

    /// Range of whole cents covered by the bounds.
    #[must_use]
    pub const fn cents(&self) -> RangeInclusive<i64> {
        self.min_cents..=self.max_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min_cents: DEFAULT_PRICE_MIN_CENTS,
            max_cents: DEFAULT_PRICE_MAX_CENTS,
        }
    }
}

fn to_cents(value: Decimal) -> Result<i64, BoundsError> {
    if !is_valid_price_scale(value) {
        return Err(BoundsError::ExcessPricePrecision { value });
    }

    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or(BoundsError::PriceOutOfRange { value })
}

/// Window of valid stay dates relative to an anchor date.
///
/// Start dates fall between `days_before` days before and `days_after` days
/// after the anchor. End dates fall between one day and `max_stay_days` days
/// after the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    days_before: u32,
    days_after: u32,
    max_stay_days: u32,
}

impl DateWindow {
    /// Builds a date window.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::ZeroStayLength`] when `max_stay_days` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use listing_data::{BoundsError, DateWindow};
    ///
    /// assert!(DateWindow::new(7, 14, 3).is_ok());
    /// assert_eq!(DateWindow::new(7, 14, 0), Err(BoundsError::ZeroStayLength));
    /// ```
    pub const fn new(
        days_before: u32,
        days_after: u32,
        max_stay_days: u32,
    ) -> Result<Self, BoundsError> {
        if max_stay_days == 0 {
            return Err(BoundsError::ZeroStayLength);
        }
        Ok(Self {
            days_before,
            days_after,
            max_stay_days,
        })
    }

    /// Days before the anchor a stay may start.
    #[must_use]
    pub const fn days_before(&self) -> u32 {
        self.days_before
    }

    /// Days after the anchor a stay may start.
    #[must_use]
    pub const fn days_after(&self) -> u32 {
        self.days_after
    }

    /// Longest stay, in days.
    #[must_use]
    pub const fn max_stay_days(&self) -> u32 {
        self.max_stay_days
    }

    /// Earliest and latest permitted start dates around `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DateOutOfRange`] when the window leaves the
    /// representable calendar.
    pub fn start_range(&self, anchor: NaiveDate) -> Result<(NaiveDate, NaiveDate), GenerationError> {
        let earliest = anchor.checked_sub_days(Days::new(u64::from(self.days_before)));
        let latest = anchor.checked_add_days(Days::new(u64::from(self.days_after)));
        earliest
            .zip(latest)
            .ok_or(GenerationError::DateOutOfRange { anchor })
    }

    /// Earliest and latest permitted end dates for a stay starting on `start`.
    ///
    /// The earliest end is always the day after `start`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DateOutOfRange`] when the window leaves the
    /// representable calendar.
    pub fn end_range(&self, start: NaiveDate) -> Result<(NaiveDate, NaiveDate), GenerationError> {
        let earliest = start.checked_add_days(Days::new(1));
        let latest = start.checked_add_days(Days::new(u64::from(self.max_stay_days)));
        earliest
            .zip(latest)
            .ok_or(GenerationError::DateOutOfRange { anchor: start })
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self {
            days_before: DEFAULT_DAYS_BEFORE,
            days_after: DEFAULT_DAYS_AFTER,
            max_stay_days: DEFAULT_MAX_STAY_DAYS,
        }
    }
}

/// Price and date bounds applied to every generated listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingBounds {
    /// Permitted nightly price range.
    pub price: PriceRange,
    /// Permitted stay dates.
    pub dates: DateWindow,
}

impl ListingBounds {
    /// Bundles a price range and a date window.
    #[must_use]
    pub const fn new(price: PriceRange, dates: DateWindow) -> Self {
        Self { price, dates }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn default_price_range_matches_documented_bounds() {
        let range = PriceRange::default();
        assert_eq!(range.min(), Decimal::new(1000, 2));
        assert_eq!(range.max(), Decimal::new(100_000, 2));
    }

    #[rstest]
    #[case(Decimal::ZERO, Decimal::ONE_HUNDRED)]
    #[case(Decimal::new(-500, 2), Decimal::ONE_HUNDRED)]
    fn rejects_non_positive_minimum(#[case] min: Decimal, #[case] max: Decimal) {
        assert_eq!(
            PriceRange::new(min, max),
            Err(BoundsError::NonPositivePrice { min })
        );
    }

    #[test]
    fn rejects_inverted_range() {
        let min = Decimal::new(5000, 2);
        let max = Decimal::new(1000, 2);
        assert_eq!(
            PriceRange::new(min, max),
            Err(BoundsError::InvertedPriceRange { min, max })
        );
    }

    #[test]
    fn rejects_sub_cent_bounds() {
        let min = Decimal::new(10_005, 3);
        assert_eq!(
            PriceRange::new(min, Decimal::ONE_HUNDRED),
            Err(BoundsError::ExcessPricePrecision { value: min })
        );
    }

    #[test]
    fn accepts_trailing_zero_scale() {
        let range = PriceRange::new(Decimal::new(10_000, 3), Decimal::new(2_000, 1))
            .expect("10.000 and 200.0 carry no sub-cent digits");
        assert_eq!(range.cents(), 1_000..=20_000);
    }

    #[test]
    fn largest_storable_price_is_accepted() {
        let max = Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE);
        let range = PriceRange::new(Decimal::ONE, max).expect("fits the price column");
        assert_eq!(range.max(), max);
    }

    #[rstest]
    #[case(MAX_PRICE_CENTS + 1)]
    #[case(i64::MAX)]
    fn rejects_maximum_beyond_storable_price(#[case] max_cents: i64) {
        let max = Decimal::new(max_cents, PRICE_SCALE);
        assert_eq!(
            PriceRange::new(Decimal::ONE, max),
            Err(BoundsError::PriceOutOfRange { value: max })
        );
    }

    #[test]
    fn single_value_range_is_allowed() {
        let price = Decimal::new(4999, 2);
        let range = PriceRange::new(price, price).expect("degenerate range");
        assert!(range.contains(price));
        assert_eq!(range.cents(), 4_999..=4_999);
    }

    #[test]
    fn start_range_spans_window_around_anchor() {
        let window = DateWindow::default();
        let (earliest, latest) = window.start_range(date(2026, 3, 15)).expect("in range");
        assert_eq!(earliest, date(2026, 2, 13));
        assert_eq!(latest, date(2026, 4, 14));
    }

    #[test]
    fn end_range_starts_the_day_after() {
        let window = DateWindow::new(0, 0, 7).expect("valid window");
        let (earliest, latest) = window.end_range(date(2026, 12, 30)).expect("in range");
        assert_eq!(earliest, date(2026, 12, 31));
        assert_eq!(latest, date(2027, 1, 6));
    }

    #[test]
    fn start_range_reports_calendar_overflow() {
        let window = DateWindow::new(0, 10, 1).expect("valid window");
        let result = window.start_range(NaiveDate::MAX);
        assert_eq!(
            result,
            Err(GenerationError::DateOutOfRange {
                anchor: NaiveDate::MAX
            })
        );
    }

    #[test]
    fn zero_stay_is_rejected() {
        assert_eq!(DateWindow::new(1, 1, 0), Err(BoundsError::ZeroStayLength));
    }
}
