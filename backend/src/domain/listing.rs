//! Listing data model.
//!
//! A [`NewListing`] is a validated listing ready to be written to the store.
//! Identifiers and audit timestamps are assigned by storage, not here.

use chrono::NaiveDate;
use listing_data::{ListingSeed, TITLE_MAX, is_valid_price_scale};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::UserId;

/// Validation errors returned when constructing a [`NewListing`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingValidationError {
    #[error("listing title must not be empty")]
    EmptyTitle,
    #[error("listing title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("listing description must not be empty")]
    EmptyDescription,
    #[error("listing address must not be empty")]
    EmptyAddress,
    #[error("listing price must be positive, got {price}")]
    NonPositivePrice { price: Decimal },
    #[error("listing price {price} has more than two decimal places")]
    PriceScale { price: Decimal },
    #[error("listing end date {end} must be after start date {start}")]
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },
}

/// Listing awaiting insertion.
///
/// ## Invariants
/// - `title`, `description`, and `address` are non-empty once trimmed.
/// - `title` is at most [`listing_data::TITLE_MAX`] characters.
/// - `price` is positive with at most two decimal places.
/// - `end_date` is strictly after `start_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    owner: UserId,
    title: String,
    description: String,
    price: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
    address: String,
}

impl NewListing {
    /// User the listing belongs to.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Short title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price with cent precision.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// First day of availability.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of availability.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Postal address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl TryFrom<ListingSeed<UserId>> for NewListing {
    type Error = ListingValidationError;

    fn try_from(seed: ListingSeed<UserId>) -> Result<Self, Self::Error> {
        let ListingSeed {
            owner,
            title,
            description,
            price,
            start_date,
            end_date,
            address,
        } = seed;

        if title.trim().is_empty() {
            return Err(ListingValidationError::EmptyTitle);
        }
        if title.chars().count() > TITLE_MAX {
            return Err(ListingValidationError::TitleTooLong {
                max: TITLE_MAX,
            });
        }
        if description.trim().is_empty() {
            return Err(ListingValidationError::EmptyDescription);
        }
        if address.trim().is_empty() {
            return Err(ListingValidationError::EmptyAddress);
        }
        if price <= Decimal::ZERO {
            return Err(ListingValidationError::NonPositivePrice { price });
        }
        if !is_valid_price_scale(price) {
            return Err(ListingValidationError::PriceScale { price });
        }
        if end_date <= start_date {
            return Err(ListingValidationError::EndNotAfterStart {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            owner,
            title,
            description,
            price,
            start_date,
            end_date,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listing validation.

    use rstest::{fixture, rstest};

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, day).expect("valid date")
    }

    #[fixture]
    fn seed() -> ListingSeed<UserId> {
        ListingSeed {
            owner: UserId::random(),
            title: "Harbour view flat".to_owned(),
            description: "Two rooms, bright kitchen.".to_owned(),
            price: Decimal::new(8_950, 2),
            start_date: date(1),
            end_date: date(4),
            address: "4 Quay Street, Bristol, ME 04001".to_owned(),
        }
    }

    #[rstest]
    fn accepts_valid_seed(seed: ListingSeed<UserId>) {
        let owner = seed.owner;
        let listing = NewListing::try_from(seed).expect("valid listing");
        assert_eq!(listing.owner(), &owner);
        assert_eq!(listing.price(), Decimal::new(8_950, 2));
        assert_eq!(listing.end_date(), date(4));
    }

    #[rstest]
    fn rejects_same_day_end(mut seed: ListingSeed<UserId>) {
        seed.end_date = seed.start_date;
        assert_eq!(
            NewListing::try_from(seed),
            Err(ListingValidationError::EndNotAfterStart {
                start: date(1),
                end: date(1),
            })
        );
    }

    #[rstest]
    fn rejects_end_before_start(mut seed: ListingSeed<UserId>) {
        seed.end_date = date(1);
        seed.start_date = date(3);
        assert!(matches!(
            NewListing::try_from(seed),
            Err(ListingValidationError::EndNotAfterStart { .. })
        ));
    }

    #[rstest]
    #[case(Decimal::ZERO)]
    #[case(Decimal::new(-100, 2))]
    fn rejects_non_positive_price(mut seed: ListingSeed<UserId>, #[case] price: Decimal) {
        seed.price = price;
        assert_eq!(
            NewListing::try_from(seed),
            Err(ListingValidationError::NonPositivePrice { price })
        );
    }

    #[rstest]
    fn rejects_sub_cent_price(mut seed: ListingSeed<UserId>) {
        seed.price = Decimal::new(10_001, 3);
        assert!(matches!(
            NewListing::try_from(seed),
            Err(ListingValidationError::PriceScale { .. })
        ));
    }

    #[rstest]
    fn rejects_blank_title(mut seed: ListingSeed<UserId>) {
        seed.title = "   ".to_owned();
        assert_eq!(
            NewListing::try_from(seed),
            Err(ListingValidationError::EmptyTitle)
        );
    }

    #[rstest]
    fn rejects_long_title(mut seed: ListingSeed<UserId>) {
        seed.title = "a".repeat(TITLE_MAX + 1);
        assert_eq!(
            NewListing::try_from(seed),
            Err(ListingValidationError::TitleTooLong {
                max: TITLE_MAX
            })
        );
    }

    #[rstest]
    fn rejects_blank_address(mut seed: ListingSeed<UserId>) {
        seed.address = String::new();
        assert_eq!(
            NewListing::try_from(seed),
            Err(ListingValidationError::EmptyAddress)
        );
    }

    #[rstest]
    fn rejects_blank_description(mut seed: ListingSeed<UserId>) {
        seed.description = "\n".to_owned();
        assert_eq!(
            NewListing::try_from(seed),
            Err(ListingValidationError::EmptyDescription)
        );
    }
}
