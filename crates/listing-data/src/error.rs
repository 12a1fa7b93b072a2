//! Error types for the listing-data crate.
//!
//! Bounds errors describe invalid generation configuration; generation errors
//! describe failures while producing listings from otherwise valid bounds.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when constructing generation bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    /// The lower price bound is zero or negative.
    #[error("minimum price must be positive, got {min}")]
    NonPositivePrice {
        /// The rejected lower bound.
        min: Decimal,
    },

    /// The lower price bound exceeds the upper bound.
    #[error("minimum price {min} exceeds maximum price {max}")]
    InvertedPriceRange {
        /// Lower bound supplied.
        min: Decimal,
        /// Upper bound supplied.
        max: Decimal,
    },

    /// A price bound carries more than two decimal places.
    #[error("price bound {value} has more than two decimal places")]
    ExcessPricePrecision {
        /// The rejected bound.
        value: Decimal,
    },

    /// A price bound is larger than a listing price column can store.
    #[error("price bound {value} exceeds the largest storable price")]
    PriceOutOfRange {
        /// The rejected bound.
        value: Decimal,
    },

    /// The maximum stay length is zero, leaving no valid end date.
    #[error("maximum stay must be at least one day")]
    ZeroStayLength,
}

/// Errors that can occur during listing generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No owners were supplied, so no listing can be attributed.
    #[error("no owners available for listing generation")]
    NoOwners,

    /// The configured date window leaves the representable calendar.
    #[error("date window around {anchor} falls outside the supported calendar range")]
    DateOutOfRange {
        /// Date the window was anchored on.
        anchor: NaiveDate,
    },
}
