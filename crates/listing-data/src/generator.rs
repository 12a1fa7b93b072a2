//! Bulk listing generation.
//!
//! Composes a [`SyntheticRecordGenerator`] into complete listing records. With
//! a seeded generator the same inputs always produce identical listings.

use chrono::NaiveDate;

use crate::bounds::ListingBounds;
use crate::error::GenerationError;
use crate::seed::ListingSeed;
use crate::synthetic::SyntheticRecordGenerator;

/// Upper bound on the up-front allocation for generated listings.
const PREALLOCATION_LIMIT: usize = 10_000;

/// Generates `count` listings, each owned by an owner picked uniformly at
/// random (with replacement) from `owners`.
///
/// Start dates fall within the bounds' window around `today`; each end date is
/// strictly after its start date and at most the maximum stay later. Prices
/// are drawn from the bounds' price range.
///
/// # Errors
///
/// Returns [`GenerationError::NoOwners`] if `owners` is empty, even when
/// `count` is zero, and [`GenerationError::DateOutOfRange`] if the date window
/// leaves the representable calendar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use listing_data::{FakeRecordGenerator, GenerationError, ListingBounds, generate_listing_seeds};
///
/// let today = NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date");
/// let mut generator = FakeRecordGenerator::from_seed(1);
/// let owners: [u8; 0] = [];
///
/// let result = generate_listing_seeds(&mut generator, &owners, 3, &ListingBounds::default(), today);
/// assert_eq!(result, Err(GenerationError::NoOwners));
/// ```
pub fn generate_listing_seeds<G, O>(
    generator: &mut G,
    owners: &[O],
    count: usize,
    bounds: &ListingBounds,
    today: NaiveDate,
) -> Result<Vec<ListingSeed<O>>, GenerationError>
where
    G: SyntheticRecordGenerator + ?Sized,
    O: Clone,
{
    if owners.is_empty() {
        return Err(GenerationError::NoOwners);
    }

    let start_range = bounds.dates.start_range(today)?;
    let mut listings = Vec::with_capacity(count.min(PREALLOCATION_LIMIT));

    for _ in 0..count {
        let listing = generate_single_listing(generator, owners, bounds, start_range)?;
        listings.push(listing);
    }

    Ok(listings)
}

fn generate_single_listing<G, O>(
    generator: &mut G,
    owners: &[O],
    bounds: &ListingBounds,
    (earliest_start, latest_start): (NaiveDate, NaiveDate),
) -> Result<ListingSeed<O>, GenerationError>
where
    G: SyntheticRecordGenerator + ?Sized,
    O: Clone,
{
    let owner = generator
        .pick_index(owners.len())
        .and_then(|index| owners.get(index))
        .cloned()
        .ok_or(GenerationError::NoOwners)?;

    let title = generator.title();
    let description = generator.paragraph();
    let price = generator.price_in_range(&bounds.price);

    let start_date = generator.date_between(earliest_start, latest_start);
    let (earliest_end, latest_end) = bounds.dates.end_range(start_date)?;
    let end_date = generator.date_between(earliest_end, latest_end);

    let address = generator.address();

    Ok(ListingSeed {
        owner,
        title,
        description,
        price,
        start_date,
        end_date,
        address,
    })
}
