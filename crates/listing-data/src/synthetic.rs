//! Synthetic field generation.
//!
//! [`SyntheticRecordGenerator`] is the capability the listing generator draws
//! on. [`FakeRecordGenerator`] backs it with `fake` over a seeded `ChaCha8Rng`,
//! so the same seed value always produces identical output.

use std::ops::Range;

use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

use crate::bounds::{PRICE_SCALE, PriceRange};

/// Maximum number of characters in a listing title.
///
/// Generated titles are truncated to this length and the `listings.title`
/// column is sized to match.
pub const TITLE_MAX: usize = 100;

/// Word count range for generated titles.
const TITLE_WORDS: Range<usize> = 3..6;

/// Sentence count range for generated descriptions.
const DESCRIPTION_SENTENCES: Range<usize> = 3..6;

/// Source of synthetic listing fields.
///
/// Implementations decide how randomness is produced; callers only rely on
/// the documented ranges.
pub trait SyntheticRecordGenerator {
    /// Short title text.
    fn title(&mut self) -> String;

    /// Multi-sentence free text.
    fn paragraph(&mut self) -> String;

    /// Price drawn uniformly from `range`, with at most two decimal places.
    fn price_in_range(&mut self, range: &PriceRange) -> Decimal;

    /// Date between `earliest` and `latest`, both inclusive.
    ///
    /// Returns `earliest` when `latest` is not after it.
    fn date_between(&mut self, earliest: NaiveDate, latest: NaiveDate) -> NaiveDate;

    /// Single-line postal address.
    fn address(&mut self) -> String;

    /// Uniform index in `0..len`, or `None` when `len` is zero.
    fn pick_index(&mut self, len: usize) -> Option<usize>;
}

/// `fake`-backed generator over a deterministic RNG.
///
/// # Example
///
/// ```
/// use listing_data::{FakeRecordGenerator, SyntheticRecordGenerator};
///
/// let mut first = FakeRecordGenerator::from_seed(7);
/// let mut second = FakeRecordGenerator::from_seed(7);
///
/// assert_eq!(first.title(), second.title());
/// assert_eq!(first.seed(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct FakeRecordGenerator {
    seed: u64,
    rng: ChaCha8Rng,
}

impl FakeRecordGenerator {
    /// Creates a generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a generator from a freshly drawn seed.
    ///
    /// The seed remains available through [`Self::seed`] so a run can be
    /// repeated.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Seed value this generator was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl SyntheticRecordGenerator for FakeRecordGenerator {
    fn title(&mut self) -> String {
        let sentence: String = Sentence(EN, TITLE_WORDS).fake_with_rng(&mut self.rng);
        sentence
            .trim_end_matches('.')
            .chars()
            .take(TITLE_MAX)
            .collect()
    }

    fn paragraph(&mut self) -> String {
        Paragraph(EN, DESCRIPTION_SENTENCES).fake_with_rng(&mut self.rng)
    }

    fn price_in_range(&mut self, range: &PriceRange) -> Decimal {
        let cents = self.rng.random_range(range.cents());
        Decimal::new(cents, PRICE_SCALE)
    }

    fn date_between(&mut self, earliest: NaiveDate, latest: NaiveDate) -> NaiveDate {
        if latest <= earliest {
            return earliest;
        }

        let span = u64::try_from((latest - earliest).num_days()).unwrap_or(0);
        let offset = self.rng.random_range(0..=span);
        earliest
            .checked_add_days(Days::new(offset))
            .unwrap_or(latest)
    }

    fn address(&mut self) -> String {
        let building: String = BuildingNumber(EN).fake_with_rng(&mut self.rng);
        let street: String = StreetName(EN).fake_with_rng(&mut self.rng);
        let city: String = CityName(EN).fake_with_rng(&mut self.rng);
        let state: String = StateAbbr(EN).fake_with_rng(&mut self.rng);
        let zip: String = ZipCode(EN).fake_with_rng(&mut self.rng);
        format!("{building} {street}, {city}, {state} {zip}")
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}
