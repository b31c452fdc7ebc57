//! Age window and continuous-age arithmetic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds in a mean Julian year (365.25 days).
///
/// Both birthdate sampling and age computation divide elapsed wall-clock
/// milliseconds by this constant, so the two sides agree on what "a year"
/// means.
pub const MILLIS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0 * 1000.0;

/// An age window in years, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Youngest age in years
    pub min: f64,
    /// Oldest age in years
    pub max: f64,
}

/// Age as a real number of years elapsed between `birthdate` and `now`.
pub fn age_in_years(birthdate: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now.timestamp_millis() - birthdate.timestamp_millis()) as f64 / MILLIS_PER_YEAR
}
