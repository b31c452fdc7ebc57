//! Main generator producing synthetic employee records.

use crate::pools::{FIRST_NAMES, LAST_NAMES};
use chrono::{DateTime, NaiveTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use staff_core::{AgeRange, Employee, Gender, MILLIS_PER_YEAR, WORKLOAD_TIERS};
use std::collections::HashSet;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Age range with min above max
    #[error("Invalid age range: min {min} exceeds max {max}")]
    InvalidAgeRange {
        /// Requested minimum age in years
        min: f64,
        /// Requested maximum age in years
        max: f64,
    },

    /// Age window too narrow for the requested population size
    #[error("Age window holds only {capacity} distinct birthdates but {requested} employees were requested")]
    WindowExhausted {
        /// Requested population size
        requested: u64,
        /// Number of distinct days in the age window
        capacity: u64,
    },
}

/// Generator that produces synthetic employee records.
///
/// The generator uses a seeded random number generator to ensure
/// reproducible populations across runs with the same seed.
pub struct EmployeeGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
}

impl EmployeeGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a new generator seeded from OS entropy.
    ///
    /// This is NOT deterministic - each generator produces a different
    /// population.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate `count` employee records with ages inside `age_range`.
    ///
    /// Records are returned in generation order. Every birthdate is unique
    /// within one call; uniqueness is not tracked across calls.
    pub fn generate(
        &mut self,
        count: u64,
        age_range: &AgeRange,
    ) -> Result<Vec<Employee>, GeneratorError> {
        if age_range.min > age_range.max {
            return Err(GeneratorError::InvalidAgeRange {
                min: age_range.min,
                max: age_range.max,
            });
        }

        let window = BirthdateWindow::new(Utc::now(), age_range);

        // The dedup loop below would never terminate if the window holds
        // fewer distinct days than the requested population size.
        let capacity = window.distinct_days();
        if count > capacity {
            return Err(GeneratorError::WindowExhausted {
                requested: count,
                capacity,
            });
        }

        let mut employees = Vec::with_capacity(count as usize);
        let mut used_birthdates = HashSet::new();

        for _ in 0..count {
            let name = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())].to_string();
            let surname = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())].to_string();
            let gender = if self.rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            };
            let workload = WORKLOAD_TIERS[self.rng.gen_range(0..WORKLOAD_TIERS.len())];

            // Redraw until the birthdate is unused within this population.
            let birthdate = loop {
                let candidate = window.sample(&mut self.rng);
                if used_birthdates.insert(candidate) {
                    break candidate;
                }
            };

            employees.push(Employee {
                gender,
                birthdate,
                name,
                surname,
                workload,
            });
        }

        Ok(employees)
    }
}

/// Millisecond window `[now - max years, now - min years]` birthdates are
/// drawn from.
struct BirthdateWindow {
    oldest_ms: i64,
    youngest_ms: i64,
}

impl BirthdateWindow {
    fn new(now: DateTime<Utc>, age_range: &AgeRange) -> Self {
        let now_ms = now.timestamp_millis() as f64;
        Self {
            oldest_ms: (now_ms - age_range.max * MILLIS_PER_YEAR).floor() as i64,
            youngest_ms: (now_ms - age_range.min * MILLIS_PER_YEAR).floor() as i64,
        }
    }

    /// Number of distinct midnight-truncated days the window can produce.
    fn distinct_days(&self) -> u64 {
        let oldest = midnight_utc(self.oldest_ms);
        let youngest = midnight_utc(self.youngest_ms);
        ((youngest - oldest).num_days() + 1) as u64
    }

    /// Draw a uniformly random instant from the window, truncated to
    /// midnight UTC.
    fn sample<R: Rng>(&self, rng: &mut R) -> DateTime<Utc> {
        let ms = rng.gen_range(self.oldest_ms..=self.youngest_ms);
        midnight_utc(ms)
    }
}

/// Truncate a unix-millisecond instant to midnight UTC of its day.
fn midnight_utc(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}
