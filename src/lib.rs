//! staffgen library
//!
//! Generates a synthetic population of employee records and computes
//! descriptive statistics over it. Given a desired count and an age range,
//! [`run`] produces randomized employee records (name, surname, gender,
//! birthdate, workload) and summarizes the population: counts by workload
//! tier, age statistics, the workload median, a women-only workload average,
//! and a workload-sorted view of the records.
//!
//! # Workspace Crates
//!
//! - `staff-core` - shared value types (`Employee`, `Gender`, `AgeRange`)
//! - `staff-generator` - seeded population generation from fixed name pools
//! - `staff-stats` - statistics aggregation into a `StatisticsSummary`
//! - `staff-jsonl` - JSONL export of generated populations
//!
//! # Example
//!
//! ```rust
//! use staffgen::{run_seeded, RunInput};
//! use staff_core::AgeRange;
//!
//! let input = RunInput {
//!     count: 10,
//!     age: AgeRange { min: 19.0, max: 35.0 },
//! };
//!
//! let summary = run_seeded(&input, 42)?;
//! assert_eq!(summary.total, 10);
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};

// Re-exports for convenience
pub use staff_core::{AgeRange, Employee, Gender};
pub use staff_generator::{EmployeeGenerator, GeneratorError};
pub use staff_stats::{summarize, StatisticsSummary, StatsError};

/// Input record for a full generate-and-summarize run.
///
/// Deserializes from the external JSON shape
/// `{ "count": N, "age": { "min": A, "max": B } }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunInput {
    /// Number of employees to generate
    pub count: u64,
    /// Age window for birthdate sampling, in years
    pub age: AgeRange,
}

/// Generate a population from `input` and summarize it.
///
/// Uses OS entropy for seeding, so repeated calls produce different
/// populations. Use [`run_seeded`] for reproducible output.
pub fn run(input: &RunInput) -> anyhow::Result<StatisticsSummary> {
    run_with(input, EmployeeGenerator::from_entropy())
}

/// Generate a population from `input` with a fixed seed and summarize it.
///
/// The same seed and input always produce the same population (statistics
/// still depend on the wall clock through the age computation).
pub fn run_seeded(input: &RunInput, seed: u64) -> anyhow::Result<StatisticsSummary> {
    run_with(input, EmployeeGenerator::new(seed))
}

fn run_with(
    input: &RunInput,
    mut generator: EmployeeGenerator,
) -> anyhow::Result<StatisticsSummary> {
    let employees = generator
        .generate(input.count, &input.age)
        .context("Failed to generate employee population")?;

    let summary = summarize(&employees).context("Failed to compute employee statistics")?;

    Ok(summary)
}
