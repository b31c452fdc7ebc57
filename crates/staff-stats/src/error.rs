//! Error types for statistics aggregation.

use thiserror::Error;

/// Errors that can occur while summarizing a population.
#[derive(Error, Debug)]
pub enum StatsError {
    /// Aggregation requires at least one employee; averages and extrema
    /// are undefined on an empty population.
    #[error("Cannot summarize an empty population")]
    EmptyPopulation,
}
