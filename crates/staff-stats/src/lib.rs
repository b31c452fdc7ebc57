//! Descriptive statistics over employee populations.
//!
//! This crate provides [`summarize`], which condenses a non-empty slice of
//! employee records into a single [`StatisticsSummary`]: workload-tier
//! counts, age statistics computed from continuous ages, the workload
//! median, a women-only workload average, and a workload-sorted copy of the
//! input.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use staff_core::{Employee, Gender};
//! use staff_stats::summarize;
//!
//! let employees = vec![Employee {
//!     gender: Gender::Female,
//!     birthdate: Utc.with_ymd_and_hms(1994, 5, 2, 0, 0, 0).unwrap(),
//!     name: "Camila".to_string(),
//!     surname: "Torres".to_string(),
//!     workload: 20,
//! }];
//!
//! let summary = summarize(&employees)?;
//! assert_eq!(summary.total, 1);
//! assert_eq!(summary.workload20, 1);
//! # Ok::<(), staff_stats::StatsError>(())
//! ```

pub mod error;
pub mod summary;

// Re-exports for convenience
pub use error::StatsError;
pub use summary::{summarize, summarize_at, StatisticsSummary};
