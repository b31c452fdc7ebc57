//! Employee record types.
//!
//! [`Employee`] is the value record produced by the generator and consumed
//! by the statistics side. Records are immutable once created; there is no
//! persisted state behind them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of employment-fraction tiers, in percent of full time.
pub const WORKLOAD_TIERS: [u32; 4] = [10, 20, 30, 40];

/// Employee gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male employee
    Male,
    /// Female employee
    Female,
}

/// A single synthetic employee record.
///
/// `birthdate` is always midnight UTC and serializes in ISO 8601 form.
/// `workload` is one of [`WORKLOAD_TIERS`] for generated records; the type
/// admits other values so downstream consumers can express the documented
/// tier-filtering behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee gender
    pub gender: Gender,
    /// Date of birth, midnight UTC
    pub birthdate: DateTime<Utc>,
    /// First name
    pub name: String,
    /// Last name
    pub surname: String,
    /// Employment fraction in percent of full time
    pub workload: u32,
}
