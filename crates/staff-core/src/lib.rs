//! Core types for the staffgen population framework.
//!
//! This crate provides the foundational types shared by the generator and
//! the statistics side:
//!
//! - [`Employee`] - A single synthetic employee record
//! - [`Gender`] - Employee gender, serialized lowercase
//! - [`AgeRange`] - Age window in years used for birthdate sampling
//! - [`WORKLOAD_TIERS`] - The fixed set of employment-fraction tiers
//!
//! # Architecture
//!
//! The staff-core crate sits at the foundation of the workspace:
//!
//! ```text
//! staff-core (this crate)
//!    │
//!    ├─── staff-generator  (produces Vec<Employee>)
//!    ├─── staff-stats      (consumes &[Employee])
//!    └─── staff-jsonl      (writes Employee records to JSONL files)
//! ```

pub mod age;
pub mod employee;

// Re-exports for convenience
pub use age::{age_in_years, AgeRange, MILLIS_PER_YEAR};
pub use employee::{Employee, Gender, WORKLOAD_TIERS};
