//! Employee population generator for the staffgen framework.
//!
//! This crate provides the [`EmployeeGenerator`] which produces synthetic
//! employee records from fixed name pools and an age window. The generator
//! uses a seeded RNG to ensure reproducibility across runs with the same
//! seed.
//!
//! # Architecture
//!
//! ```text
//! count + AgeRange
//!        │
//!        ▼
//! ┌───────────────────┐
//! │ EmployeeGenerator │
//! │                   │
//! │  - rng (StdRng)   │
//! │  - name pools     │
//! └─────────┬─────────┘
//!           │
//!           ▼
//!   Employee { gender, birthdate, name, surname, workload }
//! ```
//!
//! Birthdates are sampled uniformly over the millisecond window implied by
//! the age range, truncated to midnight UTC, and deduplicated within one
//! `generate` call. The number of distinct days in the window is checked up
//! front so an undersized window fails fast instead of retrying forever.
//!
//! # Example
//!
//! ```rust
//! use staff_core::AgeRange;
//! use staff_generator::EmployeeGenerator;
//!
//! let mut generator = EmployeeGenerator::new(42);
//! let employees = generator.generate(10, &AgeRange { min: 19.0, max: 35.0 })?;
//! assert_eq!(employees.len(), 10);
//! # Ok::<(), staff_generator::GeneratorError>(())
//! ```

pub mod generator;
pub mod pools;

// Re-exports for convenience
pub use generator::{EmployeeGenerator, GeneratorError};
pub use pools::{FIRST_NAMES, LAST_NAMES};
