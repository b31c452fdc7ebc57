//! JSONL (JSON Lines) export of generated employee populations.
//!
//! This crate writes employee records one JSON object per line so generated
//! populations can be consumed by external tooling.
//!
//! # Example
//!
//! ```ignore
//! use staff_jsonl::JsonlExporter;
//!
//! let exporter = JsonlExporter::new();
//! let metrics = exporter.export(&employees, "population.jsonl")?;
//! println!("Wrote {} rows in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod error;
pub mod exporter;

pub use error::JsonlExportError;
pub use exporter::{ExportMetrics, JsonlExporter, DEFAULT_BUFFER_SIZE};
