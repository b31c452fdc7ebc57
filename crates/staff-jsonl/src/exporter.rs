//! JSONL exporter for employee populations.

use crate::error::JsonlExportError;
use staff_core::Employee;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Exporter that writes employee populations as JSONL files.
pub struct JsonlExporter {
    buffer_size: usize,
}

impl JsonlExporter {
    /// Create a new exporter with the default buffer size.
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set the write buffer size.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Write `employees` to `output_path`, one JSON object per line.
    ///
    /// Returns metrics about the export operation.
    pub fn export<P: AsRef<Path>>(
        &self,
        employees: &[Employee],
        output_path: P,
    ) -> Result<ExportMetrics, JsonlExportError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();

        info!(
            "Writing {} employees to '{}'",
            employees.len(),
            output_path.display()
        );

        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(self.buffer_size, file);

        for employee in employees {
            serde_json::to_writer(&mut writer, employee)?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;

        let file_size_bytes = std::fs::metadata(output_path)?.len();

        Ok(ExportMetrics {
            rows_written: employees.len() as u64,
            total_duration: start_time.elapsed(),
            file_size_bytes,
        })
    }
}

impl Default for JsonlExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use staff_core::Gender;
    use tempfile::TempDir;

    fn test_employees() -> Vec<Employee> {
        vec![
            Employee {
                gender: Gender::Female,
                birthdate: Utc.with_ymd_and_hms(1991, 7, 23, 0, 0, 0).unwrap(),
                name: "Renata".to_string(),
                surname: "Flores".to_string(),
                workload: 30,
            },
            Employee {
                gender: Gender::Male,
                birthdate: Utc.with_ymd_and_hms(1987, 2, 5, 0, 0, 0).unwrap(),
                name: "Esteban".to_string(),
                surname: "Salinas".to_string(),
                workload: 10,
            },
        ]
    }

    #[test]
    fn test_export_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("population.jsonl");
        let employees = test_employees();

        let metrics = JsonlExporter::new()
            .export(&employees, &output_path)
            .unwrap();

        assert_eq!(metrics.rows_written, 2);
        assert!(metrics.file_size_bytes > 0);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        for (line, expected) in lines.iter().zip(&employees) {
            let parsed: Employee = serde_json::from_str(line).unwrap();
            assert_eq!(&parsed, expected);
        }
    }

    #[test]
    fn test_export_empty_population() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("empty.jsonl");

        let metrics = JsonlExporter::new().export(&[], &output_path).unwrap();

        assert_eq!(metrics.rows_written, 0);
        assert_eq!(metrics.file_size_bytes, 0);
    }

    #[test]
    fn test_custom_buffer_size() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("small_buffer.jsonl");

        let metrics = JsonlExporter::new()
            .with_buffer_size(16)
            .export(&test_employees(), &output_path)
            .unwrap();

        assert_eq!(metrics.rows_written, 2);
    }
}
