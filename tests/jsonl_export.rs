//! JSONL export integration test.
//!
//! Demonstrates the generate -> export -> reload workflow: a population
//! written to JSONL deserializes back to the exact records that were
//! generated, and the reloaded population summarizes identically.

use chrono::Utc;
use staff_core::{AgeRange, Employee};
use staff_generator::EmployeeGenerator;
use staff_jsonl::JsonlExporter;
use staff_stats::summarize_at;
use tempfile::TempDir;

const SEED: u64 = 42;
const COUNT: u64 = 50;

#[test]
fn test_population_jsonl_round_trip() {
    let mut generator = EmployeeGenerator::new(SEED);
    let employees = generator
        .generate(COUNT, &AgeRange { min: 19.0, max: 65.0 })
        .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("population.jsonl");

    let metrics = JsonlExporter::new()
        .export(&employees, &output_path)
        .unwrap();
    assert_eq!(metrics.rows_written, COUNT);

    let content = std::fs::read_to_string(&output_path).unwrap();
    let reloaded: Vec<Employee> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(reloaded, employees);

    // The reloaded population carries enough to reproduce the summary.
    let now = Utc::now();
    let original_summary = summarize_at(&employees, now).unwrap();
    let reloaded_summary = summarize_at(&reloaded, now).unwrap();
    assert_eq!(original_summary, reloaded_summary);
}
