//! Population summary computation.

use crate::error::StatsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use staff_core::{age_in_years, Employee, Gender};

/// Statistics derived from one employee population.
///
/// Field names serialize in the external camelCase contract
/// (`averageAge`, `sortedByWorkload`, ...).
///
/// The four tier counters only count workloads in {10, 20, 30, 40}; an
/// out-of-tier workload is excluded from all four counters but still
/// contributes to `total`, the age statistics and `median_workload`, so the
/// counters need not sum to `total` for hand-built populations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    /// Number of employees in the input
    pub total: u64,
    /// Employees at 10% workload
    pub workload10: u64,
    /// Employees at 20% workload
    pub workload20: u64,
    /// Employees at 30% workload
    pub workload30: u64,
    /// Employees at 40% workload
    pub workload40: u64,
    /// Mean continuous age, rounded to 1 decimal place
    pub average_age: f64,
    /// Youngest age, rounded to the nearest integer
    pub min_age: i64,
    /// Oldest age, rounded to the nearest integer
    pub max_age: i64,
    /// Median age, rounded to the nearest integer
    pub median_age: i64,
    /// Median workload, rounded to the nearest integer
    pub median_workload: u32,
    /// Mean workload among female employees, rounded to 1 decimal place;
    /// exactly 0 when the population has no female employees
    pub average_women_workload: f64,
    /// The input ordered ascending by workload (stable sort)
    pub sorted_by_workload: Vec<Employee>,
}

/// Summarize a population against the current wall clock.
///
/// The input is never mutated; `sorted_by_workload` is built from a copy.
pub fn summarize(employees: &[Employee]) -> Result<StatisticsSummary, StatsError> {
    summarize_at(employees, Utc::now())
}

/// Summarize a population with ages evaluated at `now`.
///
/// Pure function of `(employees, now)`; callers that need reproducible
/// output pin `now` the same way they pin the generator seed.
pub fn summarize_at(
    employees: &[Employee],
    now: DateTime<Utc>,
) -> Result<StatisticsSummary, StatsError> {
    if employees.is_empty() {
        return Err(StatsError::EmptyPopulation);
    }

    let total = employees.len() as u64;

    let mut workload10 = 0u64;
    let mut workload20 = 0u64;
    let mut workload30 = 0u64;
    let mut workload40 = 0u64;

    let mut ages = Vec::with_capacity(employees.len());
    let mut workloads = Vec::with_capacity(employees.len());

    let mut women_count = 0u64;
    let mut women_workload_sum = 0u64;

    for emp in employees {
        match emp.workload {
            10 => workload10 += 1,
            20 => workload20 += 1,
            30 => workload30 += 1,
            40 => workload40 += 1,
            // Out-of-tier workloads stay in total, ages and the median.
            _ => {}
        }

        workloads.push(emp.workload);
        ages.push(age_in_years(emp.birthdate, now));

        if emp.gender == Gender::Female {
            women_count += 1;
            women_workload_sum += u64::from(emp.workload);
        }
    }

    let average_age = round_to_1(ages.iter().sum::<f64>() / total as f64);
    let min_age = ages.iter().copied().fold(f64::INFINITY, f64::min).round() as i64;
    let max_age = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max).round() as i64;
    let median_age = median_f64(&ages).round() as i64;

    let median_workload = median_u32(&workloads).round() as u32;

    let average_women_workload = if women_count == 0 {
        0.0
    } else {
        round_to_1(women_workload_sum as f64 / women_count as f64)
    };

    let mut sorted_by_workload = employees.to_vec();
    sorted_by_workload.sort_by_key(|e| e.workload);

    Ok(StatisticsSummary {
        total,
        workload10,
        workload20,
        workload30,
        workload40,
        average_age,
        min_age,
        max_age,
        median_age,
        median_workload,
        average_women_workload,
        sorted_by_workload,
    })
}

/// Round to 1 decimal place, half away from zero on the scaled value.
fn round_to_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Median of unsorted values; even counts average the two middle values.
fn median_f64(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Median of unsorted workloads; even counts average the two middle values.
fn median_u32(values: &[u32]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        f64::from(sorted[mid])
    } else {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    }
}
