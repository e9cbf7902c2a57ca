//! Random workload generation.
//!
//! Produces process sets for demos, comparisons, and property checks.
//! Generation is driven by a caller-supplied RNG, so a seeded RNG always
//! yields the same workload.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_cpusched::workload::{generate, WorkloadConfig};
//!
//! let config = WorkloadConfig::default().with_count(4);
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = generate(&config, &mut rng);
//! assert_eq!(processes.len(), 4);
//! assert_eq!(processes[0].pid.to_string(), "P1");
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn uniformly from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Smallest burst (clamped to at least 1).
    pub min_burst: i64,
    /// Largest burst.
    pub max_burst: i64,
    /// Priorities are drawn from `1..=levels`. `None` = no priorities.
    pub priority_levels: Option<i32>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            priority_levels: Some(5),
        }
    }
}

impl WorkloadConfig {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the number of priority levels.
    pub fn with_priority_levels(mut self, levels: i32) -> Self {
        self.priority_levels = Some(levels);
        self
    }

    /// Disables priority generation.
    pub fn without_priorities(mut self) -> Self {
        self.priority_levels = None;
        self
    }
}

/// Generates a workload named `P1..Pn`, in identifier order.
///
/// Out-of-range settings are clamped so the result always passes
/// registry validation: arrivals >= 0, bursts >= 1, priorities >= 1.
pub fn generate<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<Process> {
    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);

    (1..=config.count)
        .map(|i| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = rng.random_range(min_burst..=max_burst);
            let process = Process::new(format!("P{i}"), arrival, burst);
            match config.priority_levels {
                Some(levels) => process.with_priority(rng.random_range(1..=levels.max(1))),
                None => process,
            }
        })
        .collect()
}
