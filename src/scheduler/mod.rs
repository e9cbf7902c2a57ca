//! Scheduling engine and metrics.
//!
//! Four single-core disciplines share the [`Scheduler`] contract:
//!
//! | Scheduler | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | [`Fcfs`] | no | arrival order |
//! | [`Sjf`] | no | shortest burst |
//! | [`PriorityScheduler`] | no | lowest priority value |
//! | [`RoundRobin`] | yes | FIFO queue, fixed quantum |
//!
//! Ties are broken by arrival, then identifier, so every run is
//! deterministic. [`Metrics`] turns a timeline into per-process figures.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
mod metrics;
mod non_preemptive;
mod round_robin;
mod state;

pub use fcfs::Fcfs;
pub use metrics::Metrics;
pub use non_preemptive::{NonPreemptive, PriorityScheduler, Sjf};
pub use round_robin::RoundRobin;

use crate::error::SimulationError;
use crate::models::{Process, Timeline};
use std::fmt::Debug;

/// A single-core scheduling discipline.
///
/// Implementations copy `processes` into private state and never mutate
/// the caller's slice. Invocations share no state, so independent runs
/// may proceed concurrently.
pub trait Scheduler: Send + Sync + Debug {
    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Produces the execution timeline for `processes`.
    ///
    /// Segments are chronological and never overlap. `idle_time` counts
    /// every gap during which no process was eligible to run.
    fn schedule(&self, processes: &[Process]) -> Result<Timeline, SimulationError>;
}
