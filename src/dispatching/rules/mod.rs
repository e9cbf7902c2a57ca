//! Built-in dispatching rules.
//!
//! - **SJF**: shortest burst first
//! - **PRIORITY**: lowest priority value first
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Shortest Job First.
///
/// Minimizes average waiting time among non-preemptive policies when
/// all jobs are available at once.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> Option<RuleScore> {
        Some(process.burst)
    }

    fn required_parameter(&self) -> &'static str {
        "burst"
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Static priority.
///
/// Lower numeric value = higher priority. Processes without a priority
/// cannot be scored.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> Option<RuleScore> {
        process.priority.map(RuleScore::from)
    }

    fn required_parameter(&self) -> &'static str {
        "priority"
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling"
    }
}
