//! Dispatching rules for non-preemptive selection.
//!
//! A dispatching rule scores a ready process; the process with the
//! lowest score runs next. Ties are always broken by earliest arrival,
//! then by identifier, so every selection is reproducible.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_best};
//! use u_cpusched::models::Process;
//!
//! let ready = vec![Process::new("P1", 0, 6), Process::new("P2", 0, 2)];
//! let best = select_best(&rules::ShortestBurst, &ready).unwrap();
//! assert_eq!(best, Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use crate::error::SimulationError;
use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates process urgency.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process. Returns `None` when the process lacks the
    /// attribute this rule needs.
    fn evaluate(&self, process: &Process) -> Option<RuleScore>;

    /// Input attribute the rule reads, reported when `evaluate` fails.
    fn required_parameter(&self) -> &'static str;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Selects the candidate with the lowest `(score, arrival, pid)`.
///
/// Returns the position of the winner within `candidates`, `Ok(None)` if
/// there are no candidates, and [`SimulationError::MissingParameter`] if
/// the rule cannot score one.
pub fn select_best<'a, R, I>(rule: &R, candidates: I) -> Result<Option<usize>, SimulationError>
where
    R: DispatchingRule + ?Sized,
    I: IntoIterator<Item = &'a Process>,
{
    let mut best: Option<(RuleScore, &'a Process, usize)> = None;

    for (pos, p) in candidates.into_iter().enumerate() {
        let score = rule
            .evaluate(p)
            .ok_or(SimulationError::MissingParameter {
                algorithm: rule.description(),
                parameter: rule.required_parameter(),
            })?;

        let better = match best {
            None => true,
            Some((best_score, bp, _)) => {
                (score, p.arrival, &p.pid) < (best_score, bp.arrival, &bp.pid)
            }
        };
        if better {
            best = Some((score, p, pos));
        }
    }

    Ok(best.map(|(_, _, pos)| pos))
}
