//! Simulation orchestrator.
//!
//! Dispatches a request to the matching scheduler, checks the
//! algorithm-specific parameters, validates the registry, and combines
//! the timeline with its metrics.
//!
//! # Pipeline
//!
//! 1. Parse the algorithm name (`InvalidAlgorithm`).
//! 2. Check required parameters: `priority` for priority scheduling,
//!    a positive `quantum` for round robin (`MissingParameter`).
//! 3. Build and validate the registry (`MalformedInput`). Parameters the
//!    algorithm does not use are ignored.
//! 4. Run the scheduler; it works on its own copy of the registry.
//! 5. Compute metrics against the original, input-ordered registry.
//!
//! A run either fully succeeds or fully fails.
//!
//! # Example
//!
//! ```
//! use u_cpusched::simulation::{simulate, SimulationRequest};
//!
//! let request = SimulationRequest::new("rr")
//!     .with_process("P1", 0, 4)
//!     .with_process("P2", 1, 2)
//!     .with_quantum(2);
//!
//! let result = simulate(&request).unwrap();
//! assert_eq!(result.metrics.completion_time, vec![6, 4]);
//! assert_eq!(result.metrics.waiting_time, vec![2, 1]);
//! assert_eq!(result.idle_time, Some(0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;
use crate::models::{ExecutionSegment, Pid, Process};
use crate::scheduler::{Fcfs, Metrics, NonPreemptive, RoundRobin, Scheduler};
use crate::validation::{validate_alignment, validate_processes};

/// Supported scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "sjf")]
    Sjf,
    /// Static priority, non-preemptive.
    #[serde(rename = "priority")]
    Priority,
    /// Round Robin, preemptive.
    #[serde(rename = "rr")]
    RoundRobin,
}

impl Algorithm {
    /// Dispatch-table order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "rr",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| SimulationError::InvalidAlgorithm(s.to_string()))
    }
}

/// Simulation input, as received from a transport collaborator.
///
/// Process data arrives as parallel, index-aligned columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Algorithm name: `fcfs`, `sjf`, `priority`, or `rr`.
    pub algorithm: String,
    /// Process identifiers.
    pub pids: Vec<Pid>,
    /// Arrival times.
    pub arrival: Vec<i64>,
    /// Burst lengths.
    pub burst: Vec<i64>,
    /// Priorities (required for `priority`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Vec<i32>>,
    /// Time quantum (required for `rr`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates an empty request for the named algorithm.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Default::default()
        }
    }

    /// Creates a request from an existing registry.
    ///
    /// Priorities are carried over only if every process has one.
    pub fn from_processes(algorithm: impl Into<String>, processes: &[Process]) -> Self {
        let priority: Option<Vec<i32>> = processes.iter().map(|p| p.priority).collect();
        Self {
            algorithm: algorithm.into(),
            pids: processes.iter().map(|p| p.pid.clone()).collect(),
            arrival: processes.iter().map(|p| p.arrival).collect(),
            burst: processes.iter().map(|p| p.burst).collect(),
            priority: priority.filter(|v| !v.is_empty()),
            quantum: None,
        }
    }

    /// Appends one process.
    pub fn with_process(mut self, pid: impl Into<Pid>, arrival: i64, burst: i64) -> Self {
        self.pids.push(pid.into());
        self.arrival.push(arrival);
        self.burst.push(burst);
        self
    }

    /// Sets the priority column.
    pub fn with_priorities(mut self, priorities: Vec<i32>) -> Self {
        self.priority = Some(priorities);
        self
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Builds the validated, input-ordered process registry for `algorithm`.
    ///
    /// Parameters are validated only where the algorithm reads them: the
    /// priority column is aligned and attached for priority scheduling and
    /// ignored otherwise, just as `quantum` is ignored outside round robin.
    pub fn registry(&self, algorithm: Algorithm) -> Result<Vec<Process>, SimulationError> {
        let priority = match algorithm {
            Algorithm::Priority => self.priority.as_ref(),
            _ => None,
        };

        let mut columns = vec![
            ("pids", self.pids.len()),
            ("arrival", self.arrival.len()),
            ("burst", self.burst.len()),
        ];
        if let Some(priority) = priority {
            columns.push(("priority", priority.len()));
        }

        let mut errors = validate_alignment(&columns).err().unwrap_or_default();

        let processes: Vec<Process> = self
            .pids
            .iter()
            .zip(&self.arrival)
            .zip(&self.burst)
            .enumerate()
            .map(|(i, ((pid, &arrival), &burst))| {
                let process = Process::new(pid.clone(), arrival, burst);
                match priority.and_then(|p| p.get(i)) {
                    Some(&priority) => process.with_priority(priority),
                    None => process,
                }
            })
            .collect();

        if let Err(mut process_errors) = validate_processes(&processes) {
            errors.append(&mut process_errors);
        }

        if errors.is_empty() {
            Ok(processes)
        } else {
            Err(SimulationError::MalformedInput(errors))
        }
    }

    fn scheduler_for(&self, algorithm: Algorithm) -> Result<Box<dyn Scheduler>, SimulationError> {
        match algorithm {
            Algorithm::Fcfs => Ok(Box::new(Fcfs::new())),
            Algorithm::Sjf => Ok(Box::new(NonPreemptive::sjf())),
            Algorithm::Priority => {
                if self.priority.is_none() {
                    return Err(SimulationError::MissingParameter {
                        algorithm: "Priority Scheduling",
                        parameter: "priority",
                    });
                }
                Ok(Box::new(NonPreemptive::priority()))
            }
            Algorithm::RoundRobin => match self.quantum {
                Some(q) if q > 0 => Ok(Box::new(RoundRobin::new(q))),
                _ => Err(SimulationError::MissingParameter {
                    algorithm: "Round Robin",
                    parameter: "quantum",
                }),
            },
        }
    }
}

/// Outcome of a successful simulation run.
///
/// Serializes with an extra `gantt` key that repeats `execution_order`,
/// for clients that render the chart from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireResult")]
pub struct SimulationResult {
    /// Input processes, in input order.
    pub processes: Vec<Process>,
    /// Gantt sequence, in chronological order.
    pub execution_order: Vec<ExecutionSegment>,
    /// Per-process and aggregate metrics, aligned with `processes`.
    #[serde(flatten)]
    pub metrics: Metrics,
    /// CPU idle time. Reported for round robin only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_time: Option<i64>,
}

#[derive(Serialize)]
struct WireResult {
    processes: Vec<Process>,
    execution_order: Vec<ExecutionSegment>,
    gantt: Vec<ExecutionSegment>,
    #[serde(flatten)]
    metrics: Metrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    idle_time: Option<i64>,
}

impl From<SimulationResult> for WireResult {
    fn from(result: SimulationResult) -> Self {
        Self {
            processes: result.processes,
            gantt: result.execution_order.clone(),
            execution_order: result.execution_order,
            metrics: result.metrics,
            idle_time: result.idle_time,
        }
    }
}

/// Runs the algorithm named in `request`.
///
/// # Errors
/// - [`SimulationError::InvalidAlgorithm`] for an unknown algorithm name
/// - [`SimulationError::MissingParameter`] for an absent priority column
///   or an absent/non-positive quantum
/// - [`SimulationError::MalformedInput`] for registry violations
/// - [`SimulationError::InternalFault`] for computational failures
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    let algorithm: Algorithm = request.algorithm.parse().map_err(report)?;
    run(algorithm, request).map_err(report)
}

/// Runs every algorithm whose parameters are present in `request`.
///
/// FCFS and SJF always run; priority scheduling runs when a priority
/// column is supplied, round robin when a quantum is. The request's own
/// `algorithm` field is ignored. Results follow [`Algorithm::ALL`] order.
pub fn compare(
    request: &SimulationRequest,
) -> Result<Vec<(Algorithm, SimulationResult)>, SimulationError> {
    Algorithm::ALL
        .into_iter()
        .filter(|a| match a {
            Algorithm::Priority => request.priority.is_some(),
            Algorithm::RoundRobin => request.quantum.is_some(),
            _ => true,
        })
        .map(|a| run(a, request).map(|r| (a, r)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(report)
}

fn run(
    algorithm: Algorithm,
    request: &SimulationRequest,
) -> Result<SimulationResult, SimulationError> {
    let scheduler = request.scheduler_for(algorithm)?;
    let processes = request.registry(algorithm)?;

    log::debug!(
        "simulating {} processes with {}",
        processes.len(),
        scheduler.name()
    );

    let timeline = scheduler.schedule(&processes)?;
    let metrics = Metrics::calculate(&processes, &timeline.segments);

    log::debug!(
        "{} finished: total_time={} idle_time={} avg_waiting={:.2}",
        algorithm,
        metrics.total_time,
        timeline.idle_time,
        metrics.avg_waiting_time
    );

    let idle_time = match algorithm {
        Algorithm::RoundRobin => Some(timeline.idle_time),
        _ => None,
    };

    Ok(SimulationResult {
        processes,
        execution_order: timeline.into_segments(),
        metrics,
        idle_time,
    })
}

fn report(error: SimulationError) -> SimulationError {
    if error.is_input_error() {
        log::warn!("simulation rejected: {error}");
    } else {
        log::error!("simulation failed: {error}");
    }
    error
}
