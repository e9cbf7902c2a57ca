//! Single-core CPU scheduling simulator.
//!
//! Simulates CPU-bound processes with known arrival and burst times under
//! four classic disciplines and derives per-process performance metrics
//! plus a Gantt-style execution timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Pid`, `Process`, `ExecutionSegment`, `Timeline`
//! - **`dispatching`**: Selection rules for non-preemptive scheduling (SJF, Priority)
//! - **`scheduler`**: `Fcfs`, `Sjf`, `PriorityScheduler`, `RoundRobin`, and `Metrics`
//! - **`simulation`**: Request/result types and the `simulate` / `compare` entry points
//! - **`validation`**: Registry integrity checks (alignment, ranges, duplicate IDs)
//! - **`workload`**: Seeded random workload generation
//!
//! # Architecture
//!
//! The crate is purely computational: no I/O, no global state. Transport
//! layers (HTTP, CLI) deserialize a `SimulationRequest`, call `simulate`,
//! and map `SimulationError::is_input_error` to their own status codes.
//! Logging goes through the `log` facade; installing a logger is up to
//! the host application.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use simulation::{compare, simulate, Algorithm, SimulationRequest, SimulationResult};
