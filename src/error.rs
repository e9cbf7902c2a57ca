//! Error types for simulation runs.
//!
//! Every failure reaches the caller as a typed [`SimulationError`]; a run
//! either fully succeeds or fully fails, and nothing is retried since
//! simulation is deterministic.

use std::fmt;

use crate::validation::ValidationError;

/// Errors reported by the simulation orchestrator and schedulers.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Unrecognized algorithm name.
    InvalidAlgorithm(String),
    /// A parameter required by the selected algorithm is absent or
    /// out of range (priority list, quantum).
    MissingParameter {
        /// Algorithm that requires the parameter.
        algorithm: &'static str,
        /// Parameter name.
        parameter: &'static str,
    },
    /// Input violates registry preconditions.
    MalformedInput(Vec<ValidationError>),
    /// Unexpected computational failure (e.g., time overflow).
    InternalFault(String),
}

impl SimulationError {
    /// Whether the error was caused by caller input rather than the engine.
    ///
    /// Transport wrappers map input errors to a client-side status
    /// (e.g., HTTP 400) and internal faults to a server-side one.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SimulationError::InternalFault(_))
    }

    pub(crate) fn overflow(context: &str) -> Self {
        SimulationError::InternalFault(format!("time overflow while {context}"))
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidAlgorithm(name) => {
                write!(f, "Invalid algorithm specified: '{name}'")
            }
            SimulationError::MissingParameter {
                algorithm,
                parameter,
            } => write!(f, "Parameter '{parameter}' is required for {algorithm}"),
            SimulationError::MalformedInput(errors) => {
                f.write_str("Malformed input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            SimulationError::InternalFault(msg) => write!(f, "Simulation error: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::MalformedInput(errors)
    }
}
