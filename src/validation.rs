//! Input validation for simulation runs.
//!
//! Checks structural integrity of the process registry before any
//! scheduling work begins. Detects:
//! - Misaligned parallel input columns
//! - Negative arrival times
//! - Non-positive burst lengths
//! - Duplicate process identifiers
//!
//! All issues are collected so the caller sees every problem at once.

use crate::models::{Pid, Process};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Parallel input columns have different lengths.
    LengthMismatch,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or negative time).
    NonPositiveBurst,
    /// Two processes share the same identifier.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates that parallel input columns are index-aligned.
///
/// The first column is the reference; every other column must have
/// the same length.
///
/// # Example
/// ```
/// use u_cpusched::validation::validate_alignment;
///
/// assert!(validate_alignment(&[("pids", 3), ("arrival", 3), ("burst", 3)]).is_ok());
/// assert!(validate_alignment(&[("pids", 3), ("burst", 2)]).is_err());
/// ```
pub fn validate_alignment(columns: &[(&str, usize)]) -> ValidationResult {
    let Some(&(ref_name, ref_len)) = columns.first() else {
        return Ok(());
    };

    let errors: Vec<ValidationError> = columns[1..]
        .iter()
        .filter(|(_, len)| *len != ref_len)
        .map(|(name, len)| {
            ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!("'{name}' has {len} entries but '{ref_name}' has {ref_len}"),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the process registry.
///
/// Checks:
/// 1. Every arrival time is >= 0
/// 2. Every burst is > 0
/// 3. No duplicate process identifiers
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<&Pid> = HashSet::new();

    for p in processes {
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.pid, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.pid, p.burst),
            ));
        }

        if !seen.insert(&p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_processes(&[]).is_ok());
        assert!(validate_alignment(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 2, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_numeric_and_named_ids_are_distinct() {
        let processes = vec![Process::new(1, 0, 5), Process::new("1", 0, 5)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("P1", -1, 5)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_length_mismatch() {
        let errors =
            validate_alignment(&[("pids", 3), ("arrival", 2), ("burst", 3), ("priority", 1)])
                .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::LengthMismatch));
        assert!(errors[0].message.contains("arrival"));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new("P1", -3, 0), Process::new("P1", 0, 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
