//! Per-process performance metrics.
//!
//! Derives metrics from the original registry (input order) and the
//! execution segments produced by a scheduler.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last segment |
//! | Turnaround | completion - arrival |
//! | Waiting | max(0, turnaround - burst) |
//! | Response | max(0, first start - arrival) |
//! | Total Time | Latest segment end |
//! | CPU Utilization | busy time / total time |
//!
//! Arrays are aligned index-for-index with the input processes, never
//! with execution order.

use serde::{Deserialize, Serialize};

use crate::models::{busy_time, process_spans, ExecutionSegment, Process};

/// Simulation performance indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Per-process waiting time.
    pub waiting_time: Vec<i64>,
    /// Per-process turnaround time.
    pub turnaround_time: Vec<i64>,
    /// Per-process completion time.
    pub completion_time: Vec<i64>,
    /// Per-process response time (first dispatch - arrival).
    pub response_time: Vec<i64>,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Latest segment end (0 if nothing ran).
    pub total_time: i64,
    /// Fraction of `[0, total_time)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl Metrics {
    /// Computes metrics for `processes` (input order) from `segments`
    /// (any order).
    ///
    /// A process without segments gets completion 0. Segments that are
    /// inconsistent with the registry never cause a panic; time arithmetic
    /// saturates and the affected values are simply meaningless.
    pub fn calculate(processes: &[Process], segments: &[ExecutionSegment]) -> Self {
        if processes.is_empty() {
            return Self::default();
        }

        let spans = process_spans(segments);

        let n = processes.len();
        let mut waiting_time = Vec::with_capacity(n);
        let mut turnaround_time = Vec::with_capacity(n);
        let mut completion_time = Vec::with_capacity(n);
        let mut response_time = Vec::with_capacity(n);

        for p in processes {
            let span = spans.get(&p.pid);
            let completion = span.map(|s| s.completion).unwrap_or(0);
            let turnaround = completion.saturating_sub(p.arrival);
            let mut waiting = turnaround.saturating_sub(p.burst);
            if waiting < 0 {
                log::warn!(
                    "process '{}': negative waiting time {waiting} clamped to 0",
                    p.pid
                );
                waiting = 0;
            }
            let response = span
                .map(|s| s.first_start.saturating_sub(p.arrival).max(0))
                .unwrap_or(0);

            completion_time.push(completion);
            turnaround_time.push(turnaround);
            waiting_time.push(waiting);
            response_time.push(response);
        }

        let total_time = segments.iter().map(|s| s.end).max().unwrap_or(0);
        let busy = busy_time(segments);
        let cpu_utilization = if total_time <= 0 {
            0.0
        } else {
            busy as f64 / total_time as f64
        };

        Self {
            avg_waiting_time: mean(&waiting_time),
            avg_turnaround_time: mean(&turnaround_time),
            avg_response_time: mean(&response_time),
            waiting_time,
            turnaround_time,
            completion_time,
            response_time,
            total_time,
            cpu_utilization,
        }
    }

    /// Number of processes covered.
    pub fn len(&self) -> usize {
        self.completion_time.len()
    }

    /// Whether no processes are covered.
    pub fn is_empty(&self) -> bool {
        self.completion_time.is_empty()
    }
}

fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pid;

    fn seg(pid: &str, start: i64, end: i64) -> ExecutionSegment {
        ExecutionSegment::new(Pid::from(pid), start, end)
    }

    #[test]
    fn test_metrics_fcfs_example() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let segments = vec![seg("P1", 0, 5), seg("P2", 5, 8)];

        let m = Metrics::calculate(&processes, &segments);
        assert_eq!(m.completion_time, vec![5, 8]);
        assert_eq!(m.turnaround_time, vec![5, 7]);
        assert_eq!(m.waiting_time, vec![0, 4]);
        assert_eq!(m.response_time, vec![0, 4]);
        assert_eq!(m.total_time, 8);
        assert!((m.avg_waiting_time - 2.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 6.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_last_segment_wins() {
        let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 2)];
        // Segments deliberately out of order.
        let segments = vec![seg("P1", 4, 6), seg("P2", 2, 4), seg("P1", 0, 2)];

        let m = Metrics::calculate(&processes, &segments);
        assert_eq!(m.completion_time, vec![6, 4]);
        assert_eq!(m.waiting_time, vec![2, 1]);
        assert_eq!(m.response_time, vec![0, 1]);
    }

    #[test]
    fn test_metrics_aligned_to_input_order() {
        let processes = vec![Process::new("late", 5, 1), Process::new("early", 0, 2)];
        let segments = vec![seg("early", 0, 2), seg("late", 5, 6)];

        let m = Metrics::calculate(&processes, &segments);
        assert_eq!(m.completion_time, vec![6, 2]);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10); // 3 busy / 6
    }

    #[test]
    fn test_metrics_waiting_clamped() {
        // Inconsistent: segment shorter than the burst.
        let processes = vec![Process::new("P1", 0, 10)];
        let segments = vec![seg("P1", 0, 4)];

        let m = Metrics::calculate(&processes, &segments);
        assert_eq!(m.turnaround_time, vec![4]);
        assert_eq!(m.waiting_time, vec![0]);
    }

    #[test]
    fn test_metrics_missing_segments() {
        let processes = vec![Process::new("P1", 0, 3)];
        let m = Metrics::calculate(&processes, &[]);
        assert_eq!(m.completion_time, vec![0]);
        assert_eq!(m.response_time, vec![0]);
        assert_eq!(m.total_time, 0);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = Metrics::calculate(&[], &[]);
        assert!(m.is_empty());
        assert!(m.waiting_time.is_empty());
        assert_eq!(m.total_time, 0);
        assert!((m.avg_waiting_time - 0.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_malformed_segments_do_not_panic() {
        let wide = ExecutionSegment {
            pid: Pid::from("P1"),
            start: 0,
            end: i64::MAX,
            duration: i64::MAX,
        };
        let m = Metrics::calculate(&[Process::new("P1", 0, 1)], &[wide.clone(), wide]);
        assert_eq!(m.total_time, i64::MAX);
        assert_eq!(m.completion_time, vec![i64::MAX]);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);

        // Unvalidated arrival far below any segment.
        let m = Metrics::calculate(&[Process::new("P1", i64::MIN, 1)], &[seg("P1", 0, 1)]);
        assert_eq!(m.turnaround_time, vec![i64::MAX]);
        assert_eq!(m.response_time, vec![i64::MAX]);

        // Arrival far above completion: waiting clamps to 0.
        let m = Metrics::calculate(&[Process::new("P1", i64::MAX, i64::MAX)], &[seg("P1", 0, 1)]);
        assert_eq!(m.waiting_time, vec![0]);
        assert_eq!(m.response_time, vec![0]);
    }
}
