//! Timeline (Gantt sequence) model.
//!
//! A timeline is the ordered list of execution segments produced by a
//! scheduler, together with the idle time the CPU accumulated while no
//! process was eligible to run.
//!
//! # Invariants
//! - Segments are ordered by `start` ascending.
//! - Segments never overlap (single execution unit).
//! - `duration == end - start > 0` for every segment.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Pid;

/// A contiguous interval during which one process occupies the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process occupying the CPU.
    pub pid: Pid,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
    /// `end - start`.
    pub duration: i64,
}

impl ExecutionSegment {
    /// Creates a segment covering `[start, end)`.
    pub fn new(pid: Pid, start: i64, end: i64) -> Self {
        Self {
            pid,
            start,
            end,
            duration: end.saturating_sub(start),
        }
    }
}

/// Dispatch extent of one process: first start and chronologically last
/// segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpan {
    /// Earliest segment start.
    pub first_start: i64,
    /// Start of the last segment, ordered by (start, end).
    pub last_start: i64,
    /// End of the last segment.
    pub completion: i64,
}

impl ProcessSpan {
    fn of(segment: &ExecutionSegment) -> Self {
        Self {
            first_start: segment.start,
            last_start: segment.start,
            completion: segment.end,
        }
    }

    fn include(&mut self, segment: &ExecutionSegment) {
        self.first_start = self.first_start.min(segment.start);
        if (segment.start, segment.end) > (self.last_start, self.completion) {
            self.last_start = segment.start;
            self.completion = segment.end;
        }
    }
}

/// Groups `segments` (any order) into one span per process.
pub fn process_spans(segments: &[ExecutionSegment]) -> HashMap<&Pid, ProcessSpan> {
    let mut spans: HashMap<&Pid, ProcessSpan> = HashMap::new();
    for s in segments {
        spans
            .entry(&s.pid)
            .and_modify(|span| span.include(s))
            .or_insert_with(|| ProcessSpan::of(s));
    }
    spans
}

/// Output of a single scheduler invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Execution segments in chronological order.
    pub segments: Vec<ExecutionSegment>,
    /// Total time the CPU spent with no eligible process.
    pub idle_time: i64,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: ExecutionSegment) {
        log::trace!(
            "segment pid={} [{}, {})",
            segment.pid,
            segment.start,
            segment.end
        );
        self.segments.push(segment);
    }

    /// Records an idle gap.
    pub fn add_idle(&mut self, gap: i64) {
        if gap > 0 {
            self.idle_time += gap;
        }
    }

    /// Latest end time across all segments (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        busy_time(&self.segments)
    }

    /// Returns all segments of a process, in timeline order.
    pub fn segments_for(&self, pid: &Pid) -> Vec<&ExecutionSegment> {
        self.segments.iter().filter(|s| &s.pid == pid).collect()
    }

    /// Dispatch extent of a process, `None` if it never ran.
    pub fn span_of(&self, pid: &Pid) -> Option<ProcessSpan> {
        self.segments_for(pid)
            .into_iter()
            .fold(None, |acc: Option<ProcessSpan>, s| match acc {
                Some(mut span) => {
                    span.include(s);
                    Some(span)
                }
                None => Some(ProcessSpan::of(s)),
            })
    }

    /// Time at which a process first received the CPU.
    pub fn first_start(&self, pid: &Pid) -> Option<i64> {
        self.span_of(pid).map(|span| span.first_start)
    }

    /// End of the chronologically last segment of a process.
    pub fn completion_time(&self, pid: &Pid) -> Option<i64> {
        self.span_of(pid).map(|span| span.completion)
    }

    /// Total CPU time granted to a process across all its segments.
    pub fn executed_time(&self, pid: &Pid) -> i64 {
        self.segments_for(pid)
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.duration))
    }

    /// Whether segments are sorted by start and pairwise disjoint.
    pub fn is_non_overlapping(&self) -> bool {
        self.segments.windows(2).all(|w| w[0].end <= w[1].start)
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Consumes the timeline and returns its segments.
    pub fn into_segments(self) -> Vec<ExecutionSegment> {
        self.segments
    }
}

/// Sum of segment durations, saturating at `i64::MAX`.
pub fn busy_time(segments: &[ExecutionSegment]) -> i64 {
    segments
        .iter()
        .fold(0i64, |acc, s| acc.saturating_add(s.duration))
}
