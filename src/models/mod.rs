//! CPU scheduling domain models.
//!
//! Provides the input registry type (`Process`) and the engine output
//! types (`ExecutionSegment`, `Timeline`, `ProcessSpan`).
//!
//! # Terminology
//!
//! | u-cpusched | Textbook |
//! |------------|----------|
//! | Process | Job / PCB |
//! | ExecutionSegment | Gantt bar |
//! | Timeline | Gantt chart |

mod process;
mod timeline;

pub use process::{Pid, Process};
pub use timeline::{busy_time, process_spans, ExecutionSegment, ProcessSpan, Timeline};
