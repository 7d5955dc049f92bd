//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the classification core and
//! external systems (issue tracker, CI pipeline, builder service).
//!
//! Implementations live in the `adapters` module.

mod build_service;
mod issue_tracker;
mod marker_writer;

pub use build_service::BuildService;
pub use issue_tracker::{IssueState, IssueTracker, IssueUpdate};
pub use marker_writer::MarkerWriter;
