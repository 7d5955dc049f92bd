//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Marker files for CI pipelines
//! - `github/` - GitHub REST issue tracker (feature `remote`)
//! - `builder/` - HTTP plugin builder (feature `remote`)

pub mod file;

#[cfg(feature = "remote")]
pub mod builder;
#[cfg(feature = "remote")]
pub mod github;

pub use file::FileMarkerWriter;

#[cfg(feature = "remote")]
pub use builder::HttpBuildService;
#[cfg(feature = "remote")]
pub use github::GitHubIssues;
