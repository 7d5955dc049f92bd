//! Core domain logic for plugreq
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Rule, Classification, Outcome, `PluginRequest`)
//! - `catalog/` - Rule table builders over the static catalogs
//! - `services/` - Classification and the two submission flows
//! - `ports/` - Trait definitions for external dependencies

pub mod catalog;
pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::SubmissionError;
