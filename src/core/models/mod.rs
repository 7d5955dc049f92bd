//! Domain models for plugreq
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Rule`] / [`RuleSet`] - Ordered line-matching rules
//! - [`Classification`] - Kept and useless lines of a submission
//! - [`Outcome`] - Invalid, edited, or accepted
//! - [`Marker`] - Signal for the surrounding pipeline
//! - [`PluginRequest`] - What a user asks the builder for

mod classification;
mod marker;
mod request;
mod rule;

pub use classification::{Classification, LineSeparator, Outcome};
pub use marker::Marker;
pub use request::{BuildRequest, PluginRequest, RequestKind, TEXT_PLAIN};
pub use rule::{Extraction, Extractor, Flavor, Rule, RuleMatch, RuleSet, ValueSyntax};
