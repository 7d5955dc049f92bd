//! Marker writer port

use crate::core::models::Marker;

/// Signals an outcome to the surrounding pipeline
pub trait MarkerWriter {
    /// Record a marker
    fn write(&self, marker: Marker) -> anyhow::Result<()>;
}
