//! Plugin builder port
//!
//! Defines the interface for the remote service that turns a request into a
//! plugin archive.

use crate::core::models::BuildRequest;

/// Remote plugin builder
pub trait BuildService {
    /// Send one build request and return the archive bytes
    async fn build(&self, request: &BuildRequest) -> anyhow::Result<Vec<u8>>;
}
