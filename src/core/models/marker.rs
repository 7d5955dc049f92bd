//! Outcome markers for the surrounding automation pipeline

use serde::{Deserialize, Serialize};

/// Signal telling a CI pipeline which follow-up step to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// The request was rejected
    Invalid,
    /// The request body was edited
    Edited,
}

impl Marker {
    /// Name of the marker file
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Edited => "edited",
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}
