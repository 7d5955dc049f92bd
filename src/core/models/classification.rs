//! Classification results and submission outcomes

use serde::{Deserialize, Serialize};

use super::{Extraction, Marker};

/// Line separator convention of a submission source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// `\r\n`, as issue bodies arrive from the tracker
    Crlf,
    /// `\n`, as typed into a text area
    #[default]
    Lf,
}

impl LineSeparator {
    /// The separator text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }

    /// Split text into lines
    ///
    /// Empty text is a single empty line, like any plain string split.
    pub fn split(self, text: &str) -> impl Iterator<Item = &str> {
        text.split(self.as_str())
    }
}

/// Kept and useless lines of a submission, in original order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Lines matched by a rule
    pub kept: Vec<String>,
    /// Lines no rule matched
    pub useless: Vec<String>,
    /// Data extracted from kept lines, in kept order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extractions: Vec<Extraction>,
}

impl Classification {
    /// Total number of classified lines
    #[must_use]
    pub const fn total(&self) -> usize {
        self.kept.len() + self.useless.len()
    }

    /// Outcome implied by the partition
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        Outcome::of(self.kept.len(), self.useless.len())
    }

    /// Kept lines rejoined with a plain newline
    #[must_use]
    pub fn normalized(&self) -> String {
        self.kept.join("\n")
    }
}

/// Three-way result of validating a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No line was kept
    Invalid,
    /// Some lines were kept and some removed
    EditedWithWarnings,
    /// Every line was kept
    Accepted,
}

impl Outcome {
    /// Outcome for partition sizes
    #[must_use]
    pub const fn of(kept: usize, useless: usize) -> Self {
        if kept == 0 {
            Self::Invalid
        } else if useless == 0 {
            Self::Accepted
        } else {
            Self::EditedWithWarnings
        }
    }

    /// Marker signalled to the surrounding pipeline, if any
    #[must_use]
    pub const fn marker(self) -> Option<Marker> {
        match self {
            Self::Invalid => Some(Marker::Invalid),
            Self::EditedWithWarnings => Some(Marker::Edited),
            Self::Accepted => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::EditedWithWarnings => write!(f, "edited with warnings"),
            Self::Accepted => write!(f, "accepted"),
        }
    }
}
