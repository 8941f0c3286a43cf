//! Export formats and context questions.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

/// Output format for a tree export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Markdown,
    Mermaid,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Mermaid => "mermaid",
        }
    }

    /// File extension used for session exports.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Mermaid => "mmd",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContextQuestion
// ---------------------------------------------------------------------------

/// The fixed questions asked once per session. Each answer is stored as a
/// context block whose role is [`ContextQuestion::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContextQuestion {
    CurrentSituation,
    IdealOutcome,
    KeyValues,
    PotentialObstacles,
    AvailableResources,
}

impl ContextQuestion {
    /// Questions in the order they are asked.
    pub const ALL: [Self; 5] = [
        Self::CurrentSituation,
        Self::IdealOutcome,
        Self::KeyValues,
        Self::PotentialObstacles,
        Self::AvailableResources,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CurrentSituation => "current_situation",
            Self::IdealOutcome => "ideal_outcome",
            Self::KeyValues => "key_values",
            Self::PotentialObstacles => "potential_obstacles",
            Self::AvailableResources => "available_resources",
        }
    }

    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::CurrentSituation => "What is your current situation or challenge?",
            Self::IdealOutcome => "What is the ideal outcome you are aiming for?",
            Self::KeyValues => "What are your key values or principles in this situation?",
            Self::PotentialObstacles => "What are the potential obstacles or constraints?",
            Self::AvailableResources => "What resources are available to you?",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.key() == key)
    }
}

impl fmt::Display for ContextQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
