use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tags::TagRecord;

/// A proposed life-path statement.
///
/// `tags` and `tradeoffs` are stored as JSON text and decoded on read.
/// Only `summary` may be attached after creation, and only once.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Decision {
    pub id: i64,
    pub text: String,
    pub summary: Option<String>,
    pub tags: Option<TagRecord>,
    pub tradeoffs: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl Decision {
    /// The text used to seed branch generation: the cached summary when
    /// present, otherwise the raw decision text.
    #[must_use]
    pub fn generation_summary(&self) -> &str {
        match self.summary.as_deref() {
            Some(summary) if !summary.trim().is_empty() => summary,
            _ => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(summary: Option<&str>) -> Decision {
        Decision {
            id: 1,
            text: "Move to Lisbon".to_string(),
            summary: summary.map(String::from),
            tags: None,
            tradeoffs: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn generation_summary_prefers_cached_summary() {
        let d = decision(Some("Wants a slower pace near the sea"));
        assert_eq!(d.generation_summary(), "Wants a slower pace near the sea");
    }

    #[test]
    fn generation_summary_falls_back_to_text() {
        assert_eq!(decision(None).generation_summary(), "Move to Lisbon");
        assert_eq!(decision(Some("   ")).generation_summary(), "Move to Lisbon");
    }
}
