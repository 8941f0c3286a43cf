//! Annotation tag record attached to generated decisions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder shown for a missing tag value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Qualitative labels for one decision: risk, growth potential, and
/// emotional tone. Each field is a short categorical label such as
/// `"Medium"` or `"Hopeful"`.
///
/// An empty record (all fields `None`) is the explicit result of a failed
/// or malformed annotation and never blocks tree growth.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TagRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
}

impl TagRecord {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            risk: None,
            growth: None,
            emotion: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.risk.is_none() && self.growth.is_none() && self.emotion.is_none()
    }

    #[must_use]
    pub fn risk_label(&self) -> &str {
        self.risk.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    #[must_use]
    pub fn growth_label(&self) -> &str {
        self.growth.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    #[must_use]
    pub fn emotion_label(&self) -> &str {
        self.emotion.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// `[Risk: Medium] [Growth: High] [Emotion: Ambitious]`, with `N/A`
    /// for missing values.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!(
            "[Risk: {}] [Growth: {}] [Emotion: {}]",
            self.risk_label(),
            self.growth_label(),
            self.emotion_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_record_serializes_to_empty_object() {
        let json = serde_json::to_string(&TagRecord::empty()).unwrap();
        assert_eq!(json, "{}");
        assert!(TagRecord::default().is_empty());
    }

    #[test]
    fn display_line_uses_placeholder_for_missing_values() {
        let tags = TagRecord {
            risk: Some("High".into()),
            growth: None,
            emotion: Some("Anxious".into()),
        };
        assert_eq!(
            tags.display_line(),
            "[Risk: High] [Growth: N/A] [Emotion: Anxious]"
        );
        assert!(!tags.is_empty());
    }

    #[test]
    fn deserializes_partial_objects() {
        let tags: TagRecord = serde_json::from_str(r#"{"growth": "Transformative"}"#).unwrap();
        assert_eq!(tags.growth.as_deref(), Some("Transformative"));
        assert_eq!(tags.risk, None);
    }
}
