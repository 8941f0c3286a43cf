use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One labeled fragment of user-supplied context (e.g. `core_desire`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContextBlock {
    pub id: i64,
    pub role: String,
    pub text: String,
    pub decision_id: Option<i64>,
}

impl ContextBlock {
    /// Human label for the role: `core_desire` -> `Core Desire`.
    #[must_use]
    pub fn role_label(&self) -> String {
        self.role
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_label_title_cases_words() {
        let block = ContextBlock {
            id: 1,
            role: "current_situation".to_string(),
            text: "Burned out".to_string(),
            decision_id: Some(1),
        };
        assert_eq!(block.role_label(), "Current Situation");
    }

    #[test]
    fn role_label_handles_single_word_and_stray_underscores() {
        let block = ContextBlock {
            id: 2,
            role: "_VALUES_".to_string(),
            text: String::new(),
            decision_id: None,
        };
        assert_eq!(block.role_label(), "Values");
    }
}
