//! Polarity-tagged tradeoff strings.
//!
//! A tradeoff is free text prefixed with `+` (upside) or `-` (downside),
//! e.g. `"+ More creative freedom"`. Entries without one of these prefixes
//! are never persisted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Direction of a tradeoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Polarity of an entry, judged by its first non-whitespace character.
    #[must_use]
    pub fn of(entry: &str) -> Option<Self> {
        match entry.trim_start().chars().next() {
            Some('+') => Some(Self::Positive),
            Some('-') => Some(Self::Negative),
            _ => None,
        }
    }
}

/// Keep only entries that carry a polarity prefix, trimmed so the prefix
/// is the first character.
#[must_use]
pub fn retain_polarized<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let trimmed = entry.as_ref().trim();
            Polarity::of(trimmed).map(|_| trimmed.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("+ More freedom", Some(Polarity::Positive))]
    #[case("- Less income", Some(Polarity::Negative))]
    #[case("  +leading space", Some(Polarity::Positive))]
    #[case("Neutral remark", None)]
    #[case("", None)]
    fn polarity_of_entry(#[case] entry: &str, #[case] expected: Option<Polarity>) {
        assert_eq!(Polarity::of(entry), expected);
    }

    #[test]
    fn retain_polarized_drops_unprefixed_entries() {
        let kept = retain_polarized(["+ Upside", "sideways", " - Downside ", "* bullet"]);
        assert_eq!(kept, vec!["+ Upside".to_string(), "- Downside".to_string()]);
        assert!(kept.iter().all(|e| e.starts_with('+') || e.starts_with('-')));
    }
}
