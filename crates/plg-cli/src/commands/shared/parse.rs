use anyhow::bail;
use plg_core::enums::ContextQuestion;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse `key=value` answers into context questions. A repeated key keeps
/// its last value.
pub fn parse_answers(raw: &[String]) -> anyhow::Result<Vec<(ContextQuestion, String)>> {
    let mut answers: Vec<(ContextQuestion, String)> = Vec::with_capacity(raw.len());
    for entry in raw {
        let Some((key, value)) = entry.split_once('=') else {
            bail!("invalid answer '{entry}': expected KEY=VALUE");
        };
        let normalized = key.trim().replace('-', "_");
        let Some(question) = ContextQuestion::from_key(&normalized) else {
            let known = ContextQuestion::ALL.map(ContextQuestion::key).join(", ");
            bail!("unknown question '{key}' (expected one of: {known})");
        };
        answers.retain(|(existing, _)| *existing != question);
        answers.push((question, value.trim().to_string()));
    }
    Ok(answers)
}
