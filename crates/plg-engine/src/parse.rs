//! Lenient JSON extraction from oracle text.
//!
//! Oracles wrap JSON in prose or markdown fences more often than not. The
//! accepted forms are, in order: the whole text as JSON, then the body of
//! the first fenced code block (```` ```json ```` or bare ```` ``` ````).

use serde::de::DeserializeOwned;

/// The body of the first fenced code block, without the info string.
///
/// A fence closed on its opening line (```` ```json [1]``` ````) drops a
/// leading alphabetic tag followed by whitespace.
#[must_use]
pub fn fenced_block(raw: &str) -> Option<&str> {
    let start = raw.find("```")?;
    let after_fence = &raw[start + 3..];
    let line_end = after_fence.find('\n').unwrap_or(after_fence.len());

    if let Some(end) = after_fence[..line_end].find("```") {
        let inline = after_fence[..end].trim();
        let body = match inline.split_once(char::is_whitespace) {
            Some((tag, rest)) if tag.chars().all(|c| c.is_ascii_alphabetic()) => rest,
            _ => inline,
        };
        return Some(body.trim());
    }

    // Skip the info string (e.g. `json`) up to the end of the opening line.
    let body = after_fence.get(line_end + 1..)?;
    let end = body.find("```")?;
    Some(body[..end].trim())
}

/// Parse `raw` as `T`, falling back to the first fenced block.
///
/// Returns `None` when neither form deserializes.
#[must_use]
pub fn parse_lenient<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Some(value);
    }
    fenced_block(trimmed).and_then(|body| serde_json::from_str(body).ok())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    #[test]
    fn fenced_block_with_language_tag() {
        let raw = "Here you go:\n```json\n[1, 2]\n```\nanything else?";
        assert_eq!(fenced_block(raw), Some("[1, 2]"));
    }

    #[test]
    fn fenced_block_without_language_tag() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(fenced_block(raw), Some("{\"a\": 1}"));
    }

    #[rstest]
    #[case::tagged("```json [1,2]```", Some("[1,2]"))]
    #[case::bare("```[1,2]```", Some("[1,2]"))]
    #[case::padded("Result: ``` {\"a\": 1} ``` done", Some("{\"a\": 1}"))]
    #[case::literal("```true```", Some("true"))]
    fn fenced_block_on_one_line(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(fenced_block(raw), expected);
    }

    #[test]
    fn one_line_tagged_fence_parses() {
        assert_eq!(parse_lenient::<Vec<u8>>("```json [1,2]```"), Some(vec![1, 2]));
    }

    #[test]
    fn unterminated_fence_is_none() {
        assert_eq!(fenced_block("```json\n[1, 2]"), None);
    }

    #[test]
    fn only_first_block_is_used() {
        let raw = "```json\nnot json\n```\n```json\n[1]\n```";
        assert_eq!(parse_lenient::<Vec<u8>>(raw), None);
    }

    #[rstest]
    #[case::raw("[1, 2, 3]", true)]
    #[case::padded("  \n[1, 2, 3]\n ", true)]
    #[case::fenced("```json\n[1, 2, 3]\n```", true)]
    #[case::prose_then_fence("Sure!\n```\n[1, 2, 3]\n```", true)]
    #[case::prose_only("not json at all", false)]
    #[case::empty("", false)]
    fn parse_lenient_cases(#[case] raw: &str, #[case] ok: bool) {
        let parsed: Option<Value> = parse_lenient(raw);
        assert_eq!(parsed.is_some(), ok, "input: {raw:?}");
    }
}
