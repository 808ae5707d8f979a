//! JSON response recovery
//!
//! Locates a syntactically valid JSON object inside arbitrary generated
//! text. Strategy order matters:
//!
//! 1. Fenced code block (```json ... ``` or bare ```) - generation
//!    services most commonly wrap JSON in markdown even when told not to.
//! 2. The whole response - a compliant response needs no extraction.
//! 3. Outermost-brace scan - last resort for responses with leading or
//!    trailing prose.
//!
//! The first strategy whose candidate parses wins.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").unwrap())
}

fn brace_regex() -> &'static Regex {
    static BRACE: OnceLock<Regex> = OnceLock::new();
    // Greedy: first `{` to last `}`.
    BRACE.get_or_init(|| Regex::new(r"\{[\s\S]*\}").unwrap())
}

fn parses(candidate: &str) -> bool {
    serde_json::from_str::<Value>(candidate).is_ok()
}

/// Recover a syntactically valid JSON string from generated text.
///
/// Returns `None` when no strategy yields parseable JSON.
pub fn recover(raw: &str) -> Option<String> {
    if let Some(caps) = fence_regex().captures(raw) {
        if let Some(inner) = caps.get(1) {
            let candidate = inner.as_str().trim();
            if parses(candidate) {
                return Some(candidate.to_string());
            }
        }
    }

    let trimmed = raw.trim();
    if parses(trimmed) {
        return Some(trimmed.to_string());
    }

    if let Some(m) = brace_regex().find(raw) {
        let candidate = m.as_str();
        if parses(candidate) {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Re-serialize parsed JSON with stable formatting: two-space indent,
/// non-ASCII characters left unescaped. Idempotent under
/// parse/serialize round-trips.
pub fn canonicalize(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recover_from_fenced_block() {
        let raw = "Here is your data:\n```json\n{\"a\": 1}\n```\nHope that helps!";
        assert_eq!(recover(raw).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_recover_from_untagged_fence() {
        let raw = "```\n{\"author\": {\"full_name\": \"الذهبي\"}}\n```";
        assert_eq!(recover(raw).unwrap(), "{\"author\": {\"full_name\": \"الذهبي\"}}");
    }

    #[test]
    fn test_fence_wins_over_surrounding_prose() {
        // Prose before and after, fence in the middle: fence extraction
        // is tried first and must ignore the surroundings.
        let raw = "Sure! ```json\n{\"x\": true}\n``` and some trailing notes";
        assert_eq!(recover(raw).unwrap(), "{\"x\": true}");
    }

    #[test]
    fn test_recover_whole_text() {
        let raw = "{\"a\": 1, \"b\": [2, 3]}";
        assert_eq!(recover(raw).unwrap(), raw);
    }

    #[test]
    fn test_recover_whole_text_with_whitespace() {
        let raw = "\n  {\"a\": 1}  \n";
        assert_eq!(recover(raw).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_recover_via_brace_scan() {
        let raw = "Sure, here is the data: {\"a\": 1} Hope that helps!";
        assert_eq!(recover(raw).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_brace_scan_takes_outermost_braces() {
        let raw = "prefix {\"outer\": {\"inner\": 1}} suffix";
        assert_eq!(recover(raw).unwrap(), "{\"outer\": {\"inner\": 1}}");
    }

    #[test]
    fn test_no_json_anywhere_is_absent() {
        assert!(recover("This is not JSON").is_none());
        assert!(recover("").is_none());
        assert!(recover("عذراً، لا أستطيع استخراج البيانات").is_none());
    }

    #[test]
    fn test_invalid_fence_falls_through_to_brace_scan() {
        let raw = "```json\n{broken\n``` but later {\"ok\": 1} appears";
        // Greedy brace scan spans from `{broken` to the last `}`, which
        // does not parse, and the fence content does not parse either.
        assert!(recover(raw).is_none());
    }

    #[test]
    fn test_canonicalize_preserves_arabic_unescaped() {
        let value = json!({"author": {"full_name": "القاضي عياض"}});
        let canonical = canonicalize(&value).unwrap();
        assert!(canonical.contains("القاضي عياض"));
        assert!(!canonical.contains("\\u"));
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let raw = "{\"b\":1,\"a\":{\"z\":[1,2,3],\"y\":null},\"name\":\"البخاري\"}";
        let value: Value = serde_json::from_str(raw).unwrap();

        let once = canonicalize(&value).unwrap();
        let reparsed: Value = serde_json::from_str(&once).unwrap();
        let twice = canonicalize(&reparsed).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_canonical_output_uses_stable_indent() {
        let value = json!({"a": {"b": 1}});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
    }
}
