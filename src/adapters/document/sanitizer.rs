//! Response sanitizer - deterministic cleanup of raw model output.
//!
//! Models wrap YAML in markdown fences and sprinkle inline comments even
//! when told not to. Each step below is independent and idempotent and
//! only makes the text more likely to parse as YAML.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening fence line, tolerant of a language tag (```yaml, ```YAML, ...).
static OPENING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[A-Za-z]*\n").expect("valid fence regex"));

/// Inline comment from `#` to end of line.
///
/// Known limitation, preserved deliberately: this also removes literal
/// `#` characters inside string values. Fixing it would require parsing
/// first and only stripping on parse failure.
static INLINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)#.*$").expect("valid comment regex"));

/// Strips markdown fences, inline comments, blank lines, and tabs from
/// raw model output so it is more likely to parse as YAML.
pub struct ResponseSanitizer;

impl ResponseSanitizer {
    /// Cleans raw model output. Empty input is returned unchanged.
    pub fn clean(text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = OPENING_FENCE.replace_all(text, "");
        let text = text.replace("```", "");
        let text = INLINE_COMMENT.replace_all(&text, "");

        text.trim()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.replace('\t', "  "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
