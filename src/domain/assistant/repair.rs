//! Helpers for cleaning raw model output before JSON parsing.
//!
//! Models frequently wrap JSON replies in markdown code fences or surround
//! them with prose. These helpers normalize such output so the parsers in
//! [`super::intent`] and [`super::plan`] can work on plain JSON text.

/// Removes markdown code-fence wrappers (```json ... ```) and trims.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Extracts the first `{...}` spanning substring, if any.
///
/// Spans from the first `{` to the last `}` in the text, which tolerates
/// prose before and after a JSON object but not multiple disjoint objects.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end > start {
        Some(&raw[start..=end])
    } else {
        None
    }
}

/// Returns the first run of ASCII digits in `s` parsed as a number.
pub fn first_integer(s: &str) -> Option<u32> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits: String = s[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fences() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fences() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn plain_text_passes_through_trimmed() {
        assert_eq!(strip_code_fences("  hello  "), "hello");
    }

    #[test]
    fn extracts_object_from_surrounding_prose() {
        let raw = "Here is your plan: {\"day\": 1} enjoy!";
        assert_eq!(extract_json_object(raw), Some("{\"day\": 1}"));
    }

    #[test]
    fn extract_returns_none_without_braces() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn first_integer_finds_leading_number() {
        assert_eq!(first_integer("5 days"), Some(5));
        assert_eq!(first_integer("about 12 days or so"), Some(12));
        assert_eq!(first_integer("a week"), None);
    }
}
