/// Default base URL of the Numbers API trivia service
pub const DEFAULT_FACT_API_URL: &str = "http://numbersapi.com";

/// Category segment appended to every lookup
pub const FACT_CATEGORY: &str = "math";

/// Substituted whenever the lookup fails for any reason
pub const FALLBACK_FACT: &str = "No fun fact available.";

/// Build the lookup URL for `n`, e.g. `http://numbersapi.com/371/math`
///
/// Trailing slashes on `base` are ignored.
pub fn fact_url(base: &str, n: i64) -> String {
    format!("{}/{n}/{FACT_CATEGORY}", base.trim_end_matches('/'))
}

/// Interpret a successful lookup response body
///
/// A body that parses as JSON only counts when it is a JSON string, so `42`
/// or `{"text": ...}` is "no fact available". Any other body is used exactly
/// as received, unless it is empty.
pub fn extract_fact(body: &str) -> Option<String> {
    let fact = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(_) => return None,
        Err(_) => body.to_string(),
    };

    if fact.is_empty() {
        None
    } else {
        Some(fact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_url_default_base() {
        assert_eq!(
            fact_url(DEFAULT_FACT_API_URL, 371),
            "http://numbersapi.com/371/math"
        );
    }

    #[test]
    fn test_fact_url_negative_and_trailing_slash() {
        assert_eq!(
            fact_url("http://localhost:8080//", -5),
            "http://localhost:8080/-5/math"
        );
    }

    #[test]
    fn test_extract_fact_plain_text_is_kept_verbatim() {
        assert_eq!(
            extract_fact("371 is a narcissistic number.\n"),
            Some("371 is a narcissistic number.\n".to_string())
        );
    }

    #[test]
    fn test_extract_fact_empty_body() {
        assert_eq!(extract_fact(""), None);
    }

    #[test]
    fn test_extract_fact_json_string() {
        assert_eq!(
            extract_fact(r#""28 is perfect.""#),
            Some("28 is perfect.".to_string())
        );
    }

    #[test]
    fn test_extract_fact_json_object_is_not_a_fact() {
        assert_eq!(extract_fact(r#"{"text": "28 is perfect.", "found": true}"#), None);
    }

    #[test]
    fn test_extract_fact_bare_json_scalars_are_not_facts() {
        assert_eq!(extract_fact("42"), None);
        assert_eq!(extract_fact("true"), None);
        assert_eq!(extract_fact("null"), None);
    }

    #[test]
    fn test_extract_fact_json_empty_string() {
        assert_eq!(extract_fact(r#""""#), None);
    }
}
