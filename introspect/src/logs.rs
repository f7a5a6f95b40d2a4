//! Line parsing for `meson-logs/testlog.json`.

use serde::de::DeserializeOwned;

/// Parses the raw text of `testlog.json`.
///
/// The file is a concatenation of independent JSON objects separated by
/// newlines, not a JSON array. Empty lines (notably the trailing one) are
/// discarded before parsing. Known limitation: blank lines embedded between
/// objects are dropped the same way, and an object containing a literal
/// newline will fail to parse.
pub(crate) fn parse_test_log_lines<T: DeserializeOwned>(
    text: &str,
) -> Result<Vec<T>, serde_json::Error> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(serde_json::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn parses_one_object_per_line() {
        let parsed: Vec<Value> = parse_test_log_lines("{\"a\":1}\n{\"b\":2}\n").unwrap();
        assert_eq!(parsed, vec![json!({"a": 1}), json!({"b": 2})]);
    }

    #[test]
    fn keeps_file_order() {
        let parsed: Vec<Value> =
            parse_test_log_lines("{\"n\":\"first\"}\n{\"n\":\"second\"}\n{\"n\":\"third\"}\n")
                .unwrap();
        let names: Vec<&str> = parsed.iter().map(|v| v["n"].as_str().unwrap()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn drops_empty_lines() {
        // Embedded blank lines are filtered like the trailing one.
        let parsed: Vec<Value> = parse_test_log_lines("{\"a\":1}\n\n{\"b\":2}\n\n").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn empty_input_is_empty_list() {
        let parsed: Vec<Value> = parse_test_log_lines("").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn malformed_line_is_an_error() {
        assert!(parse_test_log_lines::<Value>("{\"a\":1}\nnot json\n").is_err());
    }
}
