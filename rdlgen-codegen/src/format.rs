//! Source text formatting helpers.

use serde_json::Value;

/// Wraps a comment to the given column width and renders it as
/// `//` lines at the given indent. An empty comment renders nothing.
#[must_use]
pub fn format_comment(comment: &str, indent: usize, width: usize) -> String {
    let mut out = String::new();
    let pad = " ".repeat(indent);
    let budget = width.saturating_sub(indent + 3).max(16);

    let mut line = String::new();
    for word in comment.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > budget {
            out.push_str(&pad);
            out.push_str("// ");
            out.push_str(&line);
            out.push('\n');
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push_str(&pad);
        out.push_str("// ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders a schema default value as a Java literal.
#[must_use]
pub fn java_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", escape_java(s)),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Returns true if a default value is the zero value of its type
/// (empty string, numeric zero, false, or null).
#[must_use]
pub fn is_zero_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Escapes a string for inclusion in a Java string literal.
#[must_use]
pub fn escape_java(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_comment_single_line() {
        let out = format_comment("A point in the plane.", 0, 100);
        assert_eq!(out, "// A point in the plane.\n");
    }

    #[test]
    fn test_format_comment_indented() {
        let out = format_comment("x coordinate", 4, 100);
        assert_eq!(out, "    // x coordinate\n");
    }

    #[test]
    fn test_format_comment_wraps() {
        let comment =
            "This is a long comment that needs to wrap because it will not fit on one line";
        let out = format_comment(comment, 0, 40);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.starts_with("// "));
            assert!(line.len() <= 40);
        }
    }

    #[test]
    fn test_format_comment_empty() {
        assert_eq!(format_comment("", 4, 100), "");
        assert_eq!(format_comment("   ", 4, 100), "");
    }

    #[test]
    fn test_java_literal() {
        assert_eq!(java_literal(&json!("hello")), "\"hello\"");
        assert_eq!(java_literal(&json!("say \"hi\"")), "\"say \\\"hi\\\"\"");
        assert_eq!(java_literal(&json!(42)), "42");
        assert_eq!(java_literal(&json!(1.5)), "1.5");
        assert_eq!(java_literal(&json!(true)), "true");
    }

    #[test]
    fn test_is_zero_value() {
        assert!(is_zero_value(&json!("")));
        assert!(is_zero_value(&json!(0)));
        assert!(is_zero_value(&json!(0.0)));
        assert!(is_zero_value(&json!(false)));
        assert!(!is_zero_value(&json!("x")));
        assert!(!is_zero_value(&json!(3)));
        assert!(!is_zero_value(&json!(true)));
    }

    #[test]
    fn test_escape_java() {
        assert_eq!(escape_java("plain"), "plain");
        assert_eq!(escape_java("a\\b"), "a\\\\b");
        assert_eq!(escape_java("line\nbreak"), "line\\nbreak");
    }
}
