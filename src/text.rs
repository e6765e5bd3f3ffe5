//! Lexical helpers shared by the converter and the style parser
//!
//! All functions here are pure string utilities with no state. They encode
//! the small, sharp-edged rules the JSX output format depends on: entity
//! escaping, numeric-literal detection, hyphen-case conversion, and
//! JSON-style string-literal encoding for attribute payloads.

/// Convert a hyphenated string to camelCase.
///
/// Each hyphen that is followed by another character is dropped and that
/// character upper-cased; a trailing hyphen is kept as-is.
///
/// # Examples
///
/// ```rust
/// use jsx_transpose::text::hyphen_to_camel_case;
///
/// assert_eq!(hyphen_to_camel_case("margin-top"), "marginTop");
/// assert_eq!(hyphen_to_camel_case("-webkit-flex"), "WebkitFlex");
/// ```
pub fn hyphen_to_camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch == '-' {
            match chars.next() {
                Some(next) => result.extend(next.to_uppercase()),
                None => result.push('-'),
            }
        } else {
            result.push(ch);
        }
    }
    result
}

/// Determines if the specified string consists entirely of whitespace.
///
/// Empty strings count as whitespace-only.
pub fn is_whitespace_only(input: &str) -> bool {
    input.chars().all(char::is_whitespace)
}

/// Determines if the specified string is a numeric literal.
///
/// A value is numeric when, after trimming surrounding whitespace, it parses
/// as a decimal integer. `"007"`, `"+3"` and `" 5"` are numeric; `"5.5"`,
/// `"1e3"` and `"0x10"` are not. Numeric values are rendered unquoted, so
/// leading zeros survive only as literal output text.
pub fn is_numeric(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && trimmed.parse::<i64>().is_ok()
}

/// Escapes special characters in text content by converting them to their
/// entity equivalent (eg. `<` to `&lt;`).
///
/// Matches what an HTML serializer does to text content: `&`, `<`, `>` and
/// the no-break space are escaped, quotes are left alone.
pub fn escape_special_chars(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Escapes an attribute value for emission inside a double-quoted literal.
///
/// Only embedded double quotes need the entity form.
pub fn escape_attribute_value(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// Encode a string as a double-quoted JSON string literal.
///
/// Used for `defaultValue={...}` and `dangerouslySetInnerHTML` payloads,
/// which embed free-form text inside a JSX expression.
pub fn json_string_literal(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for ch in value.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\u{08}' => result.push_str("\\b"),
            '\u{0c}' => result.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                result.push_str(&format!("\\u{:04x}", ch as u32));
            }
            ch => result.push(ch),
        }
    }
    result.push('"');
    result
}

/// Trim one occurrence of the specified suffix off the end of the buffer.
/// If the buffer does not end with the suffix, this is a no-op.
pub fn trim_suffix(buffer: &mut String, suffix: &str) {
    if !suffix.is_empty() && buffer.ends_with(suffix) {
        buffer.truncate(buffer.len() - suffix.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_to_camel_case() {
        assert_eq!(hyphen_to_camel_case("margin-top"), "marginTop");
        assert_eq!(hyphen_to_camel_case("border-top-width"), "borderTopWidth");
        assert_eq!(hyphen_to_camel_case("color"), "color");
        assert_eq!(hyphen_to_camel_case("-webkit-transition"), "WebkitTransition");
    }

    #[test]
    fn test_hyphen_to_camel_case_trailing_hyphen() {
        assert_eq!(hyphen_to_camel_case("dangling-"), "dangling-");
    }

    #[test]
    fn test_hyphen_to_camel_case_digit_follows_hyphen() {
        // Digits have no uppercase form and pass through unchanged
        assert_eq!(hyphen_to_camel_case("panose-1"), "panose1");
    }

    #[test]
    fn test_is_whitespace_only() {
        assert!(is_whitespace_only(""));
        assert!(is_whitespace_only("  \n\t "));
        assert!(is_whitespace_only("\u{a0}"));
        assert!(!is_whitespace_only(" x "));
    }

    #[test]
    fn test_is_numeric_integers() {
        assert!(is_numeric("0"));
        assert!(is_numeric("42"));
        assert!(is_numeric("-3"));
        assert!(is_numeric("+3"));
        assert!(is_numeric("007"));
        assert!(is_numeric(" 5"));
    }

    #[test]
    fn test_is_numeric_rejects_non_integers() {
        assert!(!is_numeric(""));
        assert!(!is_numeric(" "));
        assert!(!is_numeric("5.5"));
        assert!(!is_numeric("1e3"));
        assert!(!is_numeric("0x10"));
        assert!(!is_numeric("12px"));
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape_special_chars("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_special_chars("plain"), "plain");
        assert_eq!(escape_special_chars("no\u{a0}break"), "no&nbsp;break");
        // Quotes stay literal in text content
        assert_eq!(escape_special_chars("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_escape_attribute_value() {
        assert_eq!(escape_attribute_value("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_attribute_value("single ' stays"), "single ' stays");
    }

    #[test]
    fn test_json_string_literal() {
        assert_eq!(json_string_literal("plain"), "\"plain\"");
        assert_eq!(json_string_literal("a\nb"), "\"a\\nb\"");
        assert_eq!(json_string_literal("quote \" here"), "\"quote \\\" here\"");
        assert_eq!(json_string_literal("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(json_string_literal("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_trim_suffix() {
        let mut buffer = String::from("line\n  ");
        trim_suffix(&mut buffer, "  ");
        assert_eq!(buffer, "line\n");

        // No-op when the suffix is absent
        trim_suffix(&mut buffer, "  ");
        assert_eq!(buffer, "line\n");

        // Empty suffix never truncates
        trim_suffix(&mut buffer, "");
        assert_eq!(buffer, "line\n");
    }
}
