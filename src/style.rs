//! Inline style parsing and JSX object serialization
//!
//! An HTML `style="..."` attribute carries a CSS declaration list. JSX does
//! not take a string there; it takes an object literal with camelCased keys,
//! so `style="color: red; margin-top: 4px"` must become
//! `{color: 'red', marginTop: '4px'}`. This module owns that translation.
//!
//! Parsing is deliberately simple: split on `;`, split each segment at its
//! first `:`, trim both sides, lower-case the property. Segments without a
//! property are dropped; a property repeated later in the list overwrites the
//! earlier value while keeping its original position.

use crate::text::{hyphen_to_camel_case, is_numeric};

/// Parsed inline-style declaration list.
///
/// Declarations keep their source order, which is preserved through
/// serialization.
///
/// # Examples
///
/// ```rust
/// use jsx_transpose::style::StyleParser;
///
/// let style = StyleParser::new("color: red; -ms-flex: 1; margin:10px");
/// assert_eq!(style.to_jsx_string(), "color: 'red', msFlex: 1, margin: '10px'");
/// ```
#[derive(Debug)]
pub struct StyleParser {
    declarations: Vec<(String, String)>,
}

impl StyleParser {
    /// Parse the specified inline style attribute value.
    pub fn new(raw_style: &str) -> Self {
        let mut declarations: Vec<(String, String)> = Vec::new();
        for segment in raw_style.split(';') {
            let segment = segment.trim();
            let Some(colon) = segment.find(':') else {
                continue;
            };
            // Style keys are case insensitive
            let key = segment[..colon].trim().to_lowercase();
            let value = segment[colon + 1..].trim().to_string();
            if key.is_empty() {
                continue;
            }
            match declarations.iter_mut().find(|(name, _)| *name == key) {
                // Last write wins, first position kept
                Some(existing) => existing.1 = value,
                None => declarations.push((key, value)),
            }
        }
        Self { declarations }
    }

    /// Convert the style information represented by this parser into the body
    /// of a JSX object literal.
    pub fn to_jsx_string(&self) -> String {
        self.declarations
            .iter()
            .map(|(key, value)| format!("{}: {}", Self::jsx_key(key), Self::jsx_value(value)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Convert a CSS property name to its JSX spelling.
    fn jsx_key(key: &str) -> String {
        // Don't capitalize the -ms- prefix; its leading hyphen is dropped
        // instead. Other vendor prefixes keep theirs and camel-case.
        let key = if key.starts_with("-ms-") { &key[1..] } else { key };
        hyphen_to_camel_case(key)
    }

    /// Convert a CSS value to its JSX spelling.
    ///
    /// Numeric values are emitted bare; everything else becomes a
    /// single-quoted string with embedded single quotes turned into double
    /// quotes. That replacement is lossy and kept for output compatibility.
    fn jsx_value(value: &str) -> String {
        if is_numeric(value) {
            value.to_string()
        } else {
            format!("'{}'", value.replace('\'', "\""))
        }
    }
}
