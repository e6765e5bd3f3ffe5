//! jsx-transpose - HTML to JSX conversion engine
//!
//! This library converts HTML fragments into equivalent JSX source text:
//! attribute names are renamed to their JSX spellings, inline styles become
//! object literals, whitespace-significant regions are preserved, and the
//! output is re-indented to match the nesting of the tree.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `parser`: HTML5 fragment parsing using html5ever (the DOM provider)
//! - `converter`: JSX generation from the DOM tree
//! - `mappings`: attribute, per-element and tag-name translation tables
//! - `style`: inline `style` attribute parsing and object serialization
//! - `text`: lexical helpers (escaping, camel-casing, numeric detection)
//!
//! # Determinism
//!
//! Conversion is a pure function of the input string and the configured
//! indentation unit. All traversal state is scoped to a single `convert`
//! call, so converting the same fragment twice - on one converter or on two -
//! yields byte-identical output.

// Module declarations
pub mod converter;
pub mod error;
pub mod mappings;
pub mod parser;
pub mod style;
pub mod text;

// Re-export main types for convenience
pub use converter::{ConversionOptions, JsxConverter};
pub use error::ConversionError;
pub use parser::parse_fragment;
pub use style::StyleParser;
