//! HTML5 fragment parsing using html5ever
//!
//! The converter never parses markup itself; it consumes a DOM tree supplied
//! by this module. Parsing uses Mozilla's html5ever library, which implements
//! the WHATWG HTML5 parsing algorithm, so malformed fragments are normalized
//! the same way a browser would normalize them before the converter ever
//! sees a node.
//!
//! Fragments are parsed with a `div` context element, which gives `innerHTML`
//! semantics: leading and trailing whitespace text nodes survive the parse.
//! The converter depends on that to decide whether a fragment has a single
//! top-level element and to re-flow inter-element whitespace into indentation.
//!
//! # Examples
//!
//! ```rust
//! use jsx_transpose::parser::parse_fragment;
//!
//! let root = parse_fragment("<p>Hello</p>").expect("Failed to parse fragment");
//! assert_eq!(root.children.borrow().len(), 1);
//! ```

use html5ever::tendril::TendrilSink;
use html5ever::{QualName, local_name, namespace_url, ns};
use markup5ever_rcdom::{Handle, RcDom};

use crate::error::ConversionError;

/// Parse an HTML fragment into a DOM tree and return the fragment root.
///
/// The returned handle is the synthetic element the parser collects all
/// top-level fragment nodes under. Its own tag name is never rendered; only
/// its children matter to callers.
///
/// # Errors
///
/// Returns `ConversionError::ParseError` if the tree builder produced no
/// fragment root. html5ever tolerates arbitrary input, so this indicates a
/// defect in the DOM provider rather than bad input.
pub fn parse_fragment(html: &str) -> Result<Handle, ConversionError> {
    let dom = html5ever::parse_fragment(
        RcDom::default(),
        Default::default(),
        QualName::new(None, ns!(html), local_name!("div")),
        Vec::new(),
    )
    .one(html);

    // Detach the fragment root from the document before `dom` is dropped.
    // rcdom's `Node::drop` breaks reference cycles by taking every
    // descendant's children, which would otherwise detach the subtree we
    // return here the moment the owning `RcDom` goes out of scope.
    let root = dom.document.children.borrow_mut().pop();
    root.ok_or_else(|| {
        ConversionError::ParseError("fragment parse produced no root node".to_string())
    })
}
