//! JSX converter - transforms an HTML fragment into JSX source text
//!
//! This module provides the core conversion logic for turning a parsed HTML
//! fragment into equivalent JSX. The output is meant to be pasted into a
//! component body, so the converter cares about more than tag-for-tag
//! rewriting: attribute names are translated to their JSX spellings, inline
//! styles become object literals, and whitespace is re-flowed into
//! indentation that matches the nesting of the tree.
//!
//! # Conversion Strategy
//!
//! 1. **Clean**: trim the input and drop `<script>` regions outright. Script
//!    bodies frequently contain `<`, `{` and friends that are not valid JSX
//!    text, and they are never wanted in template output.
//! 2. **Wrap**: parse `"\n" + input + "\n"` as a fragment. The added newlines
//!    guarantee that stray top-level text is visible as text nodes when
//!    deciding whether the fragment has a single root.
//! 3. **Traverse**: visit the tree pre-order/post-order, appending to a
//!    single output buffer. Elements open on the pre-visit and close on the
//!    post-visit; text and comments are emitted entirely on the pre-visit.
//! 4. **Post-process**: trim, append one newline, and strip the class-body
//!    indentation assumed during traversal from every line.
//!
//! # Whitespace Model
//!
//! Indentation in the output comes from the fragment's own inter-element
//! whitespace: every newline run inside a text node is rewritten to a newline
//! plus the indentation computed for the current nesting level. Inside a
//! `<pre>` element that rewriting would destroy meaning, so instead each
//! whitespace run (and each literal brace) is wrapped in a string-literal
//! expression that JSX cannot coalesce away.
//!
//! # Special-cased Elements
//!
//! - `<textarea>`: its text becomes a `defaultValue={"..."}` attribute; JSX
//!   textareas take their seed text there, not as children.
//! - `<style>`: its CSS body becomes `dangerouslySetInnerHTML`; the
//!   free-form braces in CSS must not be re-read as JSX expressions.
//! - `<pre>`: toggles the preformatted flag consulted by text rendering.

use std::sync::OnceLock;

use html5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData};
use regex::{NoExpand, Regex};
use tracing::warn;

use crate::error::ConversionError;
use crate::mappings::{attribute_mapping, element_attribute_mapping, jsx_tag_name};
use crate::parser::parse_fragment;
use crate::style::StyleParser;
use crate::text::{
    escape_attribute_value, escape_special_chars, is_numeric, is_whitespace_only,
    json_string_literal, trim_suffix,
};

/// Conversion options
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Indentation unit emitted per nesting level
    pub indent: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }
}

/// Per-call traversal state.
///
/// Created fresh at the top of every `convert` call, so a converter value can
/// be reused across independent conversions with no cross-call leakage.
struct ConversionState {
    /// Accumulated JSX output
    output: String,
    /// Current nesting level; incremented on descent, decremented on ascent
    level: usize,
    /// Whether the traversal is inside a `<pre>` subtree
    in_pre_tag: bool,
}

impl ConversionState {
    fn new() -> Self {
        Self {
            output: String::with_capacity(1024),
            level: 0,
            in_pre_tag: false,
        }
    }
}

/// Main HTML to JSX converter
///
/// The converter holds configuration only; every call to [`convert`] owns its
/// traversal state, so conversions are deterministic and a single instance
/// may be reused freely (one call at a time).
///
/// # Usage
///
/// ```rust
/// use jsx_transpose::converter::JsxConverter;
///
/// let converter = JsxConverter::new();
/// let jsx = converter.convert("<div class=\"box\"></div>").expect("Conversion failed");
/// assert_eq!(jsx, "<div className=\"box\" />\n");
/// ```
///
/// [`convert`]: JsxConverter::convert
#[derive(Debug)]
pub struct JsxConverter {
    options: ConversionOptions,
}

impl JsxConverter {
    /// Create a new converter with default options (two-space indent).
    pub fn new() -> Self {
        Self {
            options: ConversionOptions::default(),
        }
    }

    /// Create a new converter with custom options.
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Main entry point to the converter. Given the specified HTML fragment,
    /// returns the JSX source text representing it.
    ///
    /// The output is trimmed and terminated by a single trailing newline.
    /// A fragment with one top-level element converts to that element alone;
    /// a fragment with several top-level nodes is wrapped in one synthetic
    /// `<div>` so the result stays a single JSX expression.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::ParseError` if the DOM provider fails to
    /// produce a fragment root. Malformed markup is not an error: the
    /// provider normalizes it the way a browser would.
    pub fn convert(&self, html: &str) -> Result<String, ConversionError> {
        let mut state = ConversionState::new();

        let cleaned = self.clean_input(html);
        let container = parse_fragment(&format!("\n{}\n", cleaned))?;

        if only_one_top_level(&container) {
            // Only one top-level element; the component can return it
            // directly and no wrapper needs to be emitted.
            self.traverse(&container, &mut state);
        } else {
            // More than one top-level node; wrap the whole thing in a
            // synthetic container.
            state.output.push_str(&self.options.indent.repeat(3));
            state.level += 1;
            self.visit_container(&container, &mut state);
        }

        let jsx = format!("{}\n", state.output.trim());
        Ok(self.remove_class_indention(&jsx))
    }

    /// Cleans up the specified HTML so it's in a format acceptable for
    /// converting: surrounding whitespace is trimmed and `<script>` regions
    /// are stripped before they can reach the DOM.
    fn clean_input(&self, html: &str) -> String {
        let html = html.trim();
        match script_region_regex() {
            Some(regex) => regex.replace_all(html, "").into_owned(),
            None => html.to_string(),
        }
    }

    /// Render the synthetic container around a multi-rooted fragment.
    ///
    /// The container always has children here (an empty fragment passes the
    /// single-top-level check), so it is never self-closing, and it carries
    /// no attributes or special-case behaviour. Its own parsed tag name is
    /// irrelevant; the wrapper is emitted as a plain `div`.
    fn visit_container(&self, container: &Handle, state: &mut ConversionState) {
        state.output.push_str("<div>");
        self.traverse(container, state);
        // De-indent so the closing tag lines up with the opening tag
        trim_suffix(&mut state.output, &self.options.indent);
        state.output.push_str("</div>");
    }

    /// Handles processing the specified node: pre-visit, children, post-visit.
    fn visit(&self, node: &Handle, parent: Option<&Handle>, state: &mut ConversionState) {
        self.begin_visit(node, parent, state);
        self.traverse(node, state);
        self.end_visit(node, state);
    }

    /// Traverses all the children of the specified node, one level deeper.
    fn traverse(&self, node: &Handle, state: &mut ConversionState) {
        state.level += 1;
        for child in node.children.borrow().iter() {
            self.visit(child, Some(node), state);
        }
        state.level -= 1;
    }

    /// Handle pre-visit behaviour for the specified node.
    ///
    /// Dispatches on the node kind. Element, text and comment nodes are the
    /// only kinds with a JSX rendering; anything else is logged and skipped.
    fn begin_visit(&self, node: &Handle, parent: Option<&Handle>, state: &mut ConversionState) {
        match node.data {
            NodeData::Element { .. } => self.begin_visit_element(node, state),
            NodeData::Text { ref contents } => {
                let contents = contents.borrow();
                self.visit_text(&contents, parent, state);
            }
            NodeData::Comment { ref contents } => self.visit_comment(contents, state),
            _ => {
                warn!(kind = node_kind_name(&node.data), "unrecognised node kind, skipping");
            }
        }
    }

    /// Handles post-visit behaviour for the specified node.
    ///
    /// Only element nodes need a closing form; text and comments were emitted
    /// whole during the pre-visit.
    fn end_visit(&self, node: &Handle, state: &mut ConversionState) {
        if let NodeData::Element { .. } = node.data {
            self.end_visit_element(node, state);
        }
    }

    /// Handles pre-visit behaviour for the specified element node.
    ///
    /// Emits the opening tag with its attribute list. For `textarea` and
    /// `style` the element's text content is folded into a synthetic
    /// attribute here, which is why both render self-closing later.
    fn begin_visit_element(&self, node: &Handle, state: &mut ConversionState) {
        let NodeData::Element {
            ref name,
            ref attrs,
            ..
        } = node.data
        else {
            return;
        };
        let tag_name = jsx_tag_name(name.local.as_ref());

        let mut attributes: Vec<String> = Vec::new();
        for attribute in attrs.borrow().iter() {
            attributes.push(self.element_attribute(&tag_name, attribute));
        }

        if tag_name == "textarea" {
            // Textareas need their inner text moved to a defaultValue attribute
            let mut value = String::new();
            text_content(node, &mut value);
            attributes.push(format!("defaultValue={{{}}}", json_string_literal(&value)));
        }
        if tag_name == "style" {
            // Style tag contents are dangerously set due to liberal curly brace usage
            let mut css = String::new();
            text_content(node, &mut css);
            attributes.push(format!(
                "dangerouslySetInnerHTML={{{{__html: {} }}}}",
                json_string_literal(&css)
            ));
        }
        if tag_name == "pre" {
            state.in_pre_tag = true;
        }

        state.output.push('<');
        state.output.push_str(&tag_name);
        if !attributes.is_empty() {
            state.output.push(' ');
            state.output.push_str(&attributes.join(" "));
        }
        if !is_self_closing(node, &tag_name) {
            state.output.push('>');
        }
    }

    /// Handles post-visit behaviour for the specified element node.
    fn end_visit_element(&self, node: &Handle, state: &mut ConversionState) {
        let NodeData::Element { ref name, .. } = node.data else {
            return;
        };
        let tag_name = jsx_tag_name(name.local.as_ref());

        // The children's trailing whitespace indented one level too deep for
        // the closing tag; de-indent a single unit.
        trim_suffix(&mut state.output, &self.options.indent);
        if is_self_closing(node, &tag_name) {
            state.output.push_str(" />");
        } else {
            state.output.push_str("</");
            state.output.push_str(&tag_name);
            state.output.push('>');
        }

        if tag_name == "pre" {
            state.in_pre_tag = false;
        }
    }

    /// Handles processing of the specified text node.
    ///
    /// Text inside `textarea`/`style` is skipped outright: it was already
    /// folded into an attribute on the parent. Everything else is entity
    /// escaped and then whitespace-processed according to the preformatted
    /// flag.
    fn visit_text(&self, contents: &str, parent: Option<&Handle>, state: &mut ConversionState) {
        if let Some(parent) = parent
            && let NodeData::Element { ref name, .. } = parent.data
        {
            let parent_tag = jsx_tag_name(name.local.as_ref());
            if parent_tag == "textarea" || parent_tag == "style" {
                return;
            }
        }

        let mut text = escape_special_chars(contents);

        if state.in_pre_tag {
            // Wrap whitespace runs and braces in string-literal expressions
            // so JSX whitespace coalescing cannot eat them.
            text = wrap_preformatted_runs(&text);
        } else {
            text = escape_braces(&text);
            // If there's a newline in the text, re-flow it at the indentation
            // of the current nesting level.
            if text.contains('\n') {
                text = self.reindent_newlines(&text, state.level);
            }
        }
        state.output.push_str(&text);
    }

    /// Handles processing of the specified comment node.
    fn visit_comment(&self, contents: &str, state: &mut ConversionState) {
        // A literal "*/" inside the text would terminate the JSX comment early
        let defused = contents.replace("*/", "* /");
        state.output.push_str("{/*");
        state.output.push_str(&defused);
        state.output.push_str("*/}");
    }

    /// Gets a JSX formatted version of the specified attribute.
    ///
    /// Name resolution order: per-element override table, then the global
    /// attribute table, then the source name unchanged. A `style` attribute
    /// never goes through that path; its value is parsed and re-serialized as
    /// an object literal.
    fn element_attribute(&self, tag_name: &str, attribute: &Attribute) -> String {
        let attribute_name = qualified_attribute_name(attribute);
        let value = attribute.value.to_string();

        if attribute_name == "style" {
            return self.style_attribute(&value);
        }

        let name = element_attribute_mapping(tag_name, &attribute_name)
            .or_else(|| attribute_mapping().get(attribute_name.as_str()).copied())
            .unwrap_or(attribute_name.as_str());

        let mut result = name.to_string();
        if is_numeric(&value) {
            result.push_str(&format!("={{{}}}", value));
        } else if !value.is_empty() {
            result.push_str(&format!("=\"{}\"", escape_attribute_value(&value)));
        } else if attribute_name == "alt" {
            // An empty alt has different accessibility semantics than a
            // missing one; keep it explicit.
            result.push_str("=\"\"");
        }
        result
    }

    /// Gets a JSX formatted version of the specified element styles.
    fn style_attribute(&self, styles: &str) -> String {
        format!("style={{{{{}}}}}", StyleParser::new(styles).to_jsx_string())
    }

    /// Replace every newline-plus-leading-whitespace run with a newline at
    /// the indentation computed for the given nesting level.
    fn reindent_newlines(&self, text: &str, level: usize) -> String {
        let indented_newline = format!("\n{}", self.options.indent.repeat(level + 2));
        match newline_run_regex() {
            Some(regex) => regex
                .replace_all(text, NoExpand(&indented_newline))
                .into_owned(),
            None => text.to_string(),
        }
    }

    /// Removes class-level indention from the JSX output.
    ///
    /// Traversal indents every line as if the output sat inside a class body
    /// three units deep; the emitted snippet is bare, so one class-body unit
    /// comes off every line.
    fn remove_class_indention(&self, output: &str) -> String {
        let class_indention = format!("\n{}", self.options.indent.repeat(3));
        output.replace(&class_indention, "\n")
    }
}

/// Determines if this element node should be rendered as a self-closing tag.
///
/// Childless elements self-close; so do `textarea` and `style`, whose
/// children were redirected into attributes.
fn is_self_closing(node: &Handle, tag_name: &str) -> bool {
    node.children.borrow().is_empty() || tag_name == "textarea" || tag_name == "style"
}

/// Determines if there's only one top-level node in the fragment. That is,
/// all the HTML is wrapped by a single tag, give or take whitespace.
fn only_one_top_level(container: &Handle) -> bool {
    let children = container.children.borrow();
    // Only a single child element
    if children.len() == 1 && matches!(children[0].data, NodeData::Element { .. }) {
        return true;
    }
    // Only one element, and all other children are whitespace
    let mut found_element = false;
    for child in children.iter() {
        match child.data {
            NodeData::Element { .. } => {
                if found_element {
                    // Second element at root level
                    return false;
                }
                found_element = true;
            }
            NodeData::Text { ref contents } => {
                if !is_whitespace_only(&contents.borrow()) {
                    return false;
                }
            }
            _ => {}
        }
    }
    true
}

/// Collect the concatenated text of all descendant text nodes.
fn text_content(node: &Handle, output: &mut String) {
    for child in node.children.borrow().iter() {
        match child.data {
            NodeData::Text { ref contents } => output.push_str(&contents.borrow()),
            NodeData::Element { .. } => text_content(child, output),
            _ => {}
        }
    }
}

/// Serialized attribute name, including a namespace prefix when present
/// (`xlink:href` and friends).
fn qualified_attribute_name(attribute: &Attribute) -> String {
    match &attribute.name.prefix {
        Some(prefix) => format!("{}:{}", prefix, attribute.name.local),
        None => attribute.name.local.to_string(),
    }
}

fn node_kind_name(data: &NodeData) -> &'static str {
    match data {
        NodeData::Document => "document",
        NodeData::Doctype { .. } => "doctype",
        NodeData::Text { .. } => "text",
        NodeData::Comment { .. } => "comment",
        NodeData::Element { .. } => "element",
        NodeData::ProcessingInstruction { .. } => "processing instruction",
    }
}

/// Wrap whitespace runs and braces inside preformatted text as string
/// literal expressions (`{"  "}`), stripping carriage returns first.
fn wrap_preformatted_runs(text: &str) -> String {
    let text = text.replace('\r', "");
    match preformatted_run_regex() {
        Some(regex) => regex
            .replace_all(&text, |captures: &regex::Captures<'_>| {
                format!("{{{}}}", json_string_literal(&captures[0]))
            })
            .into_owned(),
        None => text,
    }
}

/// Wrap literal braces outside preformatted text as quoted-character
/// expressions (`{'{'}`).
fn escape_braces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '{' => result.push_str("{'{'}"),
            '}' => result.push_str("{'}'}"),
            _ => result.push(ch),
        }
    }
    result
}

// Script regions are removed before parsing; their content can wreak havoc
// on the DOM nodes, so they never enter the tree at all.
fn script_region_regex() -> Option<&'static Regex> {
    static SCRIPT_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    SCRIPT_REGEX
        .get_or_init(|| Regex::new(r"(?s)<script.*?</script>").ok())
        .as_ref()
}

// Two-or-more spaces, single newlines, tabs and braces each wrap separately.
fn preformatted_run_regex() -> Option<&'static Regex> {
    static PRE_RUN_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    PRE_RUN_REGEX
        .get_or_init(|| Regex::new(r" {2,}|\n|\t|\{|\}").ok())
        .as_ref()
}

fn newline_run_regex() -> Option<&'static Regex> {
    static NEWLINE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    NEWLINE_REGEX
        .get_or_init(|| Regex::new(r"\n\s*").ok())
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(html: &str) -> String {
        JsxConverter::new().convert(html).expect("Conversion failed")
    }

    #[test]
    fn test_single_top_level_element_no_wrapper() {
        assert_eq!(convert("<div class=\"a\" for=\"b\"></div>"), "<div className=\"a\" htmlFor=\"b\" />\n");
    }

    #[test]
    fn test_multiple_top_level_elements_wrapped() {
        assert_eq!(
            convert("<p>a</p><p>b</p>"),
            "<div>\n  <p>a</p>\n  <p>b</p>\n</div>\n"
        );
    }

    #[test]
    fn test_top_level_text_forces_wrapper() {
        assert_eq!(convert("hello"), "<div>\n  hello\n</div>\n");
    }

    #[test]
    fn test_childless_element_self_closes() {
        assert_eq!(convert("<br>"), "<br />\n");
    }

    #[test]
    fn test_element_with_text_keeps_closing_tag() {
        assert_eq!(convert("<span>x</span>"), "<span>x</span>\n");
    }

    #[test]
    fn test_input_per_element_overrides() {
        assert_eq!(
            convert("<input checked value=\"x\">"),
            "<input defaultChecked defaultValue=\"x\" />\n"
        );
    }

    #[test]
    fn test_input_autofocus_override() {
        assert_eq!(convert("<input autofocus>"), "<input autoFocus />\n");
    }

    #[test]
    fn test_checked_outside_input_uses_global_mapping() {
        // The defaultChecked rename is scoped to input
        assert_eq!(convert("<option selected></option>"), "<option selected />\n");
    }

    #[test]
    fn test_style_attribute_becomes_object() {
        assert_eq!(
            convert("<div style=\"color: red; -ms-flex: 1; margin:10px\"></div>"),
            "<div style={{color: 'red', msFlex: 1, margin: '10px'}} />\n"
        );
    }

    #[test]
    fn test_numeric_attribute_value_unquoted() {
        assert_eq!(convert("<img width=\"10\">"), "<img width={10} />\n");
    }

    #[test]
    fn test_numeric_detection_is_integer_only() {
        assert_eq!(convert("<img width=\"10.5\">"), "<img width=\"10.5\" />\n");
    }

    #[test]
    fn test_empty_alt_is_kept() {
        assert_eq!(convert("<img alt=\"\">"), "<img alt=\"\" />\n");
    }

    #[test]
    fn test_other_empty_attributes_are_value_less() {
        assert_eq!(convert("<input disabled>"), "<input disabled />\n");
    }

    #[test]
    fn test_attribute_double_quotes_escaped() {
        assert_eq!(
            convert("<div title=\"say &quot;hi&quot;\"></div>"),
            "<div title=\"say &quot;hi&quot;\" />\n"
        );
    }

    #[test]
    fn test_unmapped_attribute_passes_through() {
        assert_eq!(convert("<div data-id=\"a7\"></div>"), "<div data-id=\"a7\" />\n");
    }

    #[test]
    fn test_textarea_content_moves_to_default_value() {
        assert_eq!(
            convert("<textarea>seed text</textarea>"),
            "<textarea defaultValue={\"seed text\"} />\n"
        );
    }

    #[test]
    fn test_textarea_keeps_regular_attributes() {
        assert_eq!(
            convert("<textarea rows=\"4\">x</textarea>"),
            "<textarea rows={4} defaultValue={\"x\"} />\n"
        );
    }

    #[test]
    fn test_textarea_multiline_value_escaped() {
        assert_eq!(
            convert("<textarea>a\nb</textarea>"),
            "<textarea defaultValue={\"a\\nb\"} />\n"
        );
    }

    #[test]
    fn test_style_element_content_dangerously_set() {
        assert_eq!(
            convert("<style>.a { color: red; }</style>"),
            "<style dangerouslySetInnerHTML={{__html: \".a { color: red; }\" }} />\n"
        );
    }

    #[test]
    fn test_braces_in_text_escaped() {
        assert_eq!(convert("<div>{hello}</div>"), "<div>{'{'}hello{'}'}</div>\n");
    }

    #[test]
    fn test_pre_wraps_braces_as_string_literals() {
        assert_eq!(convert("<pre>{x}</pre>"), "<pre>{\"{\"}x{\"}\"}</pre>\n");
    }

    #[test]
    fn test_pre_wraps_whitespace_runs() {
        assert_eq!(
            convert("<pre>a  b\nc\td</pre>"),
            "<pre>a{\"  \"}b{\"\\n\"}c{\"\\t\"}d</pre>\n"
        );
    }

    #[test]
    fn test_pre_single_spaces_left_alone() {
        assert_eq!(convert("<pre>a b</pre>"), "<pre>a b</pre>\n");
    }

    #[test]
    fn test_pre_strips_carriage_returns() {
        assert_eq!(convert("<pre>a\r\nb</pre>"), "<pre>a{\"\\n\"}b</pre>\n");
    }

    #[test]
    fn test_whitespace_outside_pre_reflows_to_indentation() {
        assert_eq!(
            convert("<div>\n      <span>x</span>\n</div>"),
            "<div>\n  <span>x</span>\n</div>\n"
        );
    }

    #[test]
    fn test_nested_elements_indent_per_level() {
        assert_eq!(
            convert("<div>\n<section>\n<span>x</span>\n</section>\n</div>"),
            "<div>\n  <section>\n    <span>x</span>\n  </section>\n</div>\n"
        );
    }

    #[test]
    fn test_comment_conversion() {
        assert_eq!(convert("<!-- note -->"), "{/* note */}\n");
    }

    #[test]
    fn test_comment_terminator_defused() {
        assert_eq!(convert("<!-- a */ comment -->"), "{/* a * / comment */}\n");
    }

    #[test]
    fn test_comment_every_terminator_defused() {
        assert_eq!(convert("<!-- */ and */ -->"), "{/* * / and * / */}\n");
    }

    #[test]
    fn test_script_regions_stripped() {
        assert_eq!(
            convert("<script>var x = 1;</script><p>ok</p>"),
            "<p>ok</p>\n"
        );
    }

    #[test]
    fn test_script_inside_element_stripped() {
        assert_eq!(convert("<div><script>boom()</script></div>"), "<div />\n");
    }

    #[test]
    fn test_text_entities_escaped() {
        assert_eq!(convert("<p>a &amp; b</p>"), "<p>a &amp; b</p>\n");
    }

    #[test]
    fn test_svg_tag_names_canonicalized() {
        assert_eq!(
            convert("<svg><clippath></clippath></svg>"),
            "<svg><clipPath /></svg>\n"
        );
    }

    #[test]
    fn test_svg_namespaced_attribute_mapped() {
        assert_eq!(
            convert("<svg><use xlink:href=\"#a\"></use></svg>"),
            "<svg><use xlinkHref=\"#a\" /></svg>\n"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "\n");
        assert_eq!(convert("   \n  "), "\n");
    }

    #[test]
    fn test_comment_does_not_force_wrapper() {
        assert_eq!(convert("<!--c-->\n<div></div>"), "{/*c*/}\n<div />\n");
    }

    #[test]
    fn test_custom_indent_unit() {
        let converter = JsxConverter::with_options(ConversionOptions {
            indent: "    ".to_string(),
        });
        assert_eq!(
            converter.convert("<p>a</p><p>b</p>").expect("Conversion failed"),
            "<div>\n    <p>a</p>\n    <p>b</p>\n</div>\n"
        );
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let converter = JsxConverter::new();
        let html = "<div class=\"a\">\n  <pre>x  y</pre>\n  text {brace}\n</div>";
        let first = converter.convert(html).expect("Conversion failed");
        let second = converter.convert(html).expect("Conversion failed");
        assert_eq!(first, second);

        let fresh = JsxConverter::new().convert(html).expect("Conversion failed");
        assert_eq!(first, fresh);
    }
}
