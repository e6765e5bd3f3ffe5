//! Attribute and tag-name mapping tables
//!
//! JSX spells most markup names differently from serialized HTML: attributes
//! use the DOM property name (`class` becomes `className`, `tabindex` becomes
//! `tabIndex`) and SVG tag names are case-sensitive even though HTML parsing
//! reports them lower-cased. This module holds the static lookup data for
//! those translations.
//!
//! The global attribute table is assembled once, on first use, from two
//! property-config descriptors (one for HTML, one for SVG) plus a pair of
//! manual overrides. Registration is first-write-wins: once a source has
//! claimed an attribute name, later descriptors must not overwrite it.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Property-config descriptor, one per markup vocabulary.
///
/// `properties` lists the JSX property names; `dom_attribute_names` carries
/// the serialized attribute name for every property whose attribute is not
/// simply the lower-cased property name.
struct PropertyConfig {
    properties: &'static [&'static str],
    dom_attribute_names: &'static [(&'static str, &'static str)],
}

/// Manual overrides registered before either descriptor.
const MANUAL_ATTRIBUTE_MAPPING: &[(&str, &str)] = &[("for", "htmlFor"), ("class", "className")];

static HTML_PROPERTY_CONFIG: PropertyConfig = PropertyConfig {
    properties: &[
        "accept", "acceptCharset", "accessKey", "action", "allowFullScreen",
        "allowTransparency", "alt", "async", "autoCapitalize", "autoComplete",
        "autoCorrect", "autoPlay", "autoSave", "capture", "cellPadding",
        "cellSpacing", "challenge", "charSet", "checked", "cite", "classID",
        "className", "color", "cols", "colSpan", "content", "contentEditable",
        "contextMenu", "controls", "coords", "crossOrigin", "data", "dateTime",
        "default", "defer", "dir", "disabled", "download", "draggable",
        "encType", "form", "formAction", "formEncType", "formMethod",
        "formNoValidate", "formTarget", "frameBorder", "headers", "height",
        "hidden", "high", "href", "hrefLang", "htmlFor", "httpEquiv", "icon",
        "id", "inputMode", "integrity", "is", "itemID", "itemProp", "itemRef",
        "itemScope", "itemType", "keyParams", "keyType", "kind", "label",
        "lang", "list", "loop", "low", "manifest", "marginHeight",
        "marginWidth", "max", "maxLength", "media", "mediaGroup", "method",
        "min", "minLength", "multiple", "muted", "name", "nonce", "noValidate",
        "open", "optimum", "pattern", "placeholder", "poster", "preload",
        "profile", "radioGroup", "readOnly", "referrerPolicy", "rel",
        "required", "results", "reversed", "role", "rows", "rowSpan",
        "sandbox", "scope", "scoped", "scrolling", "seamless", "security",
        "selected", "shape", "size", "sizes", "span", "spellCheck", "src",
        "srcDoc", "srcLang", "srcSet", "start", "step", "style", "summary",
        "tabIndex", "target", "title", "type", "unselectable", "useMap",
        "value", "width", "wmode", "wrap",
    ],
    dom_attribute_names: &[
        ("acceptCharset", "accept-charset"),
        ("className", "class"),
        ("htmlFor", "for"),
        ("httpEquiv", "http-equiv"),
    ],
};

static SVG_PROPERTY_CONFIG: PropertyConfig = PropertyConfig {
    properties: &[
        "accentHeight", "accumulate", "additive", "alignmentBaseline",
        "allowReorder", "alphabetic", "amplitude", "arabicForm", "ascent",
        "attributeName", "attributeType", "autoReverse", "azimuth",
        "baseFrequency", "baseProfile", "baselineShift", "bbox", "begin",
        "bias", "by", "calcMode", "capHeight", "clip", "clipPath",
        "clipPathUnits", "clipRule", "colorInterpolation",
        "colorInterpolationFilters", "colorProfile", "colorRendering",
        "contentScriptType", "contentStyleType", "cursor", "cx", "cy", "d",
        "decelerate", "descent", "diffuseConstant", "direction", "display",
        "divisor", "dominantBaseline", "dur", "dx", "dy", "edgeMode",
        "elevation", "enableBackground", "end", "exponent",
        "externalResourcesRequired", "fill", "fillOpacity", "fillRule",
        "filter", "filterRes", "filterUnits", "floodColor", "floodOpacity",
        "focusable", "fontFamily", "fontSize", "fontSizeAdjust", "fontStretch",
        "fontStyle", "fontVariant", "fontWeight", "format", "from", "fx", "fy",
        "g1", "g2", "glyphName", "glyphOrientationHorizontal",
        "glyphOrientationVertical", "glyphRef", "gradientTransform",
        "gradientUnits", "hanging", "horizAdvX", "horizOriginX", "ideographic",
        "imageRendering", "in", "in2", "intercept", "k", "k1", "k2", "k3",
        "k4", "kernelMatrix", "kernelUnitLength", "kerning", "keyPoints",
        "keySplines", "keyTimes", "lengthAdjust", "letterSpacing",
        "lightingColor", "limitingConeAngle", "local", "markerEnd",
        "markerHeight", "markerMid", "markerStart", "markerUnits",
        "markerWidth", "mask", "maskContentUnits", "maskUnits", "mathematical",
        "mode", "numOctaves", "offset", "opacity", "operator", "order",
        "orient", "orientation", "origin", "overflow", "overlinePosition",
        "overlineThickness", "paintOrder", "panose1", "pathLength",
        "patternContentUnits", "patternTransform", "patternUnits",
        "pointerEvents", "points", "pointsAtX", "pointsAtY", "pointsAtZ",
        "preserveAlpha", "preserveAspectRatio", "primitiveUnits", "r",
        "radius", "refX", "refY", "renderingIntent", "repeatCount",
        "repeatDur", "requiredExtensions", "requiredFeatures", "restart",
        "result", "rotate", "rx", "ry", "scale", "seed", "shapeRendering",
        "slope", "spacing", "specularConstant", "specularExponent", "speed",
        "spreadMethod", "startOffset", "stdDeviation", "stemh", "stemv",
        "stitchTiles", "stopColor", "stopOpacity", "strikethroughPosition",
        "strikethroughThickness", "string", "stroke", "strokeDasharray",
        "strokeDashoffset", "strokeLinecap", "strokeLinejoin",
        "strokeMiterlimit", "strokeOpacity", "strokeWidth", "surfaceScale",
        "systemLanguage", "tableValues", "targetX", "targetY", "textAnchor",
        "textDecoration", "textLength", "textRendering", "to", "transform",
        "u1", "u2", "underlinePosition", "underlineThickness", "unicode",
        "unicodeBidi", "unicodeRange", "unitsPerEm", "vAlphabetic", "vHanging",
        "vIdeographic", "vMathematical", "values", "vectorEffect", "version",
        "vertAdvY", "vertOriginX", "vertOriginY", "viewBox", "viewTarget",
        "visibility", "widths", "wordSpacing", "writingMode", "x", "x1", "x2",
        "xChannelSelector", "xHeight", "xlinkActuate", "xlinkArcrole",
        "xlinkHref", "xlinkRole", "xlinkShow", "xlinkTitle", "xlinkType",
        "xmlBase", "xmlLang", "xmlSpace", "y", "y1", "y2", "yChannelSelector",
        "z", "zoomAndPan",
    ],
    dom_attribute_names: &[
        ("accentHeight", "accent-height"),
        ("alignmentBaseline", "alignment-baseline"),
        ("arabicForm", "arabic-form"),
        ("baselineShift", "baseline-shift"),
        ("capHeight", "cap-height"),
        ("clipPath", "clip-path"),
        ("clipRule", "clip-rule"),
        ("colorInterpolation", "color-interpolation"),
        ("colorInterpolationFilters", "color-interpolation-filters"),
        ("colorProfile", "color-profile"),
        ("colorRendering", "color-rendering"),
        ("dominantBaseline", "dominant-baseline"),
        ("enableBackground", "enable-background"),
        ("fillOpacity", "fill-opacity"),
        ("fillRule", "fill-rule"),
        ("floodColor", "flood-color"),
        ("floodOpacity", "flood-opacity"),
        ("fontFamily", "font-family"),
        ("fontSize", "font-size"),
        ("fontSizeAdjust", "font-size-adjust"),
        ("fontStretch", "font-stretch"),
        ("fontStyle", "font-style"),
        ("fontVariant", "font-variant"),
        ("fontWeight", "font-weight"),
        ("glyphName", "glyph-name"),
        ("glyphOrientationHorizontal", "glyph-orientation-horizontal"),
        ("glyphOrientationVertical", "glyph-orientation-vertical"),
        ("horizAdvX", "horiz-adv-x"),
        ("horizOriginX", "horiz-origin-x"),
        ("imageRendering", "image-rendering"),
        ("letterSpacing", "letter-spacing"),
        ("lightingColor", "lighting-color"),
        ("markerEnd", "marker-end"),
        ("markerMid", "marker-mid"),
        ("markerStart", "marker-start"),
        ("overlinePosition", "overline-position"),
        ("overlineThickness", "overline-thickness"),
        ("paintOrder", "paint-order"),
        ("panose1", "panose-1"),
        ("pointerEvents", "pointer-events"),
        ("renderingIntent", "rendering-intent"),
        ("shapeRendering", "shape-rendering"),
        ("stopColor", "stop-color"),
        ("stopOpacity", "stop-opacity"),
        ("strikethroughPosition", "strikethrough-position"),
        ("strikethroughThickness", "strikethrough-thickness"),
        ("strokeDasharray", "stroke-dasharray"),
        ("strokeDashoffset", "stroke-dashoffset"),
        ("strokeLinecap", "stroke-linecap"),
        ("strokeLinejoin", "stroke-linejoin"),
        ("strokeMiterlimit", "stroke-miterlimit"),
        ("strokeOpacity", "stroke-opacity"),
        ("strokeWidth", "stroke-width"),
        ("textAnchor", "text-anchor"),
        ("textDecoration", "text-decoration"),
        ("textRendering", "text-rendering"),
        ("underlinePosition", "underline-position"),
        ("underlineThickness", "underline-thickness"),
        ("unicodeBidi", "unicode-bidi"),
        ("unicodeRange", "unicode-range"),
        ("unitsPerEm", "units-per-em"),
        ("vAlphabetic", "v-alphabetic"),
        ("vHanging", "v-hanging"),
        ("vIdeographic", "v-ideographic"),
        ("vMathematical", "v-mathematical"),
        ("vectorEffect", "vector-effect"),
        ("vertAdvY", "vert-adv-y"),
        ("vertOriginX", "vert-origin-x"),
        ("vertOriginY", "vert-origin-y"),
        ("wordSpacing", "word-spacing"),
        ("writingMode", "writing-mode"),
        ("xHeight", "x-height"),
        ("xlinkActuate", "xlink:actuate"),
        ("xlinkArcrole", "xlink:arcrole"),
        ("xlinkHref", "xlink:href"),
        ("xlinkRole", "xlink:role"),
        ("xlinkShow", "xlink:show"),
        ("xlinkTitle", "xlink:title"),
        ("xlinkType", "xlink:type"),
        ("xmlBase", "xml:base"),
        ("xmlLang", "xml:lang"),
        ("xmlSpace", "xml:space"),
    ],
};

/// Attribute renames that only apply on a specific element, where the global
/// table would be wrong in context.
const ELEMENT_ATTRIBUTE_MAPPING: &[(&str, &[(&str, &str)])] = &[(
    "input",
    &[
        ("checked", "defaultChecked"),
        ("value", "defaultValue"),
        ("autofocus", "autoFocus"),
    ],
)];

// Reference: https://developer.mozilla.org/en-US/docs/Web/SVG/Element#SVG_elements
const ELEMENT_TAG_NAME_MAPPING: &[(&str, &str)] = &[
    ("a", "a"),
    ("altglyph", "altGlyph"),
    ("altglyphdef", "altGlyphDef"),
    ("altglyphitem", "altGlyphItem"),
    ("animate", "animate"),
    ("animatecolor", "animateColor"),
    ("animatemotion", "animateMotion"),
    ("animatetransform", "animateTransform"),
    ("audio", "audio"),
    ("canvas", "canvas"),
    ("circle", "circle"),
    ("clippath", "clipPath"),
    ("color-profile", "colorProfile"),
    ("cursor", "cursor"),
    ("defs", "defs"),
    ("desc", "desc"),
    ("discard", "discard"),
    ("ellipse", "ellipse"),
    ("feblend", "feBlend"),
    ("fecolormatrix", "feColorMatrix"),
    ("fecomponenttransfer", "feComponentTransfer"),
    ("fecomposite", "feComposite"),
    ("feconvolvematrix", "feConvolveMatrix"),
    ("fediffuselighting", "feDiffuseLighting"),
    ("fedisplacementmap", "feDisplacementMap"),
    ("fedistantlight", "feDistantLight"),
    ("fedropshadow", "feDropShadow"),
    ("feflood", "feFlood"),
    ("fefunca", "feFuncA"),
    ("fefuncb", "feFuncB"),
    ("fefuncg", "feFuncG"),
    ("fefuncr", "feFuncR"),
    ("fegaussianblur", "feGaussianBlur"),
    ("feimage", "feImage"),
    ("femerge", "feMerge"),
    ("femergenode", "feMergeNode"),
    ("femorphology", "feMorphology"),
    ("feoffset", "feOffset"),
    ("fepointlight", "fePointLight"),
    ("fespecularlighting", "feSpecularLighting"),
    ("fespotlight", "feSpotLight"),
    ("fetile", "feTile"),
    ("feturbulence", "feTurbulence"),
    ("filter", "filter"),
    ("font", "font"),
    ("font-face", "fontFace"),
    ("font-face-format", "fontFaceFormat"),
    ("font-face-name", "fontFaceName"),
    ("font-face-src", "fontFaceSrc"),
    ("font-face-uri", "fontFaceUri"),
    ("foreignobject", "foreignObject"),
    ("g", "g"),
    ("glyph", "glyph"),
    ("glyphref", "glyphRef"),
    ("hatch", "hatch"),
    ("hatchpath", "hatchpath"),
    ("hkern", "hkern"),
    ("iframe", "iframe"),
    ("image", "image"),
    ("line", "line"),
    ("lineargradient", "linearGradient"),
    ("marker", "marker"),
    ("mask", "mask"),
    ("mesh", "mesh"),
    ("meshgradient", "meshgradient"),
    ("meshpatch", "meshpatch"),
    ("meshrow", "meshrow"),
    ("metadata", "metadata"),
    ("missing-glyph", "missingGlyph"),
    ("mpath", "mpath"),
    ("path", "path"),
    ("pattern", "pattern"),
    ("polygon", "polygon"),
    ("polyline", "polyline"),
    ("radialgradient", "radialGradient"),
    ("rect", "rect"),
    ("script", "script"),
    ("set", "set"),
    ("solidcolor", "solidcolor"),
    ("stop", "stop"),
    ("style", "style"),
    ("svg", "svg"),
    ("switch", "switch"),
    ("symbol", "symbol"),
    ("text", "text"),
    ("textpath", "textPath"),
    ("title", "title"),
    ("tref", "tref"),
    ("tspan", "tspan"),
    ("unknown", "unknown"),
    ("use", "use"),
    ("video", "video"),
    ("view", "view"),
    ("vkern", "vkern"),
];

/// Global attribute-name translation table, built on first access.
pub fn attribute_mapping() -> &'static HashMap<String, &'static str> {
    static ATTRIBUTE_MAPPING: OnceLock<HashMap<String, &'static str>> = OnceLock::new();
    ATTRIBUTE_MAPPING.get_or_init(build_attribute_mapping)
}

fn build_attribute_mapping() -> HashMap<String, &'static str> {
    let mut mapping = HashMap::new();
    for &(from, to) in MANUAL_ATTRIBUTE_MAPPING {
        mapping.insert(from.to_string(), to);
    }
    for config in [&HTML_PROPERTY_CONFIG, &SVG_PROPERTY_CONFIG] {
        for &property in config.properties {
            let map_from = config
                .dom_attribute_names
                .iter()
                .find(|&&(name, _)| name == property)
                .map(|&(_, attribute)| attribute.to_string())
                .unwrap_or_else(|| property.to_ascii_lowercase());
            // First registered mapping wins; later config sources must not
            // overwrite an existing entry.
            mapping.entry(map_from).or_insert(property);
        }
    }
    mapping
}

/// Look up the per-element attribute rename for the given tag, if any.
pub fn element_attribute_mapping(tag_name: &str, attribute: &str) -> Option<&'static str> {
    ELEMENT_ATTRIBUTE_MAPPING
        .iter()
        .find(|&&(tag, _)| tag == tag_name)
        .and_then(|&(_, renames)| renames.iter().find(|&&(from, _)| from == attribute))
        .map(|&(_, to)| to)
}

/// Convert a tag name to the tag name suitable for JSX.
///
/// The lookup is by lower-cased name; tags without a table entry keep the
/// lower-cased form.
pub fn jsx_tag_name(tag_name: &str) -> String {
    let name = tag_name.to_ascii_lowercase();
    ELEMENT_TAG_NAME_MAPPING
        .iter()
        .find(|&&(lower, _)| lower == name)
        .map(|&(_, canonical)| canonical.to_string())
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_overrides_present() {
        let mapping = attribute_mapping();
        assert_eq!(mapping.get("for").copied(), Some("htmlFor"));
        assert_eq!(mapping.get("class").copied(), Some("className"));
    }

    #[test]
    fn test_manual_overrides_not_clobbered_by_configs() {
        // The HTML descriptor also carries className/htmlFor; first write wins,
        // so the manual entries must still be the ones in the table.
        let mapping = attribute_mapping();
        assert_eq!(mapping.get("class").copied(), Some("className"));
        assert_eq!(mapping.get("for").copied(), Some("htmlFor"));
    }

    #[test]
    fn test_html_config_camel_case_attributes() {
        let mapping = attribute_mapping();
        assert_eq!(mapping.get("tabindex").copied(), Some("tabIndex"));
        assert_eq!(mapping.get("srcset").copied(), Some("srcSet"));
        assert_eq!(mapping.get("accept-charset").copied(), Some("acceptCharset"));
        assert_eq!(mapping.get("http-equiv").copied(), Some("httpEquiv"));
        assert_eq!(mapping.get("maxlength").copied(), Some("maxLength"));
    }

    #[test]
    fn test_svg_config_attributes() {
        let mapping = attribute_mapping();
        assert_eq!(mapping.get("stroke-width").copied(), Some("strokeWidth"));
        assert_eq!(mapping.get("fill-opacity").copied(), Some("fillOpacity"));
        assert_eq!(mapping.get("xlink:href").copied(), Some("xlinkHref"));
        assert_eq!(mapping.get("xml:lang").copied(), Some("xmlLang"));
        assert_eq!(mapping.get("viewbox").copied(), Some("viewBox"));
    }

    #[test]
    fn test_unmapped_attribute_absent() {
        let mapping = attribute_mapping();
        assert_eq!(mapping.get("data-test").copied(), None);
    }

    #[test]
    fn test_element_attribute_mapping_for_input() {
        assert_eq!(
            element_attribute_mapping("input", "checked"),
            Some("defaultChecked")
        );
        assert_eq!(
            element_attribute_mapping("input", "value"),
            Some("defaultValue")
        );
        assert_eq!(
            element_attribute_mapping("input", "autofocus"),
            Some("autoFocus")
        );
        assert_eq!(element_attribute_mapping("input", "class"), None);
    }

    #[test]
    fn test_element_attribute_mapping_other_tags() {
        // The override is scoped to input; other tags fall through
        assert_eq!(element_attribute_mapping("div", "checked"), None);
        assert_eq!(element_attribute_mapping("textarea", "value"), None);
    }

    #[test]
    fn test_jsx_tag_name_svg_canonical_case() {
        assert_eq!(jsx_tag_name("clippath"), "clipPath");
        assert_eq!(jsx_tag_name("lineargradient"), "linearGradient");
        assert_eq!(jsx_tag_name("foreignobject"), "foreignObject");
        assert_eq!(jsx_tag_name("missing-glyph"), "missingGlyph");
    }

    #[test]
    fn test_jsx_tag_name_lowercases_input() {
        assert_eq!(jsx_tag_name("DIV"), "div");
        assert_eq!(jsx_tag_name("CLIPPATH"), "clipPath");
    }

    #[test]
    fn test_jsx_tag_name_passthrough() {
        assert_eq!(jsx_tag_name("div"), "div");
        assert_eq!(jsx_tag_name("custom-element"), "custom-element");
    }
}
