//! Resolved formatting queries used by the serializer

use crate::options::{EmptyAttributes, Mode, OptionMap, Options};

/// Void (self-closing) HTML elements
// https://www.w3.org/TR/2011/WD-html-markup-20110113/syntax.html#void-element
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Check if a tag name is a void element
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// Fully-resolved formatting configuration.
///
/// Answers the queries node serialization is driven by. All queries are pure
/// functions of the resolved options; a `Formatter` holds no mutable state
/// and may be shared between concurrent renders.
#[derive(Debug, Clone)]
pub struct Formatter {
    options: Options,
    extra: OptionMap,
}

impl Formatter {
    /// Resolve a sparse overlay against the documented defaults
    pub fn new(overlay: &OptionMap) -> Self {
        let (options, extra) = Options::resolve(overlay);
        Self { options, extra }
    }

    /// Wrap an already-resolved options value
    pub fn from_options(options: Options) -> Self {
        Self {
            options,
            extra: OptionMap::new(),
        }
    }

    /// The resolved options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Overlay keys that were preserved but are ignored by every query
    pub fn extra(&self) -> &OptionMap {
        &self.extra
    }

    /// Leading whitespace for a line at the given depth
    pub fn indent(&self, depth: usize) -> String {
        if self.can_beautify() {
            self.options.indent.repeat(depth)
        } else {
            String::new()
        }
    }

    /// Newline sequence appended after each line-level unit
    pub fn newline(&self) -> &str {
        if self.can_beautify() {
            &self.options.nl
        } else {
            ""
        }
    }

    /// Padding inside `<!--` ... `-->`
    pub fn comments_padding(&self) -> &str {
        if self.can_beautify() && self.options.comments_padding {
            " "
        } else {
            ""
        }
    }

    /// Entity-encode text or comment data
    pub fn encode_entities(&self, text: &str) -> String {
        if self.can_beautify() && self.options.encode {
            escape_entities(text)
        } else {
            text.to_string()
        }
    }

    /// Whether comment nodes are emitted at all
    pub fn has_comments(&self) -> bool {
        self.options.comments
    }

    /// Whether conditional comment nodes are emitted at all
    pub fn has_conditional_comments(&self) -> bool {
        self.options.if_comments
    }

    pub fn mode(&self) -> Mode {
        self.options.mode
    }

    pub fn close_void(&self) -> bool {
        self.options.close_void
    }

    pub fn empty_attributes(&self) -> EmptyAttributes {
        self.options.empty_attributes
    }

    pub fn single_text_on_new_line(&self) -> bool {
        self.options.single_text_on_new_line
    }

    /// Target encoding label for the final output transform
    pub fn encoding(&self) -> &str {
        &self.options.encoding
    }

    fn can_beautify(&self) -> bool {
        self.options.beautify
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::from_options(Options::default())
    }
}

/// Escape markup-significant characters. Used for attribute values
/// unconditionally and for text/comment data when encoding is enabled.
pub(crate) fn escape_entities(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
