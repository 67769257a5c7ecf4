//! Configuration options for markup serialization

use indexmap::IndexMap;

/// Serialization dialect, selects how empty elements close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Void element names self-close (or stay open per `closeVoid`), any
    /// other empty element renders as a paired tag
    #[default]
    Html,
    /// Any empty element self-closes
    Xhtml,
    /// Any empty element self-closes
    Xml,
}

impl Mode {
    /// Parse an option label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "html" => Some(Mode::Html),
            "xhtml" => Some(Mode::Xhtml),
            "xml" => Some(Mode::Xml),
            _ => None,
        }
    }
}

/// Policy for attributes whose value is the empty string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyAttributes {
    /// Emit `key=""`
    #[default]
    Preserve,
    /// Drop the attribute entirely
    Remove,
    /// Emit the bare key with no value
    NameOnly,
}

impl EmptyAttributes {
    /// Parse an option label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "preserve" => Some(EmptyAttributes::Preserve),
            "remove" => Some(EmptyAttributes::Remove),
            "nameOnly" => Some(EmptyAttributes::NameOnly),
            _ => None,
        }
    }
}

/// Options for markup serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// Master switch: when false every whitespace-producing query yields the
    /// empty string and entity-encoding of text/comment data is skipped
    pub beautify: bool,

    /// When false, comment nodes render as the empty string
    pub comments: bool,

    /// When false, conditional comment nodes render as the empty string
    pub if_comments: bool,

    /// Pad comment data with a single space on each side when beautifying
    pub comments_padding: bool,

    /// Close void elements with `/>` rather than a bare `>`
    pub close_void: bool,

    /// Policy for empty attribute values
    pub empty_attributes: EmptyAttributes,

    /// Entity-encode text and comment data (CDATA is never encoded)
    pub encode: bool,

    /// Output character encoding, applied once to the final string
    pub encoding: String,

    /// Indent unit, repeated once per nesting level
    pub indent: String,

    /// Newline sequence appended after each line-level unit
    pub nl: String,

    /// Serialization dialect
    pub mode: Mode,

    /// Put an element's single text child on its own indented line instead
    /// of rendering `<name>text</name>` on one line
    pub single_text_on_new_line: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            beautify: true,
            comments: true,
            if_comments: true,
            comments_padding: true,
            close_void: true,
            empty_attributes: EmptyAttributes::Preserve,
            encode: true,
            encoding: "UTF-8".to_string(),
            indent: "\t".to_string(),
            nl: "\n".to_string(),
            mode: Mode::Html,
            single_text_on_new_line: false,
        }
    }
}

/// A loosely-typed option value supplied through an [`OptionMap`]
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

/// Sparse configuration overlay: recognized keys override the defaults,
/// unrecognized keys are preserved but ignored by every query
pub type OptionMap = IndexMap<String, OptionValue>;

impl Options {
    /// Resolve a sparse overlay against the defaults.
    ///
    /// Returns the resolved options and the unrecognized keys. A value of the
    /// wrong shape or an unknown enum label falls back to the default rather
    /// than failing.
    pub fn resolve(overlay: &OptionMap) -> (Options, OptionMap) {
        let mut options = Options::default();
        let mut extra = OptionMap::new();

        for (key, value) in overlay {
            match key.as_str() {
                "beautify" => options.beautify = bool_or(value, options.beautify),
                "comments" => options.comments = bool_or(value, options.comments),
                "ifComments" => options.if_comments = bool_or(value, options.if_comments),
                "commentsPadding" => {
                    options.comments_padding = bool_or(value, options.comments_padding)
                }
                "closeVoid" => options.close_void = bool_or(value, options.close_void),
                "emptyAttributes" => {
                    if let OptionValue::Str(label) = value {
                        if let Some(policy) = EmptyAttributes::parse(label) {
                            options.empty_attributes = policy;
                        }
                    }
                }
                "encode" => options.encode = bool_or(value, options.encode),
                "encoding" => {
                    if let OptionValue::Str(label) = value {
                        options.encoding = label.clone();
                    }
                }
                "indent" => {
                    if let OptionValue::Str(unit) = value {
                        options.indent = unit.clone();
                    }
                }
                "nl" => {
                    if let OptionValue::Str(nl) = value {
                        options.nl = nl.clone();
                    }
                }
                "mode" => {
                    if let OptionValue::Str(label) = value {
                        if let Some(mode) = Mode::parse(label) {
                            options.mode = mode;
                        }
                    }
                }
                "singleTextOnNewLine" => {
                    options.single_text_on_new_line =
                        bool_or(value, options.single_text_on_new_line)
                }
                _ => {
                    extra.insert(key.clone(), value.clone());
                }
            }
        }

        (options, extra)
    }
}

fn bool_or(value: &OptionValue, default: bool) -> bool {
    match value {
        OptionValue::Bool(b) => *b,
        OptionValue::Str(_) => default,
    }
}
