//! Output character encodings
//!
//! The rendered string is passed through the configured encoding exactly
//! once. UTF-8 is the identity; US-ASCII rewrites every non-ASCII scalar as
//! a hexadecimal numeric character reference so the result stays
//! representable in a plain ASCII byte stream.

use std::fmt::Write;

use crate::RenderError;

/// Output encodings supported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Ascii,
}

impl Encoding {
    /// Parse an encoding label, case-insensitively. Unknown labels yield
    /// `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Encoding::Utf8),
            "us-ascii" | "ascii" => Some(Encoding::Ascii),
            _ => None,
        }
    }

    /// Apply this encoding to a rendered string
    pub fn apply(self, text: &str) -> String {
        match self {
            Encoding::Utf8 => text.to_string(),
            Encoding::Ascii => {
                let mut out = String::with_capacity(text.len());
                for c in text.chars() {
                    if c.is_ascii() {
                        out.push(c);
                    } else {
                        // infallible for String
                        let _ = write!(out, "&#x{:X};", c as u32);
                    }
                }
                out
            }
        }
    }
}

/// Transcode a rendered string into the encoding named by `label`.
///
/// The one fatal error of the render path: an unrecognized label surfaces as
/// [`RenderError::UnsupportedEncoding`].
pub fn transcode(text: &str, label: &str) -> Result<String, RenderError> {
    let encoding = Encoding::parse(label)
        .ok_or_else(|| RenderError::UnsupportedEncoding(label.to_string()))?;
    Ok(encoding.apply(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(Encoding::parse("UTF-8"), Some(Encoding::Utf8));
        assert_eq!(Encoding::parse("utf8"), Some(Encoding::Utf8));
        assert_eq!(Encoding::parse("US-ASCII"), Some(Encoding::Ascii));
        assert_eq!(Encoding::parse("ascii"), Some(Encoding::Ascii));
        assert_eq!(Encoding::parse("KOI8-R"), None);
    }

    #[test]
    fn test_utf8_is_identity() {
        assert_eq!(Encoding::Utf8.apply("héllo"), "héllo");
    }

    #[test]
    fn test_ascii_uses_character_references() {
        assert_eq!(Encoding::Ascii.apply("héllo"), "h&#xE9;llo");
        assert_eq!(Encoding::Ascii.apply("plain"), "plain");
    }

    #[test]
    fn test_transcode_unknown_label() {
        let err = transcode("x", "EBCDIC").unwrap_err();
        assert!(err.to_string().contains("EBCDIC"));
    }
}
