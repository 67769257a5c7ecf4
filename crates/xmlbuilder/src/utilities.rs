//! Utility functions for tag naming.

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_HUMP: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]").unwrap());

/// Convert a code identifier into a tag name.
///
/// A single `_` between alphanumerics becomes a namespace `:`, a doubled
/// `__` becomes a literal `_`, camelCase humps become kebab-case and the
/// result is lowercased:
///
/// ```rust
/// use xmlbuilder::tag_name;
///
/// assert_eq!(tag_name("kebabCased"), "kebab-cased");
/// assert_eq!(tag_name("xlink_linkTag"), "xlink:link-tag");
/// assert_eq!(tag_name("under__scored"), "under_scored");
/// ```
pub fn tag_name(ident: &str) -> String {
    let converted: Vec<String> = split_namespaces(ident)
        .iter()
        .map(|part| {
            let collapsed = part.replace("__", "_");
            CAMEL_HUMP
                .replace_all(&collapsed, "-$0")
                .to_lowercase()
        })
        .collect();
    converted.join(":").trim_matches('-').to_string()
}

/// Split on `_` only where it sits between two alphanumerics, so `__`
/// survives as an escape for a literal underscore
fn split_namespaces(ident: &str) -> Vec<String> {
    let chars: Vec<char> = ident.chars().collect();
    let mut parts = vec![String::new()];
    for (i, &c) in chars.iter().enumerate() {
        let is_separator = c == '_'
            && i > 0
            && chars[i - 1].is_ascii_alphanumeric()
            && chars.get(i + 1).is_some_and(|next| next.is_ascii_alphanumeric());
        if is_separator {
            parts.push(String::new());
        } else if let Some(last) = parts.last_mut() {
            last.push(c);
        }
    }
    parts
}
