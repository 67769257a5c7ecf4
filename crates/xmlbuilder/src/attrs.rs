//! Attribute construction with `class`/`style`/`data-*`/`aria-*` shorthands.
//!
//! Every shorthand resolves to a plain string attribute before the core sees
//! it; the serializer only ever consumes a finished ordered map.

use indexmap::IndexMap;

use xmlbuilder_core::Attributes;

/// Chainable attribute set, resolved into an ordered string map
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    map: IndexMap<String, String>,
}

impl Attrs {
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Set a plain attribute. An existing key keeps its position, the value
    /// is replaced (last write wins).
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map.insert(name.into(), value.into());
        self
    }

    /// Append class names, joined with a single space
    pub fn class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.push_class(&class.into());
        }
        self
    }

    /// Append class names whose flag is set
    pub fn class_if<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        for (class, enabled) in classes {
            if enabled {
                self.push_class(&class.into());
            }
        }
        self
    }

    /// Set the style attribute from property/value pairs, joined as
    /// `prop: value; prop: value`
    pub fn style<I, K, V>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let joined = properties
            .into_iter()
            .map(|(property, value)| format!("{}: {}", property.into(), value.into()))
            .collect::<Vec<_>>()
            .join("; ");
        self.map.insert("style".to_string(), joined);
        self
    }

    /// Set `data-*` attributes, one per entry
    pub fn data<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.prefixed("data", entries)
    }

    /// Set `aria-*` attributes, one per entry
    pub fn aria<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.prefixed("aria", entries)
    }

    /// Resolve into the ordered attribute map the core consumes
    pub fn into_map(self) -> Attributes {
        self.map
    }

    fn prefixed<I, K, V>(mut self, prefix: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.map
                .insert(format!("{}-{}", prefix, key.into()), value.into());
        }
        self
    }

    fn push_class(&mut self, class: &str) {
        match self.map.get_mut("class") {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            _ => {
                self.map.insert("class".to_string(), class.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_order_last_write_wins() {
        let map = Attrs::new()
            .set("lang", "en")
            .set("dir", "ltr")
            .set("lang", "de")
            .into_map();
        let pairs: Vec<_> = map
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, [("lang", "de"), ("dir", "ltr")]);
    }

    #[test]
    fn test_class_list() {
        let map = Attrs::new().class(["btn", "btn-primary"]).into_map();
        assert_eq!(map.get("class").unwrap(), "btn btn-primary");
    }

    #[test]
    fn test_class_if_filters_disabled() {
        let map = Attrs::new()
            .class(["btn"])
            .class_if([("active", true), ("hidden", false)])
            .into_map();
        assert_eq!(map.get("class").unwrap(), "btn active");
    }

    #[test]
    fn test_style_joins_properties() {
        let map = Attrs::new()
            .style([("color", "red"), ("margin", "0")])
            .into_map();
        assert_eq!(map.get("style").unwrap(), "color: red; margin: 0");
    }

    #[test]
    fn test_data_and_aria_are_flattened() {
        let map = Attrs::new()
            .data([("id", "5"), ("kind", "x")])
            .aria([("hidden", "true")])
            .into_map();
        assert_eq!(map.get("data-id").unwrap(), "5");
        assert_eq!(map.get("data-kind").unwrap(), "x");
        assert_eq!(map.get("aria-hidden").unwrap(), "true");
    }
}
