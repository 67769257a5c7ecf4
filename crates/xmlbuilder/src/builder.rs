//! Builder - closure-driven construction of markup trees.

use std::fmt;

use xmlbuilder_core::{serialize, Attributes, Node, OptionMap, Options, Result};

use crate::attrs::Attrs;

/// Accumulates an ordered sequence of sibling nodes.
///
/// Nested structure is expressed with closures: each `element` call hands a
/// fresh `Builder` to its callback and adopts whatever the callback pushed
/// as the element's children.
#[derive(Debug, Default)]
pub struct Builder {
    nodes: Vec<Node>,
}

impl Builder {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Push an element whose children are produced by `f`
    pub fn element<F>(&mut self, name: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Builder),
    {
        self.element_with(name, Attrs::new(), f)
    }

    /// Push an element with attributes and children produced by `f`
    pub fn element_with<F>(&mut self, name: &str, attrs: Attrs, f: F) -> &mut Self
    where
        F: FnOnce(&mut Builder),
    {
        let mut inner = Builder::new();
        f(&mut inner);
        self.nodes
            .push(Node::element(name, attrs.into_map(), inner.nodes));
        self
    }

    /// Push an empty element
    pub fn tag(&mut self, name: &str) -> &mut Self {
        self.tag_with(name, Attrs::new())
    }

    /// Push an empty element with attributes
    pub fn tag_with(&mut self, name: &str, attrs: Attrs) -> &mut Self {
        self.nodes
            .push(Node::element(name, attrs.into_map(), Vec::new()));
        self
    }

    /// Push a text node
    pub fn text(&mut self, data: impl Into<String>) -> &mut Self {
        self.nodes.push(Node::text(data));
        self
    }

    /// Push a CDATA node
    pub fn cdata(&mut self, data: impl Into<String>) -> &mut Self {
        self.nodes.push(Node::cdata(data));
        self
    }

    /// Push a comment node
    pub fn comment(&mut self, data: impl Into<String>) -> &mut Self {
        self.nodes.push(Node::comment(data));
        self
    }

    /// Push a conditional comment whose content is produced by `f`
    pub fn conditional<F>(&mut self, condition: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Builder),
    {
        let mut inner = Builder::new();
        f(&mut inner);
        self.nodes
            .push(Node::conditional_comment(condition, inner.nodes));
        self
    }

    /// Push a prebuilt node verbatim
    pub fn node(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }
}

/// A finished tree of top-level nodes, optionally headed by an XML
/// declaration.
#[derive(Debug, Clone)]
pub struct Document {
    declaration: Option<Attributes>,
    nodes: Vec<Node>,
}

impl Document {
    /// Build a document from a builder callback
    pub fn build<F>(f: F) -> Self
    where
        F: FnOnce(&mut Builder),
    {
        let mut builder = Builder::new();
        f(&mut builder);
        Self {
            declaration: None,
            nodes: builder.nodes,
        }
    }

    /// Build a document headed by `<?xml ...?>` with the given attributes
    pub fn build_with_declaration<F>(declaration: Attrs, f: F) -> Self
    where
        F: FnOnce(&mut Builder),
    {
        let mut document = Self::build(f);
        document.declaration = Some(declaration.into_map());
        document
    }

    /// The top-level nodes in order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consume the document, yielding the top-level nodes
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Render with already-resolved options
    pub fn render(&self, options: &Options) -> Result<String> {
        let body = serialize(&self.nodes, options)?;
        let Some(declaration) = &self.declaration else {
            return Ok(body);
        };

        let mut out = String::with_capacity(body.len() + 64);
        out.push_str("<?xml");
        for (name, value) in declaration {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push_str("?>");
        if options.beautify {
            out.push_str(&options.nl);
        }
        out.push_str(&body);
        Ok(out)
    }

    /// Render with a sparse option overlay (absent keys take the defaults)
    pub fn render_with(&self, overlay: &OptionMap) -> Result<String> {
        let (options, _) = Options::resolve(overlay);
        self.render(&options)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render(&Options::default()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minified() -> Options {
        Options {
            beautify: false,
            ..Options::default()
        }
    }

    #[test]
    fn test_nested_elements() {
        let document = Document::build(|b| {
            b.element("html", |b| {
                b.element("body", |b| {
                    b.text("Hi");
                });
            });
        });
        let result = document.render(&minified()).unwrap();
        assert_eq!(result, "<html><body>Hi</body></html>");
    }

    #[test]
    fn test_element_with_attributes() {
        let document = Document::build(|b| {
            b.element_with("html", Attrs::new().set("lang", "en"), |b| {
                b.tag_with("meta", Attrs::new().set("charset", "utf-8"));
            });
        });
        let result = document.render(&minified()).unwrap();
        assert_eq!(result, "<html lang=\"en\"><meta charset=\"utf-8\"/></html>");
    }

    #[test]
    fn test_sibling_order() {
        let document = Document::build(|b| {
            b.comment("header");
            b.tag("hr");
            b.text("tail");
        });
        let result = document.render(&minified()).unwrap();
        assert_eq!(result, "<!--header--><hr/>tail");
    }

    #[test]
    fn test_cdata_and_conditional() {
        let document = Document::build(|b| {
            b.element("script", |b| {
                b.cdata("if (a < b) {}");
            });
            b.conditional("lt IE 9", |b| {
                b.element("p", |b| {
                    b.text("old");
                });
            });
        });
        let result = document.render(&minified()).unwrap();
        assert_eq!(
            result,
            "<script><![CDATA[if (a < b) {}]]></script><!--[if lt IE 9]><p>old</p><![endif]-->"
        );
    }

    #[test]
    fn test_prebuilt_node_is_adopted_verbatim() {
        let mut list = Node::empty_element("ul");
        list.add_child(Node::empty_element("li"));

        let document = Document::build(|b| {
            b.node(list);
        });
        let result = document.render(&minified()).unwrap();
        assert_eq!(result, "<ul><li></li></ul>");
    }

    #[test]
    fn test_declaration() {
        let document = Document::build_with_declaration(
            Attrs::new().set("version", "1.0").set("encoding", "UTF-8"),
            |b| {
                b.tag("root");
            },
        );
        let result = document.render(&minified()).unwrap();
        assert_eq!(result, "<?xml version=\"1.0\" encoding=\"UTF-8\"?><root></root>");

        let beautified = document.render(&Options::default()).unwrap();
        assert_eq!(
            beautified,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root></root>\n"
        );
    }

    #[test]
    fn test_display_uses_defaults() {
        let document = Document::build(|b| {
            b.element("p", |b| {
                b.text("Hi");
            });
        });
        assert_eq!(document.to_string(), "<p>Hi</p>\n");
    }

    #[test]
    fn test_render_with_overlay() {
        let document = Document::build(|b| {
            b.tag("br");
        });
        let mut overlay = OptionMap::new();
        overlay.insert("beautify".to_string(), false.into());
        overlay.insert("closeVoid".to_string(), false.into());
        assert_eq!(document.render_with(&overlay).unwrap(), "<br>");
    }
}
