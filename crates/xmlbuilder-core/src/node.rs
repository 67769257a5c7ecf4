//! Markup node tree
//!
//! This module defines the node variants for representing an XML/HTML-like
//! document. The tree is the common intermediate format produced by builders
//! and consumed by the serializer.

use indexmap::IndexMap;

/// Ordered attribute map. Insertion order is preserved on output; writing an
/// existing key replaces its value but keeps its original position.
pub type Attributes = IndexMap<String, String>;

/// A renderable markup node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Named element with attributes and child nodes
    Element {
        name: String,
        attributes: Attributes,
        children: Vec<Node>,
    },

    /// Character data, entity-encoded on output when encoding is enabled
    Text(String),

    /// Character data emitted verbatim inside `<![CDATA[` ... `]]>`
    CData(String),

    /// `<!-- ... -->`
    Comment(String),

    /// Downlevel conditional comment `<!--[if ...]>` ... `<![endif]-->`
    ConditionalComment {
        condition: String,
        children: Vec<Node>,
    },
}

impl Node {
    /// Create an element node
    pub fn element(
        name: impl Into<String>,
        attributes: Attributes,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// Create an element node with no attributes or children
    pub fn empty_element(name: impl Into<String>) -> Self {
        Node::Element {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(data: impl Into<String>) -> Self {
        Node::Text(data.into())
    }

    /// Create a CDATA node
    pub fn cdata(data: impl Into<String>) -> Self {
        Node::CData(data.into())
    }

    /// Create a comment node
    pub fn comment(data: impl Into<String>) -> Self {
        Node::Comment(data.into())
    }

    /// Create a conditional comment node
    pub fn conditional_comment(condition: impl Into<String>, children: Vec<Node>) -> Self {
        Node::ConditionalComment {
            condition: condition.into(),
            children,
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get the element name, if this is an element
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute. An existing key keeps its position; the value is
    /// replaced (last write wins). No-op for non-element nodes.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        if let Node::Element { attributes, .. } = self {
            attributes.insert(name.into(), value.into());
        }
    }

    /// Get the child nodes. Leaf variants yield an empty slice.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } | Node::ConditionalComment { children, .. } => {
                children
            }
            _ => &[],
        }
    }

    /// Add a child node. No-op for leaf variants.
    pub fn add_child(&mut self, child: Node) {
        match self {
            Node::Element { children, .. } | Node::ConditionalComment { children, .. } => {
                children.push(child);
            }
            _ => {}
        }
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(data) => data.clone(),
            _ => self
                .children()
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

/// A reference to a node together with its ancestor chain.
///
/// Nodes own their children and carry no parent pointers; a `NodeRef` is the
/// cursor used for upward queries. The chain is derived at walk time and is
/// never consulted while rendering.
#[derive(Debug, Clone)]
pub struct NodeRef<'a> {
    node: &'a Node,
    ancestors: Vec<&'a Node>,
}

impl<'a> NodeRef<'a> {
    /// Create a root-level reference
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            ancestors: Vec::new(),
        }
    }

    /// The referenced node
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// The immediate parent, if any
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        let mut ancestors = self.ancestors.clone();
        let node = ancestors.pop()?;
        Some(NodeRef { node, ancestors })
    }

    /// Distance to the root. A root-level node has depth 0.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// The topmost ancestor, or the node itself at root level
    pub fn root(&self) -> &'a Node {
        self.ancestors.first().copied().unwrap_or(self.node)
    }

    /// Check if the referenced node has no children
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// References to the child nodes, each carrying the extended chain
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        self.node
            .children()
            .iter()
            .map(|child| {
                let mut ancestors = self.ancestors.clone();
                ancestors.push(self.node);
                NodeRef {
                    node: child,
                    ancestors,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::empty_element("div");
        assert!(node.is_element());
        assert_eq!(node.name(), Some("div"));
        assert!(node.is_leaf());
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes_last_write_wins() {
        let mut node = Node::empty_element("a");
        node.set_attr("href", "https://example.com");
        node.set_attr("title", "Example");
        node.set_attr("href", "https://example.org");

        assert_eq!(node.attr("href"), Some("https://example.org"));
        assert_eq!(node.attr("class"), None);

        // the rewritten key keeps its original position
        if let Node::Element { attributes, .. } = &node {
            let keys: Vec<_> = attributes.keys().map(String::as_str).collect();
            assert_eq!(keys, ["href", "title"]);
        }
    }

    #[test]
    fn test_children() {
        let mut parent = Node::empty_element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::empty_element("span"));
        parent.add_child(Node::text("World"));

        assert_eq!(parent.children().len(), 3);
        assert!(!parent.is_leaf());
    }

    #[test]
    fn test_text_content() {
        let mut div = Node::empty_element("div");
        div.add_child(Node::text("Hello "));
        let mut span = Node::empty_element("span");
        span.add_child(Node::text("World"));
        div.add_child(span);

        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_node_ref_depth_and_parent() {
        let mut body = Node::empty_element("body");
        body.add_child(Node::text("Hi"));
        let mut html = Node::empty_element("html");
        html.add_child(body);

        let root = NodeRef::new(&html);
        assert_eq!(root.depth(), 0);
        assert!(root.parent().is_none());

        let body_ref = root.children().remove(0);
        assert_eq!(body_ref.depth(), 1);
        assert_eq!(body_ref.parent().unwrap().node().name(), Some("html"));

        let text_ref = body_ref.children().remove(0);
        assert_eq!(text_ref.depth(), 2);
        assert_eq!(text_ref.root().name(), Some("html"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Node::empty_element("ul");
        original.add_child(Node::empty_element("li"));

        let mut copy = original.clone();
        copy.add_child(Node::empty_element("li"));

        assert_eq!(original.children().len(), 1);
        assert_eq!(copy.children().len(), 2);
    }
}
