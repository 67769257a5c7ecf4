//! Markup tree serialization
//!
//! Converts node trees into markup text. Traversal is a single recursive
//! top-down pass; the depth is passed explicitly into every call and the
//! tree is never mutated. Minified and beautified output differ only in
//! whitespace, never in tag structure or ordering.

use crate::encoding;
use crate::format::{escape_entities, is_void, Formatter};
use crate::node::{Attributes, Node};
use crate::options::{EmptyAttributes, Mode, OptionMap, Options};
use crate::RenderError;

/// Serialize top-level nodes with already-resolved options
pub fn serialize(nodes: &[Node], options: &Options) -> Result<String, RenderError> {
    serialize_with(nodes, &Formatter::from_options(options.clone()))
}

/// Serialize top-level nodes with a sparse option overlay.
///
/// Absent keys take the documented defaults, unrecognized keys are ignored.
pub fn render(nodes: &[Node], overlay: &OptionMap) -> Result<String, RenderError> {
    serialize_with(nodes, &Formatter::new(overlay))
}

/// Serialize top-level nodes against a resolved [`Formatter`].
///
/// Each node renders at depth 0; the configured output encoding is applied
/// exactly once to the concatenated result.
pub fn serialize_with(nodes: &[Node], formatter: &Formatter) -> Result<String, RenderError> {
    let mut out = String::with_capacity(1024);
    for node in nodes {
        serialize_node(node, formatter, 0, &mut out);
    }
    encoding::transcode(&out, formatter.encoding())
}

fn serialize_node(node: &Node, formatter: &Formatter, depth: usize, out: &mut String) {
    match node {
        Node::Element {
            name,
            attributes,
            children,
        } => serialize_element(name, attributes, children, formatter, depth, out),

        Node::Text(data) => {
            out.push_str(&formatter.indent(depth));
            out.push_str(&formatter.encode_entities(data));
            out.push_str(formatter.newline());
        }

        Node::CData(data) => {
            out.push_str(&formatter.indent(depth));
            out.push_str("<![CDATA[");
            out.push_str(data);
            out.push_str("]]>");
            out.push_str(formatter.newline());
        }

        Node::Comment(data) => {
            if !formatter.has_comments() {
                return;
            }
            let padding = formatter.comments_padding();
            out.push_str(&formatter.indent(depth));
            out.push_str("<!--");
            out.push_str(padding);
            out.push_str(&formatter.encode_entities(data));
            out.push_str(padding);
            out.push_str("-->");
            out.push_str(formatter.newline());
        }

        Node::ConditionalComment {
            condition,
            children,
        } => {
            if !formatter.has_conditional_comments() {
                return;
            }
            let indent = formatter.indent(depth);
            out.push_str(&indent);
            out.push_str("<!--[if ");
            out.push_str(condition);
            out.push_str("]>");
            out.push_str(formatter.newline());
            for child in children {
                serialize_node(child, formatter, depth + 1, out);
            }
            out.push_str(&indent);
            out.push_str("<![endif]-->");
            out.push_str(formatter.newline());
        }
    }
}

fn serialize_element(
    name: &str,
    attributes: &Attributes,
    children: &[Node],
    formatter: &Formatter,
    depth: usize,
    out: &mut String,
) {
    let attrs = serialize_attributes(attributes, formatter);
    let indent = formatter.indent(depth);

    if !children.is_empty() {
        // a lone text child stays on the opening line unless configured out
        if let [Node::Text(data)] = children {
            if !formatter.single_text_on_new_line() {
                out.push_str(&indent);
                out.push('<');
                out.push_str(name);
                out.push_str(&attrs);
                out.push('>');
                out.push_str(&formatter.encode_entities(data));
                out.push_str("</");
                out.push_str(name);
                out.push('>');
                out.push_str(formatter.newline());
                return;
            }
        }

        out.push_str(&indent);
        out.push('<');
        out.push_str(name);
        out.push_str(&attrs);
        out.push('>');
        out.push_str(formatter.newline());
        for child in children {
            serialize_node(child, formatter, depth + 1, out);
        }
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        out.push_str(formatter.newline());
        return;
    }

    out.push_str(&indent);
    match formatter.mode() {
        Mode::Html if is_void(name) => {
            out.push('<');
            out.push_str(name);
            out.push_str(&attrs);
            out.push_str(if formatter.close_void() { "/>" } else { ">" });
        }
        Mode::Html => {
            out.push('<');
            out.push_str(name);
            out.push_str(&attrs);
            out.push_str("></");
            out.push_str(name);
            out.push('>');
        }
        Mode::Xhtml | Mode::Xml => {
            out.push('<');
            out.push_str(name);
            out.push_str(&attrs);
            out.push_str("/>");
        }
    }
    out.push_str(formatter.newline());
}

/// Render attributes in insertion order, prefixed by a single space when
/// non-empty. Values are always escaped; keys are emitted exactly as stored.
fn serialize_attributes(attributes: &Attributes, formatter: &Formatter) -> String {
    let mut parts = Vec::new();
    for (name, value) in attributes {
        if value.is_empty() {
            match formatter.empty_attributes() {
                EmptyAttributes::Preserve => parts.push(format!("{}=\"\"", name)),
                EmptyAttributes::Remove => {}
                EmptyAttributes::NameOnly => parts.push(name.clone()),
            }
        } else {
            parts.push(format!("{}=\"{}\"", name, escape_entities(value)));
        }
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}
