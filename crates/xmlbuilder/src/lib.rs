//! # xmlbuilder
//!
//! Generate XML/HTML markup from code without string concatenation.
//!
//! A tree of typed nodes is assembled through a nested builder-callback API
//! and serialized under a configurable formatting policy (indentation,
//! newlines, entity encoding, void-element handling, comment rendering).
//!
//! ## Design
//!
//! The heavy lifting lives in `xmlbuilder-core`: the [`Node`] sum type, the
//! option resolver and the recursive serializer. This crate is the
//! construction layer on top: closure-driven [`Builder`]/[`Document`],
//! [`Attrs`] shorthands for `class`/`style`/`data-*`/`aria-*`, and the
//! [`tag_name`] identifier conversion.
//!
//! ## Example
//!
//! ```rust
//! use xmlbuilder::{Attrs, Document, Options};
//!
//! let document = Document::build(|b| {
//!     b.element_with("html", Attrs::new().set("lang", "en"), |b| {
//!         b.element("body", |b| {
//!             b.text("Hello World");
//!         });
//!     });
//! });
//!
//! let minified = document
//!     .render(&Options {
//!         beautify: false,
//!         ..Options::default()
//!     })
//!     .unwrap();
//! assert_eq!(minified, "<html lang=\"en\"><body>Hello World</body></html>");
//! ```
//!
//! ## Example (option overlay)
//!
//! ```rust
//! use xmlbuilder::{Document, OptionMap};
//!
//! let document = Document::build(|b| {
//!     b.tag("br");
//! });
//!
//! let mut overlay = OptionMap::new();
//! overlay.insert("closeVoid".to_string(), false.into());
//! assert_eq!(document.render_with(&overlay).unwrap(), "<br>\n");
//! ```

mod attrs;
mod builder;
mod utilities;

pub use attrs::Attrs;
pub use builder::{Builder, Document};
pub use utilities::tag_name;

pub use xmlbuilder_core::{
    is_void, render, serialize, Attributes, EmptyAttributes, Encoding, Formatter, Mode, Node,
    NodeRef, OptionMap, OptionValue, Options, RenderError, Result, VOID_ELEMENTS,
};
