//! xmlbuilder-core - markup node tree and serialization
//!
//! This crate provides the core data structures and serialization for
//! programmatically generated XML/HTML markup. It is consumed by the
//! `xmlbuilder` crate, which layers a fluent construction API on top.
//!
//! # Architecture
//!
//! ```text
//! Builder API ──constructs──▶ ┌───────────┐
//!                             │           │
//!                             │ Node tree │ ──Formatter──▶ markup string
//! Prebuilt nodes ───────────▶ │           │
//!                             └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use xmlbuilder_core::{serialize, Attributes, Node, Options};
//!
//! let tree = Node::element(
//!     "html",
//!     Attributes::new(),
//!     vec![Node::element(
//!         "body",
//!         Attributes::new(),
//!         vec![Node::text("Hello World")],
//!     )],
//! );
//!
//! let markup = serialize(&[tree], &Options::default()).unwrap();
//! assert!(markup.contains("Hello World"));
//! ```

mod encoding;
mod format;
mod node;
mod options;
mod serialize;

pub use encoding::{transcode, Encoding};
pub use format::{is_void, Formatter, VOID_ELEMENTS};
pub use node::{Attributes, Node, NodeRef};
pub use options::{EmptyAttributes, Mode, OptionMap, OptionValue, Options};
pub use serialize::{render, serialize, serialize_with};

/// Error type for render operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unsupported output encoding: {0}")]
    UnsupportedEncoding(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
