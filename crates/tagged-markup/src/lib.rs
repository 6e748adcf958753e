//! Programmatic markup tree builder.
//!
//! This crate builds HTML fragments from typed values instead of string
//! concatenation. Elements are created from compact names such as
//! `"div.card#main"`, hold heterogeneous content that is normalized on
//! insertion, and render with escaping applied to every text leaf.
//!
//! # Architecture
//!
//! - [`Attributes`]: ordered attribute map with class token helpers
//! - [`Tag`]: element name, attributes and the render-empty policy
//! - [`Element`]: a tag plus normalized children; renders to [`Markup`]
//! - [`Content`]: everything that can be placed in an element, including
//!   deferred producers evaluated at render time
//! - [`list`]: container, definition and inline list builders
//! - [`HtmlFactory`]: one entry point for all of the above plus text
//!   previews
//!
//! # Example
//!
//! ```
//! use tagged_markup::{Attributes, Content, Element, HtmlFactory};
//!
//! let html = HtmlFactory::default();
//!
//! let mut attrs = Attributes::new();
//! attrs.set("href", "/docs");
//! let link = html.el("a.nav", "Docs & guides", Some(&attrs)).unwrap();
//!
//! let mut nav = Element::new("nav", link).unwrap();
//! nav.push(Content::from_fn(|| "!")).unwrap();
//!
//! assert_eq!(
//!     nav.to_string(),
//!     r#"<nav><a class="nav" href="/docs">Docs &amp; guides</a>!</nav>"#
//! );
//! ```

mod attributes;
mod collection;
mod content;
mod element;
mod error;
mod escape;
mod factory;
pub mod list;
mod markup;
mod shorthand;
mod tables;
mod tag;
mod text;

pub use attributes::{AttributeValue, Attributes, IntoAttributeValue};
pub use collection::Collection;
pub use content::{Content, Leaf, Producer, normalize};
pub use element::Element;
pub use error::{ContentError, TaggedError};
pub use escape::{escape_html, unescape_html};
pub use factory::{FactoryOptions, HtmlFactory};
pub use list::{InlineListOptions, Key};
pub use markup::Markup;
pub use tables::{is_block, is_inline, is_void};
pub use tag::Tag;
pub use text::{markup_to_text, strip_tags, truncate_chars};
