//! Tagless runs of content.

use std::fmt;

use crate::content::{Content, Leaf, normalize_into};
use crate::element::render_leaves;
use crate::error::TaggedError;
use crate::markup::Markup;
use crate::tag::Tag;

/// An ordered run of normalized content without a wrapping tag.
///
/// Deferred producers inside a collection receive a nameless placeholder
/// tag; changes they make to it have no effect on the output.
#[derive(Debug, Default)]
pub struct Collection {
    leaves: Vec<Leaf>,
}

impl Collection {
    /// Normalize `content` into a new collection.
    pub fn new(content: impl Into<Content>) -> Result<Self, TaggedError> {
        let mut collection = Self::default();
        collection.push(content)?;
        Ok(collection)
    }

    /// Append content.
    pub fn push(&mut self, content: impl Into<Content>) -> Result<&mut Self, TaggedError> {
        normalize_into(content.into(), &mut self.leaves)?;
        Ok(self)
    }

    /// Whether no leaf is known to produce output.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves.iter().all(Leaf::is_empty)
    }

    /// Normalized leaves in render order.
    #[must_use]
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Render the concatenated leaves.
    pub fn render(&self, pretty: bool) -> Result<Markup, TaggedError> {
        let mut placeholder = Tag::placeholder();
        render_leaves(&self.leaves, &mut placeholder, pretty, 0)
    }
}

impl From<Collection> for Content {
    fn from(collection: Collection) -> Self {
        Content::Lazy(Box::new(collection.leaves.into_iter().map(Content::from)))
    }
}

impl From<Leaf> for Content {
    fn from(leaf: Leaf) -> Self {
        match leaf {
            Leaf::Text(text) => Content::Text(text),
            Leaf::Markup(markup) => Content::Markup(markup),
            Leaf::Element(element) => Content::Element(Box::new(element)),
            Leaf::Deferred(producer) => Content::Deferred(producer),
        }
    }
}

/// Compact rendering; a render error is logged and nothing is written.
impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render(false) {
            Ok(markup) => f.write_str(markup.as_str()),
            Err(e) => {
                tracing::warn!(error = %e, "Collection failed to render");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn test_collection_renders_without_wrapper() {
        let collection = Collection::new(vec![
            Content::from("a"),
            Element::new("b", "x").unwrap().into(),
            Content::raw("<hr>"),
        ])
        .unwrap();
        assert_eq!(collection.to_string(), "a<b>x</b><hr>");
    }

    #[test]
    fn test_collection_emptiness() {
        assert!(Collection::new(()).unwrap().is_empty());
        assert!(!Collection::new(Content::from_fn(|| "")).unwrap().is_empty());
    }

    #[test]
    fn test_collection_display_swallows_producer_error() {
        let collection = Collection::new(vec![
            Content::from("a"),
            Content::deferred(|_| Err(TaggedError::producer("boom"))),
        ])
        .unwrap();
        assert_eq!(collection.to_string(), "");
        assert!(collection.render(false).is_err());
    }

    #[test]
    fn test_collection_into_element() {
        let collection = Collection::new(["x", "y"]).unwrap();
        let el = Element::new("p", collection).unwrap();
        assert_eq!(el.to_string(), "<p>xy</p>");
        assert_eq!(el.len(), 2);
    }
}
