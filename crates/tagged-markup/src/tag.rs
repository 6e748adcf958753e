//! Element open/close markup and attributes.

use std::fmt;

use crate::attributes::{Attributes, IntoAttributeValue};
use crate::error::TaggedError;
use crate::markup::Markup;
use crate::shorthand::Shorthand;
use crate::tables;

/// A named tag with attributes and a render-empty policy.
///
/// Names accept the compact `[?]name.class#id` shorthand; a leading `?`
/// turns off rendering when the tag has no content.
///
/// # Example
///
/// ```
/// use tagged_markup::{Markup, Tag};
///
/// let tag = Tag::new("a.button#go").unwrap();
/// assert_eq!(tag.open(), r#"<a class="button" id="go">"#);
/// assert_eq!(tag.render_with(&Markup::new("Go")).as_str(), r#"<a class="button" id="go">Go</a>"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attributes: Attributes,
    render_empty: bool,
}

impl Tag {
    /// Create a tag from a (possibly compact) name.
    pub fn new(name: &str) -> Result<Self, TaggedError> {
        let parsed = Shorthand::parse(name)?;
        let mut tag = Self {
            name: parsed.name,
            attributes: Attributes::new(),
            render_empty: parsed.render_empty,
        };
        tag.apply_shorthand(parsed.classes, parsed.id);
        Ok(tag)
    }

    /// Create a tag and merge explicit attributes over the shorthand ones.
    ///
    /// Class tokens from both sources are combined.
    pub fn with_attributes(name: &str, attributes: &Attributes) -> Result<Self, TaggedError> {
        let mut tag = Self::new(name)?;
        tag.attributes.extend_from(attributes);
        Ok(tag)
    }

    /// Nameless tag handed to producers rendered outside any element.
    pub(crate) fn placeholder() -> Self {
        Self {
            name: String::new(),
            attributes: Attributes::new(),
            render_empty: true,
        }
    }

    fn apply_shorthand(&mut self, classes: Vec<String>, id: Option<String>) {
        self.attributes.add_classes(classes.iter().map(String::as_str));
        if let Some(id) = id {
            self.attributes.set("id", id);
        }
    }

    /// Element name without shorthand parts.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the tag.
    ///
    /// Shorthand classes and id in `name` are added to the existing
    /// attributes.
    pub fn set_name(&mut self, name: &str) -> Result<&mut Self, TaggedError> {
        let parsed = Shorthand::parse(name)?;
        self.name = parsed.name;
        if !parsed.render_empty {
            self.render_empty = false;
        }
        self.apply_shorthand(parsed.classes, parsed.id);
        Ok(self)
    }

    /// Attribute container.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable attribute container.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Set an attribute (see [`Attributes::set`]).
    pub fn set_attribute(&mut self, name: &str, value: impl IntoAttributeValue) -> &mut Self {
        self.attributes.set(name, value);
        self
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl IntoAttributeValue) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// The `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attributes.id()
    }

    /// Set or clear the `id` attribute.
    pub fn set_id(&mut self, id: Option<&str>) -> &mut Self {
        self.attributes.set_id(id);
        self
    }

    /// Add class tokens.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.attributes.add_class(class);
        self
    }

    /// Remove a class token.
    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        self.attributes.remove_class(class);
        self
    }

    /// Whether the class token is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attributes.has_class(class)
    }

    /// Whether the tag is laid out inline.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        tables::is_inline(&self.name)
    }

    /// Whether the tag is laid out as a block.
    #[must_use]
    pub fn is_block(&self) -> bool {
        tables::is_block(&self.name)
    }

    /// Whether the tag is a void element.
    #[must_use]
    pub fn is_void(&self) -> bool {
        tables::is_void(&self.name)
    }

    /// Set whether the tag renders when it has no content.
    pub fn set_render_empty(&mut self, render: bool) -> &mut Self {
        self.render_empty = render;
        self
    }

    /// Whether the tag renders when it has no content.
    #[must_use]
    pub fn will_render_empty(&self) -> bool {
        self.render_empty
    }

    /// Opening markup: `<name attrs>`.
    #[must_use]
    pub fn open(&self) -> String {
        format!("<{}{}>", self.name, self.attributes.render())
    }

    /// Closing markup: `</name>`, or empty for void elements.
    #[must_use]
    pub fn close(&self) -> String {
        if self.is_void() {
            String::new()
        } else {
            format!("</{}>", self.name)
        }
    }

    /// Wrap `inner` with this tag.
    ///
    /// Void elements ignore `inner`. Empty `inner` renders nothing when the
    /// render-empty policy is off, and an explicit open/close pair otherwise.
    #[must_use]
    pub fn render_with(&self, inner: &Markup) -> Markup {
        if self.is_void() {
            return Markup::new(self.open());
        }
        if inner.is_empty() && !self.render_empty {
            return Markup::default();
        }

        let open = self.open();
        let close = self.close();
        let mut out = String::with_capacity(open.len() + inner.len() + close.len());
        out.push_str(&open);
        out.push_str(inner.as_str());
        out.push_str(&close);
        Markup::new(out)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render_with(&Markup::default()).as_str())
    }
}
