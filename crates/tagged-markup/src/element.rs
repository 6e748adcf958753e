//! Elements: tags that own an ordered sequence of content.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::attributes::Attributes;
use crate::content::{Content, Leaf, normalize_into};
use crate::error::TaggedError;
use crate::escape::escape_html;
use crate::markup::Markup;
use crate::tag::Tag;

/// Indentation unit for pretty rendering.
const INDENT: &str = "  ";

/// A tag with children.
///
/// Content is normalized when inserted; deferred producers run at render
/// time, on every render. An element exclusively owns its subtree.
///
/// Tag methods (attributes, classes, render-empty policy) are reachable
/// through `Deref<Target = Tag>`.
///
/// # Example
///
/// ```
/// use tagged_markup::Element;
///
/// let mut list = Element::new("ul.menu", ()).unwrap();
/// list.push(Element::new("li", "Home").unwrap()).unwrap();
/// list.push(Element::new("li", "About").unwrap()).unwrap();
/// assert_eq!(
///     list.to_string(),
///     r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#
/// );
/// ```
#[derive(Debug)]
pub struct Element {
    tag: Tag,
    children: Vec<Leaf>,
}

impl Element {
    /// Create an element from a (possibly compact) name and initial content.
    pub fn new(name: &str, content: impl Into<Content>) -> Result<Self, TaggedError> {
        let mut element = Self::from_tag(Tag::new(name)?);
        element.push(content)?;
        Ok(element)
    }

    /// Create an element with explicit attributes merged over the shorthand.
    pub fn with_attributes(
        name: &str,
        content: impl Into<Content>,
        attributes: &Attributes,
    ) -> Result<Self, TaggedError> {
        let mut element = Self::from_tag(Tag::with_attributes(name, attributes)?);
        element.push(content)?;
        Ok(element)
    }

    /// Create an element, accepting a `>` separated nesting path.
    ///
    /// `"div.card > p"` builds a `div` wrapping a `p` that holds `content`.
    /// Attributes apply to the innermost element.
    pub fn create(
        path: &str,
        content: impl Into<Content>,
        attributes: Option<&Attributes>,
    ) -> Result<Self, TaggedError> {
        let mut names = path.rsplit('>');
        let innermost = names.next().unwrap_or_default();
        let mut element = match attributes {
            Some(attrs) => Self::with_attributes(innermost, content, attrs)?,
            None => Self::new(innermost, content)?,
        };
        for name in names {
            element = Self::new(name, element)?;
        }
        Ok(element)
    }

    /// Wrap an existing tag with no content.
    #[must_use]
    pub fn from_tag(tag: Tag) -> Self {
        Self {
            tag,
            children: Vec::new(),
        }
    }

    /// The underlying tag.
    #[must_use]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Drop the children and keep the tag.
    #[must_use]
    pub fn into_tag(self) -> Tag {
        self.tag
    }

    /// Append content.
    pub fn push(&mut self, content: impl Into<Content>) -> Result<&mut Self, TaggedError> {
        normalize_into(content.into(), &mut self.children)?;
        Ok(self)
    }

    /// Append every item of `items`.
    pub fn merge<I>(&mut self, items: I) -> Result<&mut Self, TaggedError>
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        for item in items {
            self.push(item)?;
        }
        Ok(self)
    }

    /// Remove all children.
    pub fn clear(&mut self) -> &mut Self {
        self.children.clear();
        self
    }

    /// Replace all children with `content`.
    pub fn set_body(&mut self, content: impl Into<Content>) -> Result<&mut Self, TaggedError> {
        self.clear().push(content)
    }

    /// Whether no child is known to produce output.
    ///
    /// Deferred children are never treated as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(Leaf::is_empty)
    }

    /// Number of normalized children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Normalized children in render order.
    #[must_use]
    pub fn children(&self) -> &[Leaf] {
        &self.children
    }

    /// Render the element and its subtree.
    ///
    /// With `pretty`, block-level children go on their own indented lines.
    pub fn render(&self, pretty: bool) -> Result<Markup, TaggedError> {
        self.render_at(pretty, 0)
    }

    /// Render only the children, without this element's tags.
    pub fn render_content(&self, pretty: bool) -> Result<Markup, TaggedError> {
        let mut tag = self.tag.clone();
        render_leaves(&self.children, &mut tag, pretty, 0)
    }

    fn render_at(&self, pretty: bool, depth: usize) -> Result<Markup, TaggedError> {
        // Producers may adjust the tag for this render only.
        let mut tag = self.tag.clone();
        let inner = render_leaves(&self.children, &mut tag, pretty, depth)?;
        Ok(tag.render_with(&inner))
    }
}

impl Deref for Element {
    type Target = Tag;

    fn deref(&self) -> &Tag {
        &self.tag
    }
}

impl DerefMut for Element {
    fn deref_mut(&mut self) -> &mut Tag {
        &mut self.tag
    }
}

impl From<Tag> for Element {
    fn from(tag: Tag) -> Self {
        Self::from_tag(tag)
    }
}

/// Compact rendering for formatting.
///
/// A render error is logged and nothing is written; use [`Element::render`]
/// to observe the error.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render(false) {
            Ok(markup) => f.write_str(markup.as_str()),
            Err(e) => {
                tracing::warn!(tag = %self.tag.name(), error = %e, "Element failed to render");
                Ok(())
            }
        }
    }
}

/// Render a run of leaves, handing `tag` to deferred producers.
pub(crate) fn render_leaves(
    leaves: &[Leaf],
    tag: &mut Tag,
    pretty: bool,
    depth: usize,
) -> Result<Markup, TaggedError> {
    let mut state = RenderState {
        tag,
        pretty,
        depth,
        out: String::new(),
        broke_line: false,
    };
    for leaf in leaves {
        state.leaf(leaf)?;
    }
    Ok(state.finish())
}

/// Accumulator for one render pass over an element's children.
struct RenderState<'t> {
    tag: &'t mut Tag,
    pretty: bool,
    depth: usize,
    out: String,
    /// A block child was placed on its own line.
    broke_line: bool,
}

impl RenderState<'_> {
    fn leaf(&mut self, leaf: &Leaf) -> Result<(), TaggedError> {
        if leaf.is_empty() {
            return Ok(());
        }
        match leaf {
            Leaf::Text(text) => self.out.push_str(&escape_html(text)),
            Leaf::Markup(markup) => self.out.push_str(markup.as_str()),
            Leaf::Element(element) => self.element(element)?,
            Leaf::Deferred(producer) => {
                tracing::trace!(tag = %self.tag.name(), "Evaluating deferred content");
                let produced = producer.invoke(self.tag)?;
                self.content(produced)?;
            }
        }
        Ok(())
    }

    fn element(&mut self, element: &Element) -> Result<(), TaggedError> {
        let markup = element.render_at(self.pretty, self.depth + 1)?;
        if markup.is_empty() {
            return Ok(());
        }
        if self.pretty && element.is_block() {
            self.newline(self.depth + 1);
            self.broke_line = true;
        }
        self.out.push_str(markup.as_str());
        Ok(())
    }

    /// Render content returned by a producer.
    ///
    /// Lazy sequences are drained one item at a time.
    fn content(&mut self, content: Content) -> Result<(), TaggedError> {
        match content {
            Content::Lazy(iter) => {
                for item in iter {
                    self.content(item)?;
                }
            }
            other => {
                let mut leaves = Vec::new();
                normalize_into(other, &mut leaves)?;
                for leaf in &leaves {
                    self.leaf(leaf)?;
                }
            }
        }
        Ok(())
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    fn finish(mut self) -> Markup {
        if self.broke_line {
            self.newline(self.depth);
        }
        Markup::new(self.out)
    }
}
