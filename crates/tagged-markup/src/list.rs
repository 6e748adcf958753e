//! List generators.
//!
//! Each generator walks an external sequence once, applies a per-item
//! transform and returns a tree rooted at one element. A missing or empty
//! sequence yields a container whose render-empty policy is off, so it
//! renders as nothing.
//!
//! Transforms receive the item, the child element being built (to which
//! they may add attributes or content), the item key and the 1-based
//! position. Whatever they return is appended to the child.

use std::fmt;

use crate::attributes::Attributes;
use crate::collection::Collection;
use crate::content::Content;
use crate::element::Element;
use crate::error::TaggedError;
use crate::tag::Tag;

/// Key of a list item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Zero-based position in an unkeyed sequence.
    Index(usize),
    /// Explicit key from a keyed sequence.
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<Key> for Content {
    fn from(key: Key) -> Self {
        match key {
            Key::Index(index) => index.into(),
            Key::Name(name) => Content::Text(name),
        }
    }
}

/// Default transform: the item itself becomes the child's content.
pub fn passthrough<T: Into<Content>>(
    item: T,
    _child: &mut Element,
    _key: &Key,
    _index: usize,
) -> Result<Content, TaggedError> {
    Ok(item.into())
}

/// Default definition list transform: the item becomes the description.
pub fn passthrough_definition<T: Into<Content>>(
    item: T,
    _term: &mut Element,
    _description: &mut Element,
    _key: &Key,
    _index: usize,
) -> Result<Content, TaggedError> {
    Ok(item.into())
}

/// Delimiter and truncation policy for [`inline_list`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineListOptions {
    /// Separator between items.
    pub delimiter: String,
    /// Separator before the last visible item (defaults to `delimiter`).
    pub final_delimiter: Option<String>,
    /// Maximum number of visible items.
    pub limit: Option<usize>,
    /// Text preceding the overflow count in the "more" marker.
    pub more_text: String,
}

impl Default for InlineListOptions {
    fn default() -> Self {
        Self {
            delimiter: ", ".to_owned(),
            final_delimiter: None,
            limit: None,
            more_text: "…+ ".to_owned(),
        }
    }
}

impl InlineListOptions {
    /// Set the interior delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the delimiter placed before the last visible item.
    #[must_use]
    pub fn with_final_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.final_delimiter = Some(delimiter.into());
        self
    }

    /// Limit the number of visible items.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn final_delimiter(&self) -> &str {
        self.final_delimiter.as_deref().unwrap_or(&self.delimiter)
    }
}

/// Build `container` holding one `child` element per item.
///
/// `attributes` apply to the container.
///
/// # Example
///
/// ```
/// use tagged_markup::{list, Attributes};
///
/// let ul = list::list(Some(vec![1, 2]), "ul", "li", list::passthrough, &Attributes::new()).unwrap();
/// assert_eq!(ul.to_string(), "<ul><li>1</li><li>2</li></ul>");
///
/// let empty = list::list(None::<Vec<i32>>, "ul", "li", list::passthrough, &Attributes::new()).unwrap();
/// assert_eq!(empty.to_string(), "");
/// ```
pub fn list<I, T, F>(
    items: Option<I>,
    container: &str,
    child: &str,
    mut transform: F,
    attributes: &Attributes,
) -> Result<Element, TaggedError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
{
    let mut parent = Element::with_attributes(container, Content::Null, attributes)?;
    parent.set_render_empty(false);
    let child_tag = Tag::new(child)?;

    let mut count = 0;
    for (position, item) in items.into_iter().flatten().enumerate() {
        let mut element = Element::from_tag(child_tag.clone());
        let content = transform(item, &mut element, &Key::Index(position), position + 1)?;
        element.push(content)?;
        parent.push(element)?;
        count += 1;
    }

    tracing::debug!(container, child, items = count, "Built list");
    Ok(parent)
}

/// Build one `name` element per item without a container.
///
/// `attributes` apply to every element.
pub fn elements<I, T, F>(
    items: Option<I>,
    name: &str,
    mut transform: F,
    attributes: &Attributes,
) -> Result<Collection, TaggedError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
{
    let tag = Tag::with_attributes(name, attributes)?;
    let mut collection = Collection::default();

    for (position, item) in items.into_iter().flatten().enumerate() {
        let mut element = Element::from_tag(tag.clone());
        let content = transform(item, &mut element, &Key::Index(position), position + 1)?;
        element.push(content)?;
        collection.push(element)?;
    }

    Ok(collection)
}

/// Build a `dl` with a `dt`/`dd` pair per keyed item.
///
/// The transform gets the term and description elements and returns the
/// description content. The description is rendered before the term is
/// checked, so the transform may fill the term; a term left empty gets the
/// item key.
///
/// # Example
///
/// ```
/// use tagged_markup::{list, Attributes};
///
/// let dl = list::definition_list(
///     Some(vec![("Name", "Ada"), ("Born", "1815")]),
///     list::passthrough_definition,
///     &Attributes::new(),
/// )
/// .unwrap();
/// assert_eq!(
///     dl.to_string(),
///     "<dl><dt>Name</dt><dd>Ada</dd><dt>Born</dt><dd>1815</dd></dl>"
/// );
/// ```
pub fn definition_list<I, K, T, F>(
    items: Option<I>,
    mut transform: F,
    attributes: &Attributes,
) -> Result<Element, TaggedError>
where
    I: IntoIterator<Item = (K, T)>,
    K: Into<Key>,
    F: FnMut(T, &mut Element, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
{
    let mut dl = Element::with_attributes("dl", Content::Null, attributes)?;
    dl.set_render_empty(false);

    let mut count = 0;
    for (position, (key, item)) in items.into_iter().flatten().enumerate() {
        let key = key.into();
        let mut term = Element::new("dt", Content::Null)?;
        let mut description = Element::new("dd", Content::Null)?;

        let body = transform(item, &mut term, &mut description, &key, position + 1)?;
        description.push(body)?;
        let description = description.render(false)?;

        if term.is_empty() {
            term.push(key)?;
        }

        dl.push(term)?;
        dl.push(description)?;
        count += 1;
    }

    tracing::debug!(items = count, "Built definition list");
    Ok(dl)
}

/// Build a delimited inline list wrapped in `span.list`.
///
/// Each item renders through an optional `span`; items that render empty
/// are dropped and do not count toward the position or the limit. Items
/// past the limit are summarized by a trailing `em.more` marker.
///
/// # Example
///
/// ```
/// use tagged_markup::list::{self, InlineListOptions};
///
/// let options = InlineListOptions::default().with_limit(2);
/// let el = list::inline_list(Some(["a", "b", "c", "d"]), list::passthrough, &options).unwrap();
/// assert_eq!(
///     el.to_string(),
///     r#"<span class="list"><span>a</span>, <span>b</span>, <em class="more">…+ 2</em></span>"#
/// );
/// ```
pub fn inline_list<I, T, F>(
    items: Option<I>,
    transform: F,
    options: &InlineListOptions,
) -> Result<Element, TaggedError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
{
    inline_list_optional(
        items.map(|items| items.into_iter().map(Some)),
        transform,
        options,
    )
}

/// [`inline_list`] over items that may be missing.
///
/// `None` items are skipped before the transform runs, so they never reach
/// the output and do not consume the position or the limit. Keys still
/// reflect each item's place in the input.
///
/// # Example
///
/// ```
/// use tagged_markup::list::{self, InlineListOptions};
///
/// let el = list::inline_list_optional(
///     Some([Some("a"), None, Some("b")]),
///     |item, _, _, _| Ok(item.into()),
///     &InlineListOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(
///     el.to_string(),
///     r#"<span class="list"><span>a</span>, <span>b</span></span>"#
/// );
/// ```
pub fn inline_list_optional<I, T, F>(
    items: Option<I>,
    mut transform: F,
    options: &InlineListOptions,
) -> Result<Element, TaggedError>
where
    I: IntoIterator<Item = Option<T>>,
    F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
{
    let mut wrapper = Element::new("span.list", Content::Null)?;
    wrapper.set_render_empty(false);
    let cell_tag = Tag::new("?span")?;

    let mut visible = Vec::new();
    let mut index = 0;
    let mut overflow = 0usize;

    for (position, item) in items.into_iter().flatten().enumerate() {
        let Some(item) = item else {
            continue;
        };
        let mut cell = Element::from_tag(cell_tag.clone());
        let content = transform(item, &mut cell, &Key::Index(position), index + 1)?;
        cell.push(content)?;

        let markup = cell.render(false)?;
        if markup.is_empty() {
            continue;
        }

        index += 1;
        if options.limit.is_some_and(|limit| index > limit) {
            overflow += 1;
            continue;
        }
        visible.push(markup);
    }

    let total = visible.len();
    for (i, markup) in visible.into_iter().enumerate() {
        if i > 0 {
            let delimiter = if i + 1 == total {
                options.final_delimiter()
            } else {
                options.delimiter.as_str()
            };
            wrapper.push(delimiter)?;
        }
        wrapper.push(markup)?;
    }

    if overflow > 0 {
        if total > 0 {
            wrapper.push(options.delimiter.as_str())?;
        }
        wrapper.push(Element::new(
            "em.more",
            format!("{}{overflow}", options.more_text),
        )?)?;
    }

    tracing::debug!(visible = total, overflow, "Built inline list");
    Ok(wrapper)
}
