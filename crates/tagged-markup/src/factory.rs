//! Entry point for building markup.
//!
//! [`HtmlFactory`] bundles the element constructors, list helpers and text
//! utilities behind one value. It holds no global state; list and preview
//! defaults come from the [`FactoryOptions`] it was created with.

use crate::attributes::Attributes;
use crate::collection::Collection;
use crate::content::Content;
use crate::element::Element;
use crate::error::TaggedError;
use crate::escape::escape_html;
use crate::list::{self, InlineListOptions, Key};
use crate::markup::Markup;
use crate::tag::Tag;
use crate::text;

/// Defaults applied by [`HtmlFactory`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryOptions {
    /// Inline list delimiters, limit and overflow marker text.
    pub inline_list: InlineListOptions,
    /// Preview length used when a call gives none.
    pub preview_max_length: Option<usize>,
    /// Suffix appended to truncated previews.
    pub ellipsis: String,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            inline_list: InlineListOptions::default(),
            preview_max_length: None,
            ellipsis: "…".to_owned(),
        }
    }
}

/// Markup factory.
///
/// # Example
///
/// ```
/// use tagged_markup::HtmlFactory;
///
/// let html = HtmlFactory::default();
/// let card = html.el("div.card#main", "Hello", None).unwrap();
/// assert_eq!(card.to_string(), r#"<div class="card" id="main">Hello</div>"#);
///
/// let list = html.ulist(Some(["a", "b"]), None).unwrap();
/// assert_eq!(list.to_string(), "<ul><li>a</li><li>b</li></ul>");
/// ```
#[derive(Clone, Debug, Default)]
pub struct HtmlFactory {
    options: FactoryOptions,
}

impl HtmlFactory {
    /// Create a factory with explicit defaults.
    #[must_use]
    pub fn new(options: FactoryOptions) -> Self {
        Self { options }
    }

    /// The factory defaults.
    #[must_use]
    pub fn options(&self) -> &FactoryOptions {
        &self.options
    }

    /// Create a standalone tag.
    pub fn tag(&self, name: &str, attributes: Option<&Attributes>) -> Result<Tag, TaggedError> {
        match attributes {
            Some(attrs) => Tag::with_attributes(name, attrs),
            None => Tag::new(name),
        }
    }

    /// Create an element; `name` may be a `>` separated nesting path.
    pub fn el(
        &self,
        name: &str,
        content: impl Into<Content>,
        attributes: Option<&Attributes>,
    ) -> Result<Element, TaggedError> {
        Element::create(name, content, attributes)
    }

    /// Create an element whose name is only known at runtime.
    pub fn create_named(
        &self,
        name: &str,
        content: impl Into<Content>,
        attributes: Option<&Attributes>,
    ) -> Result<Element, TaggedError> {
        tracing::trace!(name, "Creating named element");
        self.el(name, content, attributes)
    }

    /// Wrap a pre-rendered string.
    #[must_use]
    pub fn raw(&self, html: impl Into<String>) -> Markup {
        Markup::new(html)
    }

    /// Normalize and render arbitrary content.
    pub fn wrap(&self, content: impl Into<Content>) -> Result<Markup, TaggedError> {
        Collection::new(content)?.render(false)
    }

    /// Normalize arbitrary content into an unrendered collection.
    pub fn content(&self, content: impl Into<Content>) -> Result<Collection, TaggedError> {
        Collection::new(content)
    }

    /// Build `container` with one `name` child per item.
    pub fn list<I, T, F>(
        &self,
        items: Option<I>,
        container: &str,
        name: &str,
        transform: F,
        attributes: Option<&Attributes>,
    ) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
    {
        list::list(items, container, name, transform, &or_empty(attributes))
    }

    /// Build one `name` element per item, without a container.
    pub fn elements<I, T, F>(
        &self,
        items: Option<I>,
        name: &str,
        transform: F,
        attributes: Option<&Attributes>,
    ) -> Result<Collection, TaggedError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
    {
        list::elements(items, name, transform, &or_empty(attributes))
    }

    /// `ul > li` list of the items.
    pub fn ulist<I, T>(
        &self,
        items: Option<I>,
        attributes: Option<&Attributes>,
    ) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Content>,
    {
        self.list(items, "ul", "li", list::passthrough, attributes)
    }

    /// `ul > li` list with a per-item transform.
    pub fn ulist_with<I, T, F>(
        &self,
        items: Option<I>,
        transform: F,
        attributes: Option<&Attributes>,
    ) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
    {
        self.list(items, "ul", "li", transform, attributes)
    }

    /// `ol > li` list of the items.
    pub fn olist<I, T>(
        &self,
        items: Option<I>,
        attributes: Option<&Attributes>,
    ) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Content>,
    {
        self.list(items, "ol", "li", list::passthrough, attributes)
    }

    /// `ol > li` list with a per-item transform.
    pub fn olist_with<I, T, F>(
        &self,
        items: Option<I>,
        transform: F,
        attributes: Option<&Attributes>,
    ) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
    {
        self.list(items, "ol", "li", transform, attributes)
    }

    /// `dl` of keyed items: key as term, item as description.
    pub fn dlist<I, K, T>(
        &self,
        items: Option<I>,
        attributes: Option<&Attributes>,
    ) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Key>,
        T: Into<Content>,
    {
        list::definition_list(items, list::passthrough_definition, &or_empty(attributes))
    }

    /// `dl` of keyed items with a transform over term and description.
    pub fn dlist_with<I, K, T, F>(
        &self,
        items: Option<I>,
        transform: F,
        attributes: Option<&Attributes>,
    ) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Key>,
        F: FnMut(T, &mut Element, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
    {
        list::definition_list(items, transform, &or_empty(attributes))
    }

    /// Inline delimited list using the factory defaults.
    pub fn ilist<I, T>(&self, items: Option<I>) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Content>,
    {
        list::inline_list(items, list::passthrough, &self.options.inline_list)
    }

    /// Inline delimited list with a transform; `options` override the
    /// factory defaults.
    pub fn ilist_with<I, T, F>(
        &self,
        items: Option<I>,
        transform: F,
        options: Option<&InlineListOptions>,
    ) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
    {
        let options = options.unwrap_or(&self.options.inline_list);
        list::inline_list(items, transform, options)
    }

    /// Inline delimited list whose `None` items are skipped before the
    /// transform sees them.
    pub fn ilist_optional_with<I, T, F>(
        &self,
        items: Option<I>,
        transform: F,
        options: Option<&InlineListOptions>,
    ) -> Result<Element, TaggedError>
    where
        I: IntoIterator<Item = Option<T>>,
        F: FnMut(T, &mut Element, &Key, usize) -> Result<Content, TaggedError>,
    {
        let options = options.unwrap_or(&self.options.inline_list);
        list::inline_list_optional(items, transform, options)
    }

    /// Render content and convert it to plain text.
    ///
    /// A plain string is taken as markup, so its tags are stripped too.
    pub fn to_text(&self, content: impl Into<Content>) -> Result<Option<String>, TaggedError> {
        let content: Content = content.into();
        let content = match content {
            Content::Text(html) => Content::Markup(Markup::new(html)),
            other => other,
        };
        let html = self.wrap(content)?;
        Ok(text::markup_to_text(html.as_str()))
    }

    /// Plain-text preview, truncated to `max_length` characters.
    pub fn preview_text(
        &self,
        content: impl Into<Content>,
        max_length: Option<usize>,
    ) -> Result<Option<String>, TaggedError> {
        let Some(output) = self.to_text(content)? else {
            return Ok(None);
        };
        let max_length = max_length.or(self.options.preview_max_length);

        match max_length.and_then(|max| text::truncate_chars(&output, max)) {
            Some(kept) => Ok(Some(format!("{kept}{}", self.options.ellipsis))),
            None => Ok(Some(output)),
        }
    }

    /// Markup preview; when truncated, the full text goes in an `abbr` title.
    pub fn preview(
        &self,
        content: impl Into<Content>,
        max_length: Option<usize>,
    ) -> Result<Option<Markup>, TaggedError> {
        let Some(output) = self.to_text(content)? else {
            return Ok(None);
        };
        let max_length = max_length.or(self.options.preview_max_length);

        let preview = match max_length.and_then(|max| text::truncate_chars(&output, max)) {
            Some(kept) => {
                let mut title = Attributes::new();
                title.set("title", &output);
                Content::Seq(vec![
                    Element::with_attributes("abbr", kept, &title)?.into(),
                    Element::new("span.suffix", self.options.ellipsis.as_str())?.into(),
                ])
            }
            None => Content::Text(output),
        };

        self.wrap(preview).map(Some)
    }

    /// Escape text, passing `None` through.
    #[must_use]
    pub fn esc(&self, value: Option<&str>) -> Option<String> {
        value.map(escape_html)
    }
}

fn or_empty(attributes: Option<&Attributes>) -> Attributes {
    attributes.cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_el_and_tag() {
        let html = HtmlFactory::default();
        let tag = html.tag("input#q", None).unwrap();
        assert_eq!(tag.to_string(), r#"<input id="q">"#);

        let attrs: Attributes = [("href", "/")].into_iter().collect();
        let link = html.el("a.home", "Home", Some(&attrs)).unwrap();
        assert_eq!(link.to_string(), r#"<a class="home" href="/">Home</a>"#);
    }

    #[test]
    fn test_create_named_with_runtime_name() {
        let html = HtmlFactory::default();
        let name = String::from("section");
        let el = html.create_named(&name, "body", None).unwrap();
        assert_eq!(el.to_string(), "<section>body</section>");
        assert!(html.create_named("bad name", "x", None).is_err());
    }

    #[test]
    fn test_raw_and_wrap() {
        let html = HtmlFactory::default();
        let markup = html
            .wrap(vec![
                Content::from(html.raw("<hr>")),
                "a<b".into(),
                Content::Null,
            ])
            .unwrap();
        assert_eq!(markup.as_str(), "<hr>a&lt;b");
    }

    #[test]
    fn test_content_collection() {
        let html = HtmlFactory::default();
        let collection = html.content(["x", "y"]).unwrap();
        assert_eq!(collection.to_string(), "xy");
    }

    #[test]
    fn test_ulist_and_olist() {
        let html = HtmlFactory::default();
        assert_eq!(
            html.ulist(Some(vec![1, 2]), None).unwrap().to_string(),
            "<ul><li>1</li><li>2</li></ul>"
        );
        assert_eq!(
            html.olist(Some(Vec::<i32>::new()), None).unwrap().to_string(),
            ""
        );
        let ol = html
            .olist_with(
                Some(["a"]),
                |item, li, _, index| {
                    li.set_attribute("value", index);
                    Ok(item.to_uppercase().into())
                },
                None,
            )
            .unwrap();
        assert_eq!(ol.to_string(), r#"<ol><li value="1">A</li></ol>"#);
    }

    #[test]
    fn test_dlist() {
        let html = HtmlFactory::default();
        let dl = html
            .dlist(Some(vec![("a", "1"), ("b", "2")]), None)
            .unwrap();
        assert_eq!(
            dl.to_string(),
            "<dl><dt>a</dt><dd>1</dd><dt>b</dt><dd>2</dd></dl>"
        );
    }

    #[test]
    fn test_ilist_uses_factory_defaults() {
        let html = HtmlFactory::new(FactoryOptions {
            inline_list: InlineListOptions::default()
                .with_delimiter("; ")
                .with_limit(1),
            ..FactoryOptions::default()
        });
        assert_eq!(
            html.ilist(Some(["a", "b"])).unwrap().to_string(),
            r#"<span class="list"><span>a</span>; <em class="more">…+ 1</em></span>"#
        );

        let overridden = InlineListOptions::default();
        let el = html
            .ilist_with(Some(["a", "b"]), list::passthrough, Some(&overridden))
            .unwrap();
        assert_eq!(
            el.to_string(),
            r#"<span class="list"><span>a</span>, <span>b</span></span>"#
        );
    }

    #[test]
    fn test_ilist_optional_with_skips_missing() {
        let html = HtmlFactory::default();
        let el = html
            .ilist_optional_with(
                Some(vec![Some("a"), None, Some("b")]),
                |item, _, _, _| Ok(item.to_uppercase().into()),
                None,
            )
            .unwrap();
        assert_eq!(
            el.to_string(),
            r#"<span class="list"><span>A</span>, <span>B</span></span>"#
        );
    }

    #[test]
    fn test_elements() {
        let html = HtmlFactory::default();
        let collection = html
            .elements(Some(["x", "y"]), "option", list::passthrough, None)
            .unwrap();
        assert_eq!(
            collection.to_string(),
            "<option>x</option><option>y</option>"
        );
    }

    #[test]
    fn test_to_text() {
        let html = HtmlFactory::default();
        assert_eq!(
            html.to_text("<p>Hello &amp; <b>bye</b></p>").unwrap(),
            Some("Hello & bye".to_owned())
        );
        let el = html.el("p", "a < b", None).unwrap();
        assert_eq!(html.to_text(el).unwrap(), Some("a < b".to_owned()));
        assert_eq!(html.to_text(()).unwrap(), None);
    }

    #[test]
    fn test_to_text_decodes_html5_entities() {
        let html = HtmlFactory::default();
        assert_eq!(
            html.to_text("<p>caf&eacute; &mdash; wait&hellip;</p>").unwrap(),
            Some("café — wait…".to_owned())
        );
    }

    #[test]
    fn test_preview_text() {
        let html = HtmlFactory::default();
        assert_eq!(
            html.preview_text("<p>Hello world</p>", Some(5)).unwrap(),
            Some("Hello…".to_owned())
        );
        assert_eq!(
            html.preview_text("<p>Hi</p>", Some(5)).unwrap(),
            Some("Hi".to_owned())
        );
        assert_eq!(html.preview_text("", Some(5)).unwrap(), None);
    }

    #[test]
    fn test_preview_text_uses_default_length() {
        let html = HtmlFactory::new(FactoryOptions {
            preview_max_length: Some(3),
            ellipsis: "...".to_owned(),
            ..FactoryOptions::default()
        });
        assert_eq!(
            html.preview_text("abcdef", None).unwrap(),
            Some("abc...".to_owned())
        );
    }

    #[test]
    fn test_preview_markup() {
        let html = HtmlFactory::default();
        let preview = html.preview("<p>Hello world</p>", Some(5)).unwrap().unwrap();
        assert_eq!(
            preview.as_str(),
            r#"<abbr title="Hello world">Hello</abbr><span class="suffix">…</span>"#
        );

        let short = html.preview("<p>a &amp; b</p>", None).unwrap().unwrap();
        assert_eq!(short.as_str(), "a &amp; b");
    }

    #[test]
    fn test_esc() {
        let html = HtmlFactory::default();
        assert_eq!(html.esc(Some("<x>")), Some("&lt;x&gt;".to_owned()));
        assert_eq!(html.esc(None), None);
    }
}
