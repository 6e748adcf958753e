//! Content normalization.
//!
//! Anything that can appear inside an element is first expressed as a
//! [`Content`] value, then flattened by [`normalize`] into renderable
//! [`Leaf`]s. Rules, in order:
//!
//! 1. `Null`, `""` and `false` contribute nothing. `0`, `0.0` and `"0"` are kept.
//! 2. [`Markup`] is a single verbatim leaf and is never decomposed.
//! 3. An [`Element`] is a single leaf, rendered recursively.
//! 4. A deferred [`Producer`] is kept unevaluated until render time.
//! 5. Sequences are flattened recursively, preserving order.
//! 6. Scalars become text, escaped when emitted.
//!
//! Dynamic JSON values follow the same rules; JSON objects have no markup
//! meaning and are rejected.

use std::fmt;

use crate::element::Element;
use crate::error::{ContentError, TaggedError};
use crate::markup::Markup;
use crate::tag::Tag;

type ProducerFn = dyn Fn(&mut Tag) -> Result<Content, TaggedError>;

/// Content computed at render time.
///
/// The producer receives the tag of the element being rendered, so it can
/// adjust attributes or the render-empty policy for that render. It runs
/// on every render; renders are not idempotent when producers have side
/// effects.
pub struct Producer(Box<ProducerFn>);

impl Producer {
    /// Wrap a one-argument producer.
    pub fn new(f: impl Fn(&mut Tag) -> Result<Content, TaggedError> + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Wrap a zero-argument producer.
    pub fn from_fn<C: Into<Content>>(f: impl Fn() -> C + 'static) -> Self {
        Self(Box::new(move |_| Ok(f().into())))
    }

    /// Run the producer against `tag`.
    pub fn invoke(&self, tag: &mut Tag) -> Result<Content, TaggedError> {
        (self.0)(tag)
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Producer(..)")
    }
}

/// Any value accepted as element content.
pub enum Content {
    /// Absent content.
    Null,
    /// `false` is empty, `true` renders as `1`.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating point scalar.
    Float(f64),
    /// Text, escaped on output.
    Text(String),
    /// Pre-rendered markup, inserted verbatim.
    Markup(Markup),
    /// Nested element.
    Element(Box<Element>),
    /// Ordered sequence, flattened.
    Seq(Vec<Content>),
    /// Lazily produced sequence.
    ///
    /// Drained at normalization time when given directly, or item by item at
    /// render time when returned by a [`Producer`].
    Lazy(Box<dyn Iterator<Item = Content>>),
    /// Content computed at render time.
    Deferred(Producer),
    /// Dynamic value from JSON.
    Json(serde_json::Value),
}

impl Content {
    /// Deferred content from a one-argument producer.
    pub fn deferred(f: impl Fn(&mut Tag) -> Result<Content, TaggedError> + 'static) -> Self {
        Self::Deferred(Producer::new(f))
    }

    /// Deferred content from a zero-argument producer.
    pub fn from_fn<C: Into<Content>>(f: impl Fn() -> C + 'static) -> Self {
        Self::Deferred(Producer::from_fn(f))
    }

    /// Lazy sequence from any iterator of content.
    pub fn lazy<I>(iter: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'static,
        I::Item: Into<Content> + 'static,
    {
        Self::Lazy(Box::new(iter.into_iter().map(Into::into)))
    }

    /// Pre-rendered markup.
    pub fn raw(html: impl Into<String>) -> Self {
        Self::Markup(Markup::new(html))
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Markup(m) => f.debug_tuple("Markup").field(m).finish(),
            Self::Element(e) => f.debug_tuple("Element").field(e).finish(),
            Self::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
            Self::Deferred(p) => f.debug_tuple("Deferred").field(p).finish(),
            Self::Json(v) => f.debug_tuple("Json").field(v).finish(),
        }
    }
}

impl From<()> for Content {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Content {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_int_content {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_int_content!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Content {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Int)
    }
}

impl From<usize> for Content {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Int)
    }
}

impl From<f32> for Content {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Content {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Markup> for Content {
    fn from(value: Markup) -> Self {
        Self::Markup(value)
    }
}

impl From<Element> for Content {
    fn from(value: Element) -> Self {
        Self::Element(Box::new(value))
    }
}

impl From<Producer> for Content {
    fn from(value: Producer) -> Self {
        Self::Deferred(value)
    }
}

impl From<serde_json::Value> for Content {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Content>> From<Vec<T>> for Content {
    fn from(value: Vec<T>) -> Self {
        Self::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Content>, const N: usize> From<[T; N]> for Content {
    fn from(value: [T; N]) -> Self {
        Self::Seq(value.into_iter().map(Into::into).collect())
    }
}

/// One unit of normalized, renderable content.
#[derive(Debug)]
pub enum Leaf {
    /// Text, escaped on output.
    Text(String),
    /// Verbatim markup.
    Markup(Markup),
    /// Nested element.
    Element(Element),
    /// Content computed at render time.
    Deferred(Producer),
}

impl Leaf {
    /// Whether the leaf is known to render as nothing.
    ///
    /// Deferred leaves are never considered empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Markup(markup) => markup.is_empty(),
            Self::Element(_) | Self::Deferred(_) => false,
        }
    }
}

/// Flatten content into leaves.
///
/// # Example
///
/// ```
/// use tagged_markup::{normalize, Content, Leaf};
///
/// let leaves = normalize(Content::Seq(vec![
///     "a".into(),
///     Content::Seq(vec!["b".into(), "c".into()]),
///     Content::Null,
///     "d".into(),
/// ]))
/// .unwrap();
/// assert_eq!(leaves.len(), 4);
/// ```
pub fn normalize(content: Content) -> Result<Vec<Leaf>, ContentError> {
    let mut leaves = Vec::new();
    normalize_into(content, &mut leaves)?;
    Ok(leaves)
}

/// Flatten content, appending leaves to `out`.
pub(crate) fn normalize_into(content: Content, out: &mut Vec<Leaf>) -> Result<(), ContentError> {
    match content {
        Content::Null | Content::Bool(false) => {}
        Content::Bool(true) => out.push(Leaf::Text("1".to_owned())),
        Content::Text(text) => {
            if !text.is_empty() {
                out.push(Leaf::Text(text));
            }
        }
        Content::Int(value) => out.push(Leaf::Text(value.to_string())),
        Content::Float(value) => out.push(Leaf::Text(value.to_string())),
        Content::Markup(markup) => out.push(Leaf::Markup(markup)),
        Content::Element(element) => out.push(Leaf::Element(*element)),
        Content::Deferred(producer) => out.push(Leaf::Deferred(producer)),
        Content::Seq(items) => {
            for item in items {
                normalize_into(item, out)?;
            }
        }
        Content::Lazy(iter) => {
            for item in iter {
                normalize_into(item, out)?;
            }
        }
        Content::Json(value) => normalize_json(value, out)?,
    }
    Ok(())
}

fn normalize_json(value: serde_json::Value, out: &mut Vec<Leaf>) -> Result<(), ContentError> {
    use serde_json::Value;

    match value {
        Value::Null => Ok(()),
        Value::Bool(b) => normalize_into(Content::Bool(b), out),
        Value::Number(number) => {
            let content = if let Some(i) = number.as_i64() {
                Content::Int(i)
            } else if number.is_u64() {
                Content::Text(number.to_string())
            } else {
                number.as_f64().map_or(Content::Null, Content::Float)
            };
            normalize_into(content, out)
        }
        Value::String(text) => normalize_into(Content::Text(text), out),
        Value::Array(items) => {
            for item in items {
                normalize_json(item, out)?;
            }
            Ok(())
        }
        Value::Object(map) => Err(ContentError::Unsupported {
            shape: format!("object with {} keys", map.len()),
        }),
    }
}
