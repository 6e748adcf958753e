//! Ordered attribute container.
//!
//! Attributes render in insertion order. Setting a value to `None` or
//! `false` removes the attribute; `true` stores a valueless flag.

use std::fmt::Write;

use crate::escape::escape_html;

/// A stored attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    /// `name="value"`.
    Text(String),
    /// A bare boolean attribute: `name`.
    Flag,
}

impl AttributeValue {
    /// The text value, or `None` for flags.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag => None,
        }
    }
}

/// Conversion into an optional attribute value.
///
/// `None` means "remove the attribute".
pub trait IntoAttributeValue {
    /// Convert, returning `None` when the attribute should be absent.
    fn into_attribute_value(self) -> Option<AttributeValue>;
}

impl IntoAttributeValue for AttributeValue {
    fn into_attribute_value(self) -> Option<AttributeValue> {
        Some(self)
    }
}

impl IntoAttributeValue for &str {
    fn into_attribute_value(self) -> Option<AttributeValue> {
        Some(AttributeValue::Text(self.to_owned()))
    }
}

impl IntoAttributeValue for String {
    fn into_attribute_value(self) -> Option<AttributeValue> {
        Some(AttributeValue::Text(self))
    }
}

impl IntoAttributeValue for &String {
    fn into_attribute_value(self) -> Option<AttributeValue> {
        Some(AttributeValue::Text(self.clone()))
    }
}

impl IntoAttributeValue for bool {
    fn into_attribute_value(self) -> Option<AttributeValue> {
        self.then_some(AttributeValue::Flag)
    }
}

macro_rules! impl_numeric_attribute {
    ($($ty:ty),*) => {
        $(
            impl IntoAttributeValue for $ty {
                fn into_attribute_value(self) -> Option<AttributeValue> {
                    Some(AttributeValue::Text(self.to_string()))
                }
            }
        )*
    };
}

impl_numeric_attribute!(i32, i64, u32, u64, usize, f64);

impl<T: IntoAttributeValue> IntoAttributeValue for Option<T> {
    fn into_attribute_value(self) -> Option<AttributeValue> {
        self.and_then(IntoAttributeValue::into_attribute_value)
    }
}

/// Ordered mapping from attribute name to value.
///
/// No validation is applied to attribute names.
///
/// # Example
///
/// ```
/// use tagged_markup::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.set("href", "/docs");
/// attrs.set("hidden", true);
/// attrs.add_class("nav");
/// assert_eq!(attrs.render(), r#" href="/docs" hidden class="nav""#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, keeping its position if already present.
    ///
    /// `None` and `false` remove the attribute.
    pub fn set(&mut self, name: &str, value: impl IntoAttributeValue) -> &mut Self {
        match value.into_attribute_value() {
            Some(value) => {
                if let Some(slot) = self.slot_mut(name) {
                    *slot = value;
                } else {
                    self.entries.push((name.to_owned(), value));
                }
            }
            None => {
                self.remove(name);
            }
        }
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Get a text attribute value. Flags yield `None`.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_text)
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether the attribute is present.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate `(name, value)` pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Snapshot of `(name, value)` pairs in render order.
    #[must_use]
    pub fn to_ordered_pairs(&self) -> Vec<(String, AttributeValue)> {
        self.entries.clone()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every attribute.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copy every attribute from `other`, merging class tokens.
    pub fn extend_from(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            match value.as_text() {
                Some(classes) if name == "class" => {
                    self.add_classes(classes.split_whitespace());
                }
                _ => {
                    self.set(name, value.clone());
                }
            }
        }
    }

    /// The `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_text("id")
    }

    /// Set or clear the `id` attribute.
    pub fn set_id(&mut self, id: Option<&str>) -> &mut Self {
        self.set("id", id)
    }

    /// Class tokens in order.
    pub fn classes(&self) -> Vec<&str> {
        self.get_text("class")
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Whether the class token is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    /// Add one class token (or several, space separated).
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.add_classes(class.split_whitespace())
    }

    /// Add class tokens, skipping duplicates.
    pub fn add_classes<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) -> &mut Self {
        let mut tokens: Vec<String> = self.classes().into_iter().map(str::to_owned).collect();
        for class in classes {
            if !class.is_empty() && !tokens.iter().any(|t| t == class) {
                tokens.push(class.to_owned());
            }
        }
        self.store_classes(&tokens);
        self
    }

    /// Remove a class token. The attribute disappears with its last token.
    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        let tokens: Vec<String> = self
            .classes()
            .into_iter()
            .filter(|t| *t != class)
            .map(str::to_owned)
            .collect();
        self.store_classes(&tokens);
        self
    }

    /// Replace all class tokens.
    pub fn set_classes<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) -> &mut Self {
        self.remove("class");
        self.add_classes(classes)
    }

    fn store_classes(&mut self, tokens: &[String]) {
        if tokens.is_empty() {
            self.remove("class");
        } else {
            self.set("class", tokens.join(" "));
        }
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut AttributeValue> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Render as ` name="value"` pairs with a leading space per attribute.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            match value {
                AttributeValue::Text(text) => {
                    let _ = write!(out, r#" {name}="{}""#, escape_html(text));
                }
                AttributeValue::Flag => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
        out
    }
}

impl<K: AsRef<str>, V: IntoAttributeValue> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name.as_ref(), value);
        }
        attrs
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a str, &'a AttributeValue);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_get() {
        let mut attrs = Attributes::new();
        attrs.set("title", "Hello");
        assert_eq!(attrs.get_text("title"), Some("Hello"));
        assert!(attrs.has("title"));
        assert!(!attrs.has("href"));
    }

    #[test]
    fn test_insertion_order_is_render_order() {
        let attrs: Attributes = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        assert_eq!(attrs.render(), r#" b="2" a="1" c="3""#);
    }

    #[test]
    fn test_reset_keeps_position() {
        let mut attrs = Attributes::new();
        attrs.set("a", "1").set("b", "2").set("a", "changed");
        assert_eq!(attrs.render(), r#" a="changed" b="2""#);
    }

    #[test]
    fn test_false_and_none_remove() {
        let mut attrs = Attributes::new();
        attrs.set("hidden", true).set("title", "x");
        attrs.set("hidden", false);
        attrs.set("title", None::<&str>);
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_true_is_flag() {
        let mut attrs = Attributes::new();
        attrs.set("disabled", true);
        assert_eq!(attrs.get("disabled"), Some(&AttributeValue::Flag));
        assert_eq!(attrs.get_text("disabled"), None);
        assert_eq!(attrs.render(), " disabled");
    }

    #[test]
    fn test_values_are_escaped() {
        let mut attrs = Attributes::new();
        attrs.set("title", r#"say "hi" & <bye>"#);
        assert_eq!(
            attrs.render(),
            r#" title="say &quot;hi&quot; &amp; &lt;bye&gt;""#
        );
    }

    #[test]
    fn test_numeric_values() {
        let mut attrs = Attributes::new();
        attrs.set("colspan", 2).set("data-ratio", 1.5);
        assert_eq!(attrs.render(), r#" colspan="2" data-ratio="1.5""#);
    }

    #[test]
    fn test_classes() {
        let mut attrs = Attributes::new();
        attrs.add_class("card").add_class("wide card").add_class("dark");
        assert_eq!(attrs.classes(), vec!["card", "wide", "dark"]);
        assert!(attrs.has_class("wide"));

        attrs.remove_class("wide");
        assert_eq!(attrs.get_text("class"), Some("card dark"));

        attrs.remove_class("card").remove_class("dark");
        assert!(!attrs.has("class"));
    }

    #[test]
    fn test_set_classes_replaces() {
        let mut attrs = Attributes::new();
        attrs.add_class("a");
        attrs.set_classes(["b", "c"]);
        assert_eq!(attrs.classes(), vec!["b", "c"]);
    }

    #[test]
    fn test_id() {
        let mut attrs = Attributes::new();
        attrs.set_id(Some("main"));
        assert_eq!(attrs.id(), Some("main"));
        attrs.set_id(None);
        assert_eq!(attrs.id(), None);
    }

    #[test]
    fn test_extend_from_merges_classes() {
        let mut attrs = Attributes::new();
        attrs.add_class("card").set("id", "a");

        let mut other = Attributes::new();
        other.add_class("wide").set("id", "b").set("role", "region");

        attrs.extend_from(&other);
        assert_eq!(
            attrs.render(),
            r#" class="card wide" id="b" role="region""#
        );
    }

    #[test]
    fn test_extend_from_keeps_class_flag() {
        let mut attrs = Attributes::new();
        attrs.set("id", "a");

        let mut other = Attributes::new();
        other.set("class", true);

        attrs.extend_from(&other);
        assert_eq!(attrs.get("class"), Some(&AttributeValue::Flag));
        assert_eq!(attrs.render(), r#" id="a" class"#);
    }

    #[test]
    fn test_ordered_pairs_snapshot() {
        let mut attrs = Attributes::new();
        attrs.set("a", "1").set("b", true);
        assert_eq!(
            attrs.to_ordered_pairs(),
            vec![
                ("a".to_owned(), AttributeValue::Text("1".to_owned())),
                ("b".to_owned(), AttributeValue::Flag),
            ]
        );
    }
}
