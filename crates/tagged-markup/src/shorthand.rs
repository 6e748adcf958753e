//! Compact tag name parsing.
//!
//! Parses the `[?]name.class1.class2#id` shorthand accepted wherever a tag
//! name is expected. Class and id segments may appear in any order.

use crate::error::TaggedError;

/// Result of parsing a compact tag name.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Shorthand {
    /// Bare element name: `div`.
    pub name: String,
    /// Class tokens from `.class` segments.
    pub classes: Vec<String>,
    /// Id from a `#id` segment.
    pub id: Option<String>,
    /// `false` when the name carried a leading `?`.
    pub render_empty: bool,
}

impl Shorthand {
    /// Parse a compact tag name.
    pub(crate) fn parse(input: &str) -> Result<Self, TaggedError> {
        let trimmed = input.trim();
        let (render_empty, rest) = match trimmed.strip_prefix('?') {
            Some(rest) => (false, rest),
            None => (true, trimmed),
        };

        let name_end = rest.find(['.', '#']).unwrap_or(rest.len());
        let name = &rest[..name_end];
        validate_name(input, name)?;

        let mut parsed = Self {
            name: name.to_owned(),
            render_empty,
            ..Default::default()
        };

        let mut remaining = &rest[name_end..];
        while let Some(marker) = remaining.chars().next() {
            let end = remaining[1..]
                .find(['.', '#'])
                .map_or(remaining.len(), |i| i + 1);
            let segment = &remaining[1..end];

            if segment.is_empty() {
                return Err(TaggedError::invalid_name(
                    input,
                    if marker == '.' {
                        "empty class segment"
                    } else {
                        "empty id segment"
                    },
                ));
            }
            if segment.chars().any(char::is_whitespace) {
                return Err(TaggedError::invalid_name(
                    input,
                    "whitespace in class or id segment",
                ));
            }

            if marker == '.' {
                parsed.classes.push(segment.to_owned());
            } else if parsed.id.is_some() {
                return Err(TaggedError::invalid_name(input, "more than one id"));
            } else {
                parsed.id = Some(segment.to_owned());
            }

            remaining = &remaining[end..];
        }

        Ok(parsed)
    }
}

/// Check a bare element name.
///
/// Letters, digits, `-`, `_` and `:` are accepted; the first character must
/// be a letter.
pub(crate) fn validate_name(input: &str, name: &str) -> Result<(), TaggedError> {
    let Some(first) = name.chars().next() else {
        return Err(TaggedError::invalid_name(input, "empty element name"));
    };
    if !first.is_ascii_alphabetic() {
        return Err(TaggedError::invalid_name(
            input,
            "element name must start with a letter",
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
    {
        return Err(TaggedError::invalid_name(
            input,
            "illegal character in element name",
        ));
    }
    Ok(())
}
