//! Plain-text conversion of rendered markup.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::unescape_html;

/// Pattern for comments and tags.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("invalid tag regex"));

/// Remove comments and tags, keeping text between them.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Convert rendered markup to plain text.
///
/// Tags are stripped, entities decoded and `\r\n` normalized to `\n`.
/// Returns `None` when no text remains.
pub fn markup_to_text(html: &str) -> Option<String> {
    if html.is_empty() {
        return None;
    }
    let text = unescape_html(&strip_tags(html)).replace("\r\n", "\n");
    (!text.is_empty()).then_some(text)
}

/// Shorten `text` to at most `max_chars` characters.
///
/// Returns the kept prefix, or `None` when no truncation was needed.
pub fn truncate_chars(text: &str, max_chars: usize) -> Option<&str> {
    text.char_indices()
        .nth(max_chars)
        .map(|(byte_index, _)| &text[..byte_index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags(r#"<p class="x">Hello <b>world</b></p><!-- note -->"#),
            "Hello world"
        );
    }

    #[test]
    fn test_markup_to_text_decodes_entities() {
        assert_eq!(
            markup_to_text("<p>Tom &amp; Jerry&#x27;s</p>\r\n<p>x</p>"),
            Some("Tom & Jerry's\nx".to_owned())
        );
    }

    #[test]
    fn test_markup_to_text_empty() {
        assert_eq!(markup_to_text(""), None);
        assert_eq!(markup_to_text("<br>"), None);
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("héllo wörld", 5), Some("héllo"));
        assert_eq!(truncate_chars("short", 5), None);
        assert_eq!(truncate_chars("short", 10), None);
    }
}
