//! Entity escaping for text content and attribute values.

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use tagged_markup::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Decode character entities back to text.
///
/// Covers the full HTML5 named set plus decimal and hex numeric
/// references. Unknown or malformed entities are left as written.
pub fn unescape_html(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<p>"), "&lt;p&gt;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_unescape_named() {
        assert_eq!(unescape_html("a &amp; b &lt;c&gt;"), "a & b <c>");
        assert_eq!(unescape_html("&quot;q&quot; &apos;"), "\"q\" '");
    }

    #[test]
    fn test_unescape_numeric() {
        assert_eq!(unescape_html("it&#x27;s"), "it's");
        assert_eq!(unescape_html("it&#39;s"), "it's");
    }

    #[test]
    fn test_unescape_html5_named() {
        assert_eq!(
            unescape_html("caf&eacute; &mdash; wait&hellip;"),
            "café — wait…"
        );
        assert_eq!(unescape_html("a&nbsp;b"), "a\u{a0}b");
    }

    #[test]
    fn test_unescape_leaves_unknown_entities() {
        assert_eq!(unescape_html("&bogus; & x"), "&bogus; & x");
        assert_eq!(unescape_html("trailing &"), "trailing &");
    }

    #[test]
    fn test_escape_unescape_inverse() {
        let text = r#"<b class="x">Tom & Jerry's</b>"#;
        assert_eq!(unescape_html(&escape_html(text)), text);
    }
}
