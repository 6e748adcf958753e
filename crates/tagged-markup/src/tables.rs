//! Fixed element classification tables.

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Phrasing elements laid out inline.
const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "b", "bdi", "bdo", "big", "br", "button", "cite", "code", "data",
    "del", "dfn", "em", "i", "img", "input", "ins", "kbd", "label", "map", "mark", "meter",
    "object", "output", "picture", "progress", "q", "ruby", "s", "samp", "select", "slot",
    "small", "span", "strong", "sub", "sup", "svg", "template", "textarea", "time", "tt", "u",
    "var", "video", "wbr",
];

/// Flow elements laid out as blocks.
const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "canvas",
    "dd",
    "details",
    "dialog",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hgroup",
    "hr",
    "html",
    "li",
    "main",
    "nav",
    "noscript",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

fn contains(table: &[&str], name: &str) -> bool {
    table.iter().any(|entry| entry.eq_ignore_ascii_case(name))
}

/// Whether `name` is a void element (no closing tag, no children).
pub fn is_void(name: &str) -> bool {
    contains(VOID_ELEMENTS, name)
}

/// Whether `name` is laid out inline.
pub fn is_inline(name: &str) -> bool {
    contains(INLINE_ELEMENTS, name)
}

/// Whether `name` is laid out as a block.
pub fn is_block(name: &str) -> bool {
    contains(BLOCK_ELEMENTS, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements() {
        assert!(is_void("br"));
        assert!(is_void("IMG"));
        assert!(!is_void("div"));
    }

    #[test]
    fn test_inline_and_block_are_disjoint_for_common_tags() {
        assert!(is_inline("span") && !is_block("span"));
        assert!(is_block("div") && !is_inline("div"));
        assert!(!is_inline("custom-widget") && !is_block("custom-widget"));
    }
}
