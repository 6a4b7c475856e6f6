//! Deterministic HTML serialization
//!
//! Renders `(tag, attributes, children)` into markup. Attribute values
//! are entity-escaped; children are emitted verbatim so inline HTML in
//! cell content stays live (the `\<`/`\>` escapes are the supported way
//! to show literal angle brackets as text).

use std::fmt::Write;

use crate::data::VOID_ELEMENTS;

/// Entity-escape an attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Render one element. Void elements take no children and no closing
/// tag; everything else closes even when empty.
pub fn render(tag: &str, attrs: &[(String, String)], children: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, "<{}", tag);
    for (name, value) in attrs {
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    if VOID_ELEMENTS.contains(tag) {
        out.push('>');
        return out;
    }
    let _ = write!(out, ">{}</{}>", children, tag);
    out
}
