//! Style-map resolution into element attributes and a CSS string
//!
//! `colspan` and `rowspan` move verbatim to element attributes and
//! `format` is dropped entirely; everything else becomes a `key:value`
//! fragment of the inline `style` attribute.

use crate::data::{KEY_COLSPAN, KEY_FORMAT, KEY_ROWSPAN};

use super::context::StyleMap;

/// A resolved style: span attributes plus the residual CSS string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    pub attrs: Vec<(String, String)>,
    pub css: String,
}

/// Resolve a merged style map.
pub fn resolve_style(style: &StyleMap) -> ResolvedStyle {
    let mut attrs = Vec::new();
    let mut fragments = Vec::new();

    for (key, value) in style {
        match key.as_str() {
            KEY_COLSPAN | KEY_ROWSPAN => attrs.push((key.clone(), value.to_string())),
            KEY_FORMAT => {}
            _ => fragments.push(format!("{}:{}", key, value)),
        }
    }

    ResolvedStyle {
        attrs,
        css: fragments.join("; "),
    }
}

/// Resolve a style map straight into the attribute list for an element:
/// span attributes first, then a `style` attribute when any CSS remains.
pub fn style_attrs(style: &StyleMap) -> Vec<(String, String)> {
    let resolved = resolve_style(style);
    let mut attrs = resolved.attrs;
    if !resolved.css.is_empty() {
        attrs.push(("style".to_string(), resolved.css));
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compiler::context::StyleValue;

    fn style(pairs: &[(&str, StyleValue)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_css_joining() {
        let s = style(&[
            ("color", StyleValue::from("red")),
            ("width", StyleValue::Num(10.0)),
        ]);
        let resolved = resolve_style(&s);
        assert!(resolved.attrs.is_empty());
        assert_eq!(resolved.css, "color:red; width:10");
    }

    #[test]
    fn test_spans_become_attributes() {
        let s = style(&[
            ("colspan", StyleValue::Num(2.0)),
            ("color", StyleValue::from("red")),
            ("rowspan", StyleValue::from("3")),
        ]);
        let resolved = resolve_style(&s);
        assert_eq!(
            resolved.attrs,
            vec![
                ("colspan".to_string(), "2".to_string()),
                ("rowspan".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(resolved.css, "color:red");
    }

    #[test]
    fn test_format_never_reaches_output() {
        let s = style(&[("format", StyleValue::from("%.2f"))]);
        let attrs = style_attrs(&s);
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_empty_style_yields_no_attribute() {
        assert!(style_attrs(&StyleMap::new()).is_empty());
    }
}
