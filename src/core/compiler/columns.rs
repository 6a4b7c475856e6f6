//! Column-style declarations
//!
//! `th-<name> | v1 | v2 | ...` declares a named style key per column;
//! `th-^ | ^ref1 | ^ref2^ref3 | ...` resolves reference tags per
//! column. A trailing `*` token propagates the second-to-last token to
//! every remaining column; without it, remaining columns stay empty.
//! The `t*-` prefix applies the declaration to both `th` and `td`.

use super::context::{CompilerState, RowType, StyleMap};
use super::literal::parse_literal;

/// Row types targeted by a column-style prefix (`th`, `td` or `t*`).
fn targets(prefix: &str) -> &'static [RowType] {
    match prefix {
        "th" => &[RowType::Th],
        "td" => &[RowType::Td],
        _ => &[RowType::Th, RowType::Td],
    }
}

/// Handle a named column-style row (`th-<name> | v1 | v2 | ...`).
pub fn named_column_row(state: &mut CompilerState, line: &str) {
    let mut segments = line.split('|').map(str::trim);
    let head = segments.next().unwrap_or("");
    let (prefix, name) = match head.split_once('-') {
        Some(split) => split,
        None => return,
    };

    let tokens = extend_tokens(segments.map(str::to_string).collect(), state.col_count);
    let declared: Vec<StyleMap> = tokens
        .iter()
        .map(|token| {
            let mut style = StyleMap::new();
            if !token.is_empty() {
                style.insert(name.to_string(), parse_literal(token));
            }
            style
        })
        .collect();

    for row_type in targets(prefix) {
        state.columns.merge_columns(*row_type, &declared);
    }
}

/// Handle a reference column-style row (`th-^ | ^ref1 | ^ref2^ref3 | ...`).
pub fn reference_column_row(state: &mut CompilerState, line: &str) {
    let mut segments = line.split('|').map(str::trim);
    let head = segments.next().unwrap_or("");
    let prefix = head.split('-').next().unwrap_or("");

    let tokens = extend_tokens(segments.map(str::to_string).collect(), state.col_count);
    let declared: Vec<StyleMap> = tokens
        .iter()
        .map(|token| state.resolve_tag_string(token))
        .collect();

    for row_type in targets(prefix) {
        state.columns.merge_columns(*row_type, &declared);
    }
}

/// Apply the extension rule: a trailing `*` repeats the previous token
/// for all remaining columns, otherwise remaining columns are empty.
/// The result always has exactly `col_count` tokens.
fn extend_tokens(mut tokens: Vec<String>, col_count: usize) -> Vec<String> {
    if tokens.last().map(|t| t == "*").unwrap_or(false) {
        tokens.pop();
        let fill = tokens.last().cloned().unwrap_or_default();
        while tokens.len() < col_count {
            tokens.push(fill.clone());
        }
    } else {
        while tokens.len() < col_count {
            tokens.push(String::new());
        }
    }
    tokens.truncate(col_count);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compiler::context::{ElementStyles, StyleValue};

    fn state(cols: usize) -> CompilerState {
        CompilerState::new(cols, &ElementStyles::new())
    }

    #[test]
    fn test_named_declaration() {
        let mut st = state(3);
        named_column_row(&mut st, r#"td-text-align|"left"|"right""#);
        let col0 = st.columns.get(RowType::Td, 0).unwrap();
        assert_eq!(col0["text-align"], StyleValue::from("left"));
        let col2 = st.columns.get(RowType::Td, 2).unwrap();
        assert!(col2.is_empty());
        assert!(st.columns.get(RowType::Th, 0).unwrap().is_empty());
    }

    #[test]
    fn test_propagation_marker() {
        let mut st = state(4);
        named_column_row(&mut st, r#"td-text-align|"left"|"right"|*"#);
        for i in 1..4 {
            let col = st.columns.get(RowType::Td, i).unwrap();
            assert_eq!(col["text-align"], StyleValue::from("right"), "column {}", i);
        }
    }

    #[test]
    fn test_star_alone_pads_empty() {
        let mut st = state(2);
        named_column_row(&mut st, "td-width|*");
        assert!(st.columns.get(RowType::Td, 0).unwrap().is_empty());
        assert!(st.columns.get(RowType::Td, 1).unwrap().is_empty());
    }

    #[test]
    fn test_both_row_types() {
        let mut st = state(2);
        named_column_row(&mut st, "t*-color|red|*");
        assert_eq!(
            st.columns.get(RowType::Th, 1).unwrap()["color"],
            StyleValue::from("red")
        );
        assert_eq!(
            st.columns.get(RowType::Td, 0).unwrap()["color"],
            StyleValue::from("red")
        );
    }

    #[test]
    fn test_reference_declaration() {
        let mut st = state(3);
        st.refs.insert(
            "hot".to_string(),
            [("color".to_string(), StyleValue::from("red"))]
                .into_iter()
                .collect(),
        );
        st.refs.insert(
            "big".to_string(),
            [("font-size".to_string(), StyleValue::from("2em"))]
                .into_iter()
                .collect(),
        );
        reference_column_row(&mut st, "td-^|^hot|^hot^big|*");
        assert_eq!(st.columns.get(RowType::Td, 0).unwrap().len(), 1);
        assert_eq!(st.columns.get(RowType::Td, 1).unwrap().len(), 2);
        assert_eq!(st.columns.get(RowType::Td, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_reference_contributes_nothing() {
        let mut st = state(2);
        reference_column_row(&mut st, "td-^|^missing");
        assert!(st.columns.get(RowType::Td, 0).unwrap().is_empty());
    }

    #[test]
    fn test_excess_tokens_truncated() {
        let mut st = state(2);
        named_column_row(&mut st, "td-width|1|2|3|4");
        assert_eq!(
            st.columns.get(RowType::Td, 1).unwrap()["width"],
            StyleValue::Num(2.0)
        );
        assert!(st.columns.get(RowType::Td, 2).is_none());
    }

    #[test]
    fn test_declaration_merges_into_existing() {
        let mut st = state(2);
        named_column_row(&mut st, "td-color|red|*");
        named_column_row(&mut st, "td-width|10|*");
        let col0 = st.columns.get(RowType::Td, 0).unwrap();
        assert_eq!(col0.len(), 2);
    }
}
