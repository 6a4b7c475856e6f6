//! Row interpretation and dispatch
//!
//! Each trimmed source line is classified by prefix pattern and routed
//! to its handler. Classification is first-match-wins and the order is
//! load-bearing: the row-type prefixes overlap (`th-^`, `th-`, `th`),
//! so reordering the checks changes the language.

use lazy_static::lazy_static;
use regex::Regex;

use super::cells::compile_data_row;
use super::columns::{named_column_row, reference_column_row};
use super::context::{merge_styles, CompilerState, ElementKind, RowType};
use super::literal::parse_brace_object;

lazy_static! {
    /// `td {border "1px solid"}` - element style declaration.
    static ref ELEMENT_STYLE_RE: Regex = Regex::new(r"^(table|tr|th|td)\s*(\{.*)$").unwrap();
    /// `^zebra {background "#eee"}` - reference style declaration.
    static ref REFERENCE_STYLE_RE: Regex = Regex::new(r"^\^([^\^\s]+)\s*(\{.*)$").unwrap();
}

/// Outcome of classifying one line.
#[derive(Debug, PartialEq)]
enum LineKind<'a> {
    Blank,
    Comment,
    Options(&'a str),
    ElementStyle(ElementKind, &'a str),
    ReferenceStyle(&'a str, &'a str),
    ReferenceColumns,
    NamedColumns,
    Data(RowType),
    Ignored,
}

fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with('|') {
        return LineKind::Comment;
    }
    if let Some(payload) = line.strip_prefix("^^") {
        return LineKind::Options(payload);
    }
    if let Some(caps) = ELEMENT_STYLE_RE.captures(line) {
        if let Some(kind) = caps.get(1).and_then(|m| ElementKind::from_tag(m.as_str())) {
            if let Some(payload) = caps.get(2) {
                return LineKind::ElementStyle(kind, payload.as_str());
            }
        }
    }
    if let Some(caps) = REFERENCE_STYLE_RE.captures(line) {
        if let (Some(name), Some(payload)) = (caps.get(1), caps.get(2)) {
            return LineKind::ReferenceStyle(name.as_str(), payload.as_str());
        }
    }
    if line.starts_with("th-^") || line.starts_with("td-^") || line.starts_with("t*-^") {
        return LineKind::ReferenceColumns;
    }
    if line.starts_with("th-") || line.starts_with("td-") || line.starts_with("t*-") {
        return LineKind::NamedColumns;
    }
    if line.starts_with("th") {
        return LineKind::Data(RowType::Th);
    }
    if line.starts_with("td") {
        return LineKind::Data(RowType::Td);
    }
    LineKind::Ignored
}

/// Interpret one line, threading the compiler state. Malformed payloads
/// degrade to empty maps; unrecognized lines are dropped. Never fails.
pub fn interpret_line(state: &mut CompilerState, line: &str) {
    match classify(line) {
        LineKind::Blank | LineKind::Comment | LineKind::Ignored => {}
        LineKind::Options(payload) => {
            if let Some(options) = parse_brace_object(payload.trim()) {
                for (key, value) in options {
                    state.options.insert(key.to_lowercase(), value);
                }
            }
        }
        LineKind::ElementStyle(kind, payload) => {
            let style = parse_brace_object(payload).unwrap_or_default();
            state.elements.merge(kind, &style);
        }
        LineKind::ReferenceStyle(name, payload) => {
            let style = parse_brace_object(payload).unwrap_or_default();
            let entry = state.refs.entry(name.to_string()).or_default();
            merge_styles(entry, &style);
        }
        LineKind::ReferenceColumns => reference_column_row(state, line),
        LineKind::NamedColumns => named_column_row(state, line),
        LineKind::Data(row_type) => {
            let row = compile_data_row(state, line, row_type);
            state.rows.push(row);
        }
    }
}

/// Pre-scan: the fixed data-column count is the maximum cell count
/// across all data rows, minus the row-type column.
pub fn count_columns<'a, I>(lines: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| matches!(classify(line), LineKind::Data(_)))
        .map(|line| line.split('|').count().saturating_sub(1))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compiler::context::{ElementStyles, StyleValue};

    #[test]
    fn test_classification_priority() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("| a comment"), LineKind::Comment);
        assert_eq!(classify("^^ {debug 1}"), LineKind::Options(" {debug 1}"));
        assert_eq!(
            classify("td {a 1}"),
            LineKind::ElementStyle(ElementKind::Td, "{a 1}")
        );
        assert_eq!(
            classify("^zebra {background \"#eee\"}"),
            LineKind::ReferenceStyle("zebra", "{background \"#eee\"}")
        );
        assert_eq!(classify("td-^|^zebra"), LineKind::ReferenceColumns);
        assert_eq!(classify("td-width|10|20"), LineKind::NamedColumns);
        assert_eq!(classify("th|A|B"), LineKind::Data(RowType::Th));
        assert_eq!(classify("td|1|2"), LineKind::Data(RowType::Td));
        assert_eq!(classify("garbage line"), LineKind::Ignored);
    }

    #[test]
    fn test_overlapping_prefixes() {
        // `th-^` before `th-` before `th`
        assert_eq!(classify("th-^|^a"), LineKind::ReferenceColumns);
        assert_eq!(classify("th-x|1"), LineKind::NamedColumns);
        assert_eq!(classify("th|x"), LineKind::Data(RowType::Th));
        // `t*-` has no bare data form
        assert_eq!(classify("t*-x|1"), LineKind::NamedColumns);
        assert_eq!(classify("t*|x"), LineKind::Ignored);
    }

    #[test]
    fn test_element_style_needs_brace() {
        // Without a brace payload the line reads as a (cell-less) data row.
        assert_eq!(classify("td"), LineKind::Data(RowType::Td));
        assert_eq!(classify("table"), LineKind::Ignored);
    }

    #[test]
    fn test_options_merge_lowercases_keys() {
        let mut state = CompilerState::new(0, &ElementStyles::new());
        interpret_line(&mut state, "^^ {Border 1 CAPTION \"x\"}");
        assert_eq!(state.options["border"], StyleValue::Num(1.0));
        assert_eq!(state.options["caption"], StyleValue::from("x"));
    }

    #[test]
    fn test_malformed_payload_is_silent() {
        let mut state = CompilerState::new(1, &ElementStyles::new());
        interpret_line(&mut state, "td {broken");
        interpret_line(&mut state, "^r {also broken");
        interpret_line(&mut state, "^^ {nope");
        assert!(state.elements.get(ElementKind::Td).is_empty());
        assert!(state.refs.get("r").map(|s| s.is_empty()).unwrap_or(true));
        assert!(state.options.is_empty());
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_reference_styles_merge_additively() {
        let mut state = CompilerState::new(1, &ElementStyles::new());
        interpret_line(&mut state, "^r {a \"1\"}");
        interpret_line(&mut state, "^r {b \"2\"}");
        let style = state.refs.get("r").unwrap();
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_count_columns() {
        let text = ["td|a|b", "th|a|b|c|d", "td-width|1|2|3|4|5|6", "| x|y|z"];
        assert_eq!(count_columns(text), 4);
        assert_eq!(count_columns(["^r {a 1}"]), 0);
        assert_eq!(count_columns([]), 0);
    }

    #[test]
    fn test_trailing_pipe_counts_blank_cell() {
        assert_eq!(count_columns(["td|a|"]), 2);
    }
}
