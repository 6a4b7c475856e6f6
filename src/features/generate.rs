//! Texttab source generators
//!
//! Formatting helpers that serialize in-memory data into texttab source
//! text the core compiler can parse back: pipe-delimited cells with the
//! four escapes applied, and column-style declarations with values
//! quoted or bare per the literal rules.

use crate::core::compiler::context::{format_number, RowType, StyleValue};

/// Column-style declaration target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTarget {
    Th,
    Td,
    /// Both row types (`t*-` prefix).
    Both,
}

impl ColumnTarget {
    fn as_prefix(&self) -> &'static str {
        match self {
            ColumnTarget::Th => "th",
            ColumnTarget::Td => "td",
            ColumnTarget::Both => "t*",
        }
    }
}

/// Escape cell text so pipes, carets and angle brackets survive a
/// round trip through the compiler.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '|' => out.push_str(r"\|"),
            '^' => out.push_str(r"\^"),
            '<' => out.push_str(r"\<"),
            '>' => out.push_str(r"\>"),
            other => out.push(other),
        }
    }
    out
}

/// One data row: `td | a | b | c`.
pub fn data_row(row_type: RowType, cells: &[&str]) -> String {
    let mut parts = vec![row_type.as_tag().to_string()];
    parts.extend(cells.iter().map(|c| escape_text(c)));
    parts.join(" | ")
}

/// One data row per entry.
pub fn data_rows(row_type: RowType, rows: &[Vec<&str>]) -> String {
    rows.iter()
        .map(|cells| data_row(row_type, cells))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A two-column key/value table body.
pub fn keyed_rows(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| data_row(RowType::Td, &[key, value]))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A named column-style declaration: `td-width | 10 | "4em" | *`.
pub fn named_column_style(
    target: ColumnTarget,
    name: &str,
    values: &[StyleValue],
    propagate: bool,
) -> String {
    let mut parts = vec![format!("{}-{}", target.as_prefix(), name)];
    parts.extend(values.iter().map(quote_literal));
    if propagate {
        parts.push("*".to_string());
    }
    parts.join(" | ")
}

/// A reference column-style declaration: `td-^ | ^a | ^b^c | *`.
pub fn reference_column_style(
    target: ColumnTarget,
    tags_per_column: &[Vec<&str>],
    propagate: bool,
) -> String {
    let mut parts = vec![format!("{}-^", target.as_prefix())];
    parts.extend(tags_per_column.iter().map(|tags| {
        tags.iter()
            .map(|tag| format!("^{}", tag))
            .collect::<String>()
    }));
    if propagate {
        parts.push("*".to_string());
    }
    parts.join(" | ")
}

/// Quote a value the way the literal reader expects: strings quoted
/// (with `"` and `\` escaped), numbers bare.
fn quote_literal(value: &StyleValue) -> String {
    match value {
        StyleValue::Str(s) => {
            format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
        }
        StyleValue::Num(n) => format_number(*n),
    }
}
