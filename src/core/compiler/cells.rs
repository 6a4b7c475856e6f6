//! Cell compilation for data rows
//!
//! Splits a data row into cells, separates literal content from
//! trailing `^ref` tags, merges the four style layers (element <
//! column < row < cell), evaluates calculation variables and performs
//! numeric detection and formatting.

use crate::data::{DEFAULT_CELL_FORMAT, KEY_FORMAT};

use super::context::{
    format_number, merge_all, CompiledCell, CompiledRow, CompilerState, ElementKind, RowType,
};
use super::format::format_value;
use super::style::style_attrs;

/// A raw cell split into content and ref-tag portions.
///
/// `variable` marks a `^^name` calculation token; for those, `content`
/// is the variable name.
#[derive(Debug, PartialEq)]
struct RawCell<'a> {
    content: &'a str,
    tags: &'a str,
    variable: bool,
}

/// Split a cell's raw text: a `^^variable` token ends at the first
/// caret or whitespace after the marker; an ordinary cell's content
/// ends at the first caret.
fn split_cell(raw: &str) -> RawCell<'_> {
    if let Some(rest) = raw.strip_prefix("^^") {
        let end = rest
            .find(|c: char| c == '^' || c.is_whitespace())
            .unwrap_or(rest.len());
        return RawCell {
            content: &rest[..end],
            tags: &rest[end..],
            variable: true,
        };
    }
    match raw.find('^') {
        Some(idx) => RawCell {
            content: raw[..idx].trim_end(),
            tags: &raw[idx..],
            variable: false,
        },
        None => RawCell {
            content: raw,
            tags: "",
            variable: false,
        },
    }
}

/// Compile one data row into the output model, updating the column
/// calculation state afterwards so column variables in this row only
/// see rows strictly above.
pub fn compile_data_row(state: &mut CompilerState, line: &str, row_type: RowType) -> CompiledRow {
    let segments: Vec<&str> = line.split('|').map(str::trim).collect();

    // Row style from `^ref` tags suffixed to the row-type token.
    let head = segments[0];
    let row_style = match head.find('^') {
        Some(idx) => state.resolve_tag_string(&head[idx..]),
        None => Default::default(),
    };

    let tr_attrs = style_attrs(state.elements.get(ElementKind::Tr));

    let empty_column = Default::default();
    let mut cells = Vec::with_capacity(state.col_count);
    let mut row_sum = 0.0;
    let mut row_count: u32 = 0;
    // Column contributions are applied after the whole row.
    let mut pending: Vec<(usize, f64)> = Vec::new();

    for index in 0..state.col_count {
        let raw = segments.get(index + 1).copied().unwrap_or("");
        let cell = split_cell(raw);
        let cell_style = state.resolve_tag_string(cell.tags);

        let layers = [
            state.elements.get(row_type.element_kind()),
            state.columns.get(row_type, index).unwrap_or(&empty_column),
            &row_style,
            &cell_style,
        ];
        let merged = merge_all(layers);

        let explicit_format = merged.get(KEY_FORMAT).map(|v| v.to_string());
        let calc_format = explicit_format
            .clone()
            .unwrap_or_else(|| DEFAULT_CELL_FORMAT.to_string());

        let content = if cell.variable {
            match cell.content {
                "row-sum" => render_calc(row_sum, row_count, false, &calc_format),
                "row-avg" => render_calc(row_sum, row_count, true, &calc_format),
                "col-sum" | "col-avg" => {
                    let calc = state.col_calc[index];
                    let text = render_calc(
                        calc.sum,
                        calc.count,
                        cell.content == "col-avg",
                        &calc_format,
                    );
                    state.col_calc[index].reset();
                    text
                }
                // Unknown variable names fall through as ordinary content.
                other => resolve_literal(
                    other,
                    explicit_format.as_deref(),
                    index,
                    &mut row_sum,
                    &mut row_count,
                    &mut pending,
                ),
            }
        } else {
            resolve_literal(
                cell.content,
                explicit_format.as_deref(),
                index,
                &mut row_sum,
                &mut row_count,
                &mut pending,
            )
        };

        cells.push(CompiledCell {
            attrs: style_attrs(&merged),
            content,
        });
    }

    for (index, value) in pending {
        state.col_calc[index].add(value);
    }

    CompiledRow {
        row_type,
        attrs: tr_attrs,
        cells,
    }
}

/// Resolve literal cell content: numeric values are optionally
/// formatted and feed the row and column running sums; everything else
/// passes through verbatim.
fn resolve_literal(
    content: &str,
    explicit_format: Option<&str>,
    index: usize,
    row_sum: &mut f64,
    row_count: &mut u32,
    pending: &mut Vec<(usize, f64)>,
) -> String {
    match content.parse::<f64>() {
        Ok(value) => {
            *row_sum += value;
            *row_count += 1;
            pending.push((index, value));
            match explicit_format {
                Some(fmt) => {
                    format_value(fmt, value).unwrap_or_else(|| format_number(value))
                }
                None => content.to_string(),
            }
        }
        Err(_) => content.to_string(),
    }
}

/// Render a sum/average over `count` contributors; `NaN` with none.
fn render_calc(sum: f64, count: u32, average: bool, fmt: &str) -> String {
    if count == 0 {
        return "NaN".to_string();
    }
    let value = if average { sum / count as f64 } else { sum };
    format_value(fmt, value).unwrap_or_else(|| format_number(value))
}
