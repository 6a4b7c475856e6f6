//! Core state and structures for texttab compilation
//!
//! This module contains the style model (style maps, element/reference/
//! column styles), the per-compile state threaded through the row
//! interpreter, and the compiled data model handed to HTML
//! serialization.

use std::fmt;

use fxhash::FxHashMap;
use indexmap::IndexMap;

// =============================================================================
// Style values and style maps
// =============================================================================

/// A single style value: a string or a base-10 float.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Str(String),
    Num(f64),
}

impl StyleValue {
    /// Whether this value is the bare string `s`.
    pub fn is_bare(&self, s: &str) -> bool {
        matches!(self, StyleValue::Str(v) if v == s)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Num(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Num(n)
    }
}

/// Render a number the way style values and format fallbacks print it:
/// integral values without a decimal point, everything else via the
/// shortest float representation.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// An insertion-ordered style map merged by right-biased overwrite.
///
/// IndexMap keeps the first-insertion position on overwrite, so the CSS
/// string produced from a merged map is deterministic.
pub type StyleMap = IndexMap<String, StyleValue>;

/// Merge `src` into `dst`, later keys winning.
pub fn merge_styles(dst: &mut StyleMap, src: &StyleMap) {
    for (k, v) in src {
        dst.insert(k.clone(), v.clone());
    }
}

/// Merge an ordered sequence of style maps into one, left to right.
pub fn merge_all<'a, I>(layers: I) -> StyleMap
where
    I: IntoIterator<Item = &'a StyleMap>,
{
    let mut merged = StyleMap::new();
    for layer in layers {
        merge_styles(&mut merged, layer);
    }
    merged
}

// =============================================================================
// Element and row kinds
// =============================================================================

/// The four table element kinds that can carry element styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Table,
    Tr,
    Th,
    Td,
}

impl ElementKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "table" => Some(ElementKind::Table),
            "tr" => Some(ElementKind::Tr),
            "th" => Some(ElementKind::Th),
            "td" => Some(ElementKind::Td),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            ElementKind::Table => "table",
            ElementKind::Tr => "tr",
            ElementKind::Th => "th",
            ElementKind::Td => "td",
        }
    }
}

/// Row type of a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowType {
    Th,
    Td,
}

impl RowType {
    pub fn as_tag(&self) -> &'static str {
        match self {
            RowType::Th => "th",
            RowType::Td => "td",
        }
    }

    pub fn element_kind(&self) -> ElementKind {
        match self {
            RowType::Th => ElementKind::Th,
            RowType::Td => ElementKind::Td,
        }
    }
}

// =============================================================================
// Element, reference and column styles
// =============================================================================

/// One style map per element kind, populated additively.
#[derive(Debug, Clone, Default)]
pub struct ElementStyles {
    table: StyleMap,
    tr: StyleMap,
    th: StyleMap,
    td: StyleMap,
}

impl ElementStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding: `ElementStyles::new().with(ElementKind::Table, style)`.
    pub fn with(mut self, kind: ElementKind, style: StyleMap) -> Self {
        self.merge(kind, &style);
        self
    }

    pub fn get(&self, kind: ElementKind) -> &StyleMap {
        match kind {
            ElementKind::Table => &self.table,
            ElementKind::Tr => &self.tr,
            ElementKind::Th => &self.th,
            ElementKind::Td => &self.td,
        }
    }

    /// Additive merge: a new declaration for a kind folds into the
    /// existing map, it does not replace it.
    pub fn merge(&mut self, kind: ElementKind, style: &StyleMap) {
        let dst = match kind {
            ElementKind::Table => &mut self.table,
            ElementKind::Tr => &mut self.tr,
            ElementKind::Th => &mut self.th,
            ElementKind::Td => &mut self.td,
        };
        merge_styles(dst, style);
    }
}

/// Per row-type ordered column styles, one map per data column.
#[derive(Debug, Clone)]
pub struct ColumnStyles {
    th: Vec<StyleMap>,
    td: Vec<StyleMap>,
}

impl ColumnStyles {
    pub fn new(col_count: usize) -> Self {
        ColumnStyles {
            th: vec![StyleMap::new(); col_count],
            td: vec![StyleMap::new(); col_count],
        }
    }

    pub fn get(&self, row_type: RowType, index: usize) -> Option<&StyleMap> {
        match row_type {
            RowType::Th => self.th.get(index),
            RowType::Td => self.td.get(index),
        }
    }

    /// Merge a freshly declared per-column sequence into the existing
    /// one, position by position. Excess declared columns are dropped.
    pub fn merge_columns(&mut self, row_type: RowType, declared: &[StyleMap]) {
        let dst = match row_type {
            RowType::Th => &mut self.th,
            RowType::Td => &mut self.td,
        };
        for (slot, style) in dst.iter_mut().zip(declared.iter()) {
            merge_styles(slot, style);
        }
    }
}

// =============================================================================
// Calculation state
// =============================================================================

/// Running `{sum, count}` pair for one column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnCalc {
    pub sum: f64,
    pub count: u32,
}

impl ColumnCalc {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn reset(&mut self) {
        *self = ColumnCalc::default();
    }
}

// =============================================================================
// Compiled output model
// =============================================================================

/// A fully resolved cell: element attributes plus content text.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledCell {
    pub attrs: Vec<(String, String)>,
    pub content: String,
}

/// A compiled table row. The `<tr>` attributes are captured from the
/// element styles in force when the row was compiled, so later `tr`
/// declarations only affect later rows.
#[derive(Debug, Clone)]
pub struct CompiledRow {
    pub row_type: RowType,
    pub attrs: Vec<(String, String)>,
    pub cells: Vec<CompiledCell>,
}

/// The assembled data model handed to HTML serialization.
#[derive(Debug, Clone)]
pub struct CompiledTable {
    pub attrs: Vec<(String, String)>,
    pub rows: Vec<CompiledRow>,
    /// Implementation options declared via `^^ {...}`, keys lower-cased.
    /// Consumed by the surrounding tool, not the style model.
    pub options: FxHashMap<String, StyleValue>,
}

// =============================================================================
// Compiler state
// =============================================================================

/// The accumulating state threaded through the row interpreter.
/// Created once per compile, discarded after assembly.
#[derive(Debug)]
pub struct CompilerState {
    pub elements: ElementStyles,
    pub refs: FxHashMap<String, StyleMap>,
    pub columns: ColumnStyles,
    pub col_calc: Vec<ColumnCalc>,
    pub options: FxHashMap<String, StyleValue>,
    pub col_count: usize,
    pub rows: Vec<CompiledRow>,
}

impl CompilerState {
    pub fn new(col_count: usize, base: &ElementStyles) -> Self {
        CompilerState {
            elements: base.clone(),
            refs: FxHashMap::default(),
            columns: ColumnStyles::new(col_count),
            col_calc: vec![ColumnCalc::default(); col_count],
            options: FxHashMap::default(),
            col_count,
            rows: Vec::new(),
        }
    }

    /// Resolve a sequence of reference tag names into one merged style,
    /// left to right, later tags winning. Unknown tags contribute
    /// nothing.
    pub fn resolve_ref_tags<'a, I>(&self, tags: I) -> StyleMap
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut merged = StyleMap::new();
        for tag in tags {
            if let Some(style) = self.refs.get(tag) {
                merge_styles(&mut merged, style);
            }
        }
        merged
    }

    /// Resolve a raw caret-delimited tag string such as `^1^hdr`.
    pub fn resolve_tag_string(&self, tags: &str) -> StyleMap {
        self.resolve_ref_tags(tags.split('^').filter(|t| !t.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), StyleValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_merge_right_bias() {
        let mut a = style(&[("color", "red"), ("width", "10")]);
        let b = style(&[("color", "blue")]);
        merge_styles(&mut a, &b);
        assert_eq!(a["color"], StyleValue::from("blue"));
        assert_eq!(a["width"], StyleValue::from("10"));
    }

    #[test]
    fn test_merge_keeps_first_insertion_order() {
        let mut a = style(&[("a", "1"), ("b", "2")]);
        let b = style(&[("b", "3"), ("c", "4")]);
        merge_styles(&mut a, &b);
        let keys: Vec<&str> = a.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_element_styles_additive() {
        let mut elems = ElementStyles::new();
        elems.merge(ElementKind::Td, &style(&[("a", "1")]));
        elems.merge(ElementKind::Td, &style(&[("b", "2")]));
        let td = elems.get(ElementKind::Td);
        assert_eq!(td.len(), 2);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(StyleValue::Num(17.0).to_string(), "17");
    }

    #[test]
    fn test_ref_resolution_order() {
        let mut state = CompilerState::new(2, &ElementStyles::new());
        state.refs.insert("1".to_string(), style(&[("x", "a")]));
        state.refs.insert("2".to_string(), style(&[("x", "b")]));
        let merged = state.resolve_ref_tags(["1", "2"]);
        assert_eq!(merged["x"], StyleValue::from("b"));
        let merged = state.resolve_ref_tags(["2", "1", "missing"]);
        assert_eq!(merged["x"], StyleValue::from("a"));
    }

    #[test]
    fn test_column_calc() {
        let mut calc = ColumnCalc::default();
        calc.add(2.0);
        calc.add(4.0);
        assert_eq!(calc.sum, 6.0);
        assert_eq!(calc.count, 2);
        calc.reset();
        assert_eq!(calc.count, 0);
    }
}
