//! Texttab to HTML compilation
//!
//! This module turns a line-oriented texttab source block into an HTML
//! `<table>` with fully resolved inline styles.
//!
//! # Module Structure
//!
//! - `context`: style model, per-compile state and the compiled data model
//! - `interpret`: line classification and dispatch (nine row kinds)
//! - `cells`: data-row cell compilation (styles, variables, formatting)
//! - `columns`: named and reference column-style declarations
//! - `style`: style-map resolution into attributes and CSS
//! - `literal`: the narrow brace-object/literal reader
//! - `escape`: the `\|` `\^` `\<` `\>` escape passes
//! - `format`: printf-style numeric formatting
//!
//! # Example
//!
//! ```rust
//! use texttab::core::compiler::{compile, ElementStyles};
//!
//! let html = compile("td|a|b|c", &ElementStyles::new());
//! assert!(html.contains("<td>a</td>"));
//! ```

pub mod cells;
pub mod columns;
pub mod context;
pub mod escape;
pub mod format;
pub mod interpret;
pub mod literal;
pub mod style;

use crate::html;

pub use context::{
    CompiledCell, CompiledRow, CompiledTable, ElementKind, ElementStyles, RowType, StyleMap,
    StyleValue,
};
pub use style::{resolve_style, ResolvedStyle};

use context::CompilerState;
use style::style_attrs;

/// The texttab compiler. Holds only the caller-supplied base element
/// styles; every `compile` call runs on fresh state, so one compiler
/// can serve any number of independent documents.
#[derive(Debug, Clone, Default)]
pub struct TableCompiler {
    base: ElementStyles,
}

impl TableCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the initial element styles (e.g. a `table` border every
    /// document should get).
    pub fn with_styles(base: ElementStyles) -> Self {
        TableCompiler { base }
    }

    /// Compile a texttab document to an HTML table. Never fails: the
    /// worst outcome for malformed input is a missing style or a
    /// dropped line.
    pub fn compile(&self, input: &str) -> String {
        let protected = escape::protect(input);
        let model = self.build_model(&protected);
        escape::restore(&render_model(&model))
    }

    /// Compile to the data model instead of HTML, exposing the rows and
    /// the `^^ {...}` implementation options to the surrounding tool.
    pub fn compile_to_model(&self, input: &str) -> CompiledTable {
        let protected = escape::protect(input);
        let mut model = self.build_model(&protected);
        restore_model(&mut model);
        model
    }

    fn build_model(&self, protected: &str) -> CompiledTable {
        let lines: Vec<&str> = protected.lines().map(str::trim).collect();
        let col_count = interpret::count_columns(lines.iter().copied());

        let mut state = CompilerState::new(col_count, &self.base);
        for line in &lines {
            interpret::interpret_line(&mut state, line);
        }

        CompiledTable {
            attrs: style_attrs(state.elements.get(ElementKind::Table)),
            rows: state.rows,
            options: state.options,
        }
    }
}

/// Assemble the compiled model into the final `<table>` markup.
fn render_model(table: &CompiledTable) -> String {
    if table.rows.is_empty() {
        return html::render("table", &table.attrs, "");
    }

    let mut body = String::from("\n");
    for row in &table.rows {
        let mut cells = String::new();
        for cell in &row.cells {
            cells.push_str(&html::render(row.row_type.as_tag(), &cell.attrs, &cell.content));
        }
        body.push_str(&html::render("tr", &row.attrs, &cells));
        body.push('\n');
    }
    html::render("table", &table.attrs, &body)
}

/// Restore escape placeholders in every user-visible string of a model.
fn restore_model(table: &mut CompiledTable) {
    for (_, value) in table.attrs.iter_mut() {
        *value = escape::restore(value);
    }
    for row in table.rows.iter_mut() {
        for (_, value) in row.attrs.iter_mut() {
            *value = escape::restore(value);
        }
        for cell in row.cells.iter_mut() {
            cell.content = escape::restore(&cell.content);
            for (_, value) in cell.attrs.iter_mut() {
                *value = escape::restore(value);
            }
        }
    }
}

/// Compile a texttab document with the given base element styles.
pub fn compile(input: &str, base: &ElementStyles) -> String {
    TableCompiler::with_styles(base.clone()).compile(input)
}

/// Compile a texttab document to its data model.
pub fn compile_to_model(input: &str, base: &ElementStyles) -> CompiledTable {
    TableCompiler::with_styles(base.clone()).compile_to_model(input)
}

// =============================================================================
// Tests
// =============================================================================
