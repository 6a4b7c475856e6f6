//! # texttab
//!
//! Compact plain-text table descriptions compiled to styled HTML tables.
//!
//! ## Features
//!
//! - **Line-Oriented Format**: pipe-delimited cells with a `th`/`td` row-type prefix
//! - **Four Style Layers**: element, column, row and cell styles merged with
//!   well-defined precedence
//! - **Reference Styles**: declare `^name {...}` once, tag any row or cell with `^name`
//! - **Column Styles**: per-column declarations with `*` last-value propagation
//! - **Calculations**: `^^row-sum`, `^^row-avg`, `^^col-sum`, `^^col-avg` cell
//!   variables with printf-style formatting
//! - **Spans**: `colspan`/`rowspan` style keys become element attributes
//! - **Page Layout**: several compiled tables arranged side by side
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Simple table
//!
//! ```rust
//! use texttab::texttab_to_html;
//!
//! let html = texttab_to_html("th|Name|Score\ntd|alice|10\ntd|bob|12");
//! assert!(html.contains("<th>Name</th>"));
//! assert!(html.contains("<td>alice</td>"));
//! ```
//!
//! ### Styles and calculations
//!
//! ```rust
//! use texttab::texttab_to_html;
//!
//! let html = texttab_to_html(
//!     "^sum {format \"%,.2f\" font-weight bold}\n\
//!      td-text-align|\"right\"|*\n\
//!      td|100|200\n\
//!      td|^^col-sum^sum|^^col-sum^sum",
//! );
//! assert!(html.contains("100"));
//! ```

/// Core compilation module
pub mod core;

/// Data layer - static sets and constants
pub mod data;

/// Feature modules - collaborators around the core
pub mod features;

/// HTML serialization
pub mod html;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the core compiler API
pub use crate::core::compiler::{
    compile, compile_to_model, CompiledCell, CompiledRow, CompiledTable, ElementKind,
    ElementStyles, RowType, StyleMap, StyleValue, TableCompiler,
};

// Re-export feature modules
pub use crate::features::generate;
pub use crate::features::layout;
pub use crate::features::layout::page_to_html;

// Re-export utilities
pub use crate::utils::error::{TexttabError, TexttabResult};

/// Compile a texttab document to an HTML table.
///
/// # Arguments
/// * `input` - texttab source text
///
/// # Returns
/// The HTML `<table>` as a string
pub fn texttab_to_html(input: &str) -> String {
    compile(input, &ElementStyles::new())
}

/// Compile a texttab document with caller-supplied base element styles.
///
/// # Arguments
/// * `input` - texttab source text
/// * `base` - initial element styles (e.g. a default table border)
///
/// # Returns
/// The HTML `<table>` as a string
pub fn texttab_to_html_with_styles(input: &str, base: &ElementStyles) -> String {
    compile(input, base)
}

/// Compile a page of `<texttab!>` sub-documents into one side-by-side
/// arrangement.
pub fn texttab_page_to_html(input: &str) -> String {
    page_to_html(input, &ElementStyles::new())
}
