//! Core compilation module
//!
//! The single engine of this crate: the texttab → HTML table compiler.

pub mod compiler;

// Re-export the main types and functions
pub use compiler::{
    compile, compile_to_model, CompiledCell, CompiledRow, CompiledTable, ElementKind,
    ElementStyles, RowType, StyleMap, StyleValue, TableCompiler,
};
