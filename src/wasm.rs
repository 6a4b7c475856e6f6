//! WASM bindings for texttab
//!
//! This module provides JavaScript-accessible functions for compiling
//! texttab sources and pages in the browser.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::core::compiler::ElementStyles;

/// Initialize panic messages in the browser console.
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Compile a texttab document to an HTML table.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn compile_table(input: &str) -> String {
    crate::core::compiler::compile(input, &ElementStyles::new())
}

/// Compile a page of `<texttab!>` sub-documents arranged side by side.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn compile_page(input: &str) -> String {
    crate::features::layout::page_to_html(input, &ElementStyles::new())
}
