//! Feature modules - collaborators around the core compiler
//!
//! - Page layout: several compiled tables arranged side by side
//! - Generators: texttab source text from in-memory data

pub mod generate;
pub mod layout;

// Re-export commonly used functions
pub use generate::{data_row, data_rows, escape_text, keyed_rows};
pub use layout::page_to_html;
