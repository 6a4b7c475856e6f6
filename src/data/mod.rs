//! Data layer - static sets and constants
//!
//! This module contains the static data used throughout compilation:
//! - The HTML void-element set
//! - Reserved style keys
//! - Default numeric format and layout defaults

pub mod constants;

pub use constants::{
    DEFAULT_CELL_FORMAT, DEFAULT_SPACER_MARGIN, DEFAULT_SPACER_WIDTH, KEY_COLSPAN, KEY_FORMAT,
    KEY_ROWSPAN, VOID_ELEMENTS,
};
