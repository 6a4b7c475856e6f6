//! Utility modules
//!
//! The compile call itself is infallible; the error type covers the
//! fallible surfaces around it (CLI I/O, base-style files).

pub mod error;

pub use error::{TexttabError, TexttabResult};
