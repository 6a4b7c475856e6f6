//! Static sets and constants shared across the compiler.

/// HTML elements that never take a closing tag.
///
/// Cell content passes through as live inline HTML, so the serializer
/// only needs the void set for elements it emits itself or that
/// generators produce.
pub static VOID_ELEMENTS: phf::Set<&'static str> = phf::phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "source", "track", "wbr",
};

/// Style key routed to an element attribute instead of CSS.
pub const KEY_COLSPAN: &str = "colspan";

/// Style key routed to an element attribute instead of CSS.
pub const KEY_ROWSPAN: &str = "rowspan";

/// Style key consumed by numeric formatting, never emitted.
pub const KEY_FORMAT: &str = "format";

/// Format applied to calculation variables when no `format` style is in
/// force: thousands separator, two decimals.
pub const DEFAULT_CELL_FORMAT: &str = "%,.2f";

/// Spacer cell width between tables in page layout.
pub const DEFAULT_SPACER_WIDTH: &str = "20px";

/// Outer table margin in page layout.
pub const DEFAULT_SPACER_MARGIN: &str = "0px";
