//! Multi-table page layout
//!
//! A page is raw text holding one or more `<texttab!> ... </texttab!>`
//! sub-documents plus an optional options header line (a brace object,
//! e.g. `{width "40px"}`). Each sub-document compiles independently and
//! the results land in one spacer-separated row of an enclosing
//! non-bordered table. Nesting happens here, never inside a single
//! compile pass.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::compiler::literal::parse_brace_object;
use crate::core::compiler::{compile, ElementStyles};
use crate::data::{DEFAULT_SPACER_MARGIN, DEFAULT_SPACER_WIDTH};
use crate::html;

lazy_static! {
    static ref SUBDOC_RE: Regex = Regex::new(r"(?s)<texttab!>(.*?)</texttab!>").unwrap();
}

/// Page options read from the header line.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Spacer cell width between tables.
    pub width: String,
    /// Outer table margin.
    pub margin: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        PageOptions {
            width: DEFAULT_SPACER_WIDTH.to_string(),
            margin: DEFAULT_SPACER_MARGIN.to_string(),
        }
    }
}

/// Parse the first brace-object line outside any sub-document.
/// Unrecognized keys are ignored; a malformed object means defaults.
fn page_options(input: &str) -> PageOptions {
    let mut options = PageOptions::default();
    let outside = SUBDOC_RE.replace_all(input, "");
    for line in outside.lines() {
        let line = line.trim();
        if !line.starts_with('{') {
            continue;
        }
        if let Some(map) = parse_brace_object(line) {
            if let Some(width) = map.get("width") {
                options.width = width.to_string();
            }
            if let Some(margin) = map.get("margin") {
                options.margin = margin.to_string();
            }
        }
        break;
    }
    options
}

/// Compile every sub-document and arrange the tables in one row.
pub fn page_to_html(input: &str, base: &ElementStyles) -> String {
    let options = page_options(input);

    let mut cells = String::new();
    for (index, caps) in SUBDOC_RE.captures_iter(input).enumerate() {
        let source = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        if index > 0 {
            let spacer = vec![(
                "style".to_string(),
                format!("width:{}", options.width),
            )];
            cells.push_str(&html::render("td", &spacer, ""));
        }
        let valign = vec![("style".to_string(), "vertical-align:top".to_string())];
        cells.push_str(&html::render("td", &valign, &compile(source, base)));
    }

    let row = html::render("tr", &[], &cells);
    let outer = vec![(
        "style".to_string(),
        format!("border:none; margin:{}", options.margin),
    )];
    html::render("table", &outer, &row)
}
