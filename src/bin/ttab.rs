//! Texttab CLI - compile plain-text table descriptions to styled HTML

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use texttab::{
    compile, page_to_html, ElementKind, ElementStyles, StyleMap, StyleValue, TexttabError,
    TexttabResult,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ttab")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Texttab - compact plain-text table descriptions compiled to styled HTML tables", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Page mode: treat the input as <texttab!> sub-documents arranged
    /// side by side
    #[arg(short, long)]
    page: bool,

    /// Base element styles file (JSON object keyed by table/tr/th/td)
    #[arg(short, long)]
    styles: Option<String>,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // Load base styles
    let base = match cli.styles {
        Some(ref path) => {
            let text = fs::read_to_string(path)?;
            match parse_styles_json(&text) {
                Ok(styles) => styles,
                Err(err) => {
                    eprintln!("Error reading {}: {}", path, err);
                    std::process::exit(1);
                }
            }
        }
        None => ElementStyles::new(),
    };

    let result = if cli.page {
        page_to_html(&input, &base)
    } else {
        compile(&input, &base)
    };

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

/// Parse a base-styles JSON object such as
/// `{"table": {"border": "1px solid"}, "td": {"padding": 4}}`.
#[cfg(feature = "cli")]
fn parse_styles_json(text: &str) -> TexttabResult<ElementStyles> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|err| TexttabError::invalid_styles(err.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| TexttabError::invalid_styles("expected a JSON object at the top level"))?;

    let mut base = ElementStyles::new();
    for (tag, styles) in object {
        let kind = ElementKind::from_tag(tag).ok_or_else(|| {
            TexttabError::invalid_styles(format!(
                "unknown element '{}' (expected table, tr, th or td)",
                tag
            ))
        })?;
        let styles = styles.as_object().ok_or_else(|| {
            TexttabError::invalid_styles(format!("styles for '{}' must be an object", tag))
        })?;

        let mut map = StyleMap::new();
        for (key, value) in styles {
            let value = match value {
                serde_json::Value::String(s) => StyleValue::from(s.as_str()),
                serde_json::Value::Number(n) => StyleValue::Num(n.as_f64().unwrap_or(0.0)),
                other => {
                    return Err(TexttabError::invalid_styles(format!(
                        "style '{}' must be a string or number, got {}",
                        key, other
                    )))
                }
            };
            map.insert(key.clone(), value);
        }
        base.merge(kind, &map);
    }
    Ok(base)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texttab --features cli");
    eprintln!("  ttab [OPTIONS] [INPUT_FILE]");
}
