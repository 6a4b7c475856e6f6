//! Printf-style numeric formatting for the `format` style directive
//!
//! A cell's `format` value is a printf-like string with one conversion
//! spec, e.g. `"%,.2f"` or `"$%d"`. The formatter is deliberately
//! narrow: flags `-`, `+`, `0` and `,` (thousands grouping), optional
//! width and precision, conversions `f`, `e`, `E`, `d`, `i`, `s` and
//! the `%%` literal. Any failure returns `None` so the caller can fall
//! back to the plain stringified number.

use super::context::format_number;

#[derive(Debug, Default)]
struct Spec {
    left: bool,
    plus: bool,
    zero: bool,
    comma: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conv: char,
}

/// Format `value` through a printf-like format string.
///
/// `None` signals a malformed format string or a value/conversion
/// mismatch (`%d` on a fractional value).
pub fn format_value(fmt: &str, value: f64) -> Option<String> {
    let mut out = String::new();
    let mut chars = fmt.chars().peekable();
    let mut converted = false;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }
        // One value, one conversion.
        if converted {
            return None;
        }
        let spec = parse_spec(&mut chars)?;
        out.push_str(&render(&spec, value)?);
        converted = true;
    }
    Some(out)
}

fn parse_spec(chars: &mut std::iter::Peekable<std::str::Chars>) -> Option<Spec> {
    let mut spec = Spec::default();

    while let Some(&c) = chars.peek() {
        match c {
            '-' => spec.left = true,
            '+' => spec.plus = true,
            '0' => spec.zero = true,
            ',' => spec.comma = true,
            _ => break,
        }
        chars.next();
    }

    let mut width = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            width.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if !width.is_empty() {
        spec.width = width.parse().ok();
    }

    if chars.peek() == Some(&'.') {
        chars.next();
        let mut prec = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                prec.push(c);
                chars.next();
            } else {
                break;
            }
        }
        spec.precision = Some(prec.parse().unwrap_or(0));
    }

    spec.conv = chars.next()?;
    Some(spec)
}

fn render(spec: &Spec, value: f64) -> Option<String> {
    let body = match spec.conv {
        'f' | 'F' => {
            if !value.is_finite() {
                format!("{}", value)
            } else {
                let prec = spec.precision.unwrap_or(6);
                let mut digits = format!("{:.*}", prec, value.abs());
                if spec.comma {
                    digits = group_thousands(&digits);
                }
                signed(value.is_sign_negative(), spec.plus, digits)
            }
        }
        'd' | 'i' => {
            if !value.is_finite() || value.fract() != 0.0 {
                return None;
            }
            let mut digits = format!("{}", value.abs() as i64);
            if spec.comma {
                digits = group_thousands(&digits);
            }
            signed(value < 0.0, spec.plus, digits)
        }
        'e' | 'E' => {
            let prec = spec.precision.unwrap_or(6);
            let s = format!("{:.*e}", prec, value);
            if spec.conv == 'E' {
                s.to_uppercase()
            } else {
                s
            }
        }
        's' => format_number(value),
        _ => return None,
    };
    Some(pad(spec, body))
}

fn signed(negative: bool, plus: bool, digits: String) -> String {
    if negative {
        format!("-{}", digits)
    } else if plus {
        format!("+{}", digits)
    } else {
        digits
    }
}

/// Group the integer part of an unsigned digit string in threes.
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.find('.') {
        Some(dot) => (&digits[..dot], &digits[dot..]),
        None => (digits, ""),
    };
    let mut grouped = String::new();
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(frac_part);
    grouped
}

fn pad(spec: &Spec, body: String) -> String {
    let width = match spec.width {
        Some(w) if w > body.chars().count() => w,
        _ => return body,
    };
    let fill = width - body.chars().count();
    if spec.left {
        format!("{}{}", body, " ".repeat(fill))
    } else if spec.zero {
        // Zeros go between the sign and the digits.
        let (sign, rest) = match body.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => match body.strip_prefix('+') {
                Some(rest) => ("+", rest),
                None => ("", body.as_str()),
            },
        };
        format!("{}{}{}", sign, "0".repeat(fill), rest)
    } else {
        format!("{}{}", " ".repeat(fill), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_format() {
        assert_eq!(format_value("%,.2f", 12345.678).unwrap(), "12,345.68");
        assert_eq!(format_value("%,.2f", 51.6).unwrap(), "51.60");
        assert_eq!(format_value("%,.2f", -1234.5).unwrap(), "-1,234.50");
    }

    #[test]
    fn test_fixed_precision() {
        assert_eq!(format_value("%.1f", 2.0).unwrap(), "2.0");
        assert_eq!(format_value("%.0f", 2.71).unwrap(), "3");
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(format_value("%d", 3.0).unwrap(), "3");
        assert_eq!(format_value("%,d", 1234567.0).unwrap(), "1,234,567");
        // Fractional value with %d is a mismatch.
        assert_eq!(format_value("%d", 2.5), None);
    }

    #[test]
    fn test_width_and_flags() {
        assert_eq!(format_value("%5d", 42.0).unwrap(), "   42");
        assert_eq!(format_value("%-5d", 42.0).unwrap(), "42   ");
        assert_eq!(format_value("%05d", 42.0).unwrap(), "00042");
        assert_eq!(format_value("%05d", -42.0).unwrap(), "-0042");
        assert_eq!(format_value("%+d", 42.0).unwrap(), "+42");
    }

    #[test]
    fn test_literal_text_around_spec() {
        assert_eq!(format_value("$%,.2f", 1000.0).unwrap(), "$1,000.00");
        assert_eq!(format_value("%.0f%%", 85.0).unwrap(), "85%");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(format_value("%s", 42.0).unwrap(), "42");
        assert_eq!(format_value("%s", 2.5).unwrap(), "2.5");
    }

    #[test]
    fn test_unknown_conversion_fails() {
        assert_eq!(format_value("%q", 1.0), None);
        assert_eq!(format_value("%", 1.0), None);
        assert_eq!(format_value("%d %d", 1.0), None);
    }

    #[test]
    fn test_no_spec_is_literal() {
        assert_eq!(format_value("n/a", 1.0).unwrap(), "n/a");
    }
}
