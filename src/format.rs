//! Printf-style value formatting
//!
//! Supports the subset of format templates DataDisplay values need:
//! `%[flags][width][.precision]conversion` with flags `-+ 0,#` and the
//! conversions `d x X o` (integers), `c C` (code points), `f e E g G`
//! (doubles), `s S b B` (anything), plus the literals `%%` and `%n`. A template
//! takes at most one argument. Widths and precisions are capped at `u16::MAX`.
//!
//! Conversions are strict about the argument type: `%d` on a double or `%.2f`
//! on an integer is an error, which callers treat as "use the plain value".

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::component::DataValue;

static SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([-#+ 0,]*)(\d+)?(?:\.(\d+))?([a-zA-Z%])").expect("specifier pattern is valid")
});

/// Why a template could not be applied
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// A `%` that does not start a supported specifier
    UnknownConversion(String),
    /// Conversion does not accept this value type
    Mismatch {
        conversion: char,
        data_type: &'static str,
    },
    /// More than one argument requested
    MissingArgument,
    /// Flag combination the conversion rejects
    IllegalFlags { conversion: char, flags: String },
    /// Precision given to a conversion that has none
    IllegalPrecision(char),
    /// `-` or `0` without a width
    MissingWidth(char),
    /// Width or precision above `u16::MAX`
    TooWide(String),
    /// `%c` on an integer that is not a Unicode scalar value
    InvalidCodePoint(i32),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownConversion(s) => write!(f, "unknown conversion in {:?}", s),
            FormatError::Mismatch {
                conversion,
                data_type,
            } => write!(f, "%{} cannot format a {} value", conversion, data_type),
            FormatError::MissingArgument => write!(f, "template needs more than one argument"),
            FormatError::IllegalFlags { conversion, flags } => {
                write!(f, "flags {:?} not allowed with %{}", flags, conversion)
            }
            FormatError::IllegalPrecision(c) => write!(f, "precision not allowed with %{}", c),
            FormatError::MissingWidth(c) => write!(f, "width required for %{} with - or 0", c),
            FormatError::TooWide(n) => write!(f, "width or precision {} is too large", n),
            FormatError::InvalidCodePoint(n) => write!(f, "{} is not a valid code point", n),
        }
    }
}

impl std::error::Error for FormatError {}

/// Parsed `%...` specifier
#[derive(Debug, Clone, Default)]
struct Directive {
    flags: String,
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    group: bool,
    alternate: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

impl Directive {
    fn parse(caps: &regex::Captures<'_>) -> Result<Self, FormatError> {
        let flags = caps.get(1).map_or("", |m| m.as_str());
        let conversion = caps
            .get(4)
            .and_then(|m| m.as_str().chars().next())
            .unwrap_or('%');
        // Anything wider than u16 would only pad the page with whitespace
        let number = |i: usize| -> Result<Option<usize>, FormatError> {
            caps.get(i)
                .map(|m| {
                    m.as_str()
                        .parse::<u16>()
                        .map(usize::from)
                        .map_err(|_| FormatError::TooWide(m.as_str().to_string()))
                })
                .transpose()
        };

        let spec = Self {
            flags: flags.to_string(),
            left: flags.contains('-'),
            plus: flags.contains('+'),
            space: flags.contains(' '),
            zero: flags.contains('0'),
            group: flags.contains(','),
            alternate: flags.contains('#'),
            width: number(2)?,
            precision: number(3)?,
            conversion,
        };

        if (spec.left || spec.zero) && spec.width.is_none() {
            return Err(FormatError::MissingWidth(conversion));
        }
        if (spec.left && spec.zero) || (spec.plus && spec.space) {
            return Err(spec.illegal_flags());
        }
        Ok(spec)
    }

    fn illegal_flags(&self) -> FormatError {
        FormatError::IllegalFlags {
            conversion: self.conversion,
            flags: self.flags.clone(),
        }
    }

    fn mismatch(&self, value: &DataValue) -> FormatError {
        FormatError::Mismatch {
            conversion: self.conversion,
            data_type: value.data_type().as_str(),
        }
    }

    fn apply(&self, value: &DataValue) -> Result<String, FormatError> {
        match self.conversion {
            'd' => self.decimal(value),
            'x' | 'X' | 'o' => self.radix(value),
            'c' | 'C' => self.character(value),
            'f' => self.fixed(value),
            'e' | 'E' => self.scientific(value),
            'g' | 'G' => self.general(value),
            's' | 'S' => self.text(value.to_string()),
            'b' | 'B' => match value {
                DataValue::Bool(b) => self.text(b.to_string()),
                _ => self.text("true".to_string()),
            },
            other => Err(FormatError::UnknownConversion(format!("%{}", other))),
        }
    }

    fn decimal(&self, value: &DataValue) -> Result<String, FormatError> {
        let n: i128 = match value {
            DataValue::Int(n) => (*n).into(),
            DataValue::Long(n) => (*n).into(),
            _ => return Err(self.mismatch(value)),
        };
        if self.precision.is_some() {
            return Err(FormatError::IllegalPrecision(self.conversion));
        }
        if self.alternate {
            return Err(self.illegal_flags());
        }

        let mut digits = n.unsigned_abs().to_string();
        if self.group {
            digits = group_thousands(&digits);
        }
        Ok(self.pad_numeric(self.sign(n < 0), &digits))
    }

    fn radix(&self, value: &DataValue) -> Result<String, FormatError> {
        if self.precision.is_some() {
            return Err(FormatError::IllegalPrecision(self.conversion));
        }
        if self.plus || self.space || self.group {
            return Err(self.illegal_flags());
        }

        // Negative values print as their two's complement at native width
        let digits = match (value, self.conversion) {
            (DataValue::Int(n), 'o') => format!("{:o}", *n as u32),
            (DataValue::Int(n), _) => format!("{:x}", *n as u32),
            (DataValue::Long(n), 'o') => format!("{:o}", *n as u64),
            (DataValue::Long(n), _) => format!("{:x}", *n as u64),
            _ => return Err(self.mismatch(value)),
        };

        let prefix = match (self.alternate, self.conversion) {
            (false, _) => "",
            (true, 'o') => "0",
            (true, _) => "0x",
        };
        let padded = self.pad_numeric(prefix, &digits);
        if self.conversion == 'X' {
            Ok(padded.to_uppercase())
        } else {
            Ok(padded)
        }
    }

    fn character(&self, value: &DataValue) -> Result<String, FormatError> {
        let DataValue::Int(n) = value else {
            return Err(self.mismatch(value));
        };
        if self.precision.is_some() {
            return Err(FormatError::IllegalPrecision(self.conversion));
        }
        if self.zero || self.plus || self.space || self.group || self.alternate {
            return Err(self.illegal_flags());
        }

        let ch = u32::try_from(*n)
            .ok()
            .and_then(char::from_u32)
            .ok_or(FormatError::InvalidCodePoint(*n))?;
        let padded = self.pad_text(&ch.to_string());
        if self.conversion == 'C' {
            Ok(padded.to_uppercase())
        } else {
            Ok(padded)
        }
    }

    fn fixed(&self, value: &DataValue) -> Result<String, FormatError> {
        let DataValue::Double(d) = value else {
            return Err(self.mismatch(value));
        };
        if self.alternate {
            return Err(self.illegal_flags());
        }
        if !d.is_finite() {
            return Ok(self.pad_text(&non_finite(*d)));
        }

        let precision = self.precision.unwrap_or(6);
        let body = format!("{:.*}", precision, d.abs());
        let body = if self.group {
            let (int_part, frac_part) = body.split_once('.').unwrap_or((&body, ""));
            if frac_part.is_empty() {
                group_thousands(int_part)
            } else {
                format!("{}.{}", group_thousands(int_part), frac_part)
            }
        } else {
            body
        };
        Ok(self.pad_numeric(self.sign(d.is_sign_negative() && *d != 0.0), &body))
    }

    fn scientific(&self, value: &DataValue) -> Result<String, FormatError> {
        let DataValue::Double(d) = value else {
            return Err(self.mismatch(value));
        };
        if self.group || self.alternate {
            return Err(self.illegal_flags());
        }
        if !d.is_finite() {
            return Ok(self.pad_text(&non_finite(*d)));
        }

        let precision = self.precision.unwrap_or(6);
        let raw = format!("{:.*e}", precision, d.abs());
        let (mantissa, exponent) = raw.split_once('e').unwrap_or((&raw, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        let body = format!("{}e{}{:02}", mantissa, sign, exponent.abs());

        let padded = self.pad_numeric(self.sign(d.is_sign_negative() && *d != 0.0), &body);
        if self.conversion == 'E' {
            Ok(padded.to_uppercase())
        } else {
            Ok(padded)
        }
    }

    /// `precision` significant digits, in fixed form when the rounded
    /// exponent is in `-4..precision` and in scientific form otherwise
    fn general(&self, value: &DataValue) -> Result<String, FormatError> {
        let DataValue::Double(d) = value else {
            return Err(self.mismatch(value));
        };
        if self.alternate {
            return Err(self.illegal_flags());
        }

        let formatted = if !d.is_finite() {
            self.pad_text(&non_finite(*d))
        } else {
            let precision = match self.precision {
                Some(0) => 1,
                Some(p) => p,
                None => 6,
            };
            let rounded = format!("{:.*e}", precision - 1, d.abs());
            let exponent: i64 = rounded
                .split_once('e')
                .and_then(|(_, e)| e.parse().ok())
                .unwrap_or(0);
            let significant = precision as i64;

            if *d == 0.0 || (-4..significant).contains(&exponent) {
                let digits = (significant - 1 - exponent).max(0) as usize;
                Directive {
                    conversion: 'f',
                    precision: Some(digits),
                    ..self.clone()
                }
                .fixed(value)?
            } else {
                Directive {
                    conversion: 'e',
                    precision: Some(precision - 1),
                    group: false,
                    ..self.clone()
                }
                .scientific(value)?
            }
        };

        if self.conversion == 'G' {
            Ok(formatted.to_uppercase())
        } else {
            Ok(formatted)
        }
    }

    /// `%s` and `%b` on an already stringified argument
    fn text(&self, mut text: String) -> Result<String, FormatError> {
        if self.zero || self.plus || self.space || self.group || self.alternate {
            return Err(self.illegal_flags());
        }
        if let Some(precision) = self.precision {
            text = text.chars().take(precision).collect();
        }
        let padded = self.pad_text(&text);
        if self.conversion.is_ascii_uppercase() {
            Ok(padded.to_uppercase())
        } else {
            Ok(padded)
        }
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }

    /// Pad to width; zero padding goes between the sign/prefix and the digits
    fn pad_numeric(&self, sign: &str, body: &str) -> String {
        let len = sign.chars().count() + body.chars().count();
        let fill = self.width.unwrap_or(0).saturating_sub(len);
        if fill == 0 {
            format!("{}{}", sign, body)
        } else if self.left {
            format!("{}{}{}", sign, body, " ".repeat(fill))
        } else if self.zero {
            format!("{}{}{}", sign, "0".repeat(fill), body)
        } else {
            format!("{}{}{}", " ".repeat(fill), sign, body)
        }
    }

    fn pad_text(&self, text: &str) -> String {
        let fill = self.width.unwrap_or(0).saturating_sub(text.chars().count());
        if self.left {
            format!("{}{}", text, " ".repeat(fill))
        } else {
            format!("{}{}", " ".repeat(fill), text)
        }
    }
}

fn non_finite(d: f64) -> String {
    if d.is_nan() {
        "NaN".to_string()
    } else if d > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

/// Insert commas every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }
    result
}

fn push_literal(out: &mut String, literal: &str) -> Result<(), FormatError> {
    if literal.contains('%') {
        return Err(FormatError::UnknownConversion(literal.to_string()));
    }
    out.push_str(literal);
    Ok(())
}

/// Apply `template` to a single value
pub fn format_value(template: &str, value: &DataValue) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + 8);
    let mut last = 0;
    let mut consumed = false;

    for caps in SPECIFIER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_literal(&mut out, &template[last..whole.start()])?;
        last = whole.end();

        let spec = Directive::parse(&caps)?;
        match spec.conversion {
            '%' => out.push('%'),
            'n' => out.push('\n'),
            _ => {
                if consumed {
                    return Err(FormatError::MissingArgument);
                }
                consumed = true;
                out.push_str(&spec.apply(value)?);
            }
        }
    }

    push_literal(&mut out, &template[last..])?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(template: &str, value: impl Into<DataValue>) -> Result<String, FormatError> {
        format_value(template, &value.into())
    }

    #[test]
    fn test_fixed_precision() {
        assert_eq!(fmt("%.2f", 1234.56).unwrap(), "1234.56");
        assert_eq!(fmt("%.1f", 12.5).unwrap(), "12.5");
        assert_eq!(fmt("%f", 2.5).unwrap(), "2.500000");
        assert_eq!(fmt("%.0f", 7.0).unwrap(), "7");
    }

    #[test]
    fn test_literals_around_specifier() {
        assert_eq!(fmt("$%.2f USD", 9.5).unwrap(), "$9.50 USD");
        assert_eq!(fmt("%d%%", 75).unwrap(), "75%");
    }

    #[test]
    fn test_grouping_and_signs() {
        assert_eq!(fmt("%,d", 1234567).unwrap(), "1,234,567");
        assert_eq!(fmt("%,.2f", 1234567.891).unwrap(), "1,234,567.89");
        assert_eq!(fmt("%+d", 5).unwrap(), "+5");
        assert_eq!(fmt("%d", -5_i64).unwrap(), "-5");
        assert_eq!(fmt("% d", 5).unwrap(), " 5");
    }

    #[test]
    fn test_width_padding() {
        assert_eq!(fmt("%5d", 42).unwrap(), "   42");
        assert_eq!(fmt("%-5d|", 42).unwrap(), "42   |");
        assert_eq!(fmt("%05d", -42).unwrap(), "-0042");
        assert_eq!(fmt("%8.2f", 3.14159).unwrap(), "    3.14");
    }

    #[test]
    fn test_radix() {
        assert_eq!(fmt("%x", 255).unwrap(), "ff");
        assert_eq!(fmt("%X", 255).unwrap(), "FF");
        assert_eq!(fmt("%#x", 255).unwrap(), "0xff");
        assert_eq!(fmt("%o", 8).unwrap(), "10");
        assert_eq!(fmt("%x", -1).unwrap(), "ffffffff");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(fmt("%e", 1234.5).unwrap(), "1.234500e+03");
        assert_eq!(fmt("%.2E", 0.00012).unwrap(), "1.20E-04");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(fmt("%s", 12.5).unwrap(), "12.5");
        assert_eq!(fmt("[%6s]", 42).unwrap(), "[    42]");
        assert_eq!(fmt("%.2s", 12345).unwrap(), "12");
    }

    #[test]
    fn test_type_mismatch() {
        assert!(matches!(fmt("%d", 12.5), Err(FormatError::Mismatch { .. })));
        assert!(matches!(fmt("%.2f", 12345), Err(FormatError::Mismatch { .. })));
        assert!(matches!(fmt("%x", 1.5), Err(FormatError::Mismatch { .. })));
    }

    #[test]
    fn test_malformed_templates() {
        assert!(matches!(fmt("100%", 1), Err(FormatError::UnknownConversion(_))));
        assert!(matches!(fmt("%q", 1), Err(FormatError::UnknownConversion(_))));
        assert_eq!(fmt("%d %d", 1), Err(FormatError::MissingArgument));
        assert_eq!(fmt("%.2d", 1), Err(FormatError::IllegalPrecision('d')));
        assert_eq!(fmt("%-d", 1), Err(FormatError::MissingWidth('d')));
        assert!(matches!(fmt("%i", 1), Err(FormatError::UnknownConversion(_))));
    }

    #[test]
    fn test_oversized_width_is_rejected() {
        assert_eq!(
            fmt("%18446744073709551615d", 1),
            Err(FormatError::TooWide("18446744073709551615".to_string()))
        );
        assert!(matches!(fmt("%.70000f", 1.5), Err(FormatError::TooWide(_))));
        assert!(matches!(fmt("%99999999999999999999999s", "x"), Err(FormatError::TooWide(_))));
        assert_eq!(fmt("%8d", 1).unwrap(), "       1");
    }

    #[test]
    fn test_general_conversion() {
        assert_eq!(fmt("%g", 1234.5).unwrap(), "1234.50");
        assert_eq!(fmt("%g", 0.00012).unwrap(), "0.000120000");
        assert_eq!(fmt("%g", 1e10).unwrap(), "1.00000e+10");
        assert_eq!(fmt("%.3G", 0.00001234).unwrap(), "1.23E-05");
        assert_eq!(fmt("%g", 0.0).unwrap(), "0.00000");
        assert!(matches!(fmt("%g", 5), Err(FormatError::Mismatch { .. })));
    }

    #[test]
    fn test_character_and_boolean_conversions() {
        assert_eq!(fmt("%c", 65).unwrap(), "A");
        assert_eq!(fmt("%C", 97).unwrap(), "A");
        assert_eq!(fmt("%c", -1), Err(FormatError::InvalidCodePoint(-1)));
        assert!(matches!(fmt("%c", "A"), Err(FormatError::Mismatch { .. })));

        assert_eq!(fmt("%b", false).unwrap(), "false");
        assert_eq!(fmt("%B", true).unwrap(), "TRUE");
        assert_eq!(fmt("%b", 0).unwrap(), "true");
        assert_eq!(fmt("%.1b", false).unwrap(), "f");
    }

    #[test]
    fn test_newline_literal() {
        assert_eq!(fmt("%d%n", 1).unwrap(), "1\n");
    }
}
