//! C `printf` formatting
//!
//! This module renders a C format string against a list of [`CValue`]
//! arguments and returns the text `printf` would write.
//!
//! # Supported directives
//!
//! `%[flags][width][.precision][length]conversion` with
//!
//! - flags `-`, `+`, space, `0`, `#`
//! - decimal width and precision (`*` is rejected)
//! - length modifiers `hh`, `h`, `l`, `ll`, `L`
//! - conversions `d i u o x X c s e E f F g G a A %`
//!
//! # Argument reinterpretation
//!
//! Integer conversions do not look at the argument's declared type. They
//! take the promoted bits ([`CValue::promoted_bits`]), truncate them to the
//! width the length modifier names and read them as signed or unsigned.
//! This is what makes `printf("%d", 3000000000u)` print `-1294967296`.
//!
//! Passing a floating value to an integer conversion (or the reverse) has no
//! meaningful bit-level answer in C, so it is reported as
//! [`DemoError::ArgumentMismatch`].

pub mod float;

use crate::errors::DemoError;
use crate::value::{CValue, ValueKind};
use core::ffi::{c_int, c_long, c_longlong, c_short};
use std::iter::Peekable;
use std::str::CharIndices;

/// Length modifier of a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Length {
    #[default]
    None,
    /// `hh`
    Char,
    /// `h`
    Short,
    /// `l`
    Long,
    /// `ll`
    LongLong,
    /// `L`
    LongDouble,
}

impl Length {
    /// Width in bits an integer conversion reads
    fn integer_bits(self) -> Option<u32> {
        match self {
            Length::None => Some(c_int::BITS),
            Length::Char => Some(8),
            Length::Short => Some(c_short::BITS),
            Length::Long => Some(c_long::BITS),
            Length::LongLong => Some(c_longlong::BITS),
            Length::LongDouble => None,
        }
    }
}

/// One parsed `%` directive
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directive {
    pub left_align: bool,
    pub plus_sign: bool,
    pub space_sign: bool,
    pub zero_pad: bool,
    pub alternate: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub length: Length,
    pub conversion: char,
    /// Byte offset of the `%` in the format string
    pub offset: usize,
}

/// Format `format` against `args` as C `printf` would
pub fn format(format: &str, args: &[CValue]) -> Result<String, DemoError> {
    let mut output = String::new();
    let mut chars = format.char_indices().peekable();
    let mut arg_index = 0;

    while let Some((offset, ch)) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }

        let directive = parse_directive(format, &mut chars, offset)?;
        if directive.conversion == '%' {
            output.push('%');
            continue;
        }

        let arg = args.get(arg_index).ok_or(DemoError::MissingArgument {
            conversion: directive.conversion,
            offset,
        })?;
        arg_index += 1;

        output.push_str(&render(&directive, arg)?);
    }

    if arg_index < args.len() {
        return Err(DemoError::ExtraArguments {
            used: arg_index,
            supplied: args.len(),
        });
    }

    Ok(output)
}

/// Parse every directive in `format` without rendering anything
pub fn directives(format: &str) -> Result<Vec<Directive>, DemoError> {
    let mut found = Vec::new();
    let mut chars = format.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        if ch == '%' {
            found.push(parse_directive(format, &mut chars, offset)?);
        }
    }

    Ok(found)
}

fn parse_directive(
    format: &str,
    chars: &mut Peekable<CharIndices<'_>>,
    offset: usize,
) -> Result<Directive, DemoError> {
    let mut directive = Directive {
        offset,
        ..Directive::default()
    };

    // `%%` takes no flags
    if let Some(&(_, '%')) = chars.peek() {
        chars.next();
        directive.conversion = '%';
        return Ok(directive);
    }

    while let Some(&(_, c)) = chars.peek() {
        match c {
            '-' => directive.left_align = true,
            '+' => directive.plus_sign = true,
            ' ' => directive.space_sign = true,
            '0' => directive.zero_pad = true,
            '#' => directive.alternate = true,
            _ => break,
        }
        chars.next();
    }

    if let Some(&(idx, '*')) = chars.peek() {
        return Err(unsupported(format, offset, idx + 1));
    }
    directive.width = parse_number(chars);

    if let Some(&(_, '.')) = chars.peek() {
        chars.next();
        if let Some(&(idx, '*')) = chars.peek() {
            return Err(unsupported(format, offset, idx + 1));
        }
        directive.precision = Some(parse_number(chars).unwrap_or(0));
    }

    directive.length = match chars.peek() {
        Some(&(_, 'h')) => {
            chars.next();
            if let Some(&(_, 'h')) = chars.peek() {
                chars.next();
                Length::Char
            } else {
                Length::Short
            }
        }
        Some(&(_, 'l')) => {
            chars.next();
            if let Some(&(_, 'l')) = chars.peek() {
                chars.next();
                Length::LongLong
            } else {
                Length::Long
            }
        }
        Some(&(_, 'L')) => {
            chars.next();
            Length::LongDouble
        }
        _ => Length::None,
    };

    match chars.next() {
        Some((idx, c)) => match c {
            'd' | 'i' | 'u' | 'o' | 'x' | 'X' | 'c' | 's' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G'
            | 'a' | 'A' => {
                directive.conversion = c;
                Ok(directive)
            }
            _ => Err(unsupported(format, offset, idx + c.len_utf8())),
        },
        None => Err(DemoError::InvalidFormat {
            message: "format string ends inside a directive".to_string(),
            offset,
        }),
    }
}

fn parse_number(chars: &mut Peekable<CharIndices<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(&(_, c)) = chars.peek() {
        match c.to_digit(10) {
            Some(d) => {
                value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
                chars.next();
            }
            None => break,
        }
    }
    value
}

fn unsupported(format: &str, start: usize, end: usize) -> DemoError {
    DemoError::UnsupportedConversion {
        directive: format[start..end].to_string(),
        offset: start,
    }
}

fn render(directive: &Directive, arg: &CValue) -> Result<String, DemoError> {
    match directive.conversion {
        'd' | 'i' | 'u' | 'o' | 'x' | 'X' | 'c' => {
            let bits = expect_kind(directive, arg, ValueKind::Integer)?;
            render_integer(directive, bits)
        }
        'e' | 'E' | 'f' | 'F' | 'g' | 'G' | 'a' | 'A' => {
            expect_kind(directive, arg, ValueKind::Floating)?;
            let x = arg.as_double().unwrap_or(f64::NAN);
            render_float(directive, x)
        }
        's' => {
            expect_kind(directive, arg, ValueKind::String)?;
            let s = arg.as_str().unwrap_or_default();
            let body: String = match directive.precision {
                Some(max) => s.chars().take(max).collect(),
                None => s.to_string(),
            };
            Ok(pad(directive, "", "", &body, false))
        }
        other => Err(DemoError::UnsupportedConversion {
            directive: format!("%{}", other),
            offset: directive.offset,
        }),
    }
}

/// Checks the argument category; integer arguments yield their promoted bits
fn expect_kind(directive: &Directive, arg: &CValue, kind: ValueKind) -> Result<u64, DemoError> {
    if arg.kind() != kind {
        let expected = match kind {
            ValueKind::Integer => "an integer",
            ValueKind::Floating => "a floating value",
            ValueKind::String => "a string",
        };
        return Err(DemoError::ArgumentMismatch {
            conversion: directive.conversion,
            expected,
            got: arg.type_name().to_string(),
            offset: directive.offset,
        });
    }
    Ok(arg.promoted_bits().unwrap_or(0))
}

fn render_integer(directive: &Directive, bits: u64) -> Result<String, DemoError> {
    let width = directive
        .length
        .integer_bits()
        .ok_or_else(|| DemoError::UnsupportedConversion {
            directive: format!("%L{}", directive.conversion),
            offset: directive.offset,
        })?;

    let truncated = if width >= 64 {
        bits
    } else {
        bits & ((1u64 << width) - 1)
    };

    if directive.conversion == 'c' {
        let body = ((truncated & 0xff) as u8 as char).to_string();
        return Ok(pad(directive, "", "", &body, false));
    }

    let (negative, magnitude) = match directive.conversion {
        'd' | 'i' => {
            let shift = 64 - width;
            let value = ((truncated << shift) as i64) >> shift;
            (value < 0, value.unsigned_abs())
        }
        _ => (false, truncated),
    };

    let mut digits = match directive.conversion {
        'o' => format!("{:o}", magnitude),
        'x' => format!("{:x}", magnitude),
        'X' => format!("{:X}", magnitude),
        _ => magnitude.to_string(),
    };

    if let Some(precision) = directive.precision {
        if precision == 0 && magnitude == 0 {
            digits.clear();
        } else if digits.len() < precision {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
    }

    let mut prefix = "";
    if directive.alternate {
        match directive.conversion {
            'o' if !digits.starts_with('0') => digits.insert(0, '0'),
            'x' if magnitude != 0 => prefix = "0x",
            'X' if magnitude != 0 => prefix = "0X",
            _ => {}
        }
    }

    let sign = match directive.conversion {
        'd' | 'i' => sign_of(directive, negative),
        _ => "",
    };

    // The `0` flag is ignored when a precision is given
    let zero_ok = directive.precision.is_none();
    Ok(pad(directive, sign, prefix, &digits, zero_ok))
}

fn render_float(directive: &Directive, x: f64) -> Result<String, DemoError> {
    let upper = directive.conversion.is_ascii_uppercase();
    let sign = sign_of(directive, x.is_sign_negative());

    if !x.is_finite() {
        let body = match (x.is_nan(), upper) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        return Ok(pad(directive, sign, "", body, false));
    }

    let magnitude = x.abs();
    let precision = directive.precision.unwrap_or(6);
    let body = match directive.conversion {
        'f' | 'F' => float::fixed(magnitude, precision, directive.alternate),
        'e' | 'E' => float::exponential(magnitude, precision, directive.alternate, upper),
        'g' | 'G' => float::general(magnitude, precision, directive.alternate, upper),
        _ => {
            if directive.precision.is_some() {
                return Err(DemoError::UnsupportedConversion {
                    directive: format!("%.{}{}", precision, directive.conversion),
                    offset: directive.offset,
                });
            }
            float::hex(magnitude, upper)
        }
    };

    // Zero padding goes after any `0x` prefix of `%a`
    if let Some(rest) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        let prefix = &body[..2];
        return Ok(pad(directive, sign, prefix, rest, true));
    }

    Ok(pad(directive, sign, "", &body, true))
}

fn sign_of(directive: &Directive, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if directive.plus_sign {
        "+"
    } else if directive.space_sign {
        " "
    } else {
        ""
    }
}

/// Apply width: `-` pads right, `0` pads between sign/prefix and digits
fn pad(directive: &Directive, sign: &str, prefix: &str, body: &str, zero_ok: bool) -> String {
    let len = sign.len() + prefix.len() + body.chars().count();
    let width = directive.width.unwrap_or(0);

    if len >= width {
        return format!("{}{}{}", sign, prefix, body);
    }

    let fill = width - len;
    if directive.left_align {
        format!("{}{}{}{}", sign, prefix, body, " ".repeat(fill))
    } else if directive.zero_pad && zero_ok {
        format!("{}{}{}{}", sign, prefix, "0".repeat(fill), body)
    } else {
        format!("{}{}{}{}", " ".repeat(fill), sign, prefix, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directive_fields() {
        let found = directives("x = %-+08.3lld%%").unwrap();
        assert_eq!(found.len(), 2);
        let d = &found[0];
        assert!(d.left_align);
        assert!(d.plus_sign);
        assert!(d.zero_pad);
        assert_eq!(d.width, Some(8));
        assert_eq!(d.precision, Some(3));
        assert_eq!(d.length, Length::LongLong);
        assert_eq!(d.conversion, 'd');
        assert_eq!(d.offset, 4);
        assert_eq!(found[1].conversion, '%');
    }

    #[test]
    fn test_empty_precision_is_zero() {
        let found = directives("%.e").unwrap();
        assert_eq!(found[0].precision, Some(0));
    }

    #[test]
    fn test_dangling_percent() {
        let err = format("100%", &[]).unwrap_err();
        assert!(matches!(err, DemoError::InvalidFormat { offset: 3, .. }));
    }

    #[test]
    fn test_star_width_unsupported() {
        let err = format("%*d", &[CValue::Int(1)]).unwrap_err();
        assert_eq!(
            err,
            DemoError::UnsupportedConversion {
                directive: "%*".to_string(),
                offset: 0
            }
        );
    }

    #[test]
    fn test_unknown_conversion() {
        let err = format("a %q", &[CValue::Int(1)]).unwrap_err();
        assert_eq!(
            err,
            DemoError::UnsupportedConversion {
                directive: "%q".to_string(),
                offset: 2
            }
        );
    }

    #[test]
    fn test_integer_truncation_by_length() {
        assert_eq!(format("%hhd", &[CValue::Int(200)]).unwrap(), "-56");
        assert_eq!(format("%hhu", &[CValue::Int(200)]).unwrap(), "200");
        assert_eq!(format("%hd", &[CValue::Int(40000)]).unwrap(), "-25536");
        assert_eq!(format("%u", &[CValue::Int(-1)]).unwrap(), "4294967295");
    }

    #[test]
    fn test_padding_and_flags() {
        assert_eq!(format("%+08.2f", &[CValue::Double(3.14159)]).unwrap(), "+0003.14");
        assert_eq!(format("%-8d|", &[CValue::Int(42)]).unwrap(), "42      |");
        assert_eq!(format("%5s", &[CValue::Str("ab".into())]).unwrap(), "   ab");
        assert_eq!(format("% d", &[CValue::Int(7)]).unwrap(), " 7");
        assert_eq!(format("%08.3d", &[CValue::Int(5)]).unwrap(), "     005");
        assert_eq!(format("%06.1f", &[CValue::Double(-2.5)]).unwrap(), "-002.5");
        assert_eq!(format("%8e", &[CValue::Double(f64::INFINITY)]).unwrap(), "     inf");
    }

    #[test]
    fn test_alternate_forms() {
        assert_eq!(format("%#x", &[CValue::Int(255)]).unwrap(), "0xff");
        assert_eq!(format("%#X", &[CValue::Int(255)]).unwrap(), "0XFF");
        assert_eq!(format("%#o", &[CValue::Int(8)]).unwrap(), "010");
        assert_eq!(format("%#x", &[CValue::Int(0)]).unwrap(), "0");
        assert_eq!(format("%010a", &[CValue::Double(1.0)]).unwrap(), "0x00001p+0");
    }

    #[test]
    fn test_zero_precision_zero_value() {
        assert_eq!(format("[%.0d]", &[CValue::Int(0)]).unwrap(), "[]");
    }
}
