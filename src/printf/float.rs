//! Floating-point renderers matching glibc's `%f`, `%e`, `%g` and `%a`
//!
//! All functions take a finite, non-negative magnitude. Sign handling,
//! `inf`/`nan` and padding are left to the caller.
//!
//! Rust's own float formatting already rounds exactly, so `%f` and `%e` only
//! need reshaping: C always writes the exponent with a sign and at least two
//! digits (`1.797693e+308`, `0.000000e+00`) where Rust writes `1.797693e308`.

use crate::value::FloatFields;

/// `%f`: fixed notation with `precision` fraction digits
pub fn fixed(x: f64, precision: usize, alternate: bool) -> String {
    let mut s = format!("{:.*}", precision, x);
    if alternate && precision == 0 {
        s.push('.');
    }
    s
}

/// `%e`: one integer digit, `precision` fraction digits, signed exponent
pub fn exponential(x: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let (mantissa, exponent) = split_exponential(x, precision);
    let mut s = mantissa;
    if alternate && precision == 0 {
        s.push('.');
    }
    s.push(if upper { 'E' } else { 'e' });
    push_exponent(&mut s, exponent, 2);
    s
}

/// `%g`: the shorter of `%f` and `%e` by the C99 rule
pub fn general(x: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let p = if precision == 0 { 1 } else { precision };

    // The exponent is taken after rounding to P significant digits
    let x_exp = if x == 0.0 {
        0
    } else {
        split_exponential(x, p - 1).1
    };

    let p = p as i32;
    let s = if p > x_exp && x_exp >= -4 {
        fixed(x, (p - 1 - x_exp) as usize, alternate)
    } else {
        exponential(x, (p - 1) as usize, alternate, upper)
    };

    if alternate {
        s
    } else {
        strip_trailing_zeros(&s)
    }
}

/// `%a`: hexadecimal significand, binary exponent, shortest exact form
pub fn hex(x: f64, upper: bool) -> String {
    let mut s = if x == 0.0 {
        String::from("0x0p+0")
    } else {
        let fields = FloatFields::of(x);
        let lead = if fields.exponent == 0 { '0' } else { '1' };
        let digits = format!("{:013x}", fields.fraction);
        let digits = digits.trim_end_matches('0');

        let mut s = format!("0x{}", lead);
        if !digits.is_empty() {
            s.push('.');
            s.push_str(digits);
        }
        s.push('p');
        push_exponent(&mut s, fields.unbiased_exponent(), 1);
        s
    };

    if upper {
        s = s.to_uppercase();
    }
    s
}

/// Render via Rust's `{:e}` and split into mantissa text and exponent
fn split_exponential(x: f64, precision: usize) -> (String, i32) {
    let s = format!("{:.*e}", precision, x);
    match s.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn push_exponent(s: &mut String, exponent: i32, min_digits: usize) {
    s.push(if exponent < 0 { '-' } else { '+' });
    s.push_str(&format!("{:0width$}", exponent.unsigned_abs(), width = min_digits));
}

fn strip_trailing_zeros(s: &str) -> String {
    let (body, suffix) = match s.find(|c| c == 'e' || c == 'E') {
        Some(idx) => s.split_at(idx),
        None => (s, ""),
    };

    if !body.contains('.') {
        return s.to_string();
    }

    let body = body.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", body, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_limits() {
        assert_eq!(exponential(f64::MAX, 6, false, false), "1.797693e+308");
        assert_eq!(exponential(f64::MIN_POSITIVE, 6, false, false), "2.225074e-308");
        assert_eq!(exponential(0.0, 6, false, false), "0.000000e+00");
        assert_eq!(exponential(1e-10, 6, false, true), "1.000000E-10");
        assert_eq!(exponential(1234.5, 2, false, false), "1.23e+03");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(32000.0, 6, false), "32000.000000");
        assert_eq!(fixed(2.14e9, 6, false), "2140000000.000000");
        assert_eq!(fixed(5.32e-5, 6, false), "0.000053");
        assert_eq!(fixed(3.0, 0, true), "3.");
    }

    #[test]
    fn test_general() {
        assert_eq!(general(100000.0, 6, false, false), "100000");
        assert_eq!(general(1000000.0, 6, false, false), "1e+06");
        assert_eq!(general(0.0001, 6, false, false), "0.0001");
        assert_eq!(general(0.00001234, 6, false, false), "1.234e-05");
        assert_eq!(general(3.14159, 3, false, false), "3.14");
        assert_eq!(general(1.0, 6, true, false), "1.00000");
        assert_eq!(general(0.0, 6, false, false), "0");
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(32000.0, false), "0x1.f4p+14");
        assert_eq!(hex(2.14e9, false), "0x1.fe373cp+30");
        assert_eq!(hex(1.0, false), "0x1p+0");
        assert_eq!(hex(0.5, true), "0X1P-1");
        assert_eq!(hex(f64::MIN_POSITIVE / 2.0, false), "0x0.8p-1022");
        assert_eq!(hex(0.0, false), "0x0p+0");
    }
}
