//! Numeric boundary demonstration
//!
//! Three independent demonstrations at the edges of `int` and `double`:
//!
//! 1. `INT_MAX + 1` wraps around to `INT_MIN`.
//! 2. `DBL_MAX * 2` overflows to `inf`.
//! 3. `DBL_MIN / 2` is a nonzero subnormal; dividing that by `1e300` reaches `0`.
//!
//! Signed overflow is undefined behaviour in C even though two's-complement
//! hardware makes the result predictable. Rust would panic in debug builds,
//! so the increment here opts into wrapping explicitly with
//! [`c_int::wrapping_add`]. Float overflow and underflow need no such opt-in:
//! IEEE-754 defines both.

use super::Session;
use crate::errors::DemoError;
use crate::limits::{DBL_MAX, DBL_MIN, INT_MAX};
use crate::value::CValue;
use core::ffi::c_int;

/// Divisor applied to the subnormal half of `DBL_MIN`
pub const UNDERFLOW_DIVISOR: f64 = 1e300;

pub const SOURCE: &str = r#"/*
 * Numeric overflow and underflow
 *
 * Integer overflow: past INT_MAX the value wraps around to INT_MIN.
 * Floating overflow: past DBL_MAX the value becomes inf.
 * Floating underflow: below DBL_MIN precision is lost gradually until 0.
 */
#include <stdio.h>
#include <limits.h>
#include <float.h>

int main(void) {
    int max_int = INT_MAX;
    printf("Integer overflow:\n");
    printf("INT_MAX = %d\n", max_int);
    printf("INT_MAX + 1 = %d (wrapped around to the minimum)\n\n", max_int + 1);

    double max_double = DBL_MAX;
    printf("Floating-point overflow:\n");
    printf("DBL_MAX = %e\n", max_double);
    printf("DBL_MAX * 2 = %e (became infinity)\n\n", max_double * 2);

    double min_dbl = DBL_MIN;
    printf("Floating-point underflow:\n");
    printf("DBL_MIN = %e\n", min_dbl);

    double underflow = min_dbl / 2.0;
    printf("DBL_MIN / 2.0 = %e (lost precision)\n", underflow);

    underflow /= 1e300;
    printf("Divided again by 1e300: %e (approaching zero)\n", underflow);

    return 0;
}
"#;

/// `n + 1` with two's-complement wraparound
pub fn wrapped_increment(n: c_int) -> c_int {
    n.wrapping_add(1)
}

/// `x * 2`; infinite when `x` exceeds half of `DBL_MAX`
pub fn overflow_double(x: f64) -> f64 {
    x * 2.0
}

pub fn halve(x: f64) -> f64 {
    x / 2.0
}

/// `x / 1e300`; flushes to zero below the smallest subnormal
pub fn underflow(x: f64) -> f64 {
    x / UNDERFLOW_DIVISOR
}

pub fn build(session: &mut Session) -> Result<(), DemoError> {
    integer_wraparound(session)?;
    float_overflow(session)?;
    float_underflow(session)
}

fn integer_wraparound(session: &mut Session) -> Result<(), DemoError> {
    let max_int = INT_MAX;
    session.declare(13, "max_int", CValue::Int(max_int));
    session.printf(14, "Integer overflow:\n", &[])?;
    session.printf(15, "INT_MAX = %d\n", &[CValue::Int(max_int)])?;
    session.printf(
        16,
        "INT_MAX + 1 = %d (wrapped around to the minimum)\n\n",
        &[CValue::Int(wrapped_increment(max_int))],
    )
}

fn float_overflow(session: &mut Session) -> Result<(), DemoError> {
    let max_double = DBL_MAX;
    session.declare(18, "max_double", CValue::Double(max_double));
    session.printf(19, "Floating-point overflow:\n", &[])?;
    session.printf(20, "DBL_MAX = %e\n", &[CValue::Double(max_double)])?;
    session.printf(
        21,
        "DBL_MAX * 2 = %e (became infinity)\n\n",
        &[CValue::Double(overflow_double(max_double))],
    )
}

fn float_underflow(session: &mut Session) -> Result<(), DemoError> {
    let min_dbl = DBL_MIN;
    session.declare(23, "min_dbl", CValue::Double(min_dbl));
    session.printf(24, "Floating-point underflow:\n", &[])?;
    session.printf(25, "DBL_MIN = %e\n", &[CValue::Double(min_dbl)])?;

    let mut value = halve(min_dbl);
    session.declare(27, "underflow", CValue::Double(value));
    session.printf(28, "DBL_MIN / 2.0 = %e (lost precision)\n", &[CValue::Double(value)])?;

    value = underflow(value);
    session.assign(30, "underflow", CValue::Double(value))?;
    session.printf(
        31,
        "Divided again by 1e300: %e (approaching zero)\n",
        &[CValue::Double(value)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_increment_reaches_minimum() {
        assert_eq!(wrapped_increment(INT_MAX), c_int::MIN);
        assert_eq!(wrapped_increment(-1), 0);
    }

    #[test]
    fn test_overflow_is_positive_infinity() {
        let x = overflow_double(DBL_MAX);
        assert!(x.is_infinite());
        assert!(x.is_sign_positive());
    }

    #[test]
    fn test_underflow_is_gradual() {
        let half = halve(DBL_MIN);
        assert!(half > 0.0);
        assert!(half < DBL_MIN);
        assert!(!half.is_normal());
        assert_eq!(underflow(half), 0.0);
    }
}
