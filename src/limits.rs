// Numeric limits of the C types used by the lessons
//
// Values come from the platform's `core::ffi` aliases so that `int` keeps
// whatever width the target gives it.

use core::ffi::{c_int, c_uint};

/// `INT_MAX` from `<limits.h>`
pub const INT_MAX: c_int = c_int::MAX;

/// `INT_MIN` from `<limits.h>`
pub const INT_MIN: c_int = c_int::MIN;

/// `UINT_MAX` from `<limits.h>`
pub const UINT_MAX: c_uint = c_uint::MAX;

/// `DBL_MAX` from `<float.h>`: largest finite double
pub const DBL_MAX: f64 = f64::MAX;

/// `DBL_MIN` from `<float.h>`: smallest positive *normal* double
///
/// Not to be confused with `f64::MIN`, which is the most negative finite value.
pub const DBL_MIN: f64 = f64::MIN_POSITIVE;

/// `FLT_MAX` from `<float.h>`
pub const FLT_MAX: f32 = f32::MAX;

/// `FLT_MIN` from `<float.h>`
pub const FLT_MIN: f32 = f32::MIN_POSITIVE;
