//! C scalar value representation
//!
//! [`CValue`] is a tagged C scalar as it would be handed to `printf`. Each
//! variant carries a value of the matching `core::ffi` type, so its width
//! follows the target platform just as the C program's would.
//!
//! # Representation
//!
//! - [`CValue::to_bytes`] gives the little-endian object representation.
//! - [`CValue::promoted_bits`] gives the bits a variadic call would pass for
//!   integer types after the default argument promotions: sign-extended for
//!   signed types, zero-extended for unsigned ones.
//! - [`FloatFields`] splits a double into its IEEE-754 sign, exponent and
//!   fraction.

use core::ffi::{c_char, c_int, c_long, c_longlong, c_short, c_uint};
use std::num::FpCategory;

/// A C scalar value
#[derive(Debug, Clone, PartialEq)]
pub enum CValue {
    Char(c_char),
    Short(c_short),
    Int(c_int),
    UInt(c_uint),
    Long(c_long),
    LongLong(c_longlong),
    Float(f32),
    Double(f64),
    /// `long double`, stored at double precision
    LongDouble(f64),
    Str(String),
}

/// Broad argument category checked by printf conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Floating,
    String,
}

/// Classification of a floating-point value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

impl FloatClass {
    pub fn of(x: f64) -> Self {
        match x.classify() {
            FpCategory::Zero => FloatClass::Zero,
            FpCategory::Subnormal => FloatClass::Subnormal,
            FpCategory::Normal => FloatClass::Normal,
            FpCategory::Infinite => FloatClass::Infinite,
            FpCategory::Nan => FloatClass::Nan,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FloatClass::Zero => "zero",
            FloatClass::Subnormal => "subnormal",
            FloatClass::Normal => "normal",
            FloatClass::Infinite => "infinite",
            FloatClass::Nan => "NaN",
        }
    }
}

/// IEEE-754 binary64 fields of a double
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFields {
    pub negative: bool,
    /// Biased exponent, 11 bits
    pub exponent: u16,
    /// Fraction, 52 bits
    pub fraction: u64,
}

impl FloatFields {
    pub const EXPONENT_BIAS: i32 = 1023;
    pub const FRACTION_BITS: u32 = 52;
    pub const FRACTION_MASK: u64 = (1 << Self::FRACTION_BITS) - 1;

    pub fn of(x: f64) -> Self {
        let bits = x.to_bits();
        FloatFields {
            negative: bits >> 63 == 1,
            exponent: ((bits >> Self::FRACTION_BITS) & 0x7ff) as u16,
            fraction: bits & Self::FRACTION_MASK,
        }
    }

    /// Unbiased exponent; subnormals and zero report the minimum normal exponent
    pub fn unbiased_exponent(&self) -> i32 {
        if self.exponent == 0 {
            1 - Self::EXPONENT_BIAS
        } else {
            self.exponent as i32 - Self::EXPONENT_BIAS
        }
    }
}

impl CValue {
    /// C type name as written in a declaration
    pub fn type_name(&self) -> &'static str {
        match self {
            CValue::Char(_) => "char",
            CValue::Short(_) => "short",
            CValue::Int(_) => "int",
            CValue::UInt(_) => "unsigned int",
            CValue::Long(_) => "long",
            CValue::LongLong(_) => "long long",
            CValue::Float(_) => "float",
            CValue::Double(_) => "double",
            CValue::LongDouble(_) => "long double",
            CValue::Str(_) => "char *",
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            CValue::Char(_)
            | CValue::Short(_)
            | CValue::Int(_)
            | CValue::UInt(_)
            | CValue::Long(_)
            | CValue::LongLong(_) => ValueKind::Integer,
            CValue::Float(_) | CValue::Double(_) | CValue::LongDouble(_) => ValueKind::Floating,
            CValue::Str(_) => ValueKind::String,
        }
    }

    /// `sizeof` of the value's type on this target
    pub fn size_of(&self) -> usize {
        match self {
            CValue::Char(_) => std::mem::size_of::<c_char>(),
            CValue::Short(_) => std::mem::size_of::<c_short>(),
            CValue::Int(_) => std::mem::size_of::<c_int>(),
            CValue::UInt(_) => std::mem::size_of::<c_uint>(),
            CValue::Long(_) => std::mem::size_of::<c_long>(),
            CValue::LongLong(_) => std::mem::size_of::<c_longlong>(),
            CValue::Float(_) => std::mem::size_of::<f32>(),
            CValue::Double(_) | CValue::LongDouble(_) => std::mem::size_of::<f64>(),
            CValue::Str(_) => std::mem::size_of::<*const c_char>(),
        }
    }

    /// Little-endian object representation; strings yield their bytes plus the terminator
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            CValue::Char(c) => c.to_le_bytes().to_vec(),
            CValue::Short(n) => n.to_le_bytes().to_vec(),
            CValue::Int(n) => n.to_le_bytes().to_vec(),
            CValue::UInt(n) => n.to_le_bytes().to_vec(),
            CValue::Long(n) => n.to_le_bytes().to_vec(),
            CValue::LongLong(n) => n.to_le_bytes().to_vec(),
            CValue::Float(x) => x.to_le_bytes().to_vec(),
            CValue::Double(x) | CValue::LongDouble(x) => x.to_le_bytes().to_vec(),
            CValue::Str(s) => {
                let mut bytes = s.as_bytes().to_vec();
                bytes.push(0);
                bytes
            }
        }
    }

    /// Bits an integer argument carries through `...` after promotion
    pub fn promoted_bits(&self) -> Option<u64> {
        match self {
            CValue::Char(c) => Some(*c as i64 as u64),
            CValue::Short(n) => Some(*n as i64 as u64),
            CValue::Int(n) => Some(*n as i64 as u64),
            CValue::UInt(n) => Some(*n as u64),
            CValue::Long(n) => Some(*n as i64 as u64),
            CValue::LongLong(n) => Some(*n as u64),
            _ => None,
        }
    }

    /// Floating value promoted to double, as `printf` receives it
    pub fn as_double(&self) -> Option<f64> {
        match self {
            CValue::Float(x) => Some(*x as f64),
            CValue::Double(x) | CValue::LongDouble(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn float_class(&self) -> Option<FloatClass> {
        self.as_double().map(FloatClass::of)
    }

    /// IEEE fields of the double-promoted value
    pub fn float_fields(&self) -> Option<FloatFields> {
        self.as_double().map(FloatFields::of)
    }

    /// Conversion that prints this value the way the lessons do
    pub fn natural_conversion(&self) -> &'static str {
        match self {
            CValue::Char(_) | CValue::Int(_) => "%d",
            CValue::Short(_) => "%hd",
            CValue::UInt(_) => "%u",
            CValue::Long(_) => "%ld",
            CValue::LongLong(_) => "%lld",
            CValue::Float(_) | CValue::Double(_) => "%e",
            CValue::LongDouble(_) => "%Le",
            CValue::Str(_) => "%s",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promoted_bits_sign_extension() {
        assert_eq!(CValue::Int(-1).promoted_bits(), Some(u64::MAX));
        assert_eq!(CValue::UInt(u32::MAX).promoted_bits(), Some(0xffff_ffff));
        assert_eq!(CValue::Short(-2).promoted_bits(), Some(u64::MAX - 1));
        assert_eq!(CValue::Double(1.0).promoted_bits(), None);
    }

    #[test]
    fn test_float_class() {
        assert_eq!(FloatClass::of(0.0), FloatClass::Zero);
        assert_eq!(FloatClass::of(f64::MIN_POSITIVE), FloatClass::Normal);
        assert_eq!(FloatClass::of(f64::MIN_POSITIVE / 2.0), FloatClass::Subnormal);
        assert_eq!(FloatClass::of(f64::MAX * 2.0), FloatClass::Infinite);
        assert_eq!(FloatClass::of(f64::NAN), FloatClass::Nan);
    }

    #[test]
    fn test_float_fields() {
        let fields = FloatFields::of(1.0);
        assert!(!fields.negative);
        assert_eq!(fields.exponent, 1023);
        assert_eq!(fields.fraction, 0);
        assert_eq!(fields.unbiased_exponent(), 0);

        let max = FloatFields::of(f64::MAX);
        assert_eq!(max.exponent, 0x7fe);
        assert_eq!(max.fraction, FloatFields::FRACTION_MASK);

        let sub = FloatFields::of(f64::MIN_POSITIVE / 2.0);
        assert_eq!(sub.exponent, 0);
        assert_eq!(sub.fraction, 1 << 51);
        assert_eq!(sub.unbiased_exponent(), -1022);
    }

    #[test]
    fn test_bytes_little_endian() {
        assert_eq!(CValue::Int(1).to_bytes(), vec![1, 0, 0, 0]);
        assert_eq!(CValue::Str("ab".to_string()).to_bytes(), vec![b'a', b'b', 0]);
        assert_eq!(CValue::Double(0.0).to_bytes().len(), 8);
    }
}
