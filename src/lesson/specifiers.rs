//! Mismatched format specifiers
//!
//! Prints each integer twice: once with the conversion that matches its type
//! and once with one that does not. The second column is whatever the
//! conversion makes of the argument's bits, e.g. `3000000000u` read as a
//! signed 32-bit `int` is `-1294967296`.

use super::Session;
use crate::errors::DemoError;
use crate::value::CValue;

pub const SOURCE: &str = r#"/*
 * Format specifiers must match the argument type:
 *   %d   int          %u   unsigned int
 *   %hd  short        %ld  long
 *   %lld long long
 * A mismatched specifier reinterprets the argument's bits.
 */
#include <stdio.h>

int main(void) {
    unsigned int un = 3000000000;
    short end = 200;
    long big = 65537;
    long long verybig = 12345678908642;

    printf("un = %u and not %d\n", un, un);
    printf("end = %hd and %d\n", end, end);
    printf("big = %ld and not %hd\n", big, big);
    printf("verybig = %lld and not %d\n", verybig, verybig);

    return 0;
}
"#;

pub fn build(session: &mut Session) -> Result<(), DemoError> {
    let un = CValue::UInt(3_000_000_000);
    let end = CValue::Short(200);
    let big = CValue::Long(65537);
    let verybig = CValue::LongLong(12_345_678_908_642);

    session.declare(11, "un", un.clone());
    session.declare(12, "end", end.clone());
    session.declare(13, "big", big.clone());
    session.declare(14, "verybig", verybig.clone());

    session.printf(16, "un = %u and not %d\n", &[un.clone(), un])?;
    session.printf(17, "end = %hd and %d\n", &[end.clone(), end])?;
    session.printf(18, "big = %ld and not %hd\n", &[big.clone(), big])?;
    session.printf(
        19,
        "verybig = %lld and not %d\n",
        &[verybig.clone(), verybig],
    )
}
