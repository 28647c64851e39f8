//! Floating-point notations
//!
//! The same value in fixed (`%f`), exponential (`%e`) and hexadecimal (`%a`)
//! notation. The `float` is promoted to `double` on its way into `printf`.

use super::Session;
use crate::errors::DemoError;
use crate::value::CValue;

pub const SOURCE: &str = r#"/*
 * Displays float values in two ways
 */
#include <stdio.h>

int main(void) {
    float aboat = 32000.0f;
    double abet = 2.14e9;
    long double dip = 5.32e-5L;

    printf("%f can be written %e\n", aboat, aboat);
    printf("And it's %a in hexadecimal, powers of 2 notation.\n", aboat);
    printf("%f can be written %e\n", abet, abet);
    printf("%Lf can be written %Le\n", dip, dip);

    return 0;
}
"#;

pub fn build(session: &mut Session) -> Result<(), DemoError> {
    let aboat = CValue::Float(32000.0);
    let abet = CValue::Double(2.14e9);
    let dip = CValue::LongDouble(5.32e-5);

    session.declare(7, "aboat", aboat.clone());
    session.declare(8, "abet", abet.clone());
    session.declare(9, "dip", dip.clone());

    session.printf(11, "%f can be written %e\n", &[aboat.clone(), aboat.clone()])?;
    session.printf(
        12,
        "And it's %a in hexadecimal, powers of 2 notation.\n",
        &[aboat],
    )?;
    session.printf(13, "%f can be written %e\n", &[abet.clone(), abet])?;
    session.printf(14, "%Lf can be written %Le\n", &[dip.clone(), dip])
}
