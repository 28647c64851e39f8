//! printf basics
//!
//! Successive `printf` calls write into the same line: nothing is added
//! between them, and the program never prints a newline at all.

use super::Session;
use crate::errors::DemoError;
use crate::value::CValue;

pub const SOURCE: &str = r#"/*
 * printf() writes exactly the text it is given. Consecutive calls
 * continue on the same line unless the format contains '\n'.
 */
#include <stdio.h>

int main(void) {
    int ten = 10;
    int two = 2;

    printf("Doing it right: ");
    printf("%d minus %d is %d.", ten, 2, ten - two);
    printf("Doing it wrong.");
    /* printf("%d minus %d is %d.", ten); leaves two conversions unfed */

    return 0;
}
"#;

pub fn build(session: &mut Session) -> Result<(), DemoError> {
    let ten: i32 = 10;
    let two: i32 = 2;

    session.declare(8, "ten", CValue::Int(ten));
    session.declare(9, "two", CValue::Int(two));

    session.printf(11, "Doing it right: ", &[])?;
    session.printf(
        12,
        "%d minus %d is %d.",
        &[CValue::Int(ten), CValue::Int(2), CValue::Int(ten - two)],
    )?;
    session.printf(13, "Doing it wrong.", &[])
}
