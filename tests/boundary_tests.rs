use numbounds::lesson::{self, boundary};
use numbounds::limits::{DBL_MAX, DBL_MIN, INT_MAX, INT_MIN};
use numbounds::printf;
use numbounds::value::{CValue, FloatClass};

#[test]
fn test_int_max_plus_one_wraps_to_min() {
    assert_eq!(boundary::wrapped_increment(INT_MAX), INT_MIN);
    if INT_MAX == 2147483647 {
        assert_eq!(boundary::wrapped_increment(INT_MAX), -2147483648);
    }
}

#[test]
fn test_dbl_max_doubled_is_inf() {
    let x = boundary::overflow_double(DBL_MAX);
    assert_eq!(x, f64::INFINITY);
    assert_eq!(printf::format("%e", &[CValue::Double(x)]).unwrap(), "inf");
}

#[test]
fn test_dbl_min_halved_is_nonzero_subnormal() {
    let half = boundary::halve(DBL_MIN);
    assert!(half != 0.0);
    assert!(half < DBL_MIN);
    assert_eq!(FloatClass::of(half), FloatClass::Subnormal);
}

#[test]
fn test_further_division_reaches_zero() {
    let tiny = boundary::underflow(boundary::halve(DBL_MIN));
    assert_eq!(tiny, 0.0);
}

#[test]
fn test_boundary_lesson_output() {
    let history = lesson::default_lesson()
        .run()
        .expect("Boundary lesson failed");

    let output = history.output();
    println!("Lesson output:\n{}", output);

    let expected = "\
Integer overflow:
INT_MAX = 2147483647
INT_MAX + 1 = -2147483648 (wrapped around to the minimum)

Floating-point overflow:
DBL_MAX = 1.797693e+308
DBL_MAX * 2 = inf (became infinity)

Floating-point underflow:
DBL_MIN = 2.225074e-308
DBL_MIN / 2.0 = 1.112537e-308 (lost precision)
Divided again by 1e300: 0.000000e+00 (approaching zero)
";
    assert_eq!(output, expected);
}

#[test]
fn test_seven_values_in_order() {
    let history = lesson::default_lesson().run().expect("Boundary lesson failed");
    let lines = history.last().expect("No snapshots").terminal.get_output();

    let values: Vec<&str> = lines
        .iter()
        .filter_map(|line| line.split_once(": ").or_else(|| line.split_once(" = ")))
        .map(|(_, value)| value.split(' ').next().unwrap_or(""))
        .filter(|value| !value.is_empty())
        .collect();

    assert_eq!(
        values,
        vec![
            "2147483647",
            "-2147483648",
            "1.797693e+308",
            "inf",
            "2.225074e-308",
            "1.112537e-308",
            "0.000000e+00",
        ]
    );
}

#[test]
fn test_snapshots_track_underflow_variable() {
    let history = lesson::default_lesson().run().expect("Boundary lesson failed");

    let values: Vec<f64> = (0..history.len())
        .filter_map(|i| history.get(i))
        .filter(|s| s.changed.as_deref() == Some("underflow"))
        .filter_map(|s| s.local("underflow").and_then(CValue::as_double))
        .collect();

    assert_eq!(values.len(), 2);
    assert_eq!(FloatClass::of(values[0]), FloatClass::Subnormal);
    assert_eq!(FloatClass::of(values[1]), FloatClass::Zero);
}
