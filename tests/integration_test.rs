// Integration tests for lessons and the printf engine

use numbounds::errors::DemoError;
use numbounds::lesson::{self, Session};
use numbounds::limits::FLT_MAX;
use numbounds::printf;
use numbounds::value::CValue;

fn run_lesson(name: &str) -> Vec<String> {
    let lesson = lesson::find(name).expect("Lesson not found");
    let history = lesson.run().expect("Lesson failed");
    let output = history.last().expect("No snapshots").terminal.get_output();
    println!("{} output:\n{}", name, output.join("\n"));
    output
}

#[test]
fn test_catalog_order() {
    let names: Vec<&str> = lesson::catalog().iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["boundaries", "specifiers", "notation", "features"]);
    assert_eq!(lesson::default_lesson().name, "boundaries");
}

#[test]
fn test_every_snapshot_points_into_its_source() {
    for lesson in lesson::catalog() {
        let history = lesson.run().expect("Lesson failed");
        let source_lines: Vec<&str> = lesson.source.lines().collect();
        assert!(!history.is_empty(), "{} recorded nothing", lesson.name);

        for i in 0..history.len() {
            let snapshot = history.get(i).unwrap();
            assert!(
                snapshot.line >= 1 && snapshot.line <= source_lines.len(),
                "{}: line {} out of range",
                lesson.name,
                snapshot.line
            );

            let text = source_lines[snapshot.line - 1];
            match &snapshot.changed {
                Some(name) => assert!(
                    text.contains(name.as_str()),
                    "{}: line {} does not mention {}",
                    lesson.name,
                    snapshot.line,
                    name
                ),
                None => assert!(
                    text.contains("printf"),
                    "{}: line {} is not a printf",
                    lesson.name,
                    snapshot.line
                ),
            }
        }
    }
}

#[test]
fn test_specifiers_lesson() {
    let output = run_lesson("specifiers");
    assert_eq!(
        output,
        vec![
            "un = 3000000000 and not -1294967296",
            "end = 200 and 200",
            "big = 65537 and not 1",
            "verybig = 12345678908642 and not 1942899938",
        ]
    );
}

#[test]
fn test_notation_lesson() {
    let output = run_lesson("notation");
    assert_eq!(
        output,
        vec![
            "32000.000000 can be written 3.200000e+04",
            "And it's 0x1.f4p+14 in hexadecimal, powers of 2 notation.",
            "2140000000.000000 can be written 2.140000e+09",
            "0.000053 can be written 5.320000e-05",
        ]
    );
}

#[test]
fn test_features_lesson() {
    let output = run_lesson("features");
    assert_eq!(output, vec!["Doing it right: 10 minus 2 is 8.Doing it wrong."]);

    let history = lesson::find("features").unwrap().run().unwrap();
    assert!(!history.output().ends_with('\n'));
}

#[test]
fn test_history_starts_rewound() {
    let mut history = lesson::default_lesson().run().expect("Lesson failed");
    assert_eq!(history.position(), 0);
    assert!(history.current().unwrap().terminal.get_output().is_empty());

    history.jump_to_end();
    assert!(history.is_at_end());
    assert!(matches!(
        history.step_forward(),
        Err(DemoError::HistoryBoundary { .. })
    ));
}

#[test]
fn test_printf_non_finite_values() {
    let args = [
        CValue::Double(f64::INFINITY),
        CValue::Double(f64::NEG_INFINITY),
        CValue::Double(f64::NAN),
    ];
    assert_eq!(printf::format("%f %e %g", &args).unwrap(), "inf -inf nan");
    assert_eq!(
        printf::format("%E", &[CValue::Double(f64::INFINITY)]).unwrap(),
        "INF"
    );
}

#[test]
fn test_printf_float_promotion() {
    assert_eq!(
        printf::format("%e", &[CValue::Float(FLT_MAX)]).unwrap(),
        "3.402823e+38"
    );
}

#[test]
fn test_printf_argument_errors() {
    let err = printf::format("%d and %d", &[CValue::Int(1)]).unwrap_err();
    assert_eq!(
        err,
        DemoError::MissingArgument {
            conversion: 'd',
            offset: 7
        }
    );

    let err = printf::format("%d", &[CValue::Double(1.0)]).unwrap_err();
    assert!(matches!(
        err,
        DemoError::ArgumentMismatch {
            conversion: 'd',
            ..
        }
    ));

    let err = printf::format("%e", &[CValue::Int(1)]).unwrap_err();
    assert_eq!(err.offset(), Some(0));

    let err = printf::format("none", &[CValue::Int(1)]).unwrap_err();
    assert_eq!(
        err,
        DemoError::ExtraArguments {
            used: 0,
            supplied: 1
        }
    );
}

#[test]
fn test_session_printf_error_propagates() {
    let mut session = Session::new();
    let result = session.printf(1, "%s\n", &[CValue::Int(3)]);
    assert!(result.is_err());
    assert!(session.terminal().get_output().is_empty());
}

#[test]
fn test_char_and_string_conversions() {
    let out = printf::format(
        "The code number of '%c' is %d. %.3s",
        &[
            CValue::Char(b'A' as _),
            CValue::Char(b'A' as _),
            CValue::Str("abcdef".to_string()),
        ],
    )
    .unwrap();
    assert_eq!(out, "The code number of 'A' is 65. abc");
}
