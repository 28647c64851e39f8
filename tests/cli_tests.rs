// Command-line behavior of the numbounds binary

use std::process::{Command, Output};

use numbounds::lesson;

fn run_cli(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_numbounds"))
        .args(args)
        .output()
        .expect("Failed to launch numbounds");
    println!(
        "numbounds {:?} -> {:?}\nstdout:\n{}\nstderr:\n{}",
        args,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

#[test]
fn test_no_arguments_prints_boundary_transcript() {
    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(0));

    let expected = lesson::default_lesson()
        .run()
        .expect("Boundary lesson failed")
        .output();
    assert_eq!(stdout_of(&output), expected);
    assert!(expected.starts_with("Integer overflow:\nINT_MAX = 2147483647\n"));
    assert!(expected.ends_with("Divided again by 1e300: 0.000000e+00 (approaching zero)\n"));
}

#[test]
fn test_named_lesson_is_printed() {
    let output = run_cli(&["features"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "Doing it right: 10 minus 2 is 8.Doing it wrong."
    );
}

#[test]
fn test_list_prints_catalog_in_order() {
    let output = run_cli(&["--list"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), lesson::catalog().len());
    for (line, lesson) in lines.iter().zip(lesson::catalog()) {
        assert!(line.starts_with(lesson.name), "{:?} lacks {}", line, lesson.name);
        assert!(line.ends_with(lesson.title), "{:?} lacks its title", line);
    }
}

#[test]
fn test_help_exits_cleanly() {
    let output = run_cli(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_unknown_lesson_fails() {
    let output = run_cli(&["bogus"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bogus"));
    assert!(stderr.contains("--list"));
}

#[test]
fn test_unknown_flag_fails() {
    let output = run_cli(&["--bogus"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown option '--bogus'"));
}

#[test]
fn test_second_positional_argument_fails() {
    let output = run_cli(&["boundaries", "specifiers"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unexpected argument 'specifiers'"));
}
