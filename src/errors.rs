//! Error types for the lesson machinery
//!
//! This module defines [`DemoError`]. None of its variants describe numeric
//! overflow or underflow: those are the results the lessons exist to show and
//! are never reported as failures. The variants cover mistakes in format
//! strings, lesson scripts, history navigation and lesson lookup.

use std::fmt;

/// Errors raised while formatting, recording or replaying a lesson
#[derive(Debug, Clone, PartialEq)]
pub enum DemoError {
    /// Malformed directive in a printf format string
    InvalidFormat { message: String, offset: usize },

    /// A conversion had no argument left to consume
    MissingArgument { conversion: char, offset: usize },

    /// Argument category does not fit the conversion (e.g. a double for `%d`)
    ArgumentMismatch {
        conversion: char,
        expected: &'static str,
        got: String,
        offset: usize,
    },

    /// Conversion or feature outside the supported printf subset
    UnsupportedConversion { directive: String, offset: usize },

    /// More arguments were supplied than the format string consumes
    ExtraArguments { used: usize, supplied: usize },

    /// Assignment to a local that was never declared
    UndefinedVariable { name: String, line: usize },

    /// No lesson registered under this name
    UnknownLesson { name: String },

    /// Stepping past either end of the recorded history
    HistoryBoundary { message: String, position: usize },
}

impl DemoError {
    /// Byte offset into the format string, for printf errors
    pub fn offset(&self) -> Option<usize> {
        match self {
            DemoError::InvalidFormat { offset, .. } => Some(*offset),
            DemoError::MissingArgument { offset, .. } => Some(*offset),
            DemoError::ArgumentMismatch { offset, .. } => Some(*offset),
            DemoError::UnsupportedConversion { offset, .. } => Some(*offset),
            DemoError::ExtraArguments { .. }
            | DemoError::UndefinedVariable { .. }
            | DemoError::UnknownLesson { .. }
            | DemoError::HistoryBoundary { .. } => None,
        }
    }

    /// Source line of the lesson statement, for script errors
    pub fn line(&self) -> Option<usize> {
        match self {
            DemoError::UndefinedVariable { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::InvalidFormat { message, offset } => {
                write!(f, "Invalid printf format at offset {}: {}", offset, message)
            }
            DemoError::MissingArgument { conversion, offset } => {
                write!(
                    f,
                    "Not enough arguments for %{} at offset {}",
                    conversion, offset
                )
            }
            DemoError::ArgumentMismatch {
                conversion,
                expected,
                got,
                offset,
            } => {
                write!(
                    f,
                    "%{} expects {}, got {} at offset {}",
                    conversion, expected, got, offset
                )
            }
            DemoError::UnsupportedConversion { directive, offset } => {
                write!(
                    f,
                    "Unsupported format directive '{}' at offset {}",
                    directive, offset
                )
            }
            DemoError::ExtraArguments { used, supplied } => {
                write!(
                    f,
                    "Format string consumed {} argument{}, but {} {} supplied",
                    used,
                    if *used == 1 { "" } else { "s" },
                    supplied,
                    if *supplied == 1 { "was" } else { "were" }
                )
            }
            DemoError::UndefinedVariable { name, line } => {
                write!(f, "Undefined variable '{}' at line {}", name, line)
            }
            DemoError::UnknownLesson { name } => {
                write!(f, "No lesson named '{}'", name)
            }
            DemoError::HistoryBoundary { message, position } => {
                write!(f, "{} (at step {})", message, position + 1)
            }
        }
    }
}

impl std::error::Error for DemoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_only_for_format_errors() {
        let err = DemoError::MissingArgument {
            conversion: 'd',
            offset: 7,
        };
        assert_eq!(err.offset(), Some(7));
        assert_eq!(err.line(), None);

        let err = DemoError::UndefinedVariable {
            name: "x".to_string(),
            line: 3,
        };
        assert_eq!(err.offset(), None);
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_extra_arguments_pluralization() {
        let err = DemoError::ExtraArguments {
            used: 1,
            supplied: 2,
        };
        assert_eq!(
            err.to_string(),
            "Format string consumed 1 argument, but 2 were supplied"
        );
    }
}
