//! Lessons: scripted replays of short C programs
//!
//! Each lesson pairs the C source it demonstrates with a Rust function that
//! performs the same statements against a [`Session`]. The session records a
//! [`Snapshot`] after every declaration and every `printf`, so a run can be
//! printed in one go or stepped through in the TUI.
//!
//! # Catalog
//!
//! - [`boundary`]: integer wraparound, double overflow and gradual underflow
//! - [`specifiers`]: values printed through mismatched conversions
//! - [`notation`]: one value in `%f`, `%e` and `%a` notation
//! - [`features`]: consecutive `printf` calls sharing one line

pub mod boundary;
pub mod features;
pub mod notation;
pub mod specifiers;

use crate::errors::DemoError;
use crate::printf;
use crate::snapshot::{Binding, History, MockTerminal, Snapshot};
use crate::value::CValue;
use rustc_hash::FxHashMap;

/// Records the effects of a lesson's statements
#[derive(Debug, Default)]
pub struct Session {
    locals: Vec<Binding>,
    slots: FxHashMap<String, usize>,
    terminal: MockTerminal,
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Declare a local (or shadow an existing one) at `line`
    pub fn declare(&mut self, line: usize, name: &str, value: CValue) {
        match self.slots.get(name) {
            Some(&slot) => self.locals[slot].value = value,
            None => {
                self.slots.insert(name.to_string(), self.locals.len());
                self.locals.push(Binding {
                    name: name.to_string(),
                    value,
                });
            }
        }
        self.record(line, Some(name));
    }

    /// Assign to a previously declared local
    pub fn assign(&mut self, line: usize, name: &str, value: CValue) -> Result<(), DemoError> {
        let slot = *self
            .slots
            .get(name)
            .ok_or_else(|| DemoError::UndefinedVariable {
                name: name.to_string(),
                line,
            })?;
        self.locals[slot].value = value;
        self.record(line, Some(name));
        Ok(())
    }

    /// Read a local's current value
    pub fn get(&self, name: &str) -> Option<&CValue> {
        self.slots.get(name).map(|&slot| &self.locals[slot].value)
    }

    /// Run `printf(format, args...)` at `line`
    pub fn printf(&mut self, line: usize, format: &str, args: &[CValue]) -> Result<(), DemoError> {
        let text = printf::format(format, args)?;
        self.terminal.print(text, line);
        self.record(line, None);
        Ok(())
    }

    pub fn terminal(&self) -> &MockTerminal {
        &self.terminal
    }

    /// Stop recording and hand back the history, rewound to the first step
    pub fn finish(self) -> History {
        let mut history = self.history;
        history.rewind_to_start();
        history
    }

    fn record(&mut self, line: usize, changed: Option<&str>) {
        self.history.push(Snapshot {
            line,
            locals: self.locals.clone(),
            terminal: self.terminal.clone(),
            changed: changed.map(str::to_string),
        });
    }
}

/// A replayable C program
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    /// Key used on the command line
    pub name: &'static str,
    pub title: &'static str,
    /// The C program being demonstrated; snapshot lines index into it
    pub source: &'static str,
    pub build: fn(&mut Session) -> Result<(), DemoError>,
}

impl Lesson {
    /// Replay the lesson and return its recorded history
    pub fn run(&self) -> Result<History, DemoError> {
        let mut session = Session::new();
        (self.build)(&mut session)?;
        Ok(session.finish())
    }
}

static CATALOG: [Lesson; 4] = [
    Lesson {
        name: "boundaries",
        title: "Numeric overflow and underflow",
        source: boundary::SOURCE,
        build: boundary::build,
    },
    Lesson {
        name: "specifiers",
        title: "Matching format specifiers to types",
        source: specifiers::SOURCE,
        build: specifiers::build,
    },
    Lesson {
        name: "notation",
        title: "Floating-point values in three notations",
        source: notation::SOURCE,
        build: notation::build,
    },
    Lesson {
        name: "features",
        title: "printf writes exactly what it is given",
        source: features::SOURCE,
        build: features::build,
    },
];

/// All lessons, the default one first
pub fn catalog() -> &'static [Lesson] {
    &CATALOG
}

/// The lesson run when no name is given
pub fn default_lesson() -> &'static Lesson {
    &CATALOG[0]
}

pub fn find(name: &str) -> Result<&'static Lesson, DemoError> {
    CATALOG
        .iter()
        .find(|lesson| lesson.name == name)
        .ok_or_else(|| DemoError::UnknownLesson {
            name: name.to_string(),
        })
}
