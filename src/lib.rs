//! # Introduction
//!
//! numbounds replays short C exercises about the limits of C's numeric types
//! and prints exactly what the C programs print. The default lesson shows
//! three boundary effects: `INT_MAX + 1` wrapping around to `INT_MIN`,
//! `DBL_MAX * 2` overflowing to `inf`, and `DBL_MIN` sliding through the
//! subnormals to zero.
//!
//! ## Pipeline
//!
//! ```text
//! Lesson script → Session → printf → MockTerminal → Snapshots → stdout / TUI
//! ```
//!
//! 1. [`lesson`] — each lesson performs its C program's statements against a
//!    [`lesson::Session`].
//! 2. [`printf`] — renders C format strings, including the bit-level
//!    reinterpretation mismatched conversions cause.
//! 3. [`value`] — [`value::CValue`], a tagged C scalar with its byte and
//!    IEEE-754 representation.
//! 4. [`snapshot`] — the [`snapshot::MockTerminal`] capturing output and the
//!    [`snapshot::History`] of per-statement snapshots.
//! 5. [`limits`] — `<limits.h>` and `<float.h>` constants from `core::ffi`.
//! 6. [`ui`] — ratatui-based stepper; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let history = numbounds::lesson::default_lesson().run().unwrap();
//! assert!(history.output().contains("INT_MAX + 1 = -2147483648"));
//! ```

pub mod errors;
pub mod lesson;
pub mod limits;
pub mod printf;
pub mod snapshot;
pub mod ui;
pub mod value;
