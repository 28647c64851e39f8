//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus
//! - **[`panes`]** — render functions for each visible pane (source, locals,
//!   terminal, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! Construct an [`App`] from a [`Lesson`] and its recorded [`History`], then
//! call [`App::run`] to start the event loop.
//!
//! [`Lesson`]: crate::lesson::Lesson
//! [`History`]: crate::snapshot::History
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
