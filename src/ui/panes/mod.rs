//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: the lesson's C source with the current line highlighted
//! - [`locals`]: locals of the current snapshot with bytes and float fields
//! - [`terminal`]: printf output captured up to the current snapshot
//! - [`status`]: status bar with keybindings and position
//!
//! Each pane exports a `render_*` function taking the frame, its area, the
//! data to draw and a mutable scroll state.

pub mod locals;
pub mod source;
pub mod status;
pub mod terminal;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub use locals::render_locals_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::render_status_bar;
pub use terminal::render_terminal_pane;

/// Border style shared by all bordered panes
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
