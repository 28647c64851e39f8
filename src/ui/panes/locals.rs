//! Locals pane rendering with value representations
//!
//! Each local in the current snapshot is shown with its C type, the value as
//! the lesson's conversion prints it, and its object representation as bytes.
//! Floating values get an extra line with their IEEE-754 class and fields,
//! which is where overflow to `inf` and the slide into subnormals show up.

use super::border_style;
use super::terminal::clamp_scroll;
use crate::printf;
use crate::snapshot::{Binding, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use crate::value::{CValue, FloatClass};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the locals pane
pub fn render_locals_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Locals ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut all_items: Vec<ListItem> = Vec::new();
    match snapshot {
        Some(snapshot) if !snapshot.locals.is_empty() => {
            for binding in &snapshot.locals {
                let is_changed = snapshot.changed.as_deref() == Some(binding.name.as_str());
                for line in binding_lines(binding, is_changed) {
                    all_items.push(ListItem::new(line));
                }
            }
        }
        _ => {
            all_items.push(
                ListItem::new("(no locals)").style(Style::default().fg(DEFAULT_THEME.comment)),
            );
        }
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = clamp_scroll(*scroll_offset, all_items.len(), visible_height);

    let visible: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible).block(block), area);
}

fn binding_lines(binding: &Binding, is_changed: bool) -> Vec<Line<'static>> {
    let name_style = if is_changed {
        Style::default()
            .fg(DEFAULT_THEME.changed)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", binding.value.type_name()),
            Style::default().fg(DEFAULT_THEME.type_name),
        ),
        Span::styled(binding.name.clone(), name_style),
        Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            display_value(&binding.value),
            Style::default().fg(value_color(&binding.value)),
        ),
    ])];

    lines.push(Line::from(Span::styled(
        format!(
            "    sizeof {}  bytes {}",
            binding.value.size_of(),
            hex_bytes(&binding.value)
        ),
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    if let (Some(class), Some(fields)) =
        (binding.value.float_class(), binding.value.float_fields())
    {
        lines.push(Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled(
                class.label().to_string(),
                Style::default().fg(class_color(class)),
            ),
            Span::styled(
                format!(
                    "  sign {} exp {:#05x} frac {:#015x}",
                    u8::from(fields.negative),
                    fields.exponent,
                    fields.fraction
                ),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }

    lines
}

/// The value through the conversion the lessons use for its type
pub(crate) fn display_value(value: &CValue) -> String {
    printf::format(value.natural_conversion(), std::slice::from_ref(value))
        .unwrap_or_else(|e| format!("<{}>", e))
}

/// Object representation, most significant byte first
pub(crate) fn hex_bytes(value: &CValue) -> String {
    let mut bytes = value.to_bytes();
    if !matches!(value, CValue::Str(_)) {
        bytes.reverse();
    }
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn value_color(value: &CValue) -> ratatui::style::Color {
    match value {
        CValue::Str(_) => DEFAULT_THEME.string,
        _ => match value.float_class() {
            Some(FloatClass::Infinite) | Some(FloatClass::Nan) => DEFAULT_THEME.error,
            _ => DEFAULT_THEME.number,
        },
    }
}

fn class_color(class: FloatClass) -> ratatui::style::Color {
    match class {
        FloatClass::Normal => DEFAULT_THEME.success,
        FloatClass::Subnormal | FloatClass::Zero => DEFAULT_THEME.secondary,
        FloatClass::Infinite | FloatClass::Nan => DEFAULT_THEME.error,
    }
}
