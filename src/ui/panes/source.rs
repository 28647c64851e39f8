//! Source code pane rendering with syntax highlighting
//!
//! Shows the lesson's C program with line numbers and highlights the line
//! whose statement produced the current snapshot. The view scrolls so that
//! line stays at a fixed row while stepping.

use super::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for C code
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (byte, c) = chars[i];

        // Comments and preprocessor lines run to the end of the line
        let rest = &line[byte..];
        let trimmed = rest.trim_start();
        if rest.starts_with("//")
            || rest.starts_with("/*")
            || (current_word.is_empty() && spans.is_empty() && trimmed.starts_with('*'))
        {
            flush_word(&mut spans, &mut current_word, false);
            spans.push(Span::styled(
                rest.to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }
        if c == '#' {
            flush_word(&mut spans, &mut current_word, false);
            spans.push(Span::styled(
                rest.to_string(),
                Style::default().fg(DEFAULT_THEME.keyword),
            ));
            break;
        }

        if c == '"' {
            flush_word(&mut spans, &mut current_word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != '"' {
                end += if chars[end].1 == '\\' { 2 } else { 1 };
            }
            end = (end + 1).min(chars.len());
            let end_byte = chars.get(end).map_or(line.len(), |&(b, _)| b);
            spans.push(Span::styled(
                line[byte..end_byte].to_string(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' && c != '.' {
            flush_word(&mut spans, &mut current_word, c == '(');
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'_>>, word: &mut String, is_function: bool) {
    if word.is_empty() {
        return;
    }
    let style = get_keyword_style(word, is_function);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "char" | "void" | "float" | "double" | "long" | "short" | "unsigned"
        | "signed" => Style::default().fg(DEFAULT_THEME.type_name),
        "return" | "if" | "else" | "while" | "for" | "sizeof" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "INT_MAX" | "INT_MIN" | "DBL_MAX" | "DBL_MIN" => Style::default()
            .fg(DEFAULT_THEME.number)
            .add_modifier(Modifier::BOLD),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Row the current line is pinned to; `None` centers on first render
    pub target_line_row: Option<usize>,
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: usize,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = Block::default()
        .title(" Source Code ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if current_line > 0 && current_line <= total_lines {
        let offset = (current_line - 1).saturating_sub(target_row);
        scroll_state.offset = if total_lines > visible_height {
            offset.min(total_lines - visible_height)
        } else {
            0
        };
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let is_current = idx + 1 == current_line;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content = highlight_source_code(line);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let marker = if is_current { "▶" } else { " " };
            let mut spans = vec![Span::styled(format!("{}{:3} ", marker, idx + 1), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}
