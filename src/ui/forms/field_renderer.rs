//! Field rendering utilities for forms

use crate::state::{FieldError, FormField, TECHNOLOGIES};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer.
/// A validation error turns the border red.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline error line shown under a field.
/// Renders nothing when there is no error, keeping the layout stable.
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&FieldError>) {
    if let Some(error) = error {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {}", error.message),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}

/// Draw the technology multi-select as a scrolling option list with a
/// highlight cursor and selection markers
pub fn draw_multi_select(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    cursor: usize,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let selections = field.as_selections();
    let visible_rows = area.height.saturating_sub(2) as usize;

    // Keep the cursor in view
    let first_visible = if cursor >= visible_rows && visible_rows > 0 {
        cursor + 1 - visible_rows
    } else {
        0
    };

    let items: Vec<ListItem> = TECHNOLOGIES
        .iter()
        .enumerate()
        .skip(first_visible)
        .take(visible_rows.max(1))
        .map(|(index, option)| {
            let selected = selections.iter().any(|s| s == option);
            let marker = if selected { "[x]" } else { "[ ]" };
            let style = if is_active && index == cursor {
                Style::default().fg(Color::Cyan)
            } else if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker} {option}"),
                style,
            )))
        })
        .collect();

    let title = if selections.is_empty() {
        format!(" {} ", field.label)
    } else {
        format!(" {} ({}) ", field.label, selections.len())
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(list, area);
}

/// Draw the failure reason reported by the last completed submission
pub fn draw_failure_reason(frame: &mut Frame, area: Rect, reason: Option<&str>) {
    if let Some(reason) = reason {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {reason}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}

/// Draw a dim help line
pub fn draw_help_text(frame: &mut Frame, area: Rect, spans: Vec<Span>) {
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
