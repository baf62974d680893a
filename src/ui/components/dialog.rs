//! Error dialog overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_MAX_WIDTH: u16 = 60;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let area = frame.area();

    let dialog_width = DIALOG_MAX_WIDTH.min(area.width.saturating_sub(4));
    // Rough height: message wrapped to the inner width plus title and hint
    let inner_width = dialog_width.saturating_sub(4).max(1) as usize;
    let message_lines = error_message
        .lines()
        .map(|line| line.len().div_ceil(inner_width).max(1) as u16)
        .sum::<u16>();
    let dialog_height = (message_lines + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    let content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error_message),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" to dismiss"),
        ]),
    ];

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .style(Style::default().bg(Color::Black)),
            ),
        dialog_area,
    );
}
