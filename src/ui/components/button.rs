//! Button components for the TUI

use crate::state::{Submission, SubmissionState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a sidebar button with key and label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
    is_selected: bool,
) {
    let content = format!("{key} {label}");
    render_button(frame, area, &content, is_selected, true);
}

/// Render a form submit button whose label, enabled state, and color
/// derive from the submission lifecycle
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    submission: &Submission,
    idle_label: &str,
    is_selected: bool,
) {
    let label = submission.trigger_label(idle_label);
    let is_enabled = !submission.is_trigger_disabled();

    let state_color = match submission.state() {
        SubmissionState::Succeeded => Some(Color::Green),
        SubmissionState::Failed => Some(Color::Red),
        SubmissionState::InFlight => Some(Color::Yellow),
        SubmissionState::Idle => None,
    };

    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(state_color.unwrap_or(Color::DarkGray))
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if let Some(color) = state_color {
        Style::default().fg(color)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {label} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
