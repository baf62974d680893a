//! Slack invite / newsletter form rendering

use super::field_renderer::{draw_failure_reason, draw_field, draw_field_error, draw_help_text};
use crate::app::App;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    Frame,
};

/// Draw the community signup form: one email field feeding two triggers
pub fn draw_invite_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.invite_form;
    let validation = form.validate();
    let email_error = if form.show_errors {
        validation.error("EMAIL")
    } else {
        None
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email field
            Constraint::Length(1),             // Inline error
            Constraint::Length(BUTTON_HEIGHT), // Invite button
            Constraint::Length(BUTTON_HEIGHT), // Subscribe button
            Constraint::Length(1),             // Failure reason
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .split(area);

    draw_field(
        frame,
        chunks[0],
        &form.email,
        form.active_field_index == 0,
        email_error,
    );
    draw_field_error(frame, chunks[1], email_error);

    let buttons_active = form.is_buttons_row_active();
    render_submit_button(
        frame,
        chunks[2],
        &form.invite_submission,
        "Get invited to our Slack",
        buttons_active && form.selected_button == 0,
    );
    render_submit_button(
        frame,
        chunks[3],
        &form.subscribe_submission,
        "Subscribe to our newsletter",
        buttons_active && form.selected_button == 1,
    );

    // Reason from whichever trigger last failed
    let failure_reason = form
        .invite_submission
        .failure_reason()
        .or_else(|| form.subscribe_submission.failure_reason());
    draw_failure_reason(frame, chunks[4], failure_reason);

    draw_help_text(
        frame,
        chunks[5],
        vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": buttons  "),
            Span::styled("←/→", Style::default().fg(Color::Cyan)),
            Span::raw(": choose  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(": submit  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": back"),
        ],
    );
}
