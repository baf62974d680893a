//! Editable project form rendering

use super::field_renderer::{
    draw_failure_reason, draw_field, draw_field_error, draw_help_text, draw_multi_select,
};
use crate::app::App;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

/// Draw the project create/edit form
pub fn draw_project_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.project_form;
    let validation = form.validate();
    let error_for = |field: &str| {
        if form.show_errors {
            validation.error(field)
        } else {
            None
        }
    };

    let title = if form.is_update() {
        " Edit Project "
    } else {
        " Create Project "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(5),             // Description
            Constraint::Length(1),             // Description error
            Constraint::Min(6),                // Technologies
            Constraint::Length(1),             // Technologies error
            Constraint::Length(3),             // Student team checkbox
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(1),             // Failure reason
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    draw_field(
        frame,
        chunks[0],
        &form.name,
        form.active_field_index == 0,
        error_for("name"),
    );
    draw_field_error(frame, chunks[1], error_for("name"));

    draw_field(
        frame,
        chunks[2],
        &form.description,
        form.active_field_index == 1,
        error_for("description"),
    );
    draw_field_error(frame, chunks[3], error_for("description"));

    draw_multi_select(
        frame,
        chunks[4],
        &form.technologies,
        form.tech_cursor,
        form.active_field_index == 2,
        error_for("technologies"),
    );
    draw_field_error(frame, chunks[5], error_for("technologies"));

    draw_field(
        frame,
        chunks[6],
        &form.student_team,
        form.active_field_index == 3,
        None,
    );

    render_submit_button(
        frame,
        chunks[7],
        &form.submission,
        form.submit_label(),
        form.is_buttons_row_active(),
    );

    draw_failure_reason(frame, chunks[8], form.submission.failure_reason());

    draw_help_text(
        frame,
        chunks[9],
        vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(": toggle  "),
            Span::styled(
                crate::platform::SAVE_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": save  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": back"),
        ],
    );
}
