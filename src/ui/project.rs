//! Project view: the team's editable project record

use crate::app::App;
use crate::ui::forms::draw_project_form;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the project view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.team.is_none() {
        let block = Block::default()
            .title(" Project ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let message = Paragraph::new(
            "No team found.\nForm a team with other participants on Slack first.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    draw_project_form(frame, area, app);
}
