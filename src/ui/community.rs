//! Community view: Slack invite and newsletter signup

use crate::app::App;
use crate::ui::forms::draw_invite_form;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the community view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Community ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Intro text
            Constraint::Min(0),    // Form
        ])
        .margin(1)
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::from("You can't participate in the Make or Break hackathon by yourself."),
        Line::from("Join our Slack community and form a team with other participants."),
        Line::from(""),
        Line::from("Get your invite here:"),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(intro, chunks[0]);

    draw_invite_form(frame, chunks[1], app);
}
