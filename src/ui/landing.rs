//! Landing view: event information and latest news

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the landing view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Make or Break ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = hero_lines();
    lines.extend(hackathon_lines());
    lines.extend(prizes_lines());
    lines.extend(workshops_lines());
    lines.extend(ai_competition_lines());
    lines.extend(community_lines());
    lines.extend(news_lines(app));

    let scroll = app.state.landing_scroll.min(lines.len().saturating_sub(1)) as u16;
    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);

    frame.render_widget(content, area);
}

fn section_header(title: &str, subtitle: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

fn hero_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "April 13, 14, 15 · 2018",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "Create, code, and learn with us in Porto",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Join us in the playground for the future"),
    ]
}

fn hackathon_lines() -> Vec<Line<'static>> {
    let mut lines = section_header("Hackathon", "First you make, then you break");
    lines.extend([
        Line::from("Make or Break has a 3 day hackathon for everyone, divided into 2 main phases:"),
        Line::from("  - Make: 2 days to develop a software project"),
        Line::from("  - Break: showcase your project to all participants in a small fair"),
        Line::from("Apply and experiment with a new idea to win amazing prizes!"),
        Line::from("(one per member of each category's winning team)"),
    ]);
    lines
}

fn prizes_lines() -> Vec<Line<'static>> {
    let mut lines = section_header("Prizes", "One per member of each category's winning team");
    lines.extend([
        Line::from("  Funny      - An experience to remember"),
        Line::from("  Useful     - Hardware for the everyday hacker"),
        Line::from("  Hardcore   - Serious kit for serious builds"),
    ]);
    lines
}

fn workshops_lines() -> Vec<Line<'static>> {
    let mut lines = section_header("Workshops", "Come learn with us!");
    lines.extend([
        Line::from(
            "Make or Break is all about learning. Step out of your comfort zone and join us \
             and many other developers.",
        ),
        Line::from("Workshops will be announced soon."),
    ]);
    lines
}

fn ai_competition_lines() -> Vec<Line<'static>> {
    let mut lines = section_header("AI Competition", "One bot to rule the board!");
    lines.extend([
        Line::from(
            "The goal is to create an AI agent capable of playing a simple board game created \
             for the competition.",
        ),
        Line::from("You can develop it in a programming language of your choice."),
    ]);
    lines
}

fn community_lines() -> Vec<Line<'static>> {
    let mut lines = section_header("It's dangerous to go alone!", "Find a team on Slack");
    lines.extend([
        Line::from("You can't participate in the Make or Break hackathon by yourself."),
        Line::from("Join our Slack community and form a team with other participants."),
        Line::from(Span::styled(
            "Press 'c' to get your invite.",
            Style::default().fg(Color::Cyan),
        )),
    ]);
    lines
}

fn news_lines(app: &App) -> Vec<Line<'static>> {
    if app.state.posts.is_empty() {
        return Vec::new();
    }

    let mut lines = section_header("Latest news", "From our Medium publication");
    for post in app.state.posts.iter().take(2) {
        lines.push(Line::from(vec![
            Span::styled(
                post.title.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", post.published_at.format("%b %e, %Y")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(post.subtitle.clone()));
        lines.push(Line::from(Span::styled(
            format!("https://medium.com/makeorbreak-io/{}", post.unique_slug),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::from(""));
    }
    lines
}
