use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::accent;
use crate::models::Tip;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_getting_started(f, &app.content.tips.getting_started, columns[0]);
    draw_strategies(f, &app.content.tips.strategies, columns[1]);
}

fn draw_getting_started(f: &mut Frame, tips: &[Tip], area: Rect) {
    let mut text = Vec::new();
    for (i, tip) in tips.iter().enumerate() {
        text.push(Line::from(vec![
            Span::styled(
                format!("{}. ", i + 1),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                tip.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        text.push(Line::from(Span::styled(
            format!("   {}", tip.body),
            Style::default().fg(Color::Gray),
        )));
        text.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Getting Started Tips ")
        .title_style(Style::default().fg(Color::Yellow));

    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_strategies(f: &mut Frame, tips: &[Tip], area: Rect) {
    let mut text = Vec::new();
    for (i, tip) in tips.iter().enumerate() {
        let color = accent(i + 1);
        text.push(Line::from(Span::styled(
            tip.title.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(Span::styled(
            tip.body.clone(),
            Style::default().fg(Color::Gray),
        )));
        text.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Success Strategies ")
        .title_style(Style::default().fg(Color::Green));

    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
