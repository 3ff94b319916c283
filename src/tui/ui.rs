use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::widgets::{paths, progress, resources, tips, weekly};
use super::{App, View};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Progress header
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    progress::draw(f, app, chunks[0]);
    draw_tabs(f, app, chunks[1]);
    draw_content(f, app, chunks[2]);
    draw_help_bar(f, app, chunks[3]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let tab_titles: Vec<String> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{} {}", i + 1, v.title()))
        .collect();

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL))
        .select(app.view.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.view {
        View::Paths => paths::draw(f, app, area),
        View::Weekly => weekly::draw(f, app, area),
        View::Resources => resources::draw(f, app, area),
        View::Tips => tips::draw(f, app, area),
    }
}

fn draw_help_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("h/l", Style::default().fg(Color::Cyan)),
        Span::raw(" Views  "),
        Span::styled("1-4", Style::default().fg(Color::Cyan)),
        Span::raw(" Jump  "),
    ];

    if app.view == View::Weekly {
        spans.extend(vec![
            Span::styled("j/k", Style::default().fg(Color::Cyan)),
            Span::raw(" Nav  "),
            Span::styled("g/G", Style::default().fg(Color::Cyan)),
            Span::raw(" Top/Bot  "),
            Span::styled("<Space>", Style::default().fg(Color::Cyan)),
            Span::raw(" Toggle done  "),
        ]);
    }

    spans.extend(vec![
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]);

    let help = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    f.render_widget(help, area);
}
