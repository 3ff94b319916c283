use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let progress = app.progress();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(
            " Start Your Coding Journey ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .title(
            Line::from(Span::styled(
                " Your Progress ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        )
        .title_bottom(Line::from(Span::styled(
            " Learn programming step by step, from complete beginner to building real projects ",
            Style::default().fg(Color::DarkGray),
        )));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Counts
            Constraint::Length(1), // Bar
            Constraint::Length(1), // Caption
        ])
        .split(inner);

    let counts = Line::from(vec![
        Span::styled("Lessons Completed  ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{} / {}", progress.completed_count, progress.total_count),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(counts), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(progress.ratio())
        .label("");
    f.render_widget(gauge, rows[1]);

    let caption = Line::from(vec![
        Span::styled(progress.encouragement(), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            format!("{}% Complete", progress.rounded_percentage()),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    f.render_widget(Paragraph::new(caption), rows[2]);
}
