use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::accent;
use crate::models::{Difficulty, LearningPath};
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let paths = &app.content.paths;

    if paths.is_empty() {
        let empty = Paragraph::new("No learning paths configured.").block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Learning Paths "),
        );
        f.render_widget(empty, area);
        return;
    }

    let constraints: Vec<Constraint> = paths
        .iter()
        .map(|_| Constraint::Ratio(1, paths.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (path, column)) in paths.iter().zip(columns.iter()).enumerate() {
        draw_card(f, path, accent(i), *column);
    }
}

fn draw_card(f: &mut Frame, path: &LearningPath, color: Color, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            path.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Duration:   ", Style::default().fg(Color::DarkGray)),
            Span::styled(path.duration.clone(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                path.difficulty.label(),
                Style::default().fg(difficulty_color(path.difficulty)),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", path.title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::Red,
    }
}
