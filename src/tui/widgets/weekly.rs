use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::truncate;
use crate::tui::App;

const DONE_MARKER: &str = "✔";
const TODO_MARKER: &str = "○";

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let tracker = &app.tracker;
    let selected_id = app.selected_lesson().map(|l| l.id);

    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;

    for week in &app.content.curriculum.weeks {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                week.heading(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({}/{})", tracker.week_completed(week), week.lessons.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ])));

        for lesson in &week.lessons {
            if Some(lesson.id) == selected_id {
                selected_row = Some(items.len());
            }

            let (marker, marker_color, title_style) = if tracker.is_completed(lesson.id) {
                (
                    DONE_MARKER,
                    Color::Green,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                (TODO_MARKER, Color::Gray, Style::default().fg(Color::White))
            };

            items.push(ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(marker, Style::default().fg(marker_color)),
                Span::raw(" "),
                Span::styled(format!("{:<40}", truncate(&lesson.title, 38)), title_style),
                Span::styled(lesson.duration.clone(), Style::default().fg(Color::DarkGray)),
            ])));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Weekly Plan ")
        .title_style(Style::default().fg(Color::Cyan));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected_row);

    f.render_stateful_widget(list, area, &mut state);
}
