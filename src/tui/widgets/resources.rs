use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{accent, truncate};
use crate::models::ResourceCategory;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let categories = &app.content.resources;

    if categories.is_empty() {
        let empty = Paragraph::new("No resources configured.")
            .block(Block::default().borders(Borders::ALL).title(" Resources "));
        f.render_widget(empty, area);
        return;
    }

    // One block per category, each as tall as its item list
    let constraints: Vec<Constraint> = categories
        .iter()
        .map(|c| {
            let rows = u16::try_from(c.items.len()).unwrap_or(u16::MAX);
            Constraint::Length(rows.saturating_add(2).min(area.height))
        })
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, category) in categories.iter().enumerate() {
        draw_category(f, category, accent(i + 2), rows[i]);
    }
}

fn draw_category(f: &mut Frame, category: &ResourceCategory, color: Color, area: Rect) {
    let items: Vec<ListItem> = category
        .items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<22}", truncate(&item.name, 20)),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(item.description.clone(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", category.category))
        .title_style(Style::default().fg(color));

    f.render_widget(List::new(items).block(block), area);
}
