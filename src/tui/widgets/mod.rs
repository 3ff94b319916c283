pub mod paths;
pub mod progress;
pub mod resources;
pub mod tips;
pub mod weekly;

use ratatui::style::Color;

/// Accent colours handed out to cards by position.
const ACCENTS: [Color; 4] = [Color::Blue, Color::Green, Color::Magenta, Color::Yellow];

pub(crate) fn accent(index: usize) -> Color {
    ACCENTS[index % ACCENTS.len()]
}

pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
