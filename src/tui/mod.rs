mod ui;
mod widgets;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::models::{Content, Lesson};
use crate::tracker::{CompletionTracker, Progress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Paths,
    Weekly,
    Resources,
    Tips,
}

impl View {
    pub const ALL: [View; 4] = [View::Paths, View::Weekly, View::Resources, View::Tips];

    fn next(&self) -> Self {
        match self {
            View::Paths => View::Weekly,
            View::Weekly => View::Resources,
            View::Resources => View::Tips,
            View::Tips => View::Paths,
        }
    }

    fn prev(&self) -> Self {
        match self {
            View::Paths => View::Tips,
            View::Weekly => View::Paths,
            View::Resources => View::Weekly,
            View::Tips => View::Resources,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Paths => "Learning Paths",
            View::Weekly => "Weekly Plan",
            View::Resources => "Resources",
            View::Tips => "Tips",
        }
    }

    fn index(&self) -> usize {
        match self {
            View::Paths => 0,
            View::Weekly => 1,
            View::Resources => 2,
            View::Tips => 3,
        }
    }
}

pub struct StatefulList<T> {
    pub items: Vec<T>,
    pub selected: Option<usize>,
}

impl<T> StatefulList<T> {
    fn with_items(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self { items, selected }
    }

    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        };
        self.selected = Some(i);
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
    }

    fn first(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(0);
        }
    }

    fn last(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(self.items.len() - 1);
        }
    }

    fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

/// One dashboard session. The tracker lives and dies with it.
pub struct App {
    pub content: Content,
    pub tracker: CompletionTracker,
    pub view: View,
    /// Lesson ids in plan order; the weekly view's cursor.
    pub lessons: StatefulList<i64>,
    pub should_quit: bool,
}

impl App {
    pub fn new(content: Content) -> Self {
        let lesson_ids = content.curriculum.lessons().map(|l| l.id).collect();
        Self {
            content,
            tracker: CompletionTracker::new(),
            view: View::Paths,
            lessons: StatefulList::with_items(lesson_ids),
            should_quit: false,
        }
    }

    pub fn progress(&self) -> Progress {
        self.tracker.progress(&self.content.curriculum)
    }

    pub fn selected_lesson(&self) -> Option<&Lesson> {
        self.lessons
            .selected_item()
            .and_then(|&id| self.content.curriculum.lesson(id))
    }

    fn toggle_selected(&mut self) {
        if let Some(&id) = self.lessons.selected_item() {
            self.tracker.toggle(id);
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }

            // View switching
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => self.view = self.view.prev(),
            KeyCode::Char('l') | KeyCode::Right => self.view = self.view.next(),
            KeyCode::Tab => {
                if modifiers.contains(KeyModifiers::SHIFT) {
                    self.view = self.view.prev();
                } else {
                    self.view = self.view.next();
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.view = View::ALL[idx];
            }

            // Lesson list (weekly plan only)
            KeyCode::Char('j') | KeyCode::Down if self.view == View::Weekly => self.lessons.next(),
            KeyCode::Char('k') | KeyCode::Up if self.view == View::Weekly => {
                self.lessons.previous()
            }
            KeyCode::Char('g') if self.view == View::Weekly => self.lessons.first(),
            KeyCode::Char('G') if self.view == View::Weekly => self.lessons.last(),
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter
                if self.view == View::Weekly =>
            {
                self.toggle_selected()
            }

            _ => {}
        }
    }
}

pub fn run(content: Content) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(content);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let progress = app.progress();
    log::info!(
        "session ended with {}/{} lessons complete",
        progress.completed_count,
        progress.total_count
    );

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
