//! TUI application state and logic

use crate::core::ScoredWord;
use crate::finder::{FinderType, WordFinder};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Queries kept in the history panel
const MAX_HISTORY: usize = 10;

/// Application state
pub struct App<'a> {
    pub finder: &'a FinderType,
    pub input_buffer: String,
    pub matches: Vec<ScoredWord>,
    pub last_query_time: Duration,
    pub scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// A submitted query
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub letters: String,
    pub found: usize,
    pub best: Option<ScoredWord>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(finder: &'a FinderType) -> Self {
        let stats = finder.stats();

        Self {
            finder,
            input_buffer: String::new(),
            matches: Vec::new(),
            last_query_time: Duration::ZERO,
            scroll: 0,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Loaded {} words into the {} engine.",
                        stats.words_added,
                        finder.name()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your letters; matches update as you type.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Re-run the query for the current input
    pub fn refresh_matches(&mut self) {
        let start = Instant::now();
        self.matches = self.finder.find_scored(&self.input_buffer);
        self.last_query_time = start.elapsed();
        self.scroll = 0;
    }

    pub fn push_letter(&mut self, c: char) {
        if c.is_alphabetic() {
            self.input_buffer.extend(c.to_lowercase());
            self.refresh_matches();
        }
    }

    pub fn pop_letter(&mut self) {
        if self.input_buffer.pop().is_some() {
            self.refresh_matches();
        }
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.refresh_matches();
    }

    /// Record the current query in the history and start a new one
    pub fn submit(&mut self) {
        if self.input_buffer.is_empty() {
            self.add_message("Type some letters first!", MessageStyle::Error);
            return;
        }

        let entry = HistoryEntry {
            letters: self.input_buffer.clone(),
            found: self.matches.len(),
            best: self.matches.first().cloned(),
        };

        match &entry.best {
            Some(best) => self.add_message(
                &format!(
                    "{} words from '{}', best: {} ({} points)",
                    entry.found,
                    entry.letters,
                    best.word.to_uppercase(),
                    best.score
                ),
                MessageStyle::Success,
            ),
            None => self.add_message(
                &format!("No words can be made from '{}'", entry.letters),
                MessageStyle::Error,
            ),
        }

        self.history.push(entry);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }

        self.input_buffer.clear();
    }

    /// Restore the most recent query into the input
    pub fn recall_last(&mut self) {
        if let Some(entry) = self.history.pop() {
            self.input_buffer = entry.letters;
            self.refresh_matches();
            self.add_message("Recalled previous letters", MessageStyle::Info);
        } else {
            self.add_message("Nothing to recall!", MessageStyle::Error);
        }
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.matches.len().saturating_sub(1);
        self.scroll = (self.scroll + rows).min(max);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Best score among the current matches
    #[must_use]
    pub fn best_score(&self) -> i32 {
        self.matches.first().map_or(0, |m| m.score)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.input_buffer.is_empty() {
                    self.should_quit = true;
                } else {
                    self.clear_input();
                }
            }
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => self.pop_letter(),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.recall_last(),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::PageUp => self.scroll_up(10),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
