//! TUI rendering with ratatui
//!
//! Letter tiles, ranked matches and query history.

use super::app::{App, MessageStyle};
use crate::finder::WordFinder;
use crate::output::{letters_to_tiles, score_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Width of the score bar next to each match
const BAR_WIDTH: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_matches(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("WORD FINDER - {} engine", app.finder.name());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_matches(f: &mut Frame, app: &App, area: Rect) {
    let best = app.best_score();

    let items: Vec<ListItem> = if app.matches.is_empty() {
        let hint = if app.input_buffer.is_empty() {
            "Start typing letters..."
        } else {
            "No words can be made from these letters"
        };
        vec![ListItem::new(hint).style(Style::default().fg(Color::DarkGray))]
    } else {
        app.matches
            .iter()
            .enumerate()
            .skip(app.scroll)
            .map(|(i, m)| {
                let style = if m.score == best {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>4}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{:<16}", m.word.to_uppercase()), style),
                    Span::styled(
                        score_bar(m.score, best, BAR_WIDTH),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(format!(" {:>3}", m.score)),
                ]))
            })
            .collect()
    };

    let title = format!(" Matches ({}) ", app.matches.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Vocabulary coverage
            Constraint::Percentage(50), // History
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_coverage(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_coverage(f: &mut Frame, app: &App, area: Rect) {
    let vocabulary = app.finder.stats().words_added;
    let found = app.matches.len();

    // Cast is safe: ratio is clamped to [0, 100]
    let percent = if vocabulary == 0 {
        0
    } else {
        ((found as f64 / vocabulary as f64) * 100.0).min(100.0) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Vocabulary Reached ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{found}/{vocabulary} words"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            let best = entry.best.as_ref().map_or_else(
                || "-".to_string(),
                |b| format!("{} ({})", b.word.to_uppercase(), b.score),
            );
            ListItem::new(format!(
                "{} {} words, best {}",
                entry.letters.to_uppercase(),
                entry.found,
                best
            ))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" History (Tab recalls) ")
            .borders(Borders::ALL),
    );

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(app.input_buffer.to_uppercase()),
        Line::from(Span::styled(
            letters_to_tiles(&app.input_buffer),
            Style::default().fg(Color::Yellow),
        )),
    ];

    let input = Paragraph::new(content)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Your Letters | Enter: Save | Esc: Clear ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = app.finder.stats();
    let words = Paragraph::new(format!("Words: {}", stats.words_added)).alignment(Alignment::Center);
    f.render_widget(words, chunks[0]);

    let best = Paragraph::new(format!("Best: {}", app.best_score())).alignment(Alignment::Center);
    f.render_widget(best, chunks[1]);

    let timing = Paragraph::new(format!("Query: {:.2?}", app.last_query_time))
        .alignment(Alignment::Center);
    f.render_widget(timing, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Up/Down: Scroll")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterPoints;
    use crate::finder::FinderType;
    use crate::wordlists::load_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_matches_and_vocabulary_stats() {
        let mut finder = FinderType::from_name("trie", LetterPoints::standard());
        load_from_slice(&mut finder, &["a", "ah", "at", "ha", "hat", "juana"]);
        let mut app = App::new(&finder);
        app.input_buffer = "tha".to_string();
        app.refresh_matches();

        let text = screen_text(&app);

        assert!(text.contains("Matches (5)"));
        assert!(text.contains("HAT"));
        assert!(text.contains("5/6 words"));
        assert!(text.contains("Words: 6"));
        assert!(text.contains("Best: 6"));
    }
}
