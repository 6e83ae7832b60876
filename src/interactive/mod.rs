//! Full-screen interactive mode
//!
//! Type letters and watch the ranked matches update on every keystroke.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, run_tui};
