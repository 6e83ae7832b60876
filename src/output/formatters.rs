//! Formatting utilities for terminal output

use crate::core::LetterCounts;

/// Render letters as game tiles, e.g. `[A][H][T]`
#[must_use]
pub fn letters_to_tiles(letters: &str) -> String {
    LetterCounts::from_word(letters)
        .to_string()
        .chars()
        .map(|c| format!("[{}]", c.to_ascii_uppercase()))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a score relative to the best score of the result set
#[must_use]
pub fn score_bar(score: i32, best: i32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best), width)
}
