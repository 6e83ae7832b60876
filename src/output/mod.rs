//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_compare_result, print_find_result};
pub use formatters::{create_progress_bar, letters_to_tiles, score_bar};
