//! Display functions for command results

use super::formatters::{letters_to_tiles, score_bar};
use crate::commands::{BenchmarkResult, CompareResult, FindResult};
use colored::Colorize;

/// Print the result of a find query
pub fn print_find_result(result: &FindResult, show_scores: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}  ({} engine)",
        letters_to_tiles(&result.letters).bright_yellow().bold(),
        result.engine
    );
    println!("{}", "─".repeat(60).cyan());

    if result.matches.is_empty() {
        println!("\n{}", "No words found".yellow());
        return;
    }

    let best = result.matches.first().map_or(0, |m| m.score);
    println!();
    for m in &result.matches {
        if show_scores {
            println!(
                "  {:<16} {} {:>3}",
                m.word.to_uppercase().bright_white().bold(),
                score_bar(m.score, best, 20).green(),
                m.score
            );
        } else {
            println!("  {}", m.word);
        }
    }

    println!();
    let shown = result.matches.len();
    if shown < result.total_matches {
        println!(
            "{}",
            format!("Showing {shown} of {} words", result.total_matches).bright_black()
        );
    }
    println!(
        "{}",
        format!(
            "✅ {} words in {:.3} ms",
            result.total_matches,
            result.duration.as_secs_f64() * 1000.0
        )
        .green()
        .bold()
    );
}

/// Print the result of a cross-engine comparison
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ENGINE COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for q in &result.queries {
        let status = if q.agrees() {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        println!(
            "\n{status} {}  trie: {} words, profile: {} words",
            letters_to_tiles(&q.letters).bright_yellow(),
            q.trie.len(),
            q.profile.len()
        );

        if !q.only_in_trie.is_empty() {
            println!("    only in trie:    {}", q.only_in_trie.join(", ").red());
        }
        if !q.only_in_profile.is_empty() {
            println!("    only in profile: {}", q.only_in_profile.join(", ").red());
        }
        if !q.trie_ordered {
            println!("    {}", "trie results are not in score order".red());
        }
        if !q.profile_ordered {
            println!("    {}", "profile results are not in score order".red());
        }
    }

    println!();
    if result.all_agree() {
        println!("{}", "✅ Engines agree on every query".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} queries disagree", result.disagreements())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Workload:".bright_cyan().bold());
    println!("   Queries:          {}", result.queries);
    println!("   Letters/query:    {}", result.letters_per_query);

    for timing in &result.timings {
        println!(
            "\n⏱  {}",
            format!("{} engine:", timing.engine).bright_cyan().bold()
        );
        println!("   Matches found:    {}", timing.total_matches);
        println!("   Most in a query:  {}", timing.max_matches);
        println!(
            "   Sequential:       {:.3}s ({} queries/s)",
            timing.duration.as_secs_f64(),
            format!("{:.0}", timing.queries_per_second)
                .bright_yellow()
                .bold()
        );
        println!(
            "   Parallel:         {:.3}s ({} queries/s)",
            timing.parallel_duration.as_secs_f64(),
            format!("{:.0}", timing.parallel_queries_per_second)
                .bright_yellow()
                .bold()
        );
    }

    if let [first, second] = result.timings.as_slice()
        && first.total_matches != second.total_matches
    {
        println!(
            "\n{}",
            format!(
                "❌ {} found {} matches but {} found {}",
                first.engine, first.total_matches, second.engine, second.total_matches
            )
            .red()
            .bold()
        );
    }
}
