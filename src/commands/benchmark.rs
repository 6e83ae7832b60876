//! Benchmark command
//!
//! Times random letter-bag queries against each engine, first one query at a
//! time and then the whole batch in parallel against the frozen index.

use crate::finder::{FinderType, WordFinder};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Timing of one engine over the query batch
pub struct EngineTiming {
    pub engine: &'static str,
    pub total_matches: usize,
    pub max_matches: usize,
    pub duration: Duration,
    pub parallel_duration: Duration,
    pub queries_per_second: f64,
    pub parallel_queries_per_second: f64,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub queries: usize,
    pub letters_per_query: usize,
    pub timings: Vec<EngineTiming>,
}

/// Generate `count` random letter bags of `length` letters
///
/// The same seed always yields the same queries.
#[must_use]
pub fn random_queries(count: usize, length: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (0..length)
                .map(|_| char::from(rng.random_range(b'a'..=b'z')))
                .collect()
        })
        .collect()
}

/// Run `queries` against every engine
pub fn run_benchmark(
    engines: &[&FinderType],
    queries: &[String],
    show_progress: bool,
) -> BenchmarkResult {
    let timings = engines
        .iter()
        .map(|&finder| time_engine(finder, queries, show_progress))
        .collect();

    BenchmarkResult {
        queries: queries.len(),
        letters_per_query: queries.first().map_or(0, String::len),
        timings,
    }
}

fn time_engine(finder: &FinderType, queries: &[String], show_progress: bool) -> EngineTiming {
    let pb = if show_progress {
        let pb = ProgressBar::new(queries.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:>8} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_prefix(finder.name());
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_matches = 0;
    let mut max_matches = 0;
    for letters in queries {
        let found = finder.find_scored(letters).len();
        total_matches += found;
        max_matches = max_matches.max(found);
        pb.inc(1);
    }
    let duration = start.elapsed();
    pb.finish_and_clear();

    let start = Instant::now();
    let parallel_matches: usize = queries
        .par_iter()
        .map(|letters| finder.find_scored(letters).len())
        .sum();
    let parallel_duration = start.elapsed();

    debug_assert_eq!(parallel_matches, total_matches);

    tracing::debug!(
        engine = finder.name(),
        total_matches,
        ?duration,
        ?parallel_duration,
        "benchmark finished"
    );

    EngineTiming {
        engine: finder.name(),
        total_matches,
        max_matches,
        duration,
        parallel_duration,
        queries_per_second: per_second(queries.len(), duration),
        parallel_queries_per_second: per_second(queries.len(), parallel_duration),
    }
}

fn per_second(count: usize, duration: Duration) -> f64 {
    let secs = duration.as_secs_f64();
    if secs > 0.0 { count as f64 / secs } else { 0.0 }
}
