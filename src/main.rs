//! Word Finder - CLI
//!
//! Find the words a bag of letters can build, ranked by letter points.
//! TUI, REPL, one-shot and HTTP modes over a trie or letter-profile engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_finder::{
    commands::{FindConfig, compare_engines, find_words, random_queries, run_benchmark, run_simple},
    config::{AppConfig, load_config, validate_config},
    core::LetterPoints,
    finder::{FinderType, LetterProfileIndex, SharedFinder, Trie},
    output::{print_benchmark_result, print_compare_result, print_find_result},
    server::{self, AppState},
    wordlists::load_vocabulary,
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find every word you can build from a bag of letters, best score first",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Engine: trie (default) or profile
    #[arg(short, long, global = true)]
    engine: Option<String>,

    /// Vocabulary file, one word per line (embedded list when omitted)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,

    /// Find the words buildable from some letters
    Find {
        /// The available letters
        letters: String,

        /// Show each word's score
        #[arg(short, long)]
        scores: bool,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Run queries on both engines and check that they agree
    Compare {
        /// Letter bags to query
        #[arg(required = true)]
        letters: Vec<String>,
    },

    /// Benchmark both engines on random letter bags
    Benchmark {
        /// Number of random queries
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Letters per query
        #[arg(short = 'L', long, default_value = "7")]
        length: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Serve queries over HTTP
    Serve {
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_tracing(&command);

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => AppConfig::default(),
    };

    // Command-line flags take precedence over the file
    if let Some(engine) = cli.engine {
        config.engine = engine;
    }
    if let Some(words) = cli.words {
        config.words.location = Some(words);
    }
    if let Commands::Serve { host, port } = &command {
        if let Some(host) = host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
    validate_config(&config).context("Invalid configuration")?;

    let points = config
        .letter_points()
        .context("Invalid letter points")?;
    let location = config.words.location.as_deref();

    match command {
        Commands::Play => run_play_command(&build_finder(&config.engine, points, location)?),
        Commands::Simple => run_simple(&build_finder(&config.engine, points, location)?)
            .context("Simple mode failed"),
        Commands::Find {
            letters,
            scores,
            limit,
        } => {
            let finder = build_finder(&config.engine, points, location)?;
            let result = find_words(FindConfig::new(letters).with_limit(limit), &finder);
            print_find_result(&result, scores);
            Ok(())
        }
        Commands::Compare { letters } => run_compare_command(&letters, points, location),
        Commands::Benchmark {
            count,
            length,
            seed,
        } => run_benchmark_command(count, length, seed, points, location),
        Commands::Serve { .. } => {
            let finder = build_finder(&config.engine, points, location)?;
            run_serve_command(finder, &config.bind_address())
        }
    }
}

/// Logs go to stderr; the TUI only shows warnings so the screen stays intact
fn init_tracing(command: &Commands) {
    let default_filter = match command {
        Commands::Play => "word_finder=warn",
        _ => "word_finder=info",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_finder(engine: &str, points: LetterPoints, location: Option<&Path>) -> Result<FinderType> {
    let mut finder = FinderType::from_name(engine, points);
    load_vocabulary(&mut finder, location).context("Failed to load vocabulary")?;
    Ok(finder)
}

fn build_both(points: LetterPoints, location: Option<&Path>) -> Result<(Trie, LetterProfileIndex)> {
    let mut trie = Trie::new(points);
    let mut profile = LetterProfileIndex::new(points);
    load_vocabulary(&mut trie, location).context("Failed to load vocabulary")?;
    load_vocabulary(&mut profile, location).context("Failed to load vocabulary")?;
    Ok((trie, profile))
}

fn run_compare_command(
    letters: &[String],
    points: LetterPoints,
    location: Option<&Path>,
) -> Result<()> {
    let (trie, profile) = build_both(points, location)?;
    let result = compare_engines(&trie, &profile, letters);
    print_compare_result(&result);

    if result.all_agree() {
        Ok(())
    } else {
        anyhow::bail!("{} of {} queries disagree", result.disagreements(), result.queries.len())
    }
}

fn run_benchmark_command(
    count: usize,
    length: usize,
    seed: u64,
    points: LetterPoints,
    location: Option<&Path>,
) -> Result<()> {
    let (trie, profile) = build_both(points, location)?;
    let trie = FinderType::Trie(trie);
    let profile = FinderType::Profile(profile);

    println!("Running {count} random queries of {length} letters (seed {seed})...");

    let queries = random_queries(count, length, seed);
    let result = run_benchmark(&[&trie, &profile], &queries, true);
    print_benchmark_result(&result);
    Ok(())
}

fn run_serve_command(finder: FinderType, address: &str) -> Result<()> {
    let state = AppState::new(SharedFinder::new(finder));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;
        server::run(listener, state).await.context("HTTP server failed")
    })
}

fn run_play_command(finder: &FinderType) -> Result<()> {
    use word_finder::interactive::{App, run_tui};

    let app = App::new(finder);
    run_tui(app)
}
