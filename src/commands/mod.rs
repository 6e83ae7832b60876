//! Command implementations

pub mod benchmark;
pub mod compare;
pub mod find;
pub mod simple;

pub use benchmark::{BenchmarkResult, EngineTiming, random_queries, run_benchmark};
pub use compare::{CompareResult, QueryComparison, compare_engines, compare_query};
pub use find::{FindConfig, FindResult, find_words};
pub use simple::run_simple;
