//! Error types for profile resolution

use crate::Benchmark;
use thiserror::Error;

/// Result type for profile resolution
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Usage errors detected before any I/O happens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// `-name` was not given or is empty
    #[error("please pass a -name value")]
    MissingName,

    /// `-machine` was not given or is empty
    #[error("please pass a -machine value")]
    MissingMachine,

    /// `-name` is not one of the known benchmarks
    #[error("invalid -name value: '{0}' (expected one of: {list})", list = Benchmark::id_list())]
    UnknownBenchmark(String),

    /// The benchmark takes its process count from `-np`, which is absent
    #[error("please pass -np flag (required by '{0}')")]
    MissingProcessCount(Benchmark),

    /// `-np` is not a base-10 integer
    #[error("failed to parse '-np {value}': {reason}")]
    InvalidProcessCount { value: String, reason: String },

    /// `-np` parsed but is zero or negative
    #[error("invalid '-np {0}': process count must be positive")]
    NonPositiveProcessCount(i64),

    /// The derived job name came out empty
    #[error("name cannot be empty")]
    EmptyName,
}
