//! Error types for PerfProbe
//!
//! Only one failure is expected during a normal run: a memory probe that
//! cannot obtain its buffer. Everything else is fatal to the run.

use thiserror::Error;

/// Main error type for PerfProbe operations
#[derive(Error, Debug)]
pub enum BenchError {
    /// Buffer allocation for a memory probe failed
    #[error("Allocation of {size_bytes} bytes failed")]
    AllocationFailed {
        /// Requested buffer size in bytes
        size_bytes: u64,
    },

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// Create an allocation failure for the given request
    pub fn allocation(size_bytes: u64) -> Self {
        Self::AllocationFailed { size_bytes }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Check if the run can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}

/// Result type alias for PerfProbe operations
pub type Result<T> = std::result::Result<T, BenchError>;

impl From<rayon::ThreadPoolBuildError> for BenchError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        BenchError::ThreadPool(err.to_string())
    }
}
