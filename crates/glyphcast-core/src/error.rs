use thiserror::Error;

/// Errors raised while constructing a world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid world dimensions {width}x{height}x{depth} (each must be >= 1)")]
    InvalidDimensions { width: i32, height: i32, depth: i32 },

    #[error("failed to allocate block grid of {cells} cells")]
    AllocationFailed { cells: usize },

    #[error("block buffer size mismatch: expected {expected}, got {actual}")]
    BlockBufferSize { expected: usize, actual: usize },
}

/// Errors raised while loading engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config RON: {0}")]
    ParseError(String),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
