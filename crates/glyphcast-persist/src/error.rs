use glyphcast_core::error::WorldError;

/// Errors that can occur during snapshot save/load.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("file too small ({0} bytes, minimum {1})")]
    FileTooSmall(usize, usize),

    #[error("invalid snapshot dimensions {width}x{height}x{depth}")]
    InvalidDimensions { width: i32, height: i32, depth: i32 },

    #[error("truncated file: expected {expected} bytes, got {actual}")]
    TruncatedFile { expected: usize, actual: usize },

    #[error("{0} unexpected bytes after snapshot trailer")]
    TrailingData(usize),

    #[error("non-finite lighting state (time {time_of_day}, sky {sky_brightness})")]
    NonFiniteLighting { time_of_day: f32, sky_brightness: f32 },

    #[error("lighting state out of range (time {time_of_day}, sky {sky_brightness})")]
    LightingOutOfRange { time_of_day: f32, sky_brightness: f32 },

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    World(#[from] WorldError),
}
