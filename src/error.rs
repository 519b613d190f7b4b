//! Error handling for audio buffer operations
//!
//! Buffer operations are lenient: out-of-range bounds clamp and oversized
//! offsets are well defined. Errors only arise where a buffer is constructed
//! from caller data, or when a fold is given nothing to fold.

use thiserror::Error;

/// Result type alias for buffer operations
pub type Result<T> = std::result::Result<T, BufferError>;

/// Main error type for buffer operations
#[derive(Error, Debug)]
pub enum BufferError {
    // Shape Errors
    #[error("Channel {channel} has {found} samples, expected {expected}")]
    ShapeMismatch {
        channel: usize,
        expected: usize,
        found: usize,
    },

    #[error("Interleaved data length {samples} is not divisible by channel count {channels}")]
    InterleavedMismatch { samples: usize, channels: usize },

    #[error("Invalid sample rate: {sample_rate} Hz")]
    InvalidSampleRate { sample_rate: u32 },

    #[error("Buffer must have at least one channel")]
    NoChannels,

    // Sequence Errors
    #[error("No buffers given")]
    NoBuffers,

    // Configuration Errors
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl BufferError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            BufferError::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            BufferError::InterleavedMismatch { .. } => "INTERLEAVED_MISMATCH",
            BufferError::InvalidSampleRate { .. } => "INVALID_SAMPLE_RATE",
            BufferError::NoChannels => "NO_CHANNELS",
            BufferError::NoBuffers => "NO_BUFFERS",
            BufferError::Config(_) => "CONFIG_ERROR",
        }
    }
}
