//! Error handling for pcmwave
//!
//! Every fallible operation in the crate returns [`WaveError`]. Decode errors
//! are terminal for the call that raised them; nothing is partially recovered.

use std::io;

use thiserror::Error;

/// Result type alias for pcmwave operations
pub type Result<T> = std::result::Result<T, WaveError>;

/// Main error type for pcmwave operations
#[derive(Error, Debug)]
pub enum WaveError {
    // Construction errors
    #[error("Sample count {samples} is not divisible by channel count {channels}")]
    ChannelMismatch { samples: usize, channels: usize },

    #[error("Invalid channel count: {channels} (must be 1..=255)")]
    InvalidChannelCount { channels: usize },

    #[error("Unsupported bit depth: {bits} (only 8 and 16 bit PCM are supported)")]
    UnsupportedBitDepth { bits: u16 },

    // Decode errors
    #[error("Stream truncated while reading {context}")]
    Truncated { context: &'static str },

    #[error("Bad chunk tag: expected {expected:?}, found {found:?}")]
    BadMagic { expected: String, found: String },

    #[error("Unsupported format tag: {format_tag} (only PCM = 1 is supported)")]
    UnsupportedFormat { format_tag: u16 },

    // Transform errors
    #[error("Incompatible buffers: {details}")]
    IncompatibleBuffers { details: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WaveError {
    /// Map a stream error raised while reading `context`.
    ///
    /// A premature end of stream becomes [`WaveError::Truncated`]; anything
    /// else is passed through as [`WaveError::Io`].
    pub fn from_read(err: io::Error, context: &'static str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            WaveError::Truncated { context }
        } else {
            WaveError::Io(err)
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WaveError::ChannelMismatch { .. } => "CHANNEL_MISMATCH",
            WaveError::InvalidChannelCount { .. } => "INVALID_CHANNEL_COUNT",
            WaveError::UnsupportedBitDepth { .. } => "UNSUPPORTED_BIT_DEPTH",
            WaveError::Truncated { .. } => "TRUNCATED",
            WaveError::BadMagic { .. } => "BAD_MAGIC",
            WaveError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            WaveError::IncompatibleBuffers { .. } => "INCOMPATIBLE_BUFFERS",
            WaveError::Io(_) => "IO_ERROR",
            WaveError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::ChannelMismatch { .. } => "Supply a whole number of frames (samples = frames * channels)",
            Self::InvalidChannelCount { .. } => "Use between 1 and 255 channels",
            Self::UnsupportedBitDepth { .. } => "Convert the file to 8-bit or 16-bit PCM",
            Self::Truncated { .. } => "The file is incomplete; re-export it from the source",
            Self::BadMagic { .. } => "The input is not a RIFF/WAVE file; retry without --strict to decode leniently",
            Self::UnsupportedFormat { .. } => "Convert to uncompressed PCM WAV",
            Self::IncompatibleBuffers { .. } => "Join only buffers with equal rate, depth and length",
            _ => "Check the error details and try again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_maps_to_truncated() {
        let err = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        let mapped = WaveError::from_read(err, "data chunk");
        assert!(matches!(mapped, WaveError::Truncated { context: "data chunk" }));
        assert_eq!(mapped.error_code(), "TRUNCATED");
    }

    #[test]
    fn test_other_io_errors_pass_through() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let mapped = WaveError::from_read(err, "riff header");
        assert!(matches!(mapped, WaveError::Io(_)));
    }

    #[test]
    fn test_recovery_hints() {
        let err = WaveError::UnsupportedBitDepth { bits: 24 };
        assert!(err.recovery_hint().contains("16-bit"));
        assert!(err.to_string().contains("24"));
    }
}
