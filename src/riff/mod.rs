//! RIFF container layout
//!
//! Byte-level primitives and the three chunk headers that make up a
//! canonical PCM WAVE file: `RIFF`/`WAVE`, `fmt ` and `data`.

pub mod bytes;
pub mod chunks;

pub use bytes::FourCc;
pub use chunks::{
    ChunkHeader, DataChunk, FormatChunk, RiffHeader, CANONICAL_FMT_SIZE, CANONICAL_HEADER_LEN,
    DATA_TAG, FMT_TAG, PCM_FORMAT_TAG, RIFF_TAG, WAVE_TAG,
};
