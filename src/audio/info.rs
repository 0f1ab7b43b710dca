//! Buffer summaries for reporting

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::audio::AudioBuffer;
use crate::codec::encode_body;
use crate::riff::CANONICAL_HEADER_LEN;

/// Summary of an audio buffer as it would be written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveInfo {
    /// Sample rate in Hz
    pub sampling_rate: u32,
    /// Number of channels
    pub channels: u8,
    /// Declared bit depth
    pub bits_per_sample: u8,
    /// Samples per channel
    pub frame_count: usize,
    /// Whole-second duration in milliseconds
    pub duration_ms: usize,
    /// Size of the canonical WAVE file in bytes
    pub encoded_len: usize,
    /// SHA-256 of the PCM body, lowercase hex
    pub pcm_sha256: String,
}

impl WaveInfo {
    pub fn from_buffer(buffer: &AudioBuffer) -> Self {
        let body = encode_body(buffer);
        WaveInfo {
            sampling_rate: buffer.sampling_rate(),
            channels: buffer.channels(),
            bits_per_sample: buffer.bits_per_sample(),
            frame_count: buffer.frame_count(),
            duration_ms: buffer.duration_ms(),
            encoded_len: CANONICAL_HEADER_LEN + body.len(),
            pcm_sha256: format!("{:x}", Sha256::digest(&body)),
        }
    }
}
