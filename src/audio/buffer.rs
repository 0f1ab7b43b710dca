//! Audio buffer implementation
//!
//! AudioBuffer is the core data structure: interleaved signed 16-bit samples
//! plus the metadata needed to write them back out as a WAVE file.

use crate::audio::convert::{normalize_float_to_i16, widen_8_to_16};
use crate::error::{Result, WaveError};

/// Immutable interleaved PCM audio
///
/// Samples are always held as `i16` regardless of `bits_per_sample`, which
/// records the width the audio came from (and will be encoded back to).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    /// Sample rate in Hz
    sampling_rate: u32,
    /// Declared depth: 8 or 16
    bits_per_sample: u8,
    /// Number of interleaved channels
    channels: u8,
    /// Frame-major interleaved samples: [c0, c1, .., c0, c1, ..]
    samples: Vec<i16>,
}

impl AudioBuffer {
    /// Create a 16-bit buffer from interleaved samples (silence = 0)
    pub fn new(sampling_rate: u32, channels: u8, samples: Vec<i16>) -> Result<Self> {
        Self::with_depth(sampling_rate, 16, channels, samples)
    }

    /// Create an 8-bit buffer from unsigned interleaved bytes (silence = 128)
    ///
    /// Every byte is widened to 16-bit on the way in.
    pub fn from_u8(sampling_rate: u32, channels: u8, bytes: &[u8]) -> Result<Self> {
        let samples = bytes.iter().map(|&b| widen_8_to_16(b)).collect();
        Self::with_depth(sampling_rate, 8, channels, samples)
    }

    /// Create a 16-bit buffer from float samples spanning `-range_max..=range_max`
    pub fn from_f32(
        sampling_rate: u32,
        channels: u8,
        values: &[f32],
        range_max: f32,
    ) -> Result<Self> {
        let samples = values
            .iter()
            .map(|&v| normalize_float_to_i16(v, range_max))
            .collect();
        Self::with_depth(sampling_rate, 16, channels, samples)
    }

    /// Create a buffer with an explicit declared bit depth
    pub fn with_depth(
        sampling_rate: u32,
        bits_per_sample: u8,
        channels: u8,
        samples: Vec<i16>,
    ) -> Result<Self> {
        if bits_per_sample != 8 && bits_per_sample != 16 {
            return Err(WaveError::UnsupportedBitDepth {
                bits: u16::from(bits_per_sample),
            });
        }
        if channels == 0 {
            return Err(WaveError::InvalidChannelCount { channels: 0 });
        }
        if samples.len() % usize::from(channels) != 0 {
            return Err(WaveError::ChannelMismatch {
                samples: samples.len(),
                channels: usize::from(channels),
            });
        }
        Ok(Self {
            sampling_rate,
            bits_per_sample,
            channels,
            samples,
        })
    }

    /// Assemble a buffer whose invariants the caller already upholds
    pub(crate) fn from_parts(
        sampling_rate: u32,
        bits_per_sample: u8,
        channels: u8,
        samples: Vec<i16>,
    ) -> Self {
        debug_assert!(channels > 0 && samples.len() % usize::from(channels) == 0);
        Self {
            sampling_rate,
            bits_per_sample,
            channels,
            samples,
        }
    }

    /// Get the sample rate
    pub fn sampling_rate(&self) -> u32 {
        self.sampling_rate
    }

    /// Get the declared bit depth (8 or 16)
    pub fn bits_per_sample(&self) -> u8 {
        self.bits_per_sample
    }

    /// Bytes per sample at the declared depth
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_per_sample / 8)
    }

    /// Get the number of channels
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Get a reference to the interleaved samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Consume the buffer, returning its samples
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Get the number of frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / usize::from(self.channels)
    }

    /// Whole-second duration in milliseconds.
    ///
    /// Computed as `frame_count / sampling_rate * 1000` in integer arithmetic,
    /// so anything below one second reports 0.
    pub fn duration_ms(&self) -> usize {
        let rate = self.sampling_rate as usize;
        self.frame_count()
            .checked_div(rate)
            .map_or(0, |secs| secs * 1000)
    }

    /// Samples of one frame (one per channel)
    pub fn frame(&self, index: usize) -> Option<&[i16]> {
        let width = usize::from(self.channels);
        let start = index.checked_mul(width)?;
        self.samples.get(start..start.checked_add(width)?)
    }

    /// Iterate over frames in order
    pub fn frames(&self) -> std::slice::Chunks<'_, i16> {
        self.samples.chunks(usize::from(self.channels))
    }

    /// Get samples for a specific channel (0-indexed)
    pub fn channel_samples(&self, channel: u8) -> Vec<i16> {
        if channel >= self.channels {
            return Vec::new();
        }
        self.samples
            .iter()
            .skip(usize::from(channel))
            .step_by(usize::from(self.channels))
            .copied()
            .collect()
    }

    /// Check if buffers carry the same samples and metadata
    pub fn is_identical_to(&self, other: &AudioBuffer) -> bool {
        self == other
    }
}
