//! Sample-domain transforms
//!
//! Every transform borrows its input and returns new buffers; nothing is
//! modified in place.

use log::debug;

use crate::audio::convert::{narrow_16_to_8, widen_8_to_16};
use crate::audio::AudioBuffer;
use crate::error::{Result, WaveError};

impl AudioBuffer {
    /// De-interleave into one mono buffer per channel
    ///
    /// Frame `i` of channel `c` becomes sample `i` of `result[c]`.
    pub fn split(&self) -> Vec<AudioBuffer> {
        let channels = usize::from(self.channels());
        let frames = self.frame_count();
        let mut result = vec![Vec::with_capacity(frames); channels];

        for frame in self.frames() {
            for (channel, &sample) in result.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }

        result
            .into_iter()
            .map(|samples| {
                AudioBuffer::from_parts(self.sampling_rate(), self.bits_per_sample(), 1, samples)
            })
            .collect()
    }

    /// Interleave mono buffers into one multi-channel buffer
    ///
    /// The inverse of [`AudioBuffer::split`]. All parts must be mono and agree
    /// on sampling rate, bit depth and frame count.
    pub fn join(parts: &[AudioBuffer]) -> Result<AudioBuffer> {
        let first = parts
            .first()
            .ok_or(WaveError::InvalidChannelCount { channels: 0 })?;
        let channels = u8::try_from(parts.len())
            .map_err(|_| WaveError::InvalidChannelCount { channels: parts.len() })?;

        for (index, part) in parts.iter().enumerate() {
            if part.channels() != 1 {
                return Err(WaveError::IncompatibleBuffers {
                    details: format!("part {} has {} channels, expected 1", index, part.channels()),
                });
            }
            if part.sampling_rate() != first.sampling_rate()
                || part.bits_per_sample() != first.bits_per_sample()
            {
                return Err(WaveError::IncompatibleBuffers {
                    details: format!(
                        "part {} is {} Hz/{}-bit, expected {} Hz/{}-bit",
                        index,
                        part.sampling_rate(),
                        part.bits_per_sample(),
                        first.sampling_rate(),
                        first.bits_per_sample()
                    ),
                });
            }
            if part.frame_count() != first.frame_count() {
                return Err(WaveError::IncompatibleBuffers {
                    details: format!(
                        "part {} has {} frames, expected {}",
                        index,
                        part.frame_count(),
                        first.frame_count()
                    ),
                });
            }
        }

        let frames = first.frame_count();
        let mut samples = Vec::with_capacity(frames * parts.len());
        for i in 0..frames {
            samples.extend(parts.iter().map(|part| part.samples()[i]));
        }

        Ok(AudioBuffer::from_parts(
            first.sampling_rate(),
            first.bits_per_sample(),
            channels,
            samples,
        ))
    }

    /// Downmix to a single channel by averaging each frame
    ///
    /// The mean is taken over an `i32` sum and truncated toward zero, so it
    /// always fits back into `i16` without saturation.
    pub fn to_monaural(&self) -> AudioBuffer {
        let width = i32::from(self.channels());
        let samples = self
            .frames()
            .map(|frame| {
                let sum: i32 = frame.iter().map(|&s| i32::from(s)).sum();
                (sum / width) as i16
            })
            .collect();

        AudioBuffer::from_parts(self.sampling_rate(), self.bits_per_sample(), 1, samples)
    }

    /// Slice out `length_ms` starting at `start_ms`
    ///
    /// Millisecond offsets become frames via `ms * rate / 1000`. A range that
    /// runs past the end is clamped; a start past the end yields an empty
    /// buffer. This never fails.
    pub fn extract(&self, start_ms: usize, length_ms: usize) -> AudioBuffer {
        let frame_count = self.frame_count();
        let requested_start = self.ms_to_frames(start_ms);
        let requested_length = self.ms_to_frames(length_ms);
        let start = requested_start.min(frame_count);
        let length = requested_length.min(frame_count - start);

        if length < requested_length {
            debug!(
                "extract clamped to frames {}..{} of {}",
                start,
                start + length,
                frame_count
            );
        }

        let width = usize::from(self.channels());
        let samples = self.samples()[start * width..(start + length) * width].to_vec();

        AudioBuffer::from_parts(
            self.sampling_rate(),
            self.bits_per_sample(),
            self.channels(),
            samples,
        )
    }

    /// Re-declare as 8-bit, quantizing samples to what an 8-bit file holds
    pub fn to_8bit(&self) -> AudioBuffer {
        let samples = self
            .samples()
            .iter()
            .map(|&s| widen_8_to_16(narrow_16_to_8(s)))
            .collect();

        AudioBuffer::from_parts(self.sampling_rate(), 8, self.channels(), samples)
    }

    /// Re-declare as 16-bit; samples are already stored at that width
    pub fn to_16bit(&self) -> AudioBuffer {
        AudioBuffer::from_parts(
            self.sampling_rate(),
            16,
            self.channels(),
            self.samples().to_vec(),
        )
    }

    fn ms_to_frames(&self, ms: usize) -> usize {
        let frames = ms as u128 * u128::from(self.sampling_rate()) / 1000;
        usize::try_from(frames).unwrap_or(usize::MAX)
    }
}
