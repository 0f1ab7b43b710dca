//! WAVE decoder
//!
//! Reads a RIFF/WAVE stream into an [`AudioBuffer`]:
//! RIFF header, fmt chunk, chunk scan up to `data`, then the sample body.
//! 8-bit bodies are widened to 16-bit as they are read.

use std::io::{Cursor, Read, Seek};

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};

use crate::audio::{widen_8_to_16, AudioBuffer};
use crate::error::{Result, WaveError};
use crate::riff::bytes::{fourcc_display, skip, FourCc};
use crate::riff::{ChunkHeader, FormatChunk, RiffHeader, FMT_TAG, PCM_FORMAT_TAG, RIFF_TAG, WAVE_TAG};

/// Decoder policy
///
/// The default is lenient: chunk tags and the format tag are read but not
/// checked, so mislabelled files still decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject streams whose RIFF/WAVE/fmt tags or format tag are wrong
    pub strict: bool,
}

impl DecodeOptions {
    /// Options that validate chunk tags and require PCM
    pub fn strict() -> Self {
        DecodeOptions { strict: true }
    }
}

/// Decode a WAVE stream with the default (lenient) options
pub fn decode<R: Read + Seek>(stream: &mut R) -> Result<AudioBuffer> {
    decode_with(stream, DecodeOptions::default())
}

/// Decode a complete WAVE file held in memory
pub fn decode_bytes(bytes: &[u8]) -> Result<AudioBuffer> {
    decode(&mut Cursor::new(bytes))
}

/// Decode a WAVE stream
///
/// # Errors
/// * `Truncated` - the stream ends before the `data` chunk or its samples
/// * `UnsupportedBitDepth` - declared depth is not 8 or 16
/// * `InvalidChannelCount` - declared channel count is 0 or above 255
/// * `BadMagic` / `UnsupportedFormat` - strict mode only
pub fn decode_with<R: Read + Seek>(stream: &mut R, options: DecodeOptions) -> Result<AudioBuffer> {
    let riff = RiffHeader::read(stream).map_err(|e| WaveError::from_read(e, "RIFF header"))?;
    if options.strict {
        expect_tag(&RIFF_TAG, &riff.tag)?;
        expect_tag(&WAVE_TAG, &riff.form)?;
    }

    let fmt = FormatChunk::read(stream).map_err(|e| WaveError::from_read(e, "fmt chunk"))?;
    if options.strict {
        expect_tag(&FMT_TAG, &fmt.tag)?;
        if fmt.format_tag != PCM_FORMAT_TAG {
            return Err(WaveError::UnsupportedFormat {
                format_tag: fmt.format_tag,
            });
        }
    }
    debug!(
        "fmt: tag={} channels={} rate={} byte_rate={} block_align={} bits={}",
        fmt.format_tag,
        fmt.channels,
        fmt.sample_rate,
        fmt.byte_rate,
        fmt.block_align,
        fmt.bits_per_sample
    );

    let bits = match fmt.bits_per_sample {
        8 => 8u8,
        16 => 16u8,
        bits => return Err(WaveError::UnsupportedBitDepth { bits }),
    };
    let channels = u8::try_from(fmt.channels)
        .ok()
        .filter(|&c| c > 0)
        .ok_or(WaveError::InvalidChannelCount {
            channels: usize::from(fmt.channels),
        })?;

    skip(stream, u64::from(fmt.extension_len()))?;

    let data = find_data_chunk(stream)?;
    let data_offset = stream.stream_position()?;
    debug!("data chunk: {} bytes at offset {}", data.size, data_offset);

    let bytes_per_sample = usize::from(bits / 8);
    let frame_count = data.size as usize / bytes_per_sample / usize::from(channels);
    let sample_count = frame_count * usize::from(channels);
    let body_len = sample_count * bytes_per_sample;

    let mut raw = Vec::new();
    stream
        .by_ref()
        .take(body_len as u64)
        .read_to_end(&mut raw)
        .map_err(|e| WaveError::from_read(e, "sample data"))?;
    if raw.len() < body_len {
        return Err(WaveError::Truncated {
            context: "sample data",
        });
    }

    let samples: Vec<i16> = match bits {
        8 => raw.iter().map(|&b| widen_8_to_16(b)).collect(),
        _ => {
            let mut samples = vec![0i16; sample_count];
            LittleEndian::read_i16_into(&raw, &mut samples);
            samples
        }
    };

    Ok(AudioBuffer::from_parts(fmt.sample_rate, bits, channels, samples))
}

/// Skip chunks until the `data` header, leaving the cursor at its body
fn find_data_chunk<R: Read + Seek>(stream: &mut R) -> Result<ChunkHeader> {
    loop {
        let header =
            ChunkHeader::read(stream).map_err(|e| WaveError::from_read(e, "chunk list"))?;
        if header.is_data() {
            return Ok(header);
        }
        trace!(
            "skipping chunk {:?} ({} bytes)",
            fourcc_display(&header.id),
            header.size
        );
        skip(stream, u64::from(header.size))?;
    }
}

fn expect_tag(expected: &FourCc, found: &FourCc) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(WaveError::BadMagic {
            expected: fourcc_display(expected),
            found: fourcc_display(found),
        })
    }
}
