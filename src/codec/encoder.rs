//! WAVE encoder
//!
//! Writes the canonical 44-byte PCM header followed by the sample body,
//! narrowing to 8-bit when the buffer declares that depth. No other chunks
//! are ever emitted.

use std::io::{self, Write};

use byteorder::{ByteOrder, LittleEndian};
use log::warn;

use crate::audio::{narrow_16_to_8, AudioBuffer};
use crate::riff::{DataChunk, FormatChunk, RiffHeader, CANONICAL_HEADER_LEN};

/// Encode a buffer into a complete WAVE file
pub fn encode(buffer: &AudioBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(CANONICAL_HEADER_LEN + body_len(buffer));
    out.extend_from_slice(&header(buffer));
    out.extend_from_slice(&encode_body(buffer));
    out
}

/// Encode a buffer into any byte sink
///
/// Sink failures are returned as-is.
pub fn encode_to<W: Write>(buffer: &AudioBuffer, writer: &mut W) -> io::Result<()> {
    writer.write_all(&header(buffer))?;
    writer.write_all(&encode_body(buffer))
}

/// Raw sample bytes at the buffer's declared depth, without any header
pub fn encode_body(buffer: &AudioBuffer) -> Vec<u8> {
    let samples = buffer.samples();
    match buffer.bits_per_sample() {
        8 => samples.iter().map(|&s| narrow_16_to_8(s)).collect(),
        _ => {
            let mut body = vec![0u8; samples.len() * 2];
            LittleEndian::write_i16_into(samples, &mut body);
            body
        }
    }
}

/// The canonical RIFF + fmt + data headers for `buffer`
fn header(buffer: &AudioBuffer) -> [u8; CANONICAL_HEADER_LEN] {
    let data_size = data_size(buffer);
    let fmt = FormatChunk::pcm(
        u16::from(buffer.channels()),
        buffer.sampling_rate(),
        u16::from(buffer.bits_per_sample()),
    );

    let mut out = [0u8; CANONICAL_HEADER_LEN];
    out[0..12].copy_from_slice(&RiffHeader::for_data_size(data_size).to_bytes());
    out[12..36].copy_from_slice(&fmt.to_bytes());
    out[36..44].copy_from_slice(&DataChunk { size: data_size }.to_bytes());
    out
}

fn body_len(buffer: &AudioBuffer) -> usize {
    buffer.frame_count() * buffer.bytes_per_sample() * usize::from(buffer.channels())
}

/// Size field of the data chunk; saturates for bodies past the RIFF limit
fn data_size(buffer: &AudioBuffer) -> u32 {
    let len = body_len(buffer);
    u32::try_from(len).unwrap_or_else(|_| {
        warn!(
            "sample body of {} bytes exceeds the 4 GiB RIFF limit; size field saturated",
            len
        );
        u32::MAX
    })
}
