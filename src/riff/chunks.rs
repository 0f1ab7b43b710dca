//! Chunk header definitions
//!
//! Canonical PCM WAVE layout (all integers little-endian):
//!
//! | Offset | Size | Field                      |
//! |-------:|-----:|----------------------------|
//! |      0 |    4 | `"RIFF"`                   |
//! |      4 |    4 | file size minus 8          |
//! |      8 |    4 | `"WAVE"`                   |
//! |     12 |    4 | `"fmt "`                   |
//! |     16 |    4 | fmt body size (16)         |
//! |     20 |    2 | format tag (1 = PCM)       |
//! |     22 |    2 | channels                   |
//! |     24 |    4 | sample rate                |
//! |     28 |    4 | byte rate                  |
//! |     32 |    2 | block align                |
//! |     34 |    2 | bits per sample            |
//! |     36 |    4 | `"data"`                   |
//! |     40 |    4 | data size                  |
//! |     44 |  ... | samples                    |

use std::io::{self, Read, Write};

use byteorder::ByteOrder;
use log::warn;

use super::bytes::{read_fourcc, FourCc, LittleEndian, ReadBytesExt};

pub const RIFF_TAG: FourCc = *b"RIFF";
pub const WAVE_TAG: FourCc = *b"WAVE";
pub const FMT_TAG: FourCc = *b"fmt ";
pub const DATA_TAG: FourCc = *b"data";

/// Format tag for uncompressed linear PCM
pub const PCM_FORMAT_TAG: u16 = 1;

/// Body size of a fmt chunk without extension
pub const CANONICAL_FMT_SIZE: u32 = 16;

/// Length of the RIFF + fmt + data headers of a canonical file
pub const CANONICAL_HEADER_LEN: usize = 44;

/// Bytes counted by the RIFF size field that precede the sample body:
/// `"WAVE"` plus the fmt chunk plus the data chunk header.
pub const RIFF_SIZE_OVERHEAD: u32 = 36;

/// Leading `RIFF` container header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffHeader {
    pub tag: FourCc,
    pub file_size: u32,
    pub form: FourCc,
}

impl RiffHeader {
    /// Header for a canonical file carrying `data_size` bytes of samples
    pub fn for_data_size(data_size: u32) -> Self {
        RiffHeader {
            tag: RIFF_TAG,
            file_size: data_size.saturating_add(RIFF_SIZE_OVERHEAD),
            form: WAVE_TAG,
        }
    }

    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(RiffHeader {
            tag: read_fourcc(reader)?,
            file_size: reader.read_u32::<LittleEndian>()?,
            form: read_fourcc(reader)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        out[0..4].copy_from_slice(&self.tag);
        LittleEndian::write_u32(&mut out[4..8], self.file_size);
        out[8..12].copy_from_slice(&self.form);
        out
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }
}

/// The `fmt ` chunk: tag, size and the 16 canonical body bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChunk {
    pub tag: FourCc,
    pub chunk_size: u32,
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FormatChunk {
    /// Canonical PCM fmt chunk with derived byte rate and block align
    ///
    /// A byte rate beyond `u32` saturates at `u32::MAX`.
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        let block_align = (bits_per_sample / 8) * channels;
        let byte_rate = sample_rate
            .checked_mul(u32::from(block_align))
            .unwrap_or_else(|| {
                warn!(
                    "byte rate for {} Hz x {} bytes exceeds u32; field saturated",
                    sample_rate, block_align
                );
                u32::MAX
            });
        FormatChunk {
            tag: FMT_TAG,
            chunk_size: CANONICAL_FMT_SIZE,
            format_tag: PCM_FORMAT_TAG,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
        }
    }

    /// Bytes of extension following the canonical body, if any
    pub fn extension_len(&self) -> u32 {
        self.chunk_size.saturating_sub(CANONICAL_FMT_SIZE)
    }

    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(FormatChunk {
            tag: read_fourcc(reader)?,
            chunk_size: reader.read_u32::<LittleEndian>()?,
            format_tag: reader.read_u16::<LittleEndian>()?,
            channels: reader.read_u16::<LittleEndian>()?,
            sample_rate: reader.read_u32::<LittleEndian>()?,
            byte_rate: reader.read_u32::<LittleEndian>()?,
            block_align: reader.read_u16::<LittleEndian>()?,
            bits_per_sample: reader.read_u16::<LittleEndian>()?,
        })
    }

    pub fn to_bytes(&self) -> [u8; 24] {
        let mut out = [0u8; 24];
        out[0..4].copy_from_slice(&self.tag);
        LittleEndian::write_u32(&mut out[4..8], self.chunk_size);
        LittleEndian::write_u16(&mut out[8..10], self.format_tag);
        LittleEndian::write_u16(&mut out[10..12], self.channels);
        LittleEndian::write_u32(&mut out[12..16], self.sample_rate);
        LittleEndian::write_u32(&mut out[16..20], self.byte_rate);
        LittleEndian::write_u16(&mut out[20..22], self.block_align);
        LittleEndian::write_u16(&mut out[22..24], self.bits_per_sample);
        out
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }
}

/// Generic chunk preamble: identifier and body size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: FourCc,
    pub size: u32,
}

impl ChunkHeader {
    pub fn is_data(&self) -> bool {
        self.id == DATA_TAG
    }

    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(ChunkHeader {
            id: read_fourcc(reader)?,
            size: reader.read_u32::<LittleEndian>()?,
        })
    }

    pub fn to_bytes(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[0..4].copy_from_slice(&self.id);
        LittleEndian::write_u32(&mut out[4..8], self.size);
        out
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }
}

/// The `data` chunk header; the sample body follows it directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChunk {
    pub size: u32,
}

impl DataChunk {
    pub fn header(&self) -> ChunkHeader {
        ChunkHeader {
            id: DATA_TAG,
            size: self.size,
        }
    }

    pub fn to_bytes(&self) -> [u8; 8] {
        self.header().to_bytes()
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.header().write(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_canonical_header_layout() {
        let mut out = Vec::new();
        RiffHeader::for_data_size(8).write(&mut out).unwrap();
        FormatChunk::pcm(2, 44100, 16).write(&mut out).unwrap();
        DataChunk { size: 8 }.write(&mut out).unwrap();

        assert_eq!(out.len(), CANONICAL_HEADER_LEN);
        assert_eq!(&out[0..4], b"RIFF");
        assert_eq!(&out[4..8], &44u32.to_le_bytes());
        assert_eq!(&out[8..12], b"WAVE");
        assert_eq!(&out[12..16], b"fmt ");
        assert_eq!(&out[16..20], &16u32.to_le_bytes());
        assert_eq!(&out[20..22], &1u16.to_le_bytes());
        assert_eq!(&out[22..24], &2u16.to_le_bytes());
        assert_eq!(&out[24..28], &44100u32.to_le_bytes());
        assert_eq!(&out[28..32], &176_400u32.to_le_bytes());
        assert_eq!(&out[32..34], &4u16.to_le_bytes());
        assert_eq!(&out[34..36], &16u16.to_le_bytes());
        assert_eq!(&out[36..40], b"data");
        assert_eq!(&out[40..44], &8u32.to_le_bytes());
    }

    #[test]
    fn test_format_chunk_reads_back() {
        let fmt = FormatChunk::pcm(1, 8000, 8);
        let mut out = Vec::new();
        fmt.write(&mut out).unwrap();

        let parsed = FormatChunk::read(&mut Cursor::new(out)).unwrap();
        assert_eq!(parsed, fmt);
        assert_eq!(parsed.byte_rate, 8000);
        assert_eq!(parsed.block_align, 1);
        assert_eq!(parsed.extension_len(), 0);
    }

    #[test]
    fn test_byte_rate_saturates_on_overflow() {
        let fmt = FormatChunk::pcm(2, 3_000_000_000, 16);
        assert_eq!(fmt.block_align, 4);
        assert_eq!(fmt.byte_rate, u32::MAX);
        assert_eq!(fmt.sample_rate, 3_000_000_000);
    }

    #[test]
    fn test_to_bytes_matches_write() {
        let fmt = FormatChunk::pcm(6, 96000, 16);
        let mut out = Vec::new();
        fmt.write(&mut out).unwrap();
        assert_eq!(out, fmt.to_bytes());
    }

    #[test]
    fn test_extension_len() {
        let mut fmt = FormatChunk::pcm(2, 48000, 16);
        fmt.chunk_size = 18;
        assert_eq!(fmt.extension_len(), 2);
    }

    #[test]
    fn test_chunk_header_is_data() {
        let mut cursor = Cursor::new(b"LIST\x04\x00\x00\x00".to_vec());
        let header = ChunkHeader::read(&mut cursor).unwrap();
        assert_eq!(header.id, *b"LIST");
        assert_eq!(header.size, 4);
        assert!(!header.is_data());
        assert!(DataChunk { size: 0 }.header().is_data());
    }
}
