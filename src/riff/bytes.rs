//! Primitive read helpers for RIFF streams
//!
//! Integer fields go through `byteorder` with [`LittleEndian`]; these helpers
//! cover what byteorder does not: four-character codes and forward skips.

use std::io::{self, Read, Seek, SeekFrom};

pub use byteorder::{LittleEndian, ReadBytesExt};

/// Four-character chunk identifier, e.g. `b"RIFF"`
pub type FourCc = [u8; 4];

/// Read a four-character code
pub fn read_fourcc<R: Read>(reader: &mut R) -> io::Result<FourCc> {
    let mut tag = [0u8; 4];
    reader.read_exact(&mut tag)?;
    Ok(tag)
}

/// Advance the cursor by `count` bytes without reading them.
///
/// Seeking past the end is not an error by itself; the next read reports it.
pub fn skip<R: Seek>(reader: &mut R, count: u64) -> io::Result<()> {
    if count == 0 {
        return Ok(());
    }
    let offset = i64::try_from(count)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "skip distance too large"))?;
    reader.seek(SeekFrom::Current(offset))?;
    Ok(())
}

/// Render a tag for logs and error messages, escaping non-printable bytes
pub fn fourcc_display(tag: &FourCc) -> String {
    tag.iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect()
}
