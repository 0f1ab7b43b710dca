//! Audio file I/O operations
//!
//! Thin file glue around the codec: the file handle lives only for the
//! duration of the call and is closed on every return path.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::audio::AudioBuffer;
use crate::codec::{decode_with, encode_to, DecodeOptions};
use crate::error::Result;

/// Load a WAV file into an AudioBuffer
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<AudioBuffer> {
    load_wav_with(path, DecodeOptions::default())
}

/// Load a WAV file with explicit decoder options
pub fn load_wav_with<P: AsRef<Path>>(path: P, options: DecodeOptions) -> Result<AudioBuffer> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let buffer = decode_with(&mut reader, options)?;
    debug!(
        "loaded {}: {} Hz, {} ch, {}-bit, {} frames",
        path.display(),
        buffer.sampling_rate(),
        buffer.channels(),
        buffer.bits_per_sample(),
        buffer.frame_count()
    );
    Ok(buffer)
}

/// Save an AudioBuffer to a WAV file at its declared bit depth
pub fn save_wav<P: AsRef<Path>>(buffer: &AudioBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    encode_to(buffer, &mut writer)?;
    writer.flush()?;
    debug!("saved {} ({} frames)", path.display(), buffer.frame_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaveError;
    use tempfile::tempdir;

    #[test]
    fn test_wav_round_trip_16bit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let original = AudioBuffer::new(44100, 2, vec![1, -1, 1000, -1000, i16::MAX, i16::MIN]).unwrap();
        save_wav(&original, &path).unwrap();

        let loaded = load_wav(&path).unwrap();
        assert!(original.is_identical_to(&loaded));
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 44 + 12);
    }

    #[test]
    fn test_wav_round_trip_8bit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_8bit.wav");

        let original = AudioBuffer::from_u8(8000, 1, &[0, 64, 128, 192, 255]).unwrap();
        save_wav(&original, &path).unwrap();

        let loaded = load_wav(&path).unwrap();
        assert_eq!(loaded.bits_per_sample(), 8);
        assert_eq!(loaded.samples(), original.samples());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_wav("nonexistent_file.wav");
        assert!(matches!(result, Err(WaveError::Io(_))));
    }

    #[test]
    fn test_load_strict_rejects_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.wav");
        std::fs::write(&path, b"this is not a wave file at all, just some text").unwrap();

        let result = load_wav_with(&path, DecodeOptions::strict());
        assert!(matches!(result, Err(WaveError::BadMagic { .. })));
    }
}
