//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::audio::{load_wav_with, save_wav, AudioBuffer, WaveInfo};
use crate::cli::BitDepth;
use crate::codec::DecodeOptions;
use crate::error::Result;

/// Print format details of a file.
pub fn info(input: &Path, json: bool, options: DecodeOptions) -> Result<()> {
    info!("Inspecting: {}", input.display());

    let buffer = load_wav_with(input, options)?;
    let summary = WaveInfo::from_buffer(&buffer);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("File:            {}", input.display());
    println!("Sampling rate:   {} Hz", summary.sampling_rate);
    println!("Channels:        {}", summary.channels);
    println!("Bits per sample: {}", summary.bits_per_sample);
    println!("Frames:          {}", summary.frame_count);
    println!("Duration:        {} ms", summary.duration_ms);
    println!("PCM SHA-256:     {}", summary.pcm_sha256);

    Ok(())
}

/// Write each channel of `input` to `<out_dir>/<stem>_ch<N>.wav`.
///
/// Returns the written paths in channel order.
pub fn split(input: &Path, out_dir: &Path, options: DecodeOptions) -> Result<Vec<PathBuf>> {
    info!("Splitting {} into {}", input.display(), out_dir.display());

    let buffer = load_wav_with(input, options)?;
    fs::create_dir_all(out_dir)?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "channel".to_string());

    let mut written = Vec::with_capacity(usize::from(buffer.channels()));
    for (index, channel) in buffer.split().iter().enumerate() {
        let path = out_dir.join(format!("{}_ch{}.wav", stem, index));
        save_wav(channel, &path)?;
        println!("Wrote: {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Downmix `input` to a single channel.
pub fn mono(input: &Path, output: &Path, options: DecodeOptions) -> Result<()> {
    info!("Downmixing {} -> {}", input.display(), output.display());

    let buffer = load_wav_with(input, options)?;
    save_wav(&buffer.to_monaural(), output)?;

    println!("Wrote: {}", output.display());
    Ok(())
}

/// Cut `length_ms` starting at `start_ms` out of `input`.
pub fn extract(
    input: &Path,
    output: &Path,
    start_ms: usize,
    length_ms: usize,
    options: DecodeOptions,
) -> Result<()> {
    info!(
        "Extracting {} ms at {} ms from {}",
        length_ms,
        start_ms,
        input.display()
    );

    let buffer = load_wav_with(input, options)?;
    let part = buffer.extract(start_ms, length_ms);
    save_wav(&part, output)?;

    println!("Wrote: {} ({} frames)", output.display(), part.frame_count());
    Ok(())
}

/// Re-encode `input` at the target depth.
pub fn convert(input: &Path, output: &Path, bits: BitDepth, options: DecodeOptions) -> Result<()> {
    info!("Converting {} to {}-bit", input.display(), bits.bits());

    let buffer = load_wav_with(input, options)?;
    let converted: AudioBuffer = match bits {
        BitDepth::Eight => buffer.to_8bit(),
        BitDepth::Sixteen => buffer.to_16bit(),
    };
    save_wav(&converted, output)?;

    println!("Wrote: {}", output.display());
    Ok(())
}
