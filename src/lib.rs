//! pcmwave - PCM WAVE Codec
//!
//! pcmwave decodes RIFF/WAVE byte streams into an in-memory sample buffer and
//! encodes buffers back into canonical WAVE files.
//!
//! # Architecture
//!
//! - `riff`: byte-level helpers and the RIFF/fmt/data chunk headers
//! - `audio`: the immutable [`AudioBuffer`], 8/16-bit conversion, transforms
//!   (split, join, downmix, extract) and file glue
//! - `codec`: the decode and encode pipelines
//! - `cli`: command-line front end used by `pcmwave-cli`
//!
//! Only linear PCM at 8 or 16 bits is supported. Samples are always held as
//! `i16`; 8-bit audio is widened on decode and narrowed again on encode.

pub mod audio;
pub mod cli;
pub mod codec;
pub mod error;
pub mod riff;

pub use audio::{load_wav, save_wav, AudioBuffer, WaveInfo};
pub use codec::{decode, decode_bytes, decode_with, encode, encode_to, DecodeOptions};
pub use error::{Result, WaveError};
