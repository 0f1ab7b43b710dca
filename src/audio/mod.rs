//! Audio buffer, sample conversion and file I/O
//!
//! This module provides the in-memory sample buffer, the 8/16-bit width
//! conversions and the transforms built on top of it.

mod buffer;
pub mod convert;
mod info;
mod io;
mod transform;

pub use buffer::AudioBuffer;
pub use convert::{narrow_16_to_8, normalize_float_to_i16, widen_8_to_16};
pub use info::WaveInfo;
pub use io::{load_wav, load_wav_with, save_wav};
