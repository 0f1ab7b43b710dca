//! WAVE decode and encode pipelines
//!
//! The decoder accepts any `Read + Seek` source and tolerates extended fmt
//! chunks and unknown chunks ahead of `data`. The encoder always writes the
//! canonical 44-byte header.

pub mod decoder;
pub mod encoder;

pub use decoder::{decode, decode_bytes, decode_with, DecodeOptions};
pub use encoder::{encode, encode_body, encode_to};
