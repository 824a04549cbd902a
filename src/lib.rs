//! Convert 8 kHz µ-law audio into 16 kHz mono 16-bit PCM WAV.
//!
//! The pipeline is a compile-time decode table ([`ulaw`]), sample duplication to double
//! the rate ([`upsample`]) and a fixed 44-byte RIFF/WAVE header ([`wav`]).

pub mod config;
pub mod convert;
pub mod error;
pub mod ulaw;
pub mod upsample;
pub mod wav;

pub use config::Config;
pub use convert::{convert_bytes, convert_file, convert_stream, ConversionStats};
pub use error::{Error, Result};
