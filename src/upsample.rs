//! 8 kHz to 16 kHz by zero-order hold.
//!
//! Each decoded sample is repeated once. There is no interpolation or anti-aliasing
//! filter, so images of the 0-4 kHz band show up above 4 kHz in the output. Swapping in a
//! real resampler would change every output sample.

use std::slice::Chunks;

use crate::ulaw;

pub const SOURCE_RATE: u32 = 8000;
pub const TARGET_RATE: u32 = 16000;
pub const UPSAMPLE_FACTOR: usize = (TARGET_RATE / SOURCE_RATE) as usize;

/// Decode `input` and return it at twice the rate.
pub fn double_rate(input: &[u8]) -> Vec<i16> {
    let mut out = Vec::with_capacity(input.len() * UPSAMPLE_FACTOR);
    double_rate_into(input, &mut out);
    out
}

/// Same as [`double_rate`], appending to `out`.
pub fn double_rate_into(input: &[u8], out: &mut Vec<i16>) {
    out.reserve(input.len() * UPSAMPLE_FACTOR);
    for &byte in input {
        let sample = ulaw::decode(byte);
        out.push(sample);
        out.push(sample);
    }
}

/// Walks the input in fixed windows and hands out the doubled samples of each one.
///
/// Every window is decoded independently and the last one may be short, so the
/// concatenated output is the same as a single [`double_rate`] pass. One sample buffer
/// is reused for all windows.
pub struct ChunkedDoubler<'a> {
    chunks: Chunks<'a, u8>,
    window: Vec<i16>,
}

impl<'a> ChunkedDoubler<'a> {
    /// A `chunk_size` of zero is treated as one.
    pub fn new(input: &'a [u8], chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunks: input.chunks(chunk_size),
            window: Vec::with_capacity(chunk_size.min(input.len()) * UPSAMPLE_FACTOR),
        }
    }

    /// Doubled samples of the next window, valid until the following call.
    pub fn next_window(&mut self) -> Option<&[i16]> {
        let chunk = self.chunks.next()?;
        self.window.clear();
        double_rate_into(chunk, &mut self.window);
        Some(&self.window)
    }

    pub fn remaining_windows(&self) -> usize {
        self.chunks.len()
    }
}
