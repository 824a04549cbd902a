use std::io::Write;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec};
use tracing::debug;

use crate::error::{Error, Result};
use crate::upsample::TARGET_RATE;

pub const HEADER_LEN: usize = 44;

const FMT_CHUNK_LEN: u32 = 16;
const FORMAT_PCM: u16 = 1;
const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BLOCK_ALIGN: u16 = CHANNELS * BITS_PER_SAMPLE / 8;
const BYTE_RATE: u32 = TARGET_RATE * BLOCK_ALIGN as u32;
const WRITE_BLOCK_SAMPLES: usize = 512;
// bytes after the RIFF size field that precede the payload
const RIFF_OVERHEAD: u32 = (HEADER_LEN - 8) as u32;

/// Canonical 44-byte RIFF/WAVE header for mono 16-bit 16 kHz PCM. Only the payload
/// size varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    data_size: u32,
}

impl WavHeader {
    /// Callers starting from a sample count should use [`WavHeader::for_samples`],
    /// which also checks that the RIFF size field fits.
    pub fn new(data_size: u32) -> Self {
        Self { data_size }
    }

    pub fn for_samples(count: usize) -> Result<Self> {
        let too_large = || Error::PayloadTooLarge { samples: count };
        let data_size = count
            .checked_mul(usize::from(BLOCK_ALIGN))
            .and_then(|bytes| u32::try_from(bytes).ok())
            .ok_or_else(too_large)?;
        data_size.checked_add(RIFF_OVERHEAD).ok_or_else(too_large)?;
        Ok(Self { data_size })
    }

    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Value of the RIFF chunk size field at offset 4.
    pub fn riff_size(&self) -> u32 {
        RIFF_OVERHEAD.wrapping_add(self.data_size)
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];

        header[0..4].copy_from_slice(b"RIFF");
        header[4..8].copy_from_slice(&self.riff_size().to_le_bytes());
        header[8..12].copy_from_slice(b"WAVE");

        header[12..16].copy_from_slice(b"fmt ");
        header[16..20].copy_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
        header[20..22].copy_from_slice(&FORMAT_PCM.to_le_bytes());
        header[22..24].copy_from_slice(&CHANNELS.to_le_bytes());
        header[24..28].copy_from_slice(&TARGET_RATE.to_le_bytes());
        header[28..32].copy_from_slice(&BYTE_RATE.to_le_bytes());
        header[32..34].copy_from_slice(&BLOCK_ALIGN.to_le_bytes());
        header[34..36].copy_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

        header[36..40].copy_from_slice(b"data");
        header[40..44].copy_from_slice(&self.data_size.to_le_bytes());

        header
    }

    /// Read a header back and check that every fixed field matches what
    /// [`WavHeader::to_bytes`] emits.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::InvalidHeader(format!(
                "need {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let u32_at =
            |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);

        for (at, tag) in [(0, b"RIFF"), (8, b"WAVE"), (12, b"fmt "), (36, b"data")] {
            if &bytes[at..at + 4] != tag {
                return Err(Error::InvalidHeader(format!(
                    "expected {:?} at offset {}",
                    String::from_utf8_lossy(tag),
                    at
                )));
            }
        }

        let fields = [
            ("fmt chunk size", u32_at(16), FMT_CHUNK_LEN),
            ("format code", u32::from(u16_at(20)), u32::from(FORMAT_PCM)),
            ("channels", u32::from(u16_at(22)), u32::from(CHANNELS)),
            ("sample rate", u32_at(24), TARGET_RATE),
            ("byte rate", u32_at(28), BYTE_RATE),
            ("block align", u32::from(u16_at(32)), u32::from(BLOCK_ALIGN)),
            ("bits per sample", u32::from(u16_at(34)), u32::from(BITS_PER_SAMPLE)),
        ];
        for (name, found, expected) in fields {
            if found != expected {
                return Err(Error::InvalidHeader(format!(
                    "{} is {}, expected {}",
                    name, found, expected
                )));
            }
        }

        let header = Self::new(u32_at(40));
        if u32_at(4) != header.riff_size() {
            return Err(Error::InvalidHeader(format!(
                "RIFF size {} does not match data size {}",
                u32_at(4),
                header.data_size
            )));
        }
        Ok(header)
    }
}

/// The output format as `hound` describes it.
pub fn output_spec() -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate: TARGET_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

pub fn write_header<W: Write>(writer: &mut W, data_size: u32) -> Result<()> {
    writer
        .write_all(&WavHeader::new(data_size).to_bytes())
        .map_err(Error::WriteFailure)
}

/// Append samples as little-endian 16-bit words, encoded through a fixed stack block.
pub fn write_samples<W: Write>(writer: &mut W, samples: &[i16]) -> Result<()> {
    let mut block = [0u8; WRITE_BLOCK_SAMPLES * 2];
    for group in samples.chunks(WRITE_BLOCK_SAMPLES) {
        for (bytes, sample) in block.chunks_exact_mut(2).zip(group) {
            bytes.copy_from_slice(&sample.to_le_bytes());
        }
        writer
            .write_all(&block[..group.len() * 2])
            .map_err(Error::WriteFailure)?;
    }
    Ok(())
}

/// Header sized for `samples`, then the samples themselves.
pub fn write_wav<W: Write>(writer: &mut W, samples: &[i16]) -> Result<()> {
    let header = WavHeader::for_samples(samples.len())?;
    debug!("Writing WAV header for {} data bytes", header.data_size());
    write_header(writer, header.data_size())?;
    write_samples(writer, samples)?;
    writer.flush().map_err(Error::WriteFailure)
}

/// Load a WAV file with `hound`, for checking converter output.
pub fn read_wav_file(file_path: &Path) -> Result<(Vec<i16>, WavSpec)> {
    debug!("Reading WAV file from {}", file_path.display());
    let read_error = |e: hound::Error| match e {
        hound::Error::IoError(source) => Error::InputUnavailable {
            path: file_path.to_path_buf(),
            source,
        },
        other => Error::InvalidHeader(other.to_string()),
    };
    let mut reader = WavReader::open(file_path).map_err(read_error)?;
    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()
        .map_err(read_error)?;
    let spec = reader.spec();

    debug!("Read {} samples", samples.len());
    Ok((samples, spec))
}
