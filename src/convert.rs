use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::upsample::{self, ChunkedDoubler, UPSAMPLE_FACTOR};
use crate::wav::{self, WavHeader, HEADER_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    pub input_samples: usize,
    pub output_samples: usize,
    pub data_bytes: u32,
    pub elapsed: Duration,
}

/// Whole conversion in memory: header followed by the doubled PCM payload.
pub fn convert_bytes(input: &[u8]) -> Result<Vec<u8>> {
    let samples = upsample::double_rate(input);
    let mut out = Vec::with_capacity(HEADER_LEN + samples.len() * 2);
    wav::write_wav(&mut out, &samples)?;
    Ok(out)
}

/// Write the header, then decode and write `input` one window at a time so only a
/// window's worth of samples is held at once.
pub fn convert_stream<W: Write>(
    input: &[u8],
    writer: &mut W,
    chunk_size: usize,
) -> Result<ConversionStats> {
    let start = Instant::now();
    let output_samples = input.len().saturating_mul(UPSAMPLE_FACTOR);
    let header = WavHeader::for_samples(output_samples)?;

    debug!(
        "Converting {} µ-law bytes into {} PCM samples",
        input.len(),
        output_samples
    );
    wav::write_header(writer, header.data_size())?;
    let mut doubler = ChunkedDoubler::new(input, chunk_size);
    while let Some(window) = doubler.next_window() {
        wav::write_samples(writer, window)?;
    }
    writer.flush().map_err(Error::WriteFailure)?;

    Ok(ConversionStats {
        input_samples: input.len(),
        output_samples,
        data_bytes: header.data_size(),
        elapsed: start.elapsed(),
    })
}

/// Create the output file for `input_len` µ-law bytes. Input whose payload cannot fit a
/// WAV header is rejected before an existing output file gets truncated.
fn create_output(config: &Config, input_len: usize) -> Result<File> {
    WavHeader::for_samples(input_len.saturating_mul(UPSAMPLE_FACTOR))?;

    debug!("Writing WAV file to {}", config.output_path.display());
    File::create(&config.output_path).map_err(|source| Error::OutputUnavailable {
        path: config.output_path.clone(),
        source,
    })
}

/// Convert `config.input_path` into `config.output_path`. Input whose payload cannot
/// fit a WAV header fails before the output is touched. If anything fails after the
/// output file was created, the partial file is removed.
pub fn convert_file(config: &Config) -> Result<ConversionStats> {
    debug!("Reading µ-law data from {}", config.input_path.display());
    let input = fs::read(&config.input_path).map_err(|source| Error::InputUnavailable {
        path: config.input_path.clone(),
        source,
    })?;

    let file = create_output(config, input.len())?;
    let mut writer = BufWriter::new(file);
    let result = convert_stream(&input, &mut writer, config.chunk_size);
    drop(writer);

    match result {
        Ok(stats) => {
            info!(
                "Converted {} samples at {} Hz into {} samples at {} Hz ({} data bytes) in {:.2?}",
                stats.input_samples,
                upsample::SOURCE_RATE,
                stats.output_samples,
                upsample::TARGET_RATE,
                stats.data_bytes,
                stats.elapsed
            );
            Ok(stats)
        }
        Err(err) => {
            if let Err(remove_err) = fs::remove_file(&config.output_path) {
                warn!(
                    "Could not remove partial output {}: {}",
                    config.output_path.display(),
                    remove_err
                );
            }
            Err(err)
        }
    }
}
