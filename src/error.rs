use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure ends the current conversion run; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The µ-law source could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The WAV destination could not be created
    #[error("failed to create {}: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Header or payload emission stopped part way
    #[error("failed to write WAV data: {0}")]
    WriteFailure(#[source] io::Error),

    /// The payload does not fit the 32-bit RIFF size fields
    #[error("{samples} samples do not fit in a WAV data chunk")]
    PayloadTooLarge { samples: usize },

    /// A header read back from disk does not describe our output format
    #[error("invalid WAV header: {0}")]
    InvalidHeader(String),
}
