use std::path::PathBuf;

/// Source bytes read per window: 20 ms of 8 kHz µ-law.
pub const DEFAULT_CHUNK_SIZE: usize = 160;

pub const DEFAULT_INPUT_PATH: &str = "input.ulaw";
pub const DEFAULT_OUTPUT_PATH: &str = "output.wav";

/// Fixed settings for a conversion run. The binary always uses `Config::default()`;
/// tests point the paths at scratch files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub chunk_size: usize,
}

impl Config {
    pub fn with_paths(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
