use std::fs;

use tempfile::TempDir;
use ulaw2wav::wav::{self, WavHeader};
use ulaw2wav::{convert_file, ulaw, Config, Error};

fn scratch(input: &[u8]) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.ulaw");
    fs::write(&input_path, input).unwrap();
    let config = Config::with_paths(input_path, dir.path().join("output.wav"));
    (dir, config)
}

#[test]
fn test_convert_two_bytes() {
    let (_dir, config) = scratch(&[0xFF, 0x7F]);

    let stats = convert_file(&config).unwrap();
    assert_eq!(stats.input_samples, 2);
    assert_eq!(stats.output_samples, 4);
    assert_eq!(stats.data_bytes, 8);

    let bytes = fs::read(&config.output_path).unwrap();
    assert_eq!(bytes.len(), 52);
    assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 44);
    assert_eq!(u32::from_le_bytes(bytes[40..44].try_into().unwrap()), 8);

    let (samples, spec) = wav::read_wav_file(&config.output_path).unwrap();
    let (d0, d1) = (ulaw::decode(0xFF), ulaw::decode(0x7F));
    assert_eq!(samples, vec![d0, d0, d1, d1]);
    assert_eq!(spec, wav::output_spec());
}

#[test]
fn test_convert_empty_file() {
    let (_dir, config) = scratch(&[]);
    convert_file(&config).unwrap();

    let bytes = fs::read(&config.output_path).unwrap();
    assert_eq!(bytes.len(), 44);
    let header = WavHeader::parse(&bytes).unwrap();
    assert_eq!(header.data_size(), 0);
    assert_eq!(header.riff_size(), 36);
}

#[test]
fn test_hound_reads_every_code() {
    // two seconds of audio crossing many 160-byte windows
    let input: Vec<u8> = (0..16_000).map(|i| (i % 256) as u8).collect();
    let (_dir, config) = scratch(&input);
    convert_file(&config).unwrap();

    let (samples, spec) = wav::read_wav_file(&config.output_path).unwrap();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 16000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(samples.len(), 2 * input.len());
    for (k, &byte) in input.iter().enumerate() {
        assert_eq!(samples[2 * k], ulaw::decode(byte));
        assert_eq!(samples[2 * k + 1], ulaw::decode(byte));
    }

    let bytes = fs::read(&config.output_path).unwrap();
    assert_eq!(bytes, ulaw2wav::convert_bytes(&input).unwrap());
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_paths(dir.path().join("absent.ulaw"), dir.path().join("out.wav"));

    let err = convert_file(&config).unwrap_err();
    assert!(matches!(err, Error::InputUnavailable { .. }));
    assert!(!config.output_path.exists());
}

#[test]
fn test_unwritable_output() {
    let (dir, mut config) = scratch(&[0xFF]);
    config.output_path = dir.path().join("no_such_dir").join("output.wav");

    let err = convert_file(&config).unwrap_err();
    assert!(matches!(err, Error::OutputUnavailable { .. }));
}

#[cfg(target_os = "linux")]
#[test]
fn test_partial_output_removed_after_write_failure() {
    // enough payload to spill past the BufWriter before the final flush
    let input = vec![0x2Au8; 100_000];
    let (_dir, config) = scratch(&input);
    std::os::unix::fs::symlink("/dev/full", &config.output_path).unwrap();

    let err = convert_file(&config).unwrap_err();
    assert!(matches!(err, Error::WriteFailure(_)));
    assert!(fs::symlink_metadata(&config.output_path).is_err());
    assert!(std::path::Path::new("/dev/full").exists());
}
