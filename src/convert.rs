use thiserror::Error;

use crate::container::{ContainerError, FormatParams, ParsedWave, WaveFile, parse_wave, write_wave};
use crate::downmix::{DownmixError, check_format, to_mono};

/// Errors raised by [`convert_to_mono`].
///
/// A "not stereo" outcome is carried as an error variant but means "leave
/// the file untouched"; use [`ConvertError::is_skip`] to tell it apart from
/// real failures when aggregating results over many files.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// The container could not be decoded.
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// The audio format is outside what the downmixer handles.
    #[error(transparent)]
    Downmix(#[from] DownmixError),
}

impl ConvertError {
    /// True when the input should simply be skipped (it is not stereo),
    /// false for genuine per-file failures.
    pub fn is_skip(&self) -> bool {
        matches!(self, ConvertError::Downmix(e) if e.is_skip())
    }
}

/// A successfully converted file.
#[derive(Debug)]
pub struct Converted {
    /// The complete mono WAVE container.
    pub bytes: Vec<u8>,
    /// True if the source's chunk stream was truncated; the output was built
    /// from the well-formed prefix.
    pub truncated: bool,
}

/// Converts a stereo WAVE file to mono, preserving every non-audio chunk.
///
/// Parses the container, checks that the format is two-channel PCM at a
/// supported bit depth, averages each frame's left and right samples, and
/// re-serializes the file with `channels = 1`, recomputed `block_align`,
/// `byte_rate`, and size fields, and all auxiliary chunks (loop points,
/// markers, vendor chunks) byte-for-byte in their original order.
///
/// Each call is a pure in-memory transformation with no shared state, so
/// callers may fan out over many files concurrently without coordination.
///
/// # Arguments
/// * `input` - Complete contents of a `.wav` file.
///
/// # Returns
/// Returns `Result<Converted, ConvertError>` with the mono container bytes,
/// or an error identifying why this file could not be converted.
///
/// # Examples
/// ```no_run
/// let input = std::fs::read("loop.wav").unwrap();
/// match monowav::convert_to_mono(&input) {
///     Ok(converted) => std::fs::write("loop-mono.wav", converted.bytes).unwrap(),
///     Err(e) if e.is_skip() => println!("not stereo, skipping"),
///     Err(e) => eprintln!("failed: {e}"),
/// }
/// ```
pub fn convert_to_mono(input: &[u8]) -> Result<Converted, ConvertError> {
    let ParsedWave { file, truncated } = parse_wave(input)?;
    check_format(&file.format)?;

    let audio = to_mono(&file.audio, file.format.bits_per_sample)?;
    let mono = WaveFile {
        format: FormatParams::pcm(1, file.format.sample_rate, file.format.bits_per_sample),
        audio,
        extra_chunks: file.extra_chunks,
    };

    Ok(Converted {
        bytes: write_wave(&mono),
        truncated,
    })
}
