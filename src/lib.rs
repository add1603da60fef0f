//! # monowav: chunk-preserving stereo to mono WAV conversion
//!
//! monowav converts two-channel RIFF/WAVE files to mono while keeping every
//! non-audio chunk byte-for-byte intact: smpl loop points, cue markers,
//! LIST metadata, and vendor chunks all survive the conversion in their
//! original order. Only the fmt chunk, the data chunk, and the container's
//! declared size change.
//!
//! ## Key features
//! - Container parsing: decodes any RIFF/WAVE chunk stream, tolerating
//!   truncated files with an explicit, observable diagnostic.
//! - Width-aware downmixing: averages interleaved stereo frames at 8, 16,
//!   24, or 32 bits per sample without overflow, with documented rounding.
//! - Chunk preservation: unknown chunks pass through untouched, so sampler
//!   metadata is never lost.
//! - Per-file outcomes: non-stereo input is a skip, not a failure, so batch
//!   drivers can process whole folders without special-casing.
//!
//! ## Usage
//! ```no_run
//! let input = std::fs::read("kick.wav").unwrap();
//! let converted = monowav::convert_to_mono(&input).unwrap();
//! std::fs::write("kick-mono.wav", converted.bytes).unwrap();
//! ```
//!
//! The crate performs no file or directory I/O itself; callers hand it a
//! byte buffer per file and decide where the result goes.

/// Container module.
///
/// The RIFF/WAVE data model (chunks, format parameters) plus the parser and
/// writer that move between byte buffers and [`container::WaveFile`] values.
pub mod container;

/// Downmix module.
///
/// The format guard and the width-dispatched stereo to mono downmixer.
pub mod downmix;

/// Conversion module.
///
/// The top-level [`convert::convert_to_mono`] operation tying parser, guard,
/// downmixer, and writer together.
pub mod convert;

// Re-export the public API at the crate root for convenient access.
pub use container::{
    Chunk, ContainerError, FormatParams, ParsedWave, WaveFile, parse_wave, write_wave,
};
pub use convert::{ConvertError, Converted, convert_to_mono};
pub use downmix::{DownmixError, check_format, to_mono};
