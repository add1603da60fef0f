use thiserror::Error;

use super::pcm::{decode_i24, encode_i24, mix_i16, mix_i24, mix_i32, mix_u8};
use crate::container::FormatParams;

/// Errors raised by the format guard and the downmixer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DownmixError {
    /// The file is not two-channel; callers should treat this as "skip the
    /// file", not as a failure.
    #[error("expected 2 channels, found {0}; skipping")]
    NotStereo(u16),

    /// Bits per sample outside the supported set {8, 16, 24, 32}.
    #[error("unsupported bit depth: {0} bits per sample")]
    UnsupportedBitDepth(u16),

    /// The fmt chunk declares a compressed or otherwise non-PCM codec.
    #[error("unsupported codec: format tag {0:#06x} is not PCM")]
    UnsupportedCodec(u16),
}

impl DownmixError {
    /// True for outcomes that mean "leave this file alone" rather than a
    /// failure, i.e. [`DownmixError::NotStereo`].
    pub fn is_skip(&self) -> bool {
        matches!(self, DownmixError::NotStereo(_))
    }
}

/// Checks that a format descriptor is convertible before any samples are
/// touched: uncompressed PCM, exactly two channels, and a supported bit
/// depth.
///
/// # Arguments
/// * `format` - Decoded fmt chunk fields.
///
/// # Returns
/// Returns `Ok(())` when [`to_mono`] can handle the audio payload, or the
/// matching [`DownmixError`] otherwise.
pub fn check_format(format: &FormatParams) -> Result<(), DownmixError> {
    if format.audio_format != 1 {
        return Err(DownmixError::UnsupportedCodec(format.audio_format));
    }
    if format.channels != 2 {
        return Err(DownmixError::NotStereo(format.channels));
    }
    match format.bits_per_sample {
        8 | 16 | 24 | 32 => Ok(()),
        bits => Err(DownmixError::UnsupportedBitDepth(bits)),
    }
}

/// Downmixes an interleaved stereo PCM buffer to mono at the same bit depth.
///
/// Each output sample is the arithmetic mean of the frame's left and right
/// samples, computed in a wider integer type, rounded half away from zero,
/// and clamped to the representable range of the width. 8-bit input uses
/// WAVE's unsigned-with-128-bias convention and is averaged in the unsigned
/// domain, where ties round up. The output holds exactly one sample per
/// input frame; a trailing partial frame is ignored.
///
/// # Arguments
/// * `pcm` - Interleaved little-endian stereo samples.
/// * `bits_per_sample` - Sample width; one of 8, 16, 24, or 32.
///
/// # Returns
/// Returns `Result<Vec<u8>, DownmixError>` with the mono buffer, or
/// [`DownmixError::UnsupportedBitDepth`] for any other width.
pub fn to_mono(pcm: &[u8], bits_per_sample: u16) -> Result<Vec<u8>, DownmixError> {
    let mut mono = Vec::with_capacity(pcm.len() / 2);
    match bits_per_sample {
        8 => {
            for frame in pcm.chunks_exact(2) {
                mono.push(mix_u8(frame[0], frame[1]));
            }
        }
        16 => {
            for frame in pcm.chunks_exact(4) {
                let left = i16::from_le_bytes([frame[0], frame[1]]);
                let right = i16::from_le_bytes([frame[2], frame[3]]);
                mono.extend_from_slice(&mix_i16(left, right).to_le_bytes());
            }
        }
        24 => {
            for frame in pcm.chunks_exact(6) {
                let left = decode_i24([frame[0], frame[1], frame[2]]);
                let right = decode_i24([frame[3], frame[4], frame[5]]);
                mono.extend_from_slice(&encode_i24(mix_i24(left, right)));
            }
        }
        32 => {
            for frame in pcm.chunks_exact(8) {
                let left = i32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]);
                let right = i32::from_le_bytes([frame[4], frame[5], frame[6], frame[7]]);
                mono.extend_from_slice(&mix_i32(left, right).to_le_bytes());
            }
        }
        bits => return Err(DownmixError::UnsupportedBitDepth(bits)),
    }
    Ok(mono)
}
