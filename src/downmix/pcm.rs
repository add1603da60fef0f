//! Per-width PCM sample mixing.
//!
//! Widths of 16, 24, and 32 bits are signed little-endian; 8-bit WAVE PCM is
//! unsigned with a 128 bias and is handled by its own path rather than the
//! signed formula. All means round half away from zero (ties round up in the
//! unsigned 8-bit domain) and are clamped to the representable range of the
//! width before re-encoding.

/// Rounds `sum / 2` half away from zero.
fn half_i32(sum: i32) -> i32 {
    if sum >= 0 { (sum + 1) / 2 } else { (sum - 1) / 2 }
}

/// Rounds `sum / 2` half away from zero, for the 32-bit path.
fn half_i64(sum: i64) -> i64 {
    if sum >= 0 { (sum + 1) / 2 } else { (sum - 1) / 2 }
}

/// Averages two unsigned 8-bit samples in the biased unsigned domain.
pub(crate) fn mix_u8(left: u8, right: u8) -> u8 {
    let sum = left as u16 + right as u16;
    // Max is (255 + 255 + 1) / 2 = 255, so no clamp is needed here.
    ((sum + 1) / 2) as u8
}

/// Averages two signed 16-bit samples.
pub(crate) fn mix_i16(left: i16, right: i16) -> i16 {
    let mean = half_i32(left as i32 + right as i32);
    mean.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

const I24_MIN: i32 = -(1 << 23);
const I24_MAX: i32 = (1 << 23) - 1;

/// Decodes a signed 24-bit little-endian sample.
pub(crate) fn decode_i24(bytes: [u8; 3]) -> i32 {
    // Shift through the top byte so the arithmetic shift sign-extends.
    i32::from_le_bytes([0, bytes[0], bytes[1], bytes[2]]) >> 8
}

/// Encodes the low 24 bits of a sample as little-endian bytes.
pub(crate) fn encode_i24(sample: i32) -> [u8; 3] {
    let le = sample.to_le_bytes();
    [le[0], le[1], le[2]]
}

/// Averages two signed 24-bit samples.
pub(crate) fn mix_i24(left: i32, right: i32) -> i32 {
    half_i32(left + right).clamp(I24_MIN, I24_MAX)
}

/// Averages two signed 32-bit samples.
pub(crate) fn mix_i32(left: i32, right: i32) -> i32 {
    let mean = half_i64(left as i64 + right as i64);
    mean.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
