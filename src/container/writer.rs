use super::chunk::{DATA_TAG, FMT_TAG, RIFF_TAG, WAVE_TAG, WaveFile};

/// Serializes a [`WaveFile`] into a complete WAVE container.
///
/// Layout: the 12-byte RIFF header, a 16-byte PCM `fmt ` chunk rebuilt from
/// the file's [`FormatParams`](super::FormatParams), the `data` chunk, then
/// every extra chunk in its original order with its original payload, each
/// padded to an even length. The declared RIFF size is patched in last and
/// always equals the emitted length minus 8, never a value inherited from
/// the source file.
///
/// # Arguments
/// * `file` - The file to serialize; for mono output the caller is expected
///   to have rebuilt `format` with `channels = 1`.
///
/// # Returns
/// The container as a byte vector.
pub fn write_wave(file: &WaveFile) -> Vec<u8> {
    let extra_len: usize = file.extra_chunks.iter().map(|c| c.encoded_len()).sum();
    let mut out = Vec::with_capacity(44 + file.audio.len() + (file.audio.len() & 1) + extra_len);

    out.extend_from_slice(&RIFF_TAG);
    out.extend_from_slice(&0u32.to_le_bytes()); // patched below
    out.extend_from_slice(&WAVE_TAG);

    out.extend_from_slice(&FMT_TAG);
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&file.format.audio_format.to_le_bytes());
    out.extend_from_slice(&file.format.channels.to_le_bytes());
    out.extend_from_slice(&file.format.sample_rate.to_le_bytes());
    out.extend_from_slice(&file.format.byte_rate.to_le_bytes());
    out.extend_from_slice(&file.format.block_align.to_le_bytes());
    out.extend_from_slice(&file.format.bits_per_sample.to_le_bytes());

    out.extend_from_slice(&DATA_TAG);
    out.extend_from_slice(&(file.audio.len() as u32).to_le_bytes());
    out.extend_from_slice(&file.audio);
    if file.audio.len() % 2 == 1 {
        out.push(0);
    }

    for chunk in &file.extra_chunks {
        out.extend_from_slice(&chunk.id);
        out.extend_from_slice(&chunk.size().to_le_bytes());
        out.extend_from_slice(&chunk.data);
        if chunk.data.len() % 2 == 1 {
            out.push(0);
        }
    }

    let riff_size = (out.len() - 8) as u32;
    out[4..8].copy_from_slice(&riff_size.to_le_bytes());
    out
}
