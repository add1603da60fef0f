//! WAV fixture builders shared by the integration tests.
#![allow(dead_code)] // not every test binary uses every builder

/// Builds the 16-byte body of a PCM `fmt ` chunk.
pub fn fmt_body(audio_format: u16, channels: u16, sample_rate: u32, bits: u16) -> Vec<u8> {
    let block_align = channels * (bits / 8);
    let mut body = Vec::with_capacity(16);
    body.extend_from_slice(&audio_format.to_le_bytes());
    body.extend_from_slice(&channels.to_le_bytes());
    body.extend_from_slice(&sample_rate.to_le_bytes());
    body.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    body.extend_from_slice(&block_align.to_le_bytes());
    body.extend_from_slice(&bits.to_le_bytes());
    body
}

/// Builds a complete RIFF/WAVE container from raw chunks, padding odd
/// payloads and patching the declared size, in the order given.
pub fn build_wav(chunks: &[([u8; 4], &[u8])]) -> Vec<u8> {
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&0u32.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    for (id, body) in chunks {
        wav.extend_from_slice(id);
        wav.extend_from_slice(&(body.len() as u32).to_le_bytes());
        wav.extend_from_slice(body);
        if body.len() % 2 == 1 {
            wav.push(0);
        }
    }
    let riff_size = (wav.len() - 8) as u32;
    wav[4..8].copy_from_slice(&riff_size.to_le_bytes());
    wav
}

/// Interleaves 16-bit stereo frames into little-endian PCM bytes.
pub fn pcm16(frames: &[(i16, i16)]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(frames.len() * 4);
    for (l, r) in frames {
        pcm.extend_from_slice(&l.to_le_bytes());
        pcm.extend_from_slice(&r.to_le_bytes());
    }
    pcm
}

/// Builds a plain stereo 16-bit 44.1 kHz file with the given frames and any
/// extra chunks appended after the data chunk.
pub fn stereo_wav_16(frames: &[(i16, i16)], extra: &[([u8; 4], &[u8])]) -> Vec<u8> {
    let fmt = fmt_body(1, 2, 44100, 16);
    let data = pcm16(frames);
    let mut chunks: Vec<([u8; 4], &[u8])> = vec![(*b"fmt ", &fmt), (*b"data", &data)];
    chunks.extend_from_slice(extra);
    build_wav(&chunks)
}
