use log::warn;
use thiserror::Error;

use super::chunk::{Chunk, DATA_TAG, FMT_TAG, FormatParams, RIFF_TAG, WAVE_TAG, WaveFile};

/// Errors raised while decoding a WAVE container.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// The buffer does not start with a `RIFF`/`WAVE` header.
    #[error("not a RIFF/WAVE container")]
    NotWave,

    /// The `fmt ` chunk is missing or too short to decode.
    #[error("fmt chunk missing or too short to decode")]
    MalformedFormatChunk,

    /// No `data` chunk was found before the chunk stream ended.
    #[error("data chunk missing")]
    MissingDataChunk,
}

/// Outcome of parsing a container: the decoded file plus a flag recording
/// whether the chunk stream ended mid-chunk.
///
/// Truncation is deliberately not an error. Permissive WAVE readers accept
/// files whose last chunk is cut short, and the well-formed prefix is still
/// convertible; the flag keeps the condition observable instead of silently
/// indistinguishable from a clean parse.
#[derive(Debug)]
pub struct ParsedWave {
    /// The decoded file.
    pub file: WaveFile,
    /// True if trailing bytes could not be decoded as a complete chunk.
    pub truncated: bool,
}

/// Classification of a single decoded chunk.
enum ChunkKind {
    Format(FormatParams),
    Audio(Vec<u8>),
    Opaque(Chunk),
}

/// Parses a WAVE container from a byte buffer.
///
/// Decodes the 12-byte RIFF header, then walks the chunk stream: the first
/// `fmt ` chunk becomes [`FormatParams`], the first `data` chunk becomes the
/// audio payload, and every other chunk is preserved verbatim in encounter
/// order. Duplicate `fmt ` or `data` chunks are dropped.
///
/// A chunk header cut short by the end of the buffer, or a declared size
/// that overruns it, stops the walk: everything decoded so far is kept, a
/// warning is logged, and [`ParsedWave::truncated`] is set. Only structural
/// decoding happens here; channel count and bit depth are checked by the
/// downmix guard.
///
/// # Arguments
/// * `bytes` - Complete container contents, e.g. a whole `.wav` file.
///
/// # Returns
/// Returns `Result<ParsedWave, ContainerError>` with the decoded file or an
/// error if the header, `fmt ` chunk, or `data` chunk is unusable.
pub fn parse_wave(bytes: &[u8]) -> Result<ParsedWave, ContainerError> {
    if bytes.len() < 12 || bytes[0..4] != RIFF_TAG || bytes[8..12] != WAVE_TAG {
        return Err(ContainerError::NotWave);
    }

    let mut format: Option<FormatParams> = None;
    let mut audio: Option<Vec<u8>> = None;
    let mut extra_chunks: Vec<Chunk> = Vec::new();
    let mut truncated = false;

    let mut offset = 12usize;
    while offset < bytes.len() {
        if bytes.len() - offset < 8 {
            warn!(
                "chunk stream truncated at byte {offset}: {} trailing byte(s) \
                 do not form a chunk header",
                bytes.len() - offset
            );
            truncated = true;
            break;
        }

        let id = [
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ];
        let size = u32::from_le_bytes([
            bytes[offset + 4],
            bytes[offset + 5],
            bytes[offset + 6],
            bytes[offset + 7],
        ]) as usize;
        let body = offset + 8;

        if size > bytes.len() - body {
            warn!(
                "chunk stream truncated at byte {offset}: chunk {:?} declares \
                 {size} byte(s) but only {} remain",
                id.escape_ascii().to_string(),
                bytes.len() - body
            );
            truncated = true;
            break;
        }

        match classify(id, &bytes[body..body + size])? {
            ChunkKind::Format(params) => {
                format.get_or_insert(params);
            }
            ChunkKind::Audio(pcm) => {
                audio.get_or_insert(pcm);
            }
            ChunkKind::Opaque(chunk) => extra_chunks.push(chunk),
        }

        // A missing pad byte at the very end of the buffer is tolerated.
        offset = body + size + (size & 1);
    }

    let format = format.ok_or(ContainerError::MalformedFormatChunk)?;
    let audio = audio.ok_or(ContainerError::MissingDataChunk)?;

    Ok(ParsedWave {
        file: WaveFile {
            format,
            audio,
            extra_chunks,
        },
        truncated,
    })
}

fn classify(id: [u8; 4], data: &[u8]) -> Result<ChunkKind, ContainerError> {
    match id {
        FMT_TAG => Ok(ChunkKind::Format(decode_format(data)?)),
        DATA_TAG => Ok(ChunkKind::Audio(data.to_vec())),
        _ => Ok(ChunkKind::Opaque(Chunk::new(id, data.to_vec()))),
    }
}

fn decode_format(data: &[u8]) -> Result<FormatParams, ContainerError> {
    if data.len() < 16 {
        return Err(ContainerError::MalformedFormatChunk);
    }
    let u16_at = |i: usize| u16::from_le_bytes([data[i], data[i + 1]]);
    let u32_at = |i: usize| u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);

    Ok(FormatParams {
        audio_format: u16_at(0),
        channels: u16_at(2),
        sample_rate: u32_at(4),
        byte_rate: u32_at(8),
        block_align: u16_at(12),
        bits_per_sample: u16_at(14),
    })
}
