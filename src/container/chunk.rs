/// Chunk identifiers used by the RIFF/WAVE container layout.
pub const RIFF_TAG: [u8; 4] = *b"RIFF";
pub const WAVE_TAG: [u8; 4] = *b"WAVE";
pub const FMT_TAG: [u8; 4] = *b"fmt ";
pub const DATA_TAG: [u8; 4] = *b"data";

/// A raw RIFF chunk: a 4-byte identifier and its payload.
///
/// The declared size of a chunk is always `data.len()`. When the payload
/// length is odd, the chunk is followed in the stream by a single pad byte
/// that belongs to neither the payload nor the declared size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Four-byte chunk identifier, e.g. `smpl` or a vendor tag.
    pub id: [u8; 4],
    /// Raw payload bytes, exactly as found in the container.
    pub data: Vec<u8>,
}

impl Chunk {
    /// Creates a chunk from an identifier and payload bytes.
    pub fn new(id: [u8; 4], data: Vec<u8>) -> Self {
        Self { id, data }
    }

    /// Returns the declared payload size as stored in the chunk header.
    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }

    /// Returns the number of bytes this chunk occupies in a serialized
    /// container: 8-byte header, payload, and pad byte if the payload
    /// length is odd.
    pub fn encoded_len(&self) -> usize {
        8 + self.data.len() + (self.data.len() & 1)
    }
}

/// Decoded fields of a PCM `fmt ` chunk, in wire order.
///
/// All fields are little-endian in the container. `audio_format` is kept
/// even though only PCM (1) is convertible, so the format guard can reject
/// compressed files with a precise error instead of misreading them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatParams {
    /// Format tag; 1 for uncompressed PCM.
    pub audio_format: u16,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second of audio (`sample_rate * block_align`).
    pub byte_rate: u32,
    /// Bytes per frame (`channels * bits_per_sample / 8`).
    pub block_align: u16,
    /// Bits per sample; 8, 16, 24, or 32 for the widths this crate mixes.
    pub bits_per_sample: u16,
}

impl FormatParams {
    /// Creates PCM format parameters with `block_align` and `byte_rate`
    /// derived from the channel count, sample rate, and bit depth.
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        let block_align = channels * (bits_per_sample / 8);
        Self {
            audio_format: 1,
            channels,
            sample_rate,
            byte_rate: sample_rate * block_align as u32,
            block_align,
            bits_per_sample,
        }
    }

    /// Bytes used by one sample of one channel.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }
}

/// A parsed WAVE file: format descriptor, raw audio payload, and every
/// other chunk in encounter order.
///
/// Owns all of its buffers; nothing aliases the source byte buffer once
/// parsing completes, so instances from different files are fully
/// independent values.
#[derive(Debug, Clone)]
pub struct WaveFile {
    /// Decoded `fmt ` chunk.
    pub format: FormatParams,
    /// Raw payload of the `data` chunk, interleaved little-endian PCM.
    pub audio: Vec<u8>,
    /// Every chunk that is neither `fmt ` nor `data`, in original order.
    pub extra_chunks: Vec<Chunk>,
}
