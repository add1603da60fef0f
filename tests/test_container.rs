mod common;

use common::{build_wav, fmt_body};
use monowav::{Chunk, FormatParams, WaveFile, parse_wave, write_wave};

#[test]
fn test_write_then_parse_round_trip() {
    let file = WaveFile {
        format: FormatParams::pcm(1, 48000, 16),
        audio: vec![1, 0, 2, 0, 3, 0],
        extra_chunks: vec![
            Chunk::new(*b"smpl", vec![0xAB; 36]),
            Chunk::new(*b"vndr", vec![1, 2, 3, 4, 5]),
        ],
    };

    let bytes = write_wave(&file);
    let parsed = parse_wave(&bytes).unwrap();
    assert!(!parsed.truncated);
    assert_eq!(parsed.file.format, file.format);
    assert_eq!(parsed.file.audio, file.audio);
    assert_eq!(parsed.file.extra_chunks, file.extra_chunks);
}

#[test]
fn test_serialized_form_is_stable() {
    // Writing a parsed file without modification reproduces it byte for
    // byte, including pad bytes and the declared RIFF size.
    let fmt = fmt_body(1, 2, 44100, 16);
    let data = [9u8, 0, 9, 0];
    let odd = [5u8; 7];
    let input = build_wav(&[(*b"fmt ", &fmt), (*b"data", &data), (*b"loop", &odd)]);

    let parsed = parse_wave(&input).unwrap();
    assert_eq!(write_wave(&parsed.file), input);
}

#[test]
fn test_chunks_before_data_are_kept() {
    // Metadata placed between fmt and data (a common LIST INFO position)
    // survives; the writer moves it after the data chunk but keeps its
    // bytes and relative order.
    let fmt = fmt_body(1, 2, 44100, 16);
    let list = [0x4Cu8; 12];
    let bext = [0x42u8; 10];
    let data = [1u8, 0, 2, 0];
    let input = build_wav(&[
        (*b"fmt ", &fmt),
        (*b"LIST", &list),
        (*b"bext", &bext),
        (*b"data", &data),
    ]);

    let parsed = parse_wave(&input).unwrap();
    let chunks = &parsed.file.extra_chunks;
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], Chunk::new(*b"LIST", list.to_vec()));
    assert_eq!(chunks[1], Chunk::new(*b"bext", bext.to_vec()));

    let rewritten = write_wave(&parsed.file);
    let reparsed = parse_wave(&rewritten).unwrap();
    assert_eq!(reparsed.file.extra_chunks, *chunks);
}

#[test]
fn test_declared_size_always_recomputed() {
    // Lie about the RIFF size in the input; the writer must not inherit it.
    let fmt = fmt_body(1, 2, 44100, 16);
    let data = [1u8, 0, 2, 0];
    let mut input = build_wav(&[(*b"fmt ", &fmt), (*b"data", &data)]);
    input[4..8].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());

    let parsed = parse_wave(&input).unwrap();
    let out = write_wave(&parsed.file);
    let declared = u32::from_le_bytes(out[4..8].try_into().unwrap());
    assert_eq!(declared as usize, out.len() - 8);
}

#[test]
fn test_truncation_keeps_prefix() {
    let fmt = fmt_body(1, 2, 44100, 16);
    let data = [1u8, 0, 2, 0];
    let full = build_wav(&[(*b"fmt ", &fmt), (*b"data", &data), (*b"smpl", &[7u8; 20])]);

    // Cut the file in the middle of the smpl payload.
    let cut = &full[..full.len() - 10];
    let parsed = parse_wave(cut).unwrap();
    assert!(parsed.truncated);
    assert_eq!(parsed.file.audio, data);
    assert!(parsed.file.extra_chunks.is_empty());
}

#[test]
fn test_missing_final_pad_byte_is_tolerated() {
    let fmt = fmt_body(1, 2, 44100, 16);
    let data = [1u8, 0, 2, 0];
    let mut input = build_wav(&[(*b"fmt ", &fmt), (*b"data", &data), (*b"vndr", &[7u8; 3])]);
    assert_eq!(input.pop(), Some(0)); // drop the trailing pad byte

    let parsed = parse_wave(&input).unwrap();
    assert!(!parsed.truncated);
    assert_eq!(parsed.file.extra_chunks[0].data, vec![7, 7, 7]);
}
