pub mod chunk;
pub mod parser;
pub mod writer;

pub use chunk::{Chunk, DATA_TAG, FMT_TAG, FormatParams, RIFF_TAG, WAVE_TAG, WaveFile};
pub use parser::{ContainerError, ParsedWave, parse_wave};
pub use writer::write_wave;
