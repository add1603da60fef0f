pub mod mono;
mod pcm;

pub use mono::{DownmixError, check_format, to_mono};
