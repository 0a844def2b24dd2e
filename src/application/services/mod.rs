mod caption_service;
mod model_pool;
mod subtitle_writer;

pub use caption_service::{CaptionError, CaptionOutput, CaptionPipeline};
pub use model_pool::{ModelPool, PoolLease, PoolTimeoutError};
pub use subtitle_writer::{SubtitleWriteError, format_timestamp, write_captions};
