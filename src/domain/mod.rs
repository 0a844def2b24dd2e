mod caption;
mod caption_format;
mod speaker_segment;
mod speaker_tags;
mod time_interval;

pub use caption::{CaptionRecord, CaptionResult};
pub use caption_format::{CaptionFormat, UnsupportedFormatError};
pub use speaker_segment::SpeakerSegment;
pub use speaker_tags::SpeakerTagRegistry;
pub use time_interval::{TimeInterval, TimeIntervalError};
