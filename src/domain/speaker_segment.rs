use super::TimeInterval;

/// One diarization-emitted interval attributed to a single speaker.
///
/// `speaker` is the raw label assigned by the diarization engine
/// (e.g. `SPEAKER_00`), stable within one diarization run.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerSegment {
    pub interval: TimeInterval,
    pub speaker: String,
}

impl SpeakerSegment {
    pub fn new(interval: TimeInterval, speaker: impl Into<String>) -> Self {
        Self {
            interval,
            speaker: speaker.into(),
        }
    }
}
