use std::path::Path;

use async_trait::async_trait;

use crate::domain::SpeakerSegment;

/// Expected speaker-count range passed to the diarization engine.
///
/// A hint, not a hard requirement: the engine estimates the actual
/// count within the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerCountBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for SpeakerCountBounds {
    fn default() -> Self {
        Self { min: 2, max: 7 }
    }
}

/// Partitions an audio file into speaker-attributed time intervals.
///
/// Implementations must preserve the model's emission order in the
/// returned sequence; speaker display tags are assigned from that
/// order downstream.
#[async_trait]
pub trait DiarizationEngine: Send + Sync {
    async fn diarize(
        &self,
        audio_path: &Path,
        bounds: SpeakerCountBounds,
    ) -> Result<Vec<SpeakerSegment>, DiarizationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DiarizationError {
    #[error("unreadable audio: {0}")]
    UnreadableAudio(String),
    #[error("diarization model failed: {0}")]
    ModelFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid diarization output: {0}")]
    InvalidOutput(String),
    #[error("sidecar write failed: {0}")]
    SidecarWrite(#[from] std::io::Error),
}
