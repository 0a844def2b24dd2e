use std::path::Path;

use crate::application::ports::{DiarizationEngine, DiarizationError, SpeakerCountBounds};
use crate::domain::SpeakerSegment;

/// Replays a canned segment sequence.
pub struct MockDiarizationEngine {
    pub segments: Vec<SpeakerSegment>,
}

#[async_trait::async_trait]
impl DiarizationEngine for MockDiarizationEngine {
    async fn diarize(
        &self,
        _audio_path: &Path,
        _bounds: SpeakerCountBounds,
    ) -> Result<Vec<SpeakerSegment>, DiarizationError> {
        Ok(self.segments.clone())
    }
}
