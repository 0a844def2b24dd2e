use std::path::PathBuf;

use crate::application::ports::{AcquisitionError, AudioAcquirer};

/// Returns a fixed local path instead of downloading anything.
pub struct MockAudioAcquirer {
    pub audio_path: PathBuf,
}

#[async_trait::async_trait]
impl AudioAcquirer for MockAudioAcquirer {
    async fn acquire(&self, _source_url: &str) -> Result<PathBuf, AcquisitionError> {
        Ok(self.audio_path.clone())
    }
}
