use std::path::PathBuf;

use async_trait::async_trait;

/// Resolves a source URL to a local, decodable PCM audio file.
#[async_trait]
pub trait AudioAcquirer: Send + Sync {
    async fn acquire(&self, source_url: &str) -> Result<PathBuf, AcquisitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    #[error("failed to spawn downloader: {0}")]
    SpawnFailed(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("no audio track produced for {url}")]
    NoAudioProduced { url: String },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
