use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::process::Command;
use uuid::Uuid;

use crate::application::ports::{AcquisitionError, AudioAcquirer};

/// Downloads a source URL's audio track with the `yt-dlp` binary,
/// transcoded to WAV by its ffmpeg post-processor.
///
/// Each acquisition writes to a fresh timestamp+UUID stem inside the
/// downloads directory, so concurrent requests never clobber each
/// other's files.
pub struct YtDlpAcquirer {
    binary: PathBuf,
    downloads_dir: PathBuf,
}

impl YtDlpAcquirer {
    pub fn new(
        binary: impl Into<PathBuf>,
        downloads_dir: impl Into<PathBuf>,
    ) -> Result<Self, AcquisitionError> {
        let downloads_dir = downloads_dir.into();
        std::fs::create_dir_all(&downloads_dir)?;
        Ok(Self {
            binary: binary.into(),
            downloads_dir,
        })
    }
}

#[async_trait]
impl AudioAcquirer for YtDlpAcquirer {
    async fn acquire(&self, source_url: &str) -> Result<PathBuf, AcquisitionError> {
        let stem = format!(
            "{}_{}",
            Utc::now().format("%Y%m%d_%H%M%S"),
            Uuid::new_v4().simple()
        );
        let template = self.downloads_dir.join(format!("{stem}.%(ext)s"));
        let audio_path = self.downloads_dir.join(format!("{stem}.wav"));

        tracing::info!(url = %source_url, "Downloading audio");

        let output = Command::new(&self.binary)
            .arg("--format")
            .arg("bestaudio/best")
            .arg("--extract-audio")
            .arg("--audio-format")
            .arg("wav")
            .arg("--audio-quality")
            .arg("192")
            .arg("--no-playlist")
            .arg("--output")
            .arg(&template)
            .arg(source_url)
            .output()
            .await
            .map_err(|e| AcquisitionError::SpawnFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AcquisitionError::DownloadFailed(format!(
                "yt-dlp exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let metadata = tokio::fs::metadata(&audio_path).await.map_err(|_| {
            AcquisitionError::NoAudioProduced {
                url: source_url.to_string(),
            }
        })?;
        if metadata.len() == 0 {
            return Err(AcquisitionError::NoAudioProduced {
                url: source_url.to_string(),
            });
        }

        tracing::info!(
            path = %audio_path.display(),
            bytes = metadata.len(),
            "Audio downloaded"
        );

        Ok(audio_path)
    }
}
