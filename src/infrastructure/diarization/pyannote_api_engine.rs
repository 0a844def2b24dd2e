use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{DiarizationEngine, DiarizationError, SpeakerCountBounds};
use crate::domain::SpeakerSegment;

use super::rttm;

/// Client for a pyannote-style speaker-diarization HTTP service.
///
/// Uploads the audio file, requests RTTM output, and parses it in
/// emission order. When constructed with a sidecar directory, the raw
/// RTTM body is persisted next to each run for audit and debugging.
pub struct PyannoteApiEngine {
    client: reqwest::Client,
    base_url: String,
    auth_token: String,
    rttm_dir: Option<PathBuf>,
}

impl PyannoteApiEngine {
    pub fn new(
        base_url: String,
        auth_token: String,
        rttm_dir: Option<PathBuf>,
    ) -> Result<Self, DiarizationError> {
        if let Some(dir) = &rttm_dir {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            auth_token,
            rttm_dir,
        })
    }
}

#[async_trait]
impl DiarizationEngine for PyannoteApiEngine {
    async fn diarize(
        &self,
        audio_path: &Path,
        bounds: SpeakerCountBounds,
    ) -> Result<Vec<SpeakerSegment>, DiarizationError> {
        let audio = tokio::fs::read(audio_path).await.map_err(|e| {
            DiarizationError::UnreadableAudio(format!("{}: {}", audio_path.display(), e))
        })?;

        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav")
            .to_string();
        let file_part = multipart::Part::bytes(audio)
            .file_name(file_name)
            .mime_str("audio/wav")
            .map_err(|e| DiarizationError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("min_speakers", bounds.min.to_string())
            .text("max_speakers", bounds.max.to_string())
            .text("response_format", "rttm")
            .part("file", file_part);

        let url = format!("{}/diarize", self.base_url);

        tracing::debug!(
            min_speakers = bounds.min,
            max_speakers = bounds.max,
            "Sending audio to diarization service"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.auth_token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DiarizationError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(DiarizationError::ModelFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DiarizationError::ApiRequestFailed(format!("body: {}", e)))?;

        let segments = rttm::parse_rttm(&body)?;

        if let Some(dir) = &self.rttm_dir {
            let stem = audio_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("audio");
            let sidecar = dir.join(format!("{stem}.rttm"));
            tokio::fs::write(&sidecar, &body).await?;
            tracing::info!(path = %sidecar.display(), "Diarization sidecar saved");
        }

        tracing::info!(
            segments = segments.len(),
            "Diarization service returned segments"
        );

        Ok(segments)
    }
}
