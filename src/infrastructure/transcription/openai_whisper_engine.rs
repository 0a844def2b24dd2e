use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{SpeechRecognizer, TranscriptionError};
use crate::infrastructure::audio::encode_wav_pcm16;

/// Speech recognition via the OpenAI transcription API.
///
/// Each span is WAV-encoded in memory and uploaded; the span never
/// touches disk.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for OpenAiWhisperEngine {
    async fn transcribe(&self, pcm: &[f32]) -> Result<String, TranscriptionError> {
        if pcm.is_empty() {
            return Ok(String::new());
        }

        let url = format!("{}/audio/transcriptions", self.base_url);

        let wav = encode_wav_pcm16(pcm);
        let file_part = multipart::Part::bytes(wav)
            .file_name("span.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, samples = pcm.len(), "Sending span to OpenAI Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        Ok(transcript.trim().to_string())
    }
}
