use async_trait::async_trait;

/// Recognizes speech in a span of 16 kHz mono PCM samples.
///
/// Returns an empty string rather than failing when the span contains
/// no intelligible speech; errors signal engine-internal failure only.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn transcribe(&self, pcm: &[f32]) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
