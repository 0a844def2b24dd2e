use crate::application::ports::{SpeechRecognizer, TranscriptionError};

/// Returns a fixed transcript for any non-empty span.
pub struct MockSpeechRecognizer {
    pub text: String,
}

#[async_trait::async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn transcribe(&self, pcm: &[f32]) -> Result<String, TranscriptionError> {
        if pcm.is_empty() {
            return Ok(String::new());
        }
        Ok(self.text.clone())
    }
}
