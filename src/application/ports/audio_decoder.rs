use super::TranscriptionError;

/// Sample rate every decoder implementation must emit.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Decodes encoded audio bytes into 16 kHz mono PCM samples.
///
/// Decoding once per request lets the pipeline slice diarization
/// intervals sample-accurately instead of re-decoding per segment.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<Vec<f32>, TranscriptionError>;
}
