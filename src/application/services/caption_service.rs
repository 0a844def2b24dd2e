use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    AcquisitionError, AudioAcquirer, AudioDecoder, DiarizationEngine, DiarizationError,
    SpeakerCountBounds, SpeechRecognizer, TARGET_SAMPLE_RATE, TranscriptionError,
};
use crate::domain::{
    CaptionFormat, CaptionRecord, CaptionResult, SpeakerSegment, SpeakerTagRegistry, TimeInterval,
};

use super::subtitle_writer::{self, SubtitleWriteError};

/// One pre-loaded captioning engine: acquires audio, diarizes it,
/// transcribes each speaker segment, and writes the caption artifact.
///
/// Stages run strictly in sequence per request. The pipeline holds no
/// per-request state, so an instance stays reusable after a failed
/// run.
pub struct CaptionPipeline {
    acquirer: Arc<dyn AudioAcquirer>,
    diarizer: Arc<dyn DiarizationEngine>,
    decoder: Arc<dyn AudioDecoder>,
    recognizer: Arc<dyn SpeechRecognizer>,
    speaker_bounds: SpeakerCountBounds,
}

/// Serialized captions plus the artifact they were persisted to.
#[derive(Debug, Clone)]
pub struct CaptionOutput {
    pub content: String,
    pub format: CaptionFormat,
    pub output_path: PathBuf,
}

impl CaptionPipeline {
    pub fn new(
        acquirer: Arc<dyn AudioAcquirer>,
        diarizer: Arc<dyn DiarizationEngine>,
        decoder: Arc<dyn AudioDecoder>,
        recognizer: Arc<dyn SpeechRecognizer>,
        speaker_bounds: SpeakerCountBounds,
    ) -> Self {
        Self {
            acquirer,
            diarizer,
            decoder,
            recognizer,
            speaker_bounds,
        }
    }

    pub async fn generate(
        &self,
        source_url: &str,
        format: CaptionFormat,
    ) -> Result<CaptionOutput, CaptionError> {
        tracing::info!(url = %source_url, format = %format, "Starting caption generation");

        let audio_path = self.acquirer.acquire(source_url).await?;
        tracing::info!(path = %audio_path.display(), "Audio acquired");

        let segments = self
            .diarizer
            .diarize(&audio_path, self.speaker_bounds)
            .await?;
        tracing::info!(segments = segments.len(), "Diarization completed");

        // Display tags are assigned once here, in the diarization
        // output's emission order, before any transcription runs.
        let mut registry = SpeakerTagRegistry::new();
        let tagged: Vec<(SpeakerSegment, String)> = segments
            .into_iter()
            .map(|segment| {
                let tag = registry.tag_for(&segment.speaker);
                (segment, tag)
            })
            .collect();

        let audio_bytes = tokio::fs::read(&audio_path).await?;
        let pcm = self.decoder.decode(&audio_bytes)?;

        let mut records = Vec::with_capacity(tagged.len());
        for (segment, tag) in tagged {
            let span = slice_samples(&pcm, &segment.interval);
            let text = self.recognizer.transcribe(span).await?;
            records.push(CaptionRecord {
                start: segment.interval.start(),
                end: segment.interval.end(),
                text,
                speaker_tag: tag,
            });
        }
        let result = CaptionResult::new(records);

        let content = subtitle_writer::write_captions(&result, format)?;
        let output_path = audio_path.with_extension(format.extension());
        tokio::fs::write(&output_path, &content).await?;

        tracing::info!(
            records = result.len(),
            speakers = registry.len(),
            path = %output_path.display(),
            "Captions generated"
        );

        Ok(CaptionOutput {
            content,
            format,
            output_path,
        })
    }
}

/// Sample-accurate slice of the decoded PCM for one interval, clamped
/// to the audio's actual length.
fn slice_samples<'a>(pcm: &'a [f32], interval: &TimeInterval) -> &'a [f32] {
    let start = ((interval.start() * f64::from(TARGET_SAMPLE_RATE)) as usize).min(pcm.len());
    let end = ((interval.end() * f64::from(TARGET_SAMPLE_RATE)) as usize).min(pcm.len());
    &pcm[start..end]
}

#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    #[error("acquisition: {0}")]
    Acquisition(#[from] AcquisitionError),
    #[error("diarization: {0}")]
    Diarization(#[from] DiarizationError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("serialization: {0}")]
    Serialization(#[from] SubtitleWriteError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
