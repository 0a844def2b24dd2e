use std::sync::Arc;
use std::time::Duration;

use kuching::application::ports::{SpeechRecognizer, TranscriptionError};
use kuching::application::services::{CaptionError, ModelPool};
use kuching::domain::{CaptionFormat, CaptionRecord};

use crate::{FailingDiarizationEngine, test_pipeline, test_segments, write_dummy_audio};
use kuching::infrastructure::diarization::MockDiarizationEngine;

#[tokio::test]
async fn given_segments_when_generating_then_order_and_length_are_preserved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let audio_path = write_dummy_audio(dir.path());
    let pipeline = test_pipeline(
        audio_path,
        Arc::new(MockDiarizationEngine {
            segments: test_segments(),
        }),
        "hello",
    );

    let output = pipeline
        .generate("https://example.com/watch?v=abc", CaptionFormat::Json)
        .await
        .expect("caption generation");

    let records: Vec<CaptionRecord> = serde_json::from_str(&output.content).expect("json");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].start, 0.0);
    assert_eq!(records[1].start, 2.5);
    assert_eq!(records[2].start, 5.0);
}

#[tokio::test]
async fn given_recurring_speaker_when_generating_then_tags_follow_first_encounter_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let audio_path = write_dummy_audio(dir.path());
    let pipeline = test_pipeline(
        audio_path,
        Arc::new(MockDiarizationEngine {
            segments: test_segments(),
        }),
        "hello",
    );

    let output = pipeline
        .generate("https://example.com/watch?v=abc", CaptionFormat::Json)
        .await
        .expect("caption generation");

    let records: Vec<CaptionRecord> = serde_json::from_str(&output.content).expect("json");
    // SPEAKER_01 appears first and recurs third; SPEAKER_00 is second.
    assert_eq!(records[0].speaker_tag, "Speaker_A");
    assert_eq!(records[1].speaker_tag, "Speaker_B");
    assert_eq!(records[2].speaker_tag, "Speaker_A");
}

#[tokio::test]
async fn given_successful_run_when_generating_then_caption_artifact_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let audio_path = write_dummy_audio(dir.path());
    let pipeline = test_pipeline(
        audio_path.clone(),
        Arc::new(MockDiarizationEngine {
            segments: test_segments(),
        }),
        "hello",
    );

    let output = pipeline
        .generate("https://example.com/watch?v=abc", CaptionFormat::Srt)
        .await
        .expect("caption generation");

    assert_eq!(output.output_path, audio_path.with_extension("srt"));
    let persisted = std::fs::read_to_string(&output.output_path).expect("artifact");
    assert_eq!(persisted, output.content);
}

#[tokio::test]
async fn given_diarization_failure_when_generating_then_no_artifact_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let audio_path = write_dummy_audio(dir.path());
    let pipeline = test_pipeline(
        audio_path.clone(),
        Arc::new(FailingDiarizationEngine),
        "hello",
    );

    let err = pipeline
        .generate("https://example.com/watch?v=abc", CaptionFormat::Srt)
        .await
        .expect_err("diarization failure must abort the request");

    assert!(matches!(err, CaptionError::Diarization(_)));
    assert!(
        !audio_path.with_extension("srt").exists(),
        "failed runs must leave no caption artifact"
    );
}

struct FailingRecognizer;

#[async_trait::async_trait]
impl SpeechRecognizer for FailingRecognizer {
    async fn transcribe(&self, _pcm: &[f32]) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::TranscriptionFailed(
            "synthetic recognizer failure".to_string(),
        ))
    }
}

#[tokio::test]
async fn given_transcription_failure_when_generating_then_error_keeps_its_kind() {
    let dir = tempfile::tempdir().expect("tempdir");
    let audio_path = write_dummy_audio(dir.path());
    let pipeline = kuching::application::services::CaptionPipeline::new(
        Arc::new(kuching::infrastructure::acquisition::MockAudioAcquirer {
            audio_path: audio_path.clone(),
        }),
        Arc::new(MockDiarizationEngine {
            segments: test_segments(),
        }),
        Arc::new(crate::StubPcmDecoder { samples: 160_000 }),
        Arc::new(FailingRecognizer),
        kuching::application::ports::SpeakerCountBounds::default(),
    );

    let err = pipeline
        .generate("https://example.com/watch?v=abc", CaptionFormat::Srt)
        .await
        .expect_err("recognizer failure must abort the request");

    assert!(matches!(err, CaptionError::Transcription(_)));
    assert!(!audio_path.with_extension("srt").exists());
}

#[tokio::test]
async fn given_failed_run_when_lease_is_dropped_then_instance_returns_to_the_pool() {
    let dir = tempfile::tempdir().expect("tempdir");
    let audio_path = write_dummy_audio(dir.path());
    let pipeline = test_pipeline(audio_path, Arc::new(FailingDiarizationEngine), "hello");
    let pool = ModelPool::new(vec![pipeline]);

    {
        let engine = pool.lease().await;
        let _ = engine
            .generate("https://example.com/watch?v=abc", CaptionFormat::Srt)
            .await
            .expect_err("diarization failure");
    }

    // The failed instance must be back and lendable.
    let release = pool
        .lease_with_deadline(Duration::from_secs(1))
        .await
        .expect("instance must return to the pool after a failed run");
    drop(release);
}

#[tokio::test]
async fn given_span_past_audio_end_when_generating_then_text_is_empty_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let audio_path = write_dummy_audio(dir.path());
    // Decoder yields no samples at all, so every sliced span is empty.
    let pipeline = kuching::application::services::CaptionPipeline::new(
        Arc::new(kuching::infrastructure::acquisition::MockAudioAcquirer {
            audio_path: audio_path.clone(),
        }),
        Arc::new(MockDiarizationEngine {
            segments: test_segments(),
        }),
        Arc::new(crate::StubPcmDecoder { samples: 0 }),
        Arc::new(kuching::infrastructure::transcription::MockSpeechRecognizer {
            text: "hello".to_string(),
        }),
        kuching::application::ports::SpeakerCountBounds::default(),
    );

    let output = pipeline
        .generate("https://example.com/watch?v=abc", CaptionFormat::Json)
        .await
        .expect("empty spans must not fail the run");

    let records: Vec<CaptionRecord> = serde_json::from_str(&output.content).expect("json");
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.text.is_empty()));
}
