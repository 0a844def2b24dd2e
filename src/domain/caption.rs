use serde::{Deserialize, Serialize};

/// One timed, speaker-tagged, transcribed caption unit.
///
/// Serialized field names match the caption wire format:
/// timestamps are numeric seconds so a JSON round-trip is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionRecord {
    #[serde(rename = "starting_timestamp")]
    pub start: f64,
    #[serde(rename = "ending_timestamp")]
    pub end: f64,
    #[serde(rename = "transcription")]
    pub text: String,
    #[serde(rename = "speaker_id")]
    pub speaker_tag: String,
}

/// Ordered caption sequence for one request, immutable once produced.
///
/// Preserves the diarization output's emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionResult {
    records: Vec<CaptionRecord>,
}

impl CaptionResult {
    pub fn new(records: Vec<CaptionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CaptionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
