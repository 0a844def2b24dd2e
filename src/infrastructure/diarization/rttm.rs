//! Minimal RTTM (Rich Transcription Time Marked) codec covering the
//! `SPEAKER` records diarization engines emit.
//!
//! Field layout per line:
//! `SPEAKER <file-id> <channel> <start> <duration> <NA> <NA> <label> <NA> <NA>`

use crate::application::ports::DiarizationError;
use crate::domain::{SpeakerSegment, TimeInterval};

/// Parses `SPEAKER` records in line order, preserving the engine's
/// emission order. Non-`SPEAKER` lines are ignored.
pub fn parse_rttm(content: &str) -> Result<Vec<SpeakerSegment>, DiarizationError> {
    let mut segments = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.first() != Some(&"SPEAKER") {
            continue;
        }
        if fields.len() < 8 {
            return Err(DiarizationError::InvalidOutput(format!(
                "rttm line {}: expected at least 8 fields, got {}",
                line_no + 1,
                fields.len()
            )));
        }
        let start: f64 = fields[3].parse().map_err(|_| {
            DiarizationError::InvalidOutput(format!(
                "rttm line {}: invalid start {:?}",
                line_no + 1,
                fields[3]
            ))
        })?;
        let duration: f64 = fields[4].parse().map_err(|_| {
            DiarizationError::InvalidOutput(format!(
                "rttm line {}: invalid duration {:?}",
                line_no + 1,
                fields[4]
            ))
        })?;
        let interval = TimeInterval::new(start, start + duration).map_err(|e| {
            DiarizationError::InvalidOutput(format!("rttm line {}: {}", line_no + 1, e))
        })?;
        segments.push(SpeakerSegment::new(interval, fields[7]));
    }
    Ok(segments)
}

/// Renders segments back into `SPEAKER` lines for the sidecar
/// artifact.
pub fn write_rttm(file_id: &str, segments: &[SpeakerSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push_str(&format!(
            "SPEAKER {} 1 {:.3} {:.3} <NA> <NA> {} <NA> <NA>\n",
            file_id,
            segment.interval.start(),
            segment.interval.duration(),
            segment.speaker
        ));
    }
    out
}
