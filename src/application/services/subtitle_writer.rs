use crate::domain::{CaptionFormat, CaptionResult};

/// Formats whole seconds as zero-padded `HH:MM:SS`, truncating
/// fractional seconds rather than rounding.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Serializes a caption result into the requested format.
///
/// Pure function over the (immutable) result; callable concurrently
/// without synchronization.
pub fn write_captions(
    result: &CaptionResult,
    format: CaptionFormat,
) -> Result<String, SubtitleWriteError> {
    match format {
        CaptionFormat::Srt => Ok(write_srt(result)),
        CaptionFormat::Vtt => Ok(write_vtt(result)),
        CaptionFormat::Json => write_json(result),
        CaptionFormat::Csv => write_csv(result),
        CaptionFormat::Txt => Ok(write_txt(result)),
    }
}

fn write_srt(result: &CaptionResult) -> String {
    let mut out = String::new();
    for (i, record) in result.records().iter().enumerate() {
        out.push_str(&format!("{}\n", i + 1));
        out.push_str(&format!(
            "{} --> {}\n",
            format_timestamp(record.start),
            format_timestamp(record.end)
        ));
        out.push_str(&format!("{}: {}\n\n", record.speaker_tag, record.text));
    }
    out
}

fn write_vtt(result: &CaptionResult) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for record in result.records() {
        out.push_str(&format!(
            "{} --> {}\n",
            format_timestamp(record.start),
            format_timestamp(record.end)
        ));
        out.push_str(&format!("{}: {}\n\n", record.speaker_tag, record.text));
    }
    out
}

fn write_json(result: &CaptionResult) -> Result<String, SubtitleWriteError> {
    Ok(serde_json::to_string_pretty(result.records())?)
}

fn write_csv(result: &CaptionResult) -> Result<String, SubtitleWriteError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "starting_timestamp",
        "ending_timestamp",
        "transcription",
        "speaker_id",
    ])?;
    for record in result.records() {
        writer.write_record([
            format_timestamp(record.start).as_str(),
            format_timestamp(record.end).as_str(),
            record.text.as_str(),
            record.speaker_tag.as_str(),
        ])?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|e| SubtitleWriteError::CsvFinish(e.to_string()))?;
    Ok(String::from_utf8(buffer)?)
}

fn write_txt(result: &CaptionResult) -> String {
    let mut out = String::new();
    for record in result.records() {
        out.push_str(&format!(
            "{} - {}: {}: {}\n",
            format_timestamp(record.start),
            format_timestamp(record.end),
            record.speaker_tag,
            record.text
        ));
    }
    out
}

#[derive(Debug, thiserror::Error)]
pub enum SubtitleWriteError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer finalization failed: {0}")]
    CsvFinish(String),
    #[error("serialized output was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
