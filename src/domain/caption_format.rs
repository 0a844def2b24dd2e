use std::fmt;
use std::str::FromStr;

/// Target serialization format for a caption result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptionFormat {
    #[default]
    Srt,
    Vtt,
    Json,
    Csv,
    Txt,
}

impl CaptionFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptionFormat::Srt => "srt",
            CaptionFormat::Vtt => "vtt",
            CaptionFormat::Json => "json",
            CaptionFormat::Csv => "csv",
            CaptionFormat::Txt => "txt",
        }
    }

    /// File extension for the persisted caption artifact.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for CaptionFormat {
    type Err = UnsupportedFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(CaptionFormat::Srt),
            "vtt" => Ok(CaptionFormat::Vtt),
            "json" => Ok(CaptionFormat::Json),
            "csv" => Ok(CaptionFormat::Csv),
            "txt" => Ok(CaptionFormat::Txt),
            other => Err(UnsupportedFormatError {
                requested: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unsupported caption format: {requested}")]
pub struct UnsupportedFormatError {
    pub requested: String,
}
