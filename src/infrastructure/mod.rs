pub mod acquisition;
pub mod audio;
pub mod diarization;
pub mod observability;
pub mod transcription;
