mod audio_acquirer;
mod audio_decoder;
mod diarization_engine;
mod speech_recognizer;

pub use audio_acquirer::{AcquisitionError, AudioAcquirer};
pub use audio_decoder::{AudioDecoder, TARGET_SAMPLE_RATE};
pub use diarization_engine::{DiarizationEngine, DiarizationError, SpeakerCountBounds};
pub use speech_recognizer::{SpeechRecognizer, TranscriptionError};
