mod candle_whisper_engine;
mod engine_factory;
mod mock_recognizer;
mod openai_whisper_engine;

pub use candle_whisper_engine::CandleWhisperEngine;
pub use engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
pub use mock_recognizer::MockSpeechRecognizer;
pub use openai_whisper_engine::OpenAiWhisperEngine;
