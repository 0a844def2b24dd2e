mod audio_decoder;

pub use audio_decoder::{SymphoniaAudioDecoder, encode_wav_pcm16};
