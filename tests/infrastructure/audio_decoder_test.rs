use kuching::application::ports::AudioDecoder;
use kuching::infrastructure::audio::{SymphoniaAudioDecoder, encode_wav_pcm16};

#[test]
fn given_pcm_samples_when_encoding_wav_then_header_and_length_are_correct() {
    let samples = vec![0.0f32; 1600];

    let wav = encode_wav_pcm16(&samples);

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(wav.len(), 44 + 1600 * 2);
}

#[test]
fn given_encoded_wav_when_decoding_then_sample_count_survives() {
    let samples = vec![0.0f32; 1600];
    let wav = encode_wav_pcm16(&samples);
    let decoder = SymphoniaAudioDecoder;

    let pcm = decoder.decode(&wav).expect("decode");

    assert_eq!(pcm.len(), 1600);
}

#[test]
fn given_full_scale_samples_when_round_tripping_then_amplitude_is_preserved() {
    let samples = vec![0.5f32; 1600];
    let wav = encode_wav_pcm16(&samples);
    let decoder = SymphoniaAudioDecoder;

    let pcm = decoder.decode(&wav).expect("decode");

    assert!(pcm.iter().all(|&s| (s - 0.5).abs() < 0.01));
}

#[test]
fn given_garbage_bytes_when_decoding_then_fails() {
    let decoder = SymphoniaAudioDecoder;

    assert!(decoder.decode(b"definitely not audio").is_err());
}
