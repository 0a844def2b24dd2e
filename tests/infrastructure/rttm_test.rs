use kuching::domain::SpeakerSegment;
use kuching::infrastructure::diarization::rttm::{parse_rttm, write_rttm};

use crate::interval;

const SAMPLE_RTTM: &str = "\
SPEAKER 20240101_120000 1 0.031 2.250 <NA> <NA> SPEAKER_01 <NA> <NA>
SPEAKER 20240101_120000 1 2.281 1.500 <NA> <NA> SPEAKER_00 <NA> <NA>
SPEAKER 20240101_120000 1 3.781 0.750 <NA> <NA> SPEAKER_01 <NA> <NA>
";

#[test]
fn given_speaker_records_when_parsing_then_preserves_emission_order() {
    let segments = parse_rttm(SAMPLE_RTTM).expect("parse");

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].speaker, "SPEAKER_01");
    assert_eq!(segments[0].interval.start(), 0.031);
    assert_eq!(segments[0].interval.end(), 0.031 + 2.250);
    assert_eq!(segments[1].speaker, "SPEAKER_00");
    assert_eq!(segments[2].speaker, "SPEAKER_01");
}

#[test]
fn given_non_speaker_lines_when_parsing_then_they_are_ignored() {
    let content = format!("SPKR-INFO meta 1 <NA> <NA> <NA> unknown x <NA>\n{SAMPLE_RTTM}");

    let segments = parse_rttm(&content).expect("parse");

    assert_eq!(segments.len(), 3);
}

#[test]
fn given_truncated_record_when_parsing_then_fails_naming_the_line() {
    let err = parse_rttm("SPEAKER file 1 0.0\n").expect_err("truncated record");

    assert!(err.to_string().contains("line 1"));
}

#[test]
fn given_unparseable_start_when_parsing_then_fails() {
    let err = parse_rttm("SPEAKER file 1 abc 1.0 <NA> <NA> SPEAKER_00 <NA> <NA>\n")
        .expect_err("bad start field");

    assert!(err.to_string().contains("invalid start"));
}

#[test]
fn given_zero_duration_record_when_parsing_then_fails() {
    assert!(parse_rttm("SPEAKER file 1 1.0 0.0 <NA> <NA> SPEAKER_00 <NA> <NA>\n").is_err());
}

#[test]
fn given_segments_when_writing_then_parsing_back_round_trips() {
    let segments = vec![
        SpeakerSegment::new(interval(0.5, 2.75), "SPEAKER_00"),
        SpeakerSegment::new(interval(3.0, 4.125), "SPEAKER_01"),
    ];

    let rendered = write_rttm("audio_stem", &segments);
    let parsed = parse_rttm(&rendered).expect("parse rendered rttm");

    assert_eq!(parsed, segments);
}

#[test]
fn given_segments_when_writing_then_lines_follow_the_speaker_layout() {
    let segments = vec![SpeakerSegment::new(interval(0.5, 2.75), "SPEAKER_00")];

    let rendered = write_rttm("audio_stem", &segments);

    assert_eq!(
        rendered,
        "SPEAKER audio_stem 1 0.500 2.250 <NA> <NA> SPEAKER_00 <NA> <NA>\n"
    );
}
