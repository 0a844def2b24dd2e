use kuching::domain::SpeakerTagRegistry;

#[test]
fn given_repeated_labels_when_tagging_then_assigns_in_first_seen_order() {
    let mut registry = SpeakerTagRegistry::new();

    assert_eq!(registry.tag_for("SPEAKER_03"), "Speaker_A");
    assert_eq!(registry.tag_for("SPEAKER_00"), "Speaker_B");
    assert_eq!(registry.tag_for("SPEAKER_03"), "Speaker_A");
    assert_eq!(registry.tag_for("SPEAKER_07"), "Speaker_C");
    assert_eq!(registry.tag_for("SPEAKER_00"), "Speaker_B");

    assert_eq!(registry.len(), 3);
}

#[test]
fn given_more_than_twenty_six_speakers_when_tagging_then_continues_with_double_letters() {
    let mut registry = SpeakerTagRegistry::new();

    for i in 0..26 {
        registry.tag_for(&format!("SPEAKER_{i:02}"));
    }

    assert_eq!(registry.tag_for("SPEAKER_26"), "Speaker_AA");
    assert_eq!(registry.tag_for("SPEAKER_27"), "Speaker_AB");
}

#[test]
fn given_no_labels_then_registry_is_empty() {
    let registry = SpeakerTagRegistry::new();

    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}
