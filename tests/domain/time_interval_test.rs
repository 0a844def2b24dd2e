use kuching::domain::TimeInterval;

#[test]
fn given_valid_bounds_when_constructing_then_exposes_duration() {
    let interval = TimeInterval::new(1.5, 4.0).expect("valid interval");

    assert_eq!(interval.start(), 1.5);
    assert_eq!(interval.end(), 4.0);
    assert_eq!(interval.duration(), 2.5);
}

#[test]
fn given_zero_length_span_when_constructing_then_rejects() {
    assert!(TimeInterval::new(2.0, 2.0).is_err());
}

#[test]
fn given_inverted_bounds_when_constructing_then_rejects() {
    assert!(TimeInterval::new(5.0, 2.0).is_err());
}

#[test]
fn given_negative_start_when_constructing_then_rejects() {
    assert!(TimeInterval::new(-0.5, 2.0).is_err());
}

#[test]
fn given_non_finite_bounds_when_constructing_then_rejects() {
    assert!(TimeInterval::new(0.0, f64::NAN).is_err());
    assert!(TimeInterval::new(0.0, f64::INFINITY).is_err());
}
