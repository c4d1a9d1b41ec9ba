use rubric_grader::domain::ScoreTier;

#[test]
fn given_scores_at_boundaries_when_classifying_then_uses_inclusive_thresholds() {
    assert_eq!(ScoreTier::from_score(8.0), ScoreTier::High);
    assert_eq!(ScoreTier::from_score(7.9), ScoreTier::Medium);
    assert_eq!(ScoreTier::from_score(5.0), ScoreTier::Medium);
    assert_eq!(ScoreTier::from_score(4.9), ScoreTier::Low);
}

#[test]
fn given_extreme_scores_when_classifying_then_maps_to_outer_tiers() {
    assert_eq!(ScoreTier::from_score(10.0), ScoreTier::High);
    assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Low);
}
