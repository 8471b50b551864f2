use super::common::*;
use crate::scoring::{
    overall_score, scenario_score, MetricKind, ScenarioScore, ScoreError, SubScore, SubScoreSet,
};

#[test]
fn uniform_sub_scores_aggregate_to_themselves() {
    let top = scenario_score(&uniform_set(SubScore::MAX)).expect("complete set");
    assert_eq!(top.value(), 10);

    let bottom = scenario_score(&uniform_set(SubScore::MIN)).expect("complete set");
    assert_eq!(bottom.value(), 1);
}

#[test]
fn mean_is_rounded_half_to_even() {
    let upper_tie = set_from_values([10.0, 10.0, 10.0, 10.0, 4.0, 1.0]);
    assert_eq!(scenario_score(&upper_tie).unwrap().value(), 8);

    let lower_tie = set_from_values([10.0, 10.0, 10.0, 7.0, 1.0, 1.0]);
    assert_eq!(scenario_score(&lower_tie).unwrap().value(), 6);

    let fractional = set_from_values([9.5, 8.0, 7.25, 6.0, 10.0, 1.0]);
    assert_eq!(scenario_score(&fractional).unwrap().value(), 7);
}

#[test]
fn insertion_order_does_not_change_the_score() {
    let values = [9.5, 3.0, 7.25, 1.0, 10.0, 4.75];
    let forward = set_from_values(values);

    let mut reversed = SubScoreSet::new();
    for (kind, value) in MetricKind::ordered().into_iter().zip(values).rev() {
        reversed.insert(kind, SubScore::new(value).unwrap());
    }

    assert_eq!(scenario_score(&forward).unwrap(), scenario_score(&reversed).unwrap());
}

#[test]
fn missing_metric_is_reported_not_defaulted() {
    let partial: SubScoreSet = uniform_set(SubScore::MAX)
        .iter()
        .filter(|(kind, _)| *kind != MetricKind::DryDays)
        .collect();

    assert_eq!(partial.missing(), vec![MetricKind::DryDays]);
    match scenario_score(&partial) {
        Err(ScoreError::MissingMetric(MetricKind::DryDays)) => {}
        other => panic!("expected missing dry days, got {other:?}"),
    }

    match scenario_score(&SubScoreSet::new()) {
        Err(ScoreError::MissingMetric(MetricKind::MaxTemperature)) => {}
        other => panic!("expected missing max temperature, got {other:?}"),
    }
}

#[test]
fn scenario_score_rejects_out_of_range_values() {
    assert!(matches!(
        ScenarioScore::new(0),
        Err(ScoreError::OutOfRange { value: 0 })
    ));
    assert!(matches!(
        ScenarioScore::new(11),
        Err(ScoreError::OutOfRange { value: 11 })
    ));
    assert_eq!(ScenarioScore::new(5).unwrap().value(), 5);
}

#[test]
fn overall_score_stays_in_range_and_is_symmetric() {
    for low in 1..=10u8 {
        for high in 1..=10u8 {
            let low = ScenarioScore::new(low).unwrap();
            let high = ScenarioScore::new(high).unwrap();
            let forward = overall_score(low, high);
            assert!((1..=10).contains(&forward.value()));
            assert_eq!(forward, overall_score(high, low));
        }
    }
}

#[test]
fn overall_score_rounds_ties_to_even() {
    let score = |value| ScenarioScore::new(value).unwrap();
    assert_eq!(overall_score(score(7), score(8)).value(), 8);
    assert_eq!(overall_score(score(6), score(7)).value(), 6);
    assert_eq!(overall_score(score(10), score(10)).value(), 10);
    assert_eq!(overall_score(score(1), score(1)).value(), 1);
}

#[test]
fn cold_days_are_accumulated_before_hot_days() {
    let (max, min, precipitation, hot, cold, dry) = (7.1, 3.3, 9.7, 4.5, 2.0, 6.4);
    let set = set_from_values([max, min, precipitation, hot, cold, dry]);

    let total = max + min + precipitation + cold + hot + dry;
    let expected = (total / 6.0_f64).round_ties_even() as u8;
    assert_eq!(scenario_score(&set).unwrap().value(), expected);
}
