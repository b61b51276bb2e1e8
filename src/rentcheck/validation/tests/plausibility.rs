use super::common::*;
use crate::rentcheck::domain::{AdjustmentKind, RentHistory};
use crate::rentcheck::validation::FindingKind;
use rust_decimal_macros::dec;

#[test]
fn unpublished_rate_is_warned_but_still_computed() {
    let history = history(
        adjustment(AdjustmentKind::Start, date(2025, 4, 1), dec!(1.80), dec!(2000)),
        Vec::new(),
    );

    let report = validator().validate(&history, date(2026, 2, 1));

    assert!(report
        .warnings
        .iter()
        .any(|finding| finding.kind == FindingKind::UnknownRate));
    // Best-effort arithmetic proceeds: 1.80% -> 1.25% is still projected.
    assert!(report.savings.is_some());
    assert!(report.is_valid);
}

#[test]
fn rents_outside_the_plausibility_band_are_flagged() {
    let low = history(
        adjustment(AdjustmentKind::Start, date(2025, 4, 1), dec!(1.75), dec!(50)),
        Vec::new(),
    );
    let high = history(
        adjustment(AdjustmentKind::Start, date(2025, 4, 1), dec!(1.75), dec!(25000)),
        Vec::new(),
    );
    let validator = validator();

    for tenancy in [low, high] {
        let report = validator.validate(&tenancy, date(2025, 6, 1));
        assert!(report
            .warnings
            .iter()
            .any(|finding| finding.kind == FindingKind::ImplausibleRent));
    }
}

#[test]
fn future_dated_entries_are_flagged() {
    let future_start = history(
        adjustment(AdjustmentKind::Start, date(2026, 6, 1), dec!(1.25), dec!(2000)),
        Vec::new(),
    );

    let report = validator().validate(&future_start, date(2026, 2, 1));

    assert!(report
        .warnings
        .iter()
        .any(|finding| finding.kind == FindingKind::ImplausibleDate));
}

#[test]
fn prehistoric_start_dates_are_flagged() {
    let history = history(
        adjustment(AdjustmentKind::Start, date(1962, 1, 1), dec!(1.75), dec!(300)),
        Vec::new(),
    );

    let report = validator().validate(&history, date(2026, 2, 1));

    assert!(report
        .warnings
        .iter()
        .any(|finding| finding.kind == FindingKind::ImplausibleDate));
}

#[test]
fn kind_anomalies_on_deserialized_input_are_warnings_not_refusals() {
    // Bypasses RentHistory::new the way serde input does.
    let history = RentHistory {
        start: adjustment(AdjustmentKind::Increase, date(2020, 3, 2), dec!(1.25), dec!(2000)),
        adjustments: vec![adjustment(
            AdjustmentKind::Start,
            date(2023, 12, 1),
            dec!(1.75),
            dec!(2120),
        )],
    };

    let report = validator().validate(&history, date(2024, 6, 1));

    let kind_warnings = report
        .warnings
        .iter()
        .filter(|finding| finding.kind == FindingKind::KindMismatch)
        .count();
    assert_eq!(kind_warnings, 2);
    assert!(report.is_valid);
}

#[test]
fn mislabeled_direction_is_flagged() {
    let history = history(
        start_2020(),
        vec![adjustment(
            // Marked as a decrease although the recorded rent goes up.
            AdjustmentKind::Decrease,
            date(2023, 12, 1),
            dec!(1.75),
            dec!(2120),
        )],
    );

    let report = validator().validate(&history, date(2024, 6, 1));

    assert!(report
        .warnings
        .iter()
        .any(|finding| finding.kind == FindingKind::KindMismatch));
}
