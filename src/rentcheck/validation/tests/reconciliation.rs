use super::common::*;
use crate::rentcheck::domain::{Adjustment, AdjustmentKind};
use crate::rentcheck::validation::{ComparisonStatus, FindingKind, Severity};
use rust_decimal_macros::dec;

fn increase_2023(rent: rust_decimal::Decimal) -> Adjustment {
    adjustment(AdjustmentKind::Increase, date(2023, 12, 1), dec!(1.75), rent)
}

#[test]
fn formula_conform_increase_is_correct() {
    // 1.25% -> 1.75% is two full steps, +6%: 2000 becomes 2120.
    let history = history(start_2020(), vec![increase_2023(dec!(2120))]);

    let report = validator().validate(&history, date(2024, 6, 1));

    let row = report
        .comparisons
        .iter()
        .find(|row| row.date == date(2023, 12, 1))
        .expect("comparison row");
    assert_eq!(row.status, ComparisonStatus::Correct);
    assert_eq!(row.expected_rent, dec!(2120.00));
    assert_eq!(row.actual_rent, dec!(2120));
    assert!(report.critical.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn tolerance_boundary_sits_at_one_franc() {
    let within = history(start_2020(), vec![increase_2023(dec!(2121.00))]);
    let beyond = history(start_2020(), vec![increase_2023(dec!(2121.01))]);
    let validator = validator();

    let within_report = validator.validate(&within, date(2024, 6, 1));
    let beyond_report = validator.validate(&beyond, date(2024, 6, 1));

    assert_eq!(within_report.comparisons[0].status, ComparisonStatus::Correct);
    assert_eq!(beyond_report.comparisons[0].status, ComparisonStatus::TooHigh);
}

#[test]
fn unexplained_overcharge_is_a_critical_miscalculation() {
    let history = history(start_2020(), vec![increase_2023(dec!(2240))]);

    let report = validator().validate(&history, date(2024, 6, 1));

    let row = report
        .comparisons
        .iter()
        .find(|row| row.date == date(2023, 12, 1))
        .expect("comparison row");
    assert_eq!(row.status, ComparisonStatus::TooHigh);
    assert_eq!(row.rent_delta, dec!(120.00));

    let finding = report
        .critical
        .iter()
        .find(|finding| finding.kind == FindingKind::Miscalculation)
        .expect("miscalculation finding");
    assert_eq!(finding.date, Some(date(2023, 12, 1)));
    assert!(report.is_valid, "a miscalculation does not invalidate the input");
}

#[test]
fn extra_reasons_soften_an_overcharge_to_a_review_warning() {
    let mut overcharged = increase_2023(dec!(2240));
    overcharged.extra_reasons = vec!["Teuerung".to_string(), "Unterhaltskosten".to_string()];
    let history = history(start_2020(), vec![overcharged]);

    let report = validator().validate(&history, date(2024, 6, 1));

    assert!(report.critical.is_empty());
    let warning = report
        .warnings
        .iter()
        .find(|finding| finding.kind == FindingKind::ExtraReasonsReview)
        .expect("review warning");
    assert_eq!(warning.severity, Severity::Warning);
    assert!(warning.message.contains("Teuerung"));
}

#[test]
fn undercharge_is_a_tenant_favorable_warning() {
    let history = history(start_2020(), vec![increase_2023(dec!(2080))]);

    let report = validator().validate(&history, date(2024, 6, 1));

    let row = report
        .comparisons
        .iter()
        .find(|row| row.date == date(2023, 12, 1))
        .expect("comparison row");
    assert_eq!(row.status, ComparisonStatus::TooLow);
    assert!(report.critical.is_empty());
    assert!(report
        .warnings
        .iter()
        .any(|finding| finding.kind == FindingKind::TenantFavorableRent));
}

#[test]
fn jumped_over_changes_become_missing_rows_and_a_notice() {
    // Between late 2023 and early 2026 the published rate moved twice; the
    // single recorded decrease only reflects the end state.
    let history = history(
        adjustment(AdjustmentKind::Start, date(2023, 12, 5), dec!(1.75), dec!(2000)),
        vec![adjustment(
            AdjustmentKind::Decrease,
            date(2026, 1, 15),
            dec!(1.25),
            dec!(1880),
        )],
    );

    let report = validator().validate(&history, date(2026, 2, 1));

    let missing = report
        .comparisons
        .iter()
        .find(|row| row.status == ComparisonStatus::Missing)
        .expect("missing row for the jumped-over change");
    assert_eq!(missing.date, date(2025, 3, 4));
    assert_eq!(missing.expected_rate, dec!(1.50));
    assert_eq!(missing.expected_rent, dec!(1940.00));

    let notice = report.skipped_steps.first().expect("skipped-step notice");
    assert_eq!(notice.from_date, date(2023, 12, 5));
    assert_eq!(notice.to_date, date(2026, 1, 15));
    assert_eq!(notice.missed.len(), 1);

    // The recorded decrease itself matches the claimed rate change exactly.
    let row = report
        .comparisons
        .iter()
        .find(|row| row.date == date(2026, 1, 15))
        .expect("comparison row");
    assert_eq!(row.status, ComparisonStatus::Correct);
    assert_eq!(row.expected_rent, dec!(1880.00));
}

#[test]
fn missing_rows_precede_the_adjustment_row_chronologically() {
    let history = history(
        adjustment(AdjustmentKind::Start, date(2023, 12, 5), dec!(1.75), dec!(2000)),
        vec![adjustment(
            AdjustmentKind::Decrease,
            date(2026, 1, 15),
            dec!(1.25),
            dec!(1880),
        )],
    );

    let report = validator().validate(&history, date(2026, 2, 1));

    let dates: Vec<_> = report.comparisons.iter().map(|row| row.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted, "comparison rows keep chronological insertion order");
}
