use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::config::ValidationConfig;
use super::deadline::next_eligible_date;
use super::policy;
use super::report::{
    ComparisonStatus, Finding, FindingKind, SavingsPotential, Severity, SkippedStepNotice,
    SollIstComparison,
};
use crate::rentcheck::calculator::{compute_rent, project_rent};
use crate::rentcheck::domain::{AdjustmentKind, RentHistory};
use crate::rentcheck::reference::ReferenceRateTable;

/// Dates across `start` and the recorded adjustments must strictly increase.
/// Violations invalidate the report but never stop it; the remaining passes
/// run over the records in the order they were given.
pub(crate) fn chronology_findings(history: &RentHistory) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut previous = &history.start;

    for adjustment in &history.adjustments {
        if adjustment.date <= previous.date {
            findings.push(Finding::new(
                FindingKind::ChronologyViolation,
                Severity::Error,
                Some(adjustment.date),
                format!(
                    "Anpassung per {} liegt nicht nach dem vorangehenden Eintrag per {}",
                    adjustment.date, previous.date
                ),
            ));
        }
        previous = adjustment;
    }

    findings
}

/// Soft sanity checks over the raw records. Everything here is a warning:
/// the arithmetic proceeds best-effort regardless.
pub(crate) fn plausibility_findings(
    history: &RentHistory,
    today: NaiveDate,
    table: &ReferenceRateTable,
    config: &ValidationConfig,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let start = &history.start;

    if start.kind != AdjustmentKind::Start {
        findings.push(Finding::new(
            FindingKind::KindMismatch,
            Severity::Warning,
            Some(start.date),
            "Erster Eintrag ist nicht als Mietbeginn erfasst".to_string(),
        ));
    }
    if start.date < config.earliest_plausible_start {
        findings.push(Finding::new(
            FindingKind::ImplausibleDate,
            Severity::Warning,
            Some(start.date),
            format!("Mietbeginn per {} liegt ungewöhnlich weit zurück", start.date),
        ));
    }
    if start.date > today {
        findings.push(Finding::new(
            FindingKind::ImplausibleDate,
            Severity::Warning,
            Some(start.date),
            format!("Mietbeginn per {} liegt in der Zukunft", start.date),
        ));
    }

    for adjustment in std::iter::once(start).chain(history.adjustments.iter()) {
        if adjustment.rent < config.min_plausible_rent || adjustment.rent > config.max_plausible_rent
        {
            findings.push(Finding::new(
                FindingKind::ImplausibleRent,
                Severity::Warning,
                Some(adjustment.date),
                format!(
                    "Mietzins von CHF {} per {} liegt ausserhalb des plausiblen Bereichs",
                    adjustment.rent, adjustment.date
                ),
            ));
        }
        if !table.contains_rate(adjustment.rate_percent) {
            findings.push(Finding::new(
                FindingKind::UnknownRate,
                Severity::Warning,
                Some(adjustment.date),
                format!(
                    "Referenzzinssatz von {}% per {} wurde nie publiziert; Berechnung erfolgt trotzdem",
                    adjustment.rate_percent, adjustment.date
                ),
            ));
        }
    }

    let mut previous = start;
    for adjustment in &history.adjustments {
        if adjustment.date > today {
            findings.push(Finding::new(
                FindingKind::ImplausibleDate,
                Severity::Warning,
                Some(adjustment.date),
                format!("Anpassung per {} liegt nach dem Prüfdatum", adjustment.date),
            ));
        }
        match adjustment.kind {
            AdjustmentKind::Start => findings.push(Finding::new(
                FindingKind::KindMismatch,
                Severity::Warning,
                Some(adjustment.date),
                format!("Anpassung per {} ist fälschlich als Mietbeginn erfasst", adjustment.date),
            )),
            AdjustmentKind::Increase if adjustment.rent < previous.rent => {
                findings.push(Finding::new(
                    FindingKind::KindMismatch,
                    Severity::Warning,
                    Some(adjustment.date),
                    format!("Als Erhöhung erfasste Anpassung per {} senkt den Mietzins", adjustment.date),
                ));
            }
            AdjustmentKind::Decrease if adjustment.rent > previous.rent => {
                findings.push(Finding::new(
                    FindingKind::KindMismatch,
                    Severity::Warning,
                    Some(adjustment.date),
                    format!("Als Herabsetzung erfasste Anpassung per {} erhöht den Mietzins", adjustment.date),
                ));
            }
            _ => {}
        }
        previous = adjustment;
    }

    findings
}

pub(crate) struct Reconciliation {
    pub comparisons: Vec<SollIstComparison>,
    pub notices: Vec<SkippedStepNotice>,
    pub findings: Vec<Finding>,
}

/// Walks the recorded adjustments pairwise. Each adjustment is checked with
/// the statutory formula applied from the previous recorded point to the rate
/// the records claim; published changes the records jumped over become
/// `Missing` rows plus a skipped-steps notice.
pub(crate) fn reconcile_adjustments(
    history: &RentHistory,
    table: &ReferenceRateTable,
    config: &ValidationConfig,
) -> Reconciliation {
    let mut comparisons = Vec::new();
    let mut notices = Vec::new();
    let mut findings = Vec::new();
    let mut previous = &history.start;

    for adjustment in &history.adjustments {
        let projection = project_rent(
            table,
            previous.rent,
            previous.rate_percent,
            previous.date,
            adjustment.date,
        );

        if projection.steps.len() > 1 {
            let missed = projection.steps[..projection.steps.len() - 1].to_vec();
            for step in &missed {
                comparisons.push(SollIstComparison {
                    date: step.date,
                    expected_rate: step.rate_percent,
                    actual_rate: previous.rate_percent,
                    expected_rent: step.rent,
                    actual_rent: previous.rent,
                    rent_delta: previous.rent - step.rent,
                    status: ComparisonStatus::Missing,
                    explanation: format!(
                        "Referenzzinssatz-Änderung per {} auf {}% wurde in den Unterlagen nie nachvollzogen",
                        step.date, step.rate_percent
                    ),
                });
            }
            notices.push(SkippedStepNotice {
                from_date: previous.date,
                to_date: adjustment.date,
                missed,
            });
        }

        let expected_rent = compute_rent(previous.rent, previous.rate_percent, adjustment.rate_percent);
        let delta = adjustment.rent - expected_rent;
        let status = policy::classify_delta(delta, config);

        comparisons.push(SollIstComparison {
            date: adjustment.date,
            expected_rate: adjustment.rate_percent,
            actual_rate: adjustment.rate_percent,
            expected_rent,
            actual_rent: adjustment.rent,
            rent_delta: delta,
            status,
            explanation: comparison_explanation(status, delta),
        });

        if let Some(finding) = policy::finding_for_comparison(adjustment, status, delta) {
            findings.push(finding);
        }

        previous = adjustment;
    }

    Reconciliation {
        comparisons,
        notices,
        findings,
    }
}

pub(crate) struct CurrentState {
    pub comparison: Option<SollIstComparison>,
    pub notice: Option<SkippedStepNotice>,
    pub finding: Option<Finding>,
    pub savings: Option<SavingsPotential>,
}

impl CurrentState {
    fn clean() -> Self {
        Self {
            comparison: None,
            notice: None,
            finding: None,
            savings: None,
        }
    }
}

/// The headline check: projects the currently paid rent through every rate
/// change up to "today". A lower rate in force with a rent delta beyond the
/// tolerance means an entitled reduction the landlord never applied.
pub(crate) fn current_state_check(
    history: &RentHistory,
    today: NaiveDate,
    table: &ReferenceRateTable,
    config: &ValidationConfig,
) -> CurrentState {
    let current = history.current();
    let projection = project_rent(table, current.rent, current.rate_percent, current.date, today);

    if projection.final_rate >= current.rate_percent {
        return CurrentState::clean();
    }

    let delta = current.rent - projection.final_rent;
    if delta <= config.tolerance_chf {
        return CurrentState::clean();
    }

    // final_rate differs from the starting rate, so the walk saw at least one
    // change; the last one is the change in force today.
    let trigger = match projection.steps.last() {
        Some(step) => step.clone(),
        None => return CurrentState::clean(),
    };

    let eligible = next_eligible_date(today, config.notice_months);
    let savings = SavingsPotential {
        monthly: delta,
        yearly: delta * dec!(12),
        next_eligible_date: eligible,
    };

    let finding = Finding::new(
        FindingKind::UnappliedReduction,
        Severity::Critical,
        Some(trigger.date),
        format!(
            "Referenzzinssatz sank per {} auf {}%; geschuldet wären CHF {} statt CHF {} \
             (Ersparnis CHF {}/Monat, CHF {}/Jahr). Herabsetzung frühestens wirksam per {}",
            trigger.date,
            projection.final_rate,
            projection.final_rent,
            current.rent,
            savings.monthly,
            savings.yearly,
            eligible
        ),
    );

    let comparison = SollIstComparison {
        date: trigger.date,
        expected_rate: projection.final_rate,
        actual_rate: current.rate_percent,
        expected_rent: projection.final_rent,
        actual_rent: current.rent,
        rent_delta: delta,
        status: ComparisonStatus::TooHigh,
        explanation: format!(
            "Herabsetzungsanspruch seit {} nicht umgesetzt",
            trigger.date
        ),
    };

    let notice = if projection.steps.len() > 1 {
        Some(SkippedStepNotice {
            from_date: current.date,
            to_date: today,
            missed: projection.steps[..projection.steps.len() - 1].to_vec(),
        })
    } else {
        None
    };

    CurrentState {
        comparison: Some(comparison),
        notice,
        finding: Some(finding),
        savings: Some(savings),
    }
}

fn comparison_explanation(status: ComparisonStatus, delta: rust_decimal::Decimal) -> String {
    match status {
        ComparisonStatus::Correct => format!(
            "Erfasster Mietzins entspricht dem Formelwert (Abweichung CHF {})",
            delta.abs()
        ),
        ComparisonStatus::TooHigh => {
            format!("Erfasster Mietzins liegt CHF {delta} über dem Formelwert")
        }
        ComparisonStatus::TooLow => format!(
            "Erfasster Mietzins liegt CHF {} unter dem Formelwert",
            delta.abs()
        ),
        ComparisonStatus::Missing => "Änderung ohne erfasste Anpassung".to_string(),
    }
}
