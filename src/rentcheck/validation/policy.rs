use rust_decimal::Decimal;

use super::config::ValidationConfig;
use super::report::{ComparisonStatus, Finding, FindingKind, Severity};
use crate::rentcheck::domain::Adjustment;

pub(crate) fn classify_delta(delta: Decimal, config: &ValidationConfig) -> ComparisonStatus {
    if delta.abs() <= config.tolerance_chf {
        ComparisonStatus::Correct
    } else if delta > Decimal::ZERO {
        ComparisonStatus::TooHigh
    } else {
        ComparisonStatus::TooLow
    }
}

/// Decides whether a tolerance violation is excusable. A rent above the
/// formula result with extra reasons on record (inflation, cost increases —
/// grounds the law permits alongside the rate mechanism) only asks the user
/// to verify them; without any, it is an unexplained miscalculation. A rent
/// below the formula result is tenant-favorable and never more than a
/// warning.
pub(crate) fn finding_for_comparison(
    adjustment: &Adjustment,
    status: ComparisonStatus,
    delta: Decimal,
) -> Option<Finding> {
    match status {
        ComparisonStatus::Correct | ComparisonStatus::Missing => None,
        ComparisonStatus::TooHigh => {
            if adjustment.extra_reasons.is_empty() {
                Some(Finding::new(
                    FindingKind::Miscalculation,
                    Severity::Critical,
                    Some(adjustment.date),
                    format!(
                        "Mietzins per {} liegt CHF {delta} über dem Formelwert, ohne weitere Begründung",
                        adjustment.date
                    ),
                ))
            } else {
                Some(Finding::new(
                    FindingKind::ExtraReasonsReview,
                    Severity::Warning,
                    Some(adjustment.date),
                    format!(
                        "Mietzins per {} liegt CHF {delta} über dem Formelwert; angegebene Zusatzgründe ({}) prüfen",
                        adjustment.date,
                        adjustment.extra_reasons.join(", ")
                    ),
                ))
            }
        }
        ComparisonStatus::TooLow => Some(Finding::new(
            FindingKind::TenantFavorableRent,
            Severity::Warning,
            Some(adjustment.date),
            format!(
                "Mietzins per {} liegt CHF {} unter dem Formelwert (zugunsten der Mieterschaft)",
                adjustment.date,
                delta.abs()
            ),
        )),
    }
}
