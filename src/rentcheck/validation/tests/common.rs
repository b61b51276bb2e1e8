use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::rentcheck::domain::{Adjustment, AdjustmentKind, RentHistory};
use crate::rentcheck::validation::{HistoryValidator, ValidationConfig};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn validator() -> HistoryValidator {
    HistoryValidator::with_official_table(ValidationConfig::default())
}

pub(super) fn adjustment(
    kind: AdjustmentKind,
    on: NaiveDate,
    rate_percent: Decimal,
    rent: Decimal,
) -> Adjustment {
    Adjustment {
        date: on,
        rate_percent,
        rent,
        kind,
        justification: None,
        extra_reasons: Vec::new(),
    }
}

/// Contract opened 2020-03-02 at the then-current 1.25% for CHF 2000, the
/// anchor tenancy used across the suites.
pub(super) fn start_2020() -> Adjustment {
    adjustment(
        AdjustmentKind::Start,
        date(2020, 3, 2),
        dec!(1.25),
        dec!(2000),
    )
}

pub(super) fn history(start: Adjustment, adjustments: Vec<Adjustment>) -> RentHistory {
    RentHistory::new(start, adjustments).expect("valid history")
}

/// Tenancy whose records claim the stale 1.75% while the published rate has
/// since dropped twice; the unapplied-reduction scenario.
pub(super) fn stale_rate_history() -> RentHistory {
    history(
        adjustment(
            AdjustmentKind::Start,
            date(2025, 4, 1),
            dec!(1.75),
            dec!(2000),
        ),
        Vec::new(),
    )
}
