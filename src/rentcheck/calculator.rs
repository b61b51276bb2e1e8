use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::reference::ReferenceRateTable;

/// Statutory step width: permissible rent changes are expressed per full
/// quarter-point move of the reference rate.
pub const RATE_STEP_PERCENT: Decimal = dec!(0.25);

/// Rent change in percent granted per full rate step (Art. 13 VMWG).
pub const RENT_CHANGE_PER_STEP_PERCENT: Decimal = dec!(3);

/// One rate-change milestone encountered while walking the table between two
/// dates, with the rent the tenancy should have carried from that date on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    pub date: NaiveDate,
    pub rate_percent: Decimal,
    pub rent: Decimal,
}

/// Outcome of walking the reference-rate table over a date interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentProjection {
    pub final_rent: Decimal,
    pub final_rate: Decimal,
    pub steps: Vec<StepResult>,
}

/// Applies the statutory formula for a single rate move: 3% of the rent per
/// full 0.25-point step, proportional for fractional steps, linear in the
/// total delta. The result is rounded half-up to whole Rappen.
pub fn compute_rent(old_rent: Decimal, old_rate: Decimal, new_rate: Decimal) -> Decimal {
    let delta = new_rate - old_rate;
    let pct_change = delta / RATE_STEP_PERCENT * RENT_CHANGE_PER_STEP_PERCENT;
    let factor = Decimal::ONE + pct_change / dec!(100);
    round_rappen(old_rent * factor)
}

/// Walks every published rate change in `(from, to]` and chains the formula
/// across them, each step's output rent feeding the next step.
///
/// An empty window returns the inputs untouched. When more than one step comes
/// back, everything before the last one is a rate change the tenancy never
/// recorded.
pub fn project_rent(
    table: &ReferenceRateTable,
    start_rent: Decimal,
    start_rate: Decimal,
    from: NaiveDate,
    to: NaiveDate,
) -> RentProjection {
    let mut rent = start_rent;
    let mut rate = start_rate;
    let mut steps = Vec::new();

    for entry in table.changes_between(from, to) {
        rent = compute_rent(rent, rate, entry.rate_percent);
        rate = entry.rate_percent;
        steps.push(StepResult {
            date: entry.effective_date,
            rate_percent: rate,
            rent,
        });
    }

    RentProjection {
        final_rent: rent,
        final_rate: rate,
        steps,
    }
}

pub(crate) fn round_rappen(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
