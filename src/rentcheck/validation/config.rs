use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Product heuristics backing the validator. The values mirror how the
/// product classifies findings in practice; none of them carries a stated
/// legal basis, so they stay configurable rather than hard-coded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Absolute CHF tolerance under which a recorded rent counts as correct.
    pub tolerance_chf: Decimal,
    /// Months of notice a Herabsetzungsbegehren needs before a quarter-end.
    pub notice_months: u32,
    /// Plausibility band for monthly rents, in CHF.
    pub min_plausible_rent: Decimal,
    pub max_plausible_rent: Decimal,
    /// Contract start dates before this are flagged as implausible.
    pub earliest_plausible_start: NaiveDate,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            tolerance_chf: dec!(1.00),
            notice_months: 3,
            min_plausible_rent: dec!(100),
            max_plausible_rent: dec!(20000),
            earliest_plausible_start: NaiveDate::from_ymd_opt(1970, 1, 1)
                .unwrap_or(NaiveDate::MIN),
        }
    }
}
