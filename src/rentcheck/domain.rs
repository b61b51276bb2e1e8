use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Role of an entry in a tenancy's rent history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    Start,
    Increase,
    Decrease,
}

impl AdjustmentKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Mietbeginn",
            Self::Increase => "Erhöhung",
            Self::Decrease => "Herabsetzung",
        }
    }
}

/// One point in a tenancy's rent history as the tenant's records show it:
/// the reference rate the landlord cited and the rent that applied from
/// `date` on. Assembled upstream (manual entry or document extraction) and
/// never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub date: NaiveDate,
    pub rate_percent: Decimal,
    pub rent: Decimal,
    pub kind: AdjustmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_reasons: Vec<String>,
}

/// Construction errors for programmatically assembled histories.
///
/// Histories arriving through serde bypass these checks on purpose; the
/// validator reports kind anomalies as warnings instead of refusing the input.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history must begin with a start adjustment, found {0:?}")]
    FirstEntryNotStart(AdjustmentKind),
    #[error("follow-up adjustment dated {0} is marked as a start entry")]
    DuplicateStart(NaiveDate),
}

/// A tenancy's recorded rent history: the contract inception plus every
/// later adjustment in the order the records show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentHistory {
    pub start: Adjustment,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}

impl RentHistory {
    pub fn new(start: Adjustment, adjustments: Vec<Adjustment>) -> Result<Self, HistoryError> {
        if start.kind != AdjustmentKind::Start {
            return Err(HistoryError::FirstEntryNotStart(start.kind));
        }
        if let Some(duplicate) = adjustments
            .iter()
            .find(|adjustment| adjustment.kind == AdjustmentKind::Start)
        {
            return Err(HistoryError::DuplicateStart(duplicate.date));
        }

        Ok(Self { start, adjustments })
    }

    /// The adjustment whose rent the tenant is paying now: the last recorded
    /// entry, or the start of the contract when nothing followed it.
    pub fn current(&self) -> &Adjustment {
        self.adjustments.last().unwrap_or(&self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn adjustment(kind: AdjustmentKind, year: i32) -> Adjustment {
        Adjustment {
            date: NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date"),
            rate_percent: dec!(1.50),
            rent: dec!(1500),
            kind,
            justification: None,
            extra_reasons: Vec::new(),
        }
    }

    #[test]
    fn new_rejects_a_non_start_first_entry() {
        let result = RentHistory::new(adjustment(AdjustmentKind::Increase, 2020), Vec::new());
        match result {
            Err(HistoryError::FirstEntryNotStart(AdjustmentKind::Increase)) => {}
            other => panic!("expected first-entry error, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_a_second_start_entry() {
        let result = RentHistory::new(
            adjustment(AdjustmentKind::Start, 2020),
            vec![adjustment(AdjustmentKind::Start, 2022)],
        );
        assert!(matches!(result, Err(HistoryError::DuplicateStart(_))));
    }

    #[test]
    fn current_falls_back_to_the_start_entry() {
        let history = RentHistory::new(adjustment(AdjustmentKind::Start, 2020), Vec::new())
            .expect("valid history");
        assert_eq!(history.current(), &history.start);
    }

    #[test]
    fn current_is_the_last_recorded_adjustment() {
        let history = RentHistory::new(
            adjustment(AdjustmentKind::Start, 2020),
            vec![
                adjustment(AdjustmentKind::Increase, 2021),
                adjustment(AdjustmentKind::Decrease, 2023),
            ],
        )
        .expect("valid history");
        assert_eq!(
            history.current().date,
            NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
        );
    }
}
