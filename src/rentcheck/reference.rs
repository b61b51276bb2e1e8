use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One published reference-rate change: the rate in force from
/// `effective_date` until the next entry takes over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    pub effective_date: NaiveDate,
    pub rate_percent: Decimal,
}

/// Immutable lookup table over the published reference-rate series.
///
/// Entries are held sorted descending by effective date. The table is built
/// once at startup; updating it is a redeploy, never a runtime mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRateTable {
    entries: Vec<RateEntry>,
}

impl ReferenceRateTable {
    pub fn new(mut entries: Vec<RateEntry>) -> Self {
        entries.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
        Self { entries }
    }

    /// The official series published by the Bundesamt für Wohnungswesen,
    /// from the first publication in September 2008 onward.
    pub fn official() -> Self {
        Self::new(official_series())
    }

    /// Rate in force on `date`: the latest entry effective on or before it.
    /// `None` when `date` precedes the first publication.
    pub fn rate_at(&self, date: NaiveDate) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|entry| entry.effective_date <= date)
            .map(|entry| entry.rate_percent)
    }

    /// Every change effective strictly after `from` and up to and including
    /// `to`, in ascending chronological order.
    pub fn changes_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<RateEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.effective_date > from && entry.effective_date <= to)
            .cloned()
            .collect()
    }

    /// Whether `rate` was ever a published value. Used to flag records that
    /// claim a rate the regulator never set.
    pub fn contains_rate(&self, rate: Decimal) -> bool {
        self.entries.iter().any(|entry| entry.rate_percent == rate)
    }

    pub fn earliest(&self) -> Option<&RateEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }
}

fn official_series() -> Vec<RateEntry> {
    [
        (2025, 9, 2, dec!(1.25)),
        (2025, 3, 4, dec!(1.50)),
        (2023, 12, 2, dec!(1.75)),
        (2023, 6, 2, dec!(1.50)),
        (2020, 3, 2, dec!(1.25)),
        (2017, 6, 2, dec!(1.50)),
        (2015, 6, 2, dec!(1.75)),
        (2013, 9, 3, dec!(2.00)),
        (2012, 6, 2, dec!(2.25)),
        (2011, 12, 2, dec!(2.50)),
        (2010, 12, 2, dec!(2.75)),
        (2009, 9, 2, dec!(3.00)),
        (2009, 3, 2, dec!(3.25)),
        (2008, 9, 10, dec!(3.50)),
    ]
    .into_iter()
    .filter_map(|(year, month, day, rate_percent)| {
        NaiveDate::from_ymd_opt(year, month, day).map(|effective_date| RateEntry {
            effective_date,
            rate_percent,
        })
    })
    .collect()
}
