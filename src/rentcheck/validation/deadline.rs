use chrono::{Datelike, Months, NaiveDate};

/// Quarter-end termination dates use fixed days of month (31 Mar, 30 Jun,
/// 30 Sep, 31 Dec), never generic month-end arithmetic.
const QUARTER_ENDS: [(u32, u32); 4] = [(3, 31), (6, 30), (9, 30), (12, 31)];

/// Earliest date a Herabsetzungsbegehren filed "today" can take effect:
/// `notice_months` of notice, then forward to the first quarter-end strictly
/// after the shifted date. Landing exactly on a quarter-end advances to the
/// following one.
pub fn next_eligible_date(today: NaiveDate, notice_months: u32) -> NaiveDate {
    let shifted = today
        .checked_add_months(Months::new(notice_months))
        .unwrap_or(NaiveDate::MAX);
    next_quarter_end_after(shifted)
}

fn next_quarter_end_after(date: NaiveDate) -> NaiveDate {
    let year = date.year();
    QUARTER_ENDS
        .iter()
        .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .find(|candidate| *candidate > date)
        .unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year + 1, 3, 31).unwrap_or(NaiveDate::MAX)
        })
}
