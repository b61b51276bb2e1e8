use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::HistoryImportError;
use crate::rentcheck::domain::{Adjustment, AdjustmentKind};

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<Adjustment>, HistoryImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<HistoryRow>().enumerate() {
        // Header occupies line 1, the first data row line 2.
        let line = index + 2;
        let row = record?;
        records.push(row.into_adjustment(line)?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Datum")]
    datum: String,
    #[serde(rename = "Art")]
    art: String,
    #[serde(rename = "Satz")]
    satz: String,
    #[serde(rename = "Mietzins")]
    mietzins: String,
    #[serde(rename = "Begruendung", default, deserialize_with = "empty_string_as_none")]
    begruendung: Option<String>,
    #[serde(rename = "Zusatzgruende", default, deserialize_with = "empty_string_as_none")]
    zusatzgruende: Option<String>,
}

impl HistoryRow {
    fn into_adjustment(self, line: usize) -> Result<Adjustment, HistoryImportError> {
        let date = parse_date(&self.datum).ok_or_else(|| HistoryImportError::Row {
            line,
            reason: format!("unparseable date '{}'", self.datum),
        })?;
        let kind = parse_kind(&self.art).ok_or_else(|| HistoryImportError::Row {
            line,
            reason: format!("unknown adjustment kind '{}'", self.art),
        })?;
        let rate_percent = parse_decimal(&self.satz).ok_or_else(|| HistoryImportError::Row {
            line,
            reason: format!("unparseable reference rate '{}'", self.satz),
        })?;
        let rent = parse_decimal(&self.mietzins).ok_or_else(|| HistoryImportError::Row {
            line,
            reason: format!("unparseable rent '{}'", self.mietzins),
        })?;

        let extra_reasons = self
            .zusatzgruende
            .as_deref()
            .map(split_reasons)
            .unwrap_or_default();

        Ok(Adjustment {
            date,
            rate_percent,
            rent,
            kind,
            justification: self.begruendung,
            extra_reasons,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    // Swiss exports commonly carry dd.mm.yyyy.
    NaiveDate::parse_from_str(trimmed, "%d.%m.%Y").ok()
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    value.trim().replace('\'', "").parse::<Decimal>().ok()
}

fn parse_kind(value: &str) -> Option<AdjustmentKind> {
    match value.trim().to_lowercase().as_str() {
        "mietbeginn" | "start" => Some(AdjustmentKind::Start),
        "erhöhung" | "erhoehung" | "increase" => Some(AdjustmentKind::Increase),
        "herabsetzung" | "senkung" | "decrease" => Some(AdjustmentKind::Decrease),
        _ => None,
    }
}

fn split_reasons(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
