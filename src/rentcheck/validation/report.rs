use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rentcheck::calculator::StepResult;

/// Outcome of one Soll/Ist comparison row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    Correct,
    TooHigh,
    TooLow,
    Missing,
}

impl ComparisonStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correct => "Korrekt",
            Self::TooHigh => "Zu hoch",
            Self::TooLow => "Zu tief",
            Self::Missing => "Nicht erfasst",
        }
    }
}

/// One row of the validation report: the rent the formula yields (Soll)
/// against the rent the records show (Ist) at a single point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SollIstComparison {
    pub date: NaiveDate,
    pub expected_rate: Decimal,
    pub actual_rate: Decimal,
    pub expected_rent: Decimal,
    pub actual_rent: Decimal,
    /// Positive when the recorded rent exceeds the formula result.
    pub rent_delta: Decimal,
    pub status: ComparisonStatus,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Critical,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "Fehler",
            Self::Warning => "Warnung",
            Self::Critical => "Kritisch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    ChronologyViolation,
    Miscalculation,
    ExtraReasonsReview,
    TenantFavorableRent,
    ImplausibleRent,
    ImplausibleDate,
    UnknownRate,
    KindMismatch,
    UnappliedReduction,
}

impl FindingKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ChronologyViolation => "Chronologiefehler",
            Self::Miscalculation => "Falschberechnung",
            Self::ExtraReasonsReview => "Zusatzbegründung prüfen",
            Self::TenantFavorableRent => "Mieterfreundliche Abweichung",
            Self::ImplausibleRent => "Unplausibler Mietzins",
            Self::ImplausibleDate => "Unplausibles Datum",
            Self::UnknownRate => "Unbekannter Referenzzinssatz",
            Self::KindMismatch => "Widersprüchliche Anpassungsart",
            Self::UnappliedReduction => "Herabsetzungsanspruch",
        }
    }
}

/// A single reportable observation. Findings are collected into severity
/// buckets rather than raised, so a flawed history still yields a full
/// report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub message: String,
}

impl Finding {
    pub(crate) fn new(
        kind: FindingKind,
        severity: Severity,
        date: Option<NaiveDate>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            date,
            message: message.into(),
        }
    }
}

/// Published rate changes between two recorded adjustments that the tenancy's
/// records never reflect ("übersprungene Schritte").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedStepNotice {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub missed: Vec<StepResult>,
}

/// The headline payload: what the tenant could save by filing a
/// Herabsetzungsbegehren, and the earliest date it could take effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsPotential {
    pub monthly: Decimal,
    pub yearly: Decimal,
    pub next_eligible_date: NaiveDate,
}

/// Full validation outcome for one tenancy history.
///
/// The severity buckets stay separate because downstream renders them
/// differently; comparisons keep chronological insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub critical: Vec<Finding>,
    pub comparisons: Vec<SollIstComparison>,
    pub skipped_steps: Vec<SkippedStepNotice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsPotential>,
}

impl ValidationReport {
    pub(crate) fn empty() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            critical: Vec::new(),
            comparisons: Vec::new(),
            skipped_steps: Vec::new(),
            savings: None,
        }
    }

    pub(crate) fn push_finding(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => {
                self.is_valid = false;
                self.errors.push(finding);
            }
            Severity::Warning => self.warnings.push(finding),
            Severity::Critical => self.critical.push(finding),
        }
    }
}
