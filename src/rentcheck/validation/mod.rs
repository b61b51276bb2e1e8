//! Soll/Ist validation of a tenancy's recorded rent history against the
//! published reference-rate series.

mod config;
mod deadline;
mod policy;
mod report;
mod rules;

#[cfg(test)]
mod tests;

pub use config::ValidationConfig;
pub use deadline::next_eligible_date;
pub use report::{
    ComparisonStatus, Finding, FindingKind, SavingsPotential, Severity, SkippedStepNotice,
    SollIstComparison, ValidationReport,
};

use chrono::NaiveDate;

use crate::rentcheck::domain::RentHistory;
use crate::rentcheck::reference::ReferenceRateTable;

/// Stateless validator applying the published rate table and the product
/// policy to one tenancy history. A fresh call per input; no state survives
/// between runs.
pub struct HistoryValidator {
    table: ReferenceRateTable,
    config: ValidationConfig,
}

impl Default for HistoryValidator {
    fn default() -> Self {
        Self::with_official_table(ValidationConfig::default())
    }
}

impl HistoryValidator {
    pub fn new(table: ReferenceRateTable, config: ValidationConfig) -> Self {
        Self { table, config }
    }

    pub fn with_official_table(config: ValidationConfig) -> Self {
        Self::new(ReferenceRateTable::official(), config)
    }

    pub fn table(&self) -> &ReferenceRateTable {
        &self.table
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Single synchronous pass over the history as of `today` (injected so
    /// runs stay deterministic). Chronology violations mark the report
    /// invalid but never abort it.
    pub fn validate(&self, history: &RentHistory, today: NaiveDate) -> ValidationReport {
        let mut report = ValidationReport::empty();

        for finding in rules::chronology_findings(history) {
            report.push_finding(finding);
        }
        for finding in rules::plausibility_findings(history, today, &self.table, &self.config) {
            report.push_finding(finding);
        }

        let reconciliation = rules::reconcile_adjustments(history, &self.table, &self.config);
        report.comparisons.extend(reconciliation.comparisons);
        report.skipped_steps.extend(reconciliation.notices);
        for finding in reconciliation.findings {
            report.push_finding(finding);
        }

        let current = rules::current_state_check(history, today, &self.table, &self.config);
        if let Some(row) = current.comparison {
            report.comparisons.push(row);
        }
        if let Some(notice) = current.notice {
            report.skipped_steps.push(notice);
        }
        if let Some(finding) = current.finding {
            report.push_finding(finding);
        }
        report.savings = current.savings;

        report
    }
}
