//! Reference-rate lookups, the statutory adjustment formula, and the
//! tenancy-history validator.

pub mod calculator;
pub mod domain;
pub mod import;
pub mod reference;
pub mod validation;

pub use calculator::{compute_rent, project_rent, RentProjection, StepResult};
pub use domain::{Adjustment, AdjustmentKind, HistoryError, RentHistory};
pub use import::{CsvHistoryImporter, HistoryImportError};
pub use reference::{RateEntry, ReferenceRateTable};
pub use validation::{
    ComparisonStatus, Finding, FindingKind, HistoryValidator, SavingsPotential, Severity,
    SkippedStepNotice, SollIstComparison, ValidationConfig, ValidationReport,
};
