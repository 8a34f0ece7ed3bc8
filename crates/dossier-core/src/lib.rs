//! Dossier Core Library
//!
//! Shared functionality for the Dossier record-analysis toolkit:
//! - Insight rules engine: maps precomputed transaction and call-record
//!   aggregates to natural-language behavioral summaries
//! - Tabular export formatter: column widths, conditional styling, frozen
//!   headers, and summary sheets over a pluggable workbook sink
//! - Export configuration and timestamped output-path generation
//!
//! Upstream aggregation and the concrete spreadsheet backend are external
//! collaborators; this crate stays synchronous and stateless.

pub mod config;
pub mod error;
pub mod export;
pub mod insights;

/// Test utilities including the recording mock workbook
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::ExportConfig;
pub use error::{Error, Result};
pub use export::{
    export_table, format_platform_details, output_path, sanitize_sheet_name, validate_table,
    write_summary_sheet, Cell, CellRange, CellStyle, Column, ColumnCategory, DataTable,
    FormatCriteria, FormatRule, SummaryData, SummaryItem, ValidationReport, ValidationWarning,
    Workbook, Worksheet,
};
pub use insights::{
    analyze_anomalies, analyze_call_behavior, analyze_cash_behavior, analyze_regular_patterns,
    AdvancedStats, AmountDistribution, Anomaly, AnomalyKind, AnomalyReport, BankStats, CallStats,
};
