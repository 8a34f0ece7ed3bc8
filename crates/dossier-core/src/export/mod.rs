//! Tabular export formatter
//!
//! Renders rectangular datasets into styled workbook sheets through the
//! [`sink`] abstraction: column-width assignment, conditional value
//! styling, a frozen header row, a generated summary sheet, plus the
//! validation and output-path utilities around them.

pub mod format;
pub mod paths;
pub mod sink;
pub mod summary;
pub mod table;

pub use format::{
    add_conditional_formatting, export_table, format_sheet, set_column_widths, ColumnCategory,
    HIGHLIGHT_STYLE, NEGATIVE_STYLE, POSITIVE_STYLE,
};
pub use paths::output_path;
pub use sink::{
    sanitize_sheet_name, CellRange, CellStyle, FormatCriteria, FormatRule, Workbook, Worksheet,
};
pub use summary::{
    summary_table, write_summary_sheet, SummaryData, SummaryItem, SUMMARY_SHEET_NAME,
};
pub use table::{
    format_platform_details, validate_table, Cell, Column, DataTable, ValidationReport,
    ValidationWarning,
};
