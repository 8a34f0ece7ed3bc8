//! Workbook sink abstraction
//!
//! The formatter writes through these traits; the concrete spreadsheet
//! backend (xlsx writer, test recorder, ...) lives outside this crate.
//! Sink failures propagate to the caller unchanged, there is no retry.

use crate::error::Result;
use crate::export::table::DataTable;

/// An inclusive rectangular range of cells, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl CellRange {
    /// The data rows of one column (row 0 is the header)
    pub fn data_column(col: u16, n_rows: usize) -> Self {
        Self {
            first_row: 1,
            first_col: col,
            last_row: n_rows as u32,
            last_col: col,
        }
    }
}

/// Predicate a conditional-format rule applies to each cell value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatCriteria {
    GreaterThan(f64),
    LessThan(f64),
}

/// Visual style applied by a conditional-format rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub bg_color: &'static str,
    pub font_color: &'static str,
}

/// A value-range styling rule over a cell range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatRule {
    pub criteria: FormatCriteria,
    pub style: CellStyle,
}

/// A single sheet in the destination workbook
pub trait Worksheet {
    /// Set the display width of a column
    fn set_column_width(&mut self, col: u16, width: f64) -> Result<()>;

    /// Register a conditional styling rule over a range of cells
    fn conditional_format(&mut self, range: CellRange, rule: FormatRule) -> Result<()>;

    /// Freeze every row above `row` and every column left of `col`
    fn freeze_panes(&mut self, row: u32, col: u16) -> Result<()>;
}

/// The destination workbook
pub trait Workbook {
    type Sheet: Worksheet;

    /// Write a table as a named sheet and hand back the sheet for styling
    fn write_sheet(&mut self, name: &str, table: &DataTable) -> Result<&mut Self::Sheet>;
}

/// Characters a workbook rejects in sheet names
const ILLEGAL_SHEET_CHARS: [char; 7] = [':', '/', '\\', '?', '*', '[', ']'];

/// Maximum sheet-name length most workbook formats accept
const MAX_SHEET_NAME_LEN: usize = 31;

/// Make a sheet name acceptable to the workbook: illegal characters become
/// underscores and the name is truncated to 31 characters.
pub fn sanitize_sheet_name(name: &str) -> String {
    name.chars()
        .map(|c| if ILLEGAL_SHEET_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}
