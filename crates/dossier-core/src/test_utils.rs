//! Test utilities: a recording mock workbook
//!
//! Records every sink call the formatter makes so tests can assert on
//! widths, styling rules, and freeze state without a real spreadsheet
//! backend.

use crate::error::Result;
use crate::export::sink::{CellRange, FormatRule, Workbook, Worksheet};
use crate::export::table::DataTable;

/// A sheet that records formatting calls instead of rendering them
#[derive(Debug, Clone, Default)]
pub struct MockSheet {
    pub name: String,
    pub table: DataTable,
    pub column_widths: Vec<(u16, f64)>,
    pub formats: Vec<(CellRange, FormatRule)>,
    pub frozen: Option<(u32, u16)>,
}

impl MockSheet {
    /// Width recorded for a column, if any
    pub fn width_of(&self, col: u16) -> Option<f64> {
        self.column_widths
            .iter()
            .find(|(c, _)| *c == col)
            .map(|(_, w)| *w)
    }

    /// Formatting rules recorded against a column's data range
    pub fn formats_for_column(&self, col: u16) -> Vec<FormatRule> {
        self.formats
            .iter()
            .filter(|(range, _)| range.first_col == col && range.last_col == col)
            .map(|(_, rule)| *rule)
            .collect()
    }
}

impl Worksheet for MockSheet {
    fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        self.column_widths.push((col, width));
        Ok(())
    }

    fn conditional_format(&mut self, range: CellRange, rule: FormatRule) -> Result<()> {
        self.formats.push((range, rule));
        Ok(())
    }

    fn freeze_panes(&mut self, row: u32, col: u16) -> Result<()> {
        self.frozen = Some((row, col));
        Ok(())
    }
}

/// A workbook that collects written sheets in memory
#[derive(Debug, Clone, Default)]
pub struct MockWorkbook {
    pub sheets: Vec<MockSheet>,
}

impl MockWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(&self, name: &str) -> Option<&MockSheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

impl Workbook for MockWorkbook {
    type Sheet = MockSheet;

    fn write_sheet(&mut self, name: &str, table: &DataTable) -> Result<&mut MockSheet> {
        self.sheets.push(MockSheet {
            name: name.to_string(),
            table: table.clone(),
            ..Default::default()
        });
        Ok(self.sheets.last_mut().expect("sheet was just pushed"))
    }
}
