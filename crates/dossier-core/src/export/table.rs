//! Rectangular tabular dataset and pre-export validation

use serde::{Deserialize, Serialize};

/// A single cell value
///
/// Closed set of the value shapes the exporter understands; everything a
/// sink needs to render or a styling rule needs to compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Numeric view of the cell, for value-range styling rules
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

/// A named, ordered column of cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Share of null cells in this column (0 for an empty column)
    pub fn null_ratio(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let nulls = self.values.iter().filter(|c| c.is_null()).count();
        nulls as f64 / self.values.len() as f64
    }
}

/// A rectangular table: ordered named columns aligned by row index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<Column>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Cell>) {
        self.columns.push(Column::new(name, values));
    }

    /// Builder-style variant of [`push_column`](Self::push_column)
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<Cell>) -> Self {
        self.push_column(name, values);
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.iter().map(|c| c.values.len()).max().unwrap_or(0)
    }

    /// True when there is nothing to export (no columns or no rows)
    pub fn is_empty(&self) -> bool {
        self.n_cols() == 0 || self.n_rows() == 0
    }
}

/// Non-fatal data-quality warning attached to a validation report
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// More than 80% of the column's cells are null
    HighNullRatio { column: String, ratio: f64 },
}

/// Outcome of pre-export validation
///
/// An invalid table is rejected (the export is not attempted); warnings are
/// advisory and leave the table exportable.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<ValidationWarning>,
}

const HIGH_NULL_RATIO: f64 = 0.8;

/// Check whether a table is suitable for export.
///
/// Rejects empty tables and duplicate column names; flags (but accepts)
/// columns that are mostly null.
pub fn validate_table(table: &DataTable) -> ValidationReport {
    let mut report = ValidationReport {
        is_valid: true,
        warnings: Vec::new(),
    };

    if table.is_empty() {
        tracing::warn!("table is empty, nothing to export");
        report.is_valid = false;
        return report;
    }

    for column in table.columns() {
        let ratio = column.null_ratio();
        if ratio > HIGH_NULL_RATIO {
            tracing::warn!(column = %column.name, ratio, "column is mostly null");
            report.warnings.push(ValidationWarning::HighNullRatio {
                column: column.name.clone(),
                ratio,
            });
        }
    }

    let mut seen = std::collections::HashSet::new();
    for column in table.columns() {
        if !seen.insert(column.name.as_str()) {
            tracing::warn!(column = %column.name, "duplicate column name");
            report.is_valid = false;
        }
    }

    report
}

/// Summarize the data-source composition of a table.
///
/// Counts rows per distinct value of the `平台` column (most frequent
/// first) and lists the distinct `数据来源` values.
pub fn format_platform_details(table: &DataTable) -> String {
    if table.is_empty() {
        return String::new();
    }

    let mut details = Vec::new();

    if let Some(column) = table.column("平台") {
        let mut counts: indexmap::IndexMap<&str, usize> = indexmap::IndexMap::new();
        for cell in &column.values {
            if let Some(text) = cell.as_str() {
                *counts.entry(text).or_insert(0) += 1;
            }
        }
        counts.sort_by(|_, a, _, b| b.cmp(a));
        for (platform, count) in &counts {
            details.push(format!("{platform}: {count}条"));
        }
    }

    if let Some(column) = table.column("数据来源") {
        let mut seen = indexmap::IndexSet::new();
        for cell in &column.values {
            if let Some(text) = cell.as_str() {
                seen.insert(text);
            }
        }
        for source in &seen {
            details.push(format!("来源: {source}"));
        }
    }

    details.join("; ")
}
