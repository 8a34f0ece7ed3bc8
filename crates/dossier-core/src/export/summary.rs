//! Summary sheet construction
//!
//! Flattens a two-level (category → item) summary mapping into a table with
//! one row per leaf item and writes it as its own named sheet.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::export::format::set_column_widths;
use crate::export::sink::{sanitize_sheet_name, Workbook};
use crate::export::table::{Cell, DataTable};

/// Default name for the generated summary sheet
pub const SUMMARY_SHEET_NAME: &str = "分析汇总";

/// One summarized analysis item
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummaryItem {
    pub count: i64,
    pub description: String,
}

/// Category → item name → item, in caller insertion order
pub type SummaryData = IndexMap<String, IndexMap<String, SummaryItem>>;

/// Flatten summary data into a table, one row per (category, item) pair
pub fn summary_table(summary: &SummaryData) -> DataTable {
    let mut categories = Vec::new();
    let mut items = Vec::new();
    let mut counts = Vec::new();
    let mut descriptions = Vec::new();

    for (category, category_items) in summary {
        for (item_name, item) in category_items {
            categories.push(Cell::from(category.clone()));
            items.push(Cell::from(item_name.clone()));
            counts.push(Cell::from(item.count));
            descriptions.push(Cell::from(item.description.clone()));
        }
    }

    DataTable::new()
        .with_column("分析类别", categories)
        .with_column("分析项目", items)
        .with_column("数据量", counts)
        .with_column("说明", descriptions)
}

/// Write the summary as a named sheet with the standard width policy.
///
/// An empty summary writes nothing and is not an error.
pub fn write_summary_sheet<W: Workbook>(
    workbook: &mut W,
    summary: &SummaryData,
    sheet_name: &str,
    config: &ExportConfig,
) -> Result<()> {
    let table = summary_table(summary);
    if table.is_empty() {
        return Ok(());
    }

    let sheet_name = sanitize_sheet_name(sheet_name);
    let sheet = workbook.write_sheet(&sheet_name, &table)?;
    set_column_widths(sheet, &table, config)?;

    tracing::info!(sheet = %sheet_name, rows = table.n_rows(), "summary sheet written");
    Ok(())
}
