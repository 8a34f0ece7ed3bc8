//! Column-width policy and conditional sheet styling
//!
//! Column semantics are inferred from column names: well-known identity,
//! amount, and date/time columns get minimum widths, amount columns get
//! positive/negative value styling, and frequency-ish columns get a
//! high-value highlight. Names nothing matches are left alone.

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::export::sink::{
    sanitize_sheet_name, CellRange, CellStyle, FormatCriteria, FormatRule, Workbook, Worksheet,
};
use crate::export::table::{validate_table, DataTable};

/// Green fill for positive amounts
pub const POSITIVE_STYLE: CellStyle = CellStyle {
    bg_color: "#C6EFCE",
    font_color: "#006100",
};

/// Red fill for negative amounts
pub const NEGATIVE_STYLE: CellStyle = CellStyle {
    bg_color: "#FFC7CE",
    font_color: "#9C0006",
};

/// Amber fill for unusually high frequencies/counts
pub const HIGHLIGHT_STYLE: CellStyle = CellStyle {
    bg_color: "#FFEB9C",
    font_color: "#9C6500",
};

/// Columns that get positive/negative value styling
const AMOUNT_FORMAT_COLUMNS: [&str; 5] = ["交易金额", "收入金额", "支出金额", "总金额", "平均金额"];

/// Name fragments marking a frequency/count column
const FREQUENCY_MARKERS: [&str; 2] = ["频率", "次数"];

/// Width category of a column, inferred from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCategory {
    /// Identity and free-text columns that need room to read
    Remark,
    Amount,
    DateTime,
    General,
}

impl ColumnCategory {
    pub fn of(name: &str) -> Self {
        match name {
            "对方姓名" | "本方姓名" | "交易摘要" | "交易备注" => Self::Remark,
            "交易金额" | "收入金额" | "支出金额" => Self::Amount,
            "交易日期" | "交易时间" => Self::DateTime,
            _ => Self::General,
        }
    }

    /// Minimum width for the category; never shrinks a larger override
    pub fn min_width(self) -> Option<f64> {
        match self {
            Self::Remark => Some(20.0),
            Self::Amount => Some(12.0),
            Self::DateTime => Some(15.0),
            Self::General => None,
        }
    }
}

/// Assign a display width to every column: explicit override or default,
/// floored by the column's category minimum.
pub fn set_column_widths<S: Worksheet>(
    sheet: &mut S,
    table: &DataTable,
    config: &ExportConfig,
) -> Result<()> {
    for (i, column) in table.columns().iter().enumerate() {
        let mut width = config.width_for(&column.name);
        if let Some(floor) = ColumnCategory::of(&column.name).min_width() {
            width = width.max(floor);
        }
        sheet.set_column_width(i as u16, width)?;
    }
    Ok(())
}

/// Register value-range styling rules over the data rows.
///
/// Amount columns get two non-overlapping rules (positive green, negative
/// red); frequency columns get a `> 10` highlight. The groups are
/// independent and a column may receive all three.
pub fn add_conditional_formatting<S: Worksheet>(
    sheet: &mut S,
    table: &DataTable,
) -> Result<()> {
    let n_rows = table.n_rows();

    for (i, column) in table.columns().iter().enumerate() {
        let range = CellRange::data_column(i as u16, n_rows);

        if AMOUNT_FORMAT_COLUMNS.contains(&column.name.as_str()) {
            sheet.conditional_format(
                range,
                FormatRule {
                    criteria: FormatCriteria::GreaterThan(0.0),
                    style: POSITIVE_STYLE,
                },
            )?;
            sheet.conditional_format(
                range,
                FormatRule {
                    criteria: FormatCriteria::LessThan(0.0),
                    style: NEGATIVE_STYLE,
                },
            )?;
        }

        if FREQUENCY_MARKERS.iter().any(|m| column.name.contains(m)) {
            sheet.conditional_format(
                range,
                FormatRule {
                    criteria: FormatCriteria::GreaterThan(10.0),
                    style: HIGHLIGHT_STYLE,
                },
            )?;
        }
    }

    Ok(())
}

/// Apply the full formatting pass to a written sheet.
///
/// Widths first, then conditional styling, then the header freeze: styling
/// ranges are computed from the table extent, which must not change after
/// they are registered.
pub fn format_sheet<S: Worksheet>(
    sheet: &mut S,
    table: &DataTable,
    config: &ExportConfig,
) -> Result<()> {
    set_column_widths(sheet, table, config)?;

    if config.conditional_formatting {
        add_conditional_formatting(sheet, table)?;
    }

    if config.freeze_panes {
        sheet.freeze_panes(1, 0)?;
    }

    Ok(())
}

/// Validate a table, write it as a named sheet, and format it.
///
/// An invalid table is rejected before anything touches the workbook.
pub fn export_table<W: Workbook>(
    workbook: &mut W,
    name: &str,
    table: &DataTable,
    config: &ExportConfig,
) -> Result<()> {
    let report = validate_table(table);
    if !report.is_valid {
        return Err(Error::InvalidData(format!(
            "table '{name}' failed validation"
        )));
    }

    let sheet_name = sanitize_sheet_name(name);
    let sheet = workbook.write_sheet(&sheet_name, table)?;
    format_sheet(sheet, table, config)?;

    tracing::info!(
        sheet = %sheet_name,
        rows = table.n_rows(),
        cols = table.n_cols(),
        "table exported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::table::Cell;
    use crate::test_utils::{MockSheet, MockWorkbook};

    fn sample_table() -> DataTable {
        DataTable::new()
            .with_column("交易日期", vec!["2024-01-01".into(), "2024-01-02".into()])
            .with_column("对方姓名", vec!["张三".into(), "李四".into()])
            .with_column("交易金额", vec![1500.0.into(), (-300.0).into()])
            .with_column("交易次数", vec![5i64.into(), 15i64.into()])
            .with_column("备注", vec![Cell::Null, "现金".into()])
    }

    #[test]
    fn test_width_floors_by_category() {
        let mut sheet = MockSheet::default();
        set_column_widths(&mut sheet, &sample_table(), &ExportConfig::default()).unwrap();

        assert_eq!(sheet.width_of(0), Some(15.0)); // 交易日期: default meets the floor
        assert_eq!(sheet.width_of(1), Some(20.0)); // 对方姓名: floored up from 15
        assert_eq!(sheet.width_of(2), Some(15.0)); // 交易金额: default above the 12 floor
        assert_eq!(sheet.width_of(3), Some(15.0)); // 交易次数: no category
        assert_eq!(sheet.width_of(4), Some(15.0)); // 备注: no category
    }

    #[test]
    fn test_remark_floor_beats_small_override() {
        let mut config = ExportConfig::default();
        config.column_widths.insert("交易备注".to_string(), 5.0);
        config.column_widths.insert("交易金额".to_string(), 8.0);

        let table = DataTable::new()
            .with_column("交易备注", vec!["x".into()])
            .with_column("交易金额", vec![1i64.into()]);

        let mut sheet = MockSheet::default();
        set_column_widths(&mut sheet, &table, &config).unwrap();

        assert_eq!(sheet.width_of(0), Some(20.0));
        assert_eq!(sheet.width_of(1), Some(12.0));
    }

    #[test]
    fn test_large_override_survives_the_floor() {
        let mut config = ExportConfig::default();
        config.column_widths.insert("交易摘要".to_string(), 45.0);

        let table = DataTable::new().with_column("交易摘要", vec!["x".into()]);
        let mut sheet = MockSheet::default();
        set_column_widths(&mut sheet, &table, &config).unwrap();

        assert_eq!(sheet.width_of(0), Some(45.0));
    }

    #[test]
    fn test_amount_column_gets_positive_and_negative_rules() {
        let mut sheet = MockSheet::default();
        add_conditional_formatting(&mut sheet, &sample_table()).unwrap();

        let rules = sheet.formats_for_column(2);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].criteria, FormatCriteria::GreaterThan(0.0));
        assert_eq!(rules[0].style, POSITIVE_STYLE);
        assert_eq!(rules[1].criteria, FormatCriteria::LessThan(0.0));
        assert_eq!(rules[1].style, NEGATIVE_STYLE);
    }

    #[test]
    fn test_frequency_column_gets_highlight_rule() {
        let mut sheet = MockSheet::default();
        add_conditional_formatting(&mut sheet, &sample_table()).unwrap();

        let rules = sheet.formats_for_column(3);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].criteria, FormatCriteria::GreaterThan(10.0));
        assert_eq!(rules[0].style, HIGHLIGHT_STYLE);
    }

    #[test]
    fn test_amount_and_frequency_rules_co_apply() {
        // A name both in the amount set and carrying a frequency marker
        let table = DataTable::new()
            .with_column("总金额", vec![100i64.into()])
            .with_column("收款次数", vec![12i64.into()]);

        let mut sheet = MockSheet::default();
        add_conditional_formatting(&mut sheet, &table).unwrap();

        assert_eq!(sheet.formats_for_column(0).len(), 2);
        assert_eq!(sheet.formats_for_column(1).len(), 1);
    }

    #[test]
    fn test_format_ranges_exclude_header() {
        let mut sheet = MockSheet::default();
        add_conditional_formatting(&mut sheet, &sample_table()).unwrap();

        for (range, _) in &sheet.formats {
            assert_eq!(range.first_row, 1);
            assert_eq!(range.last_row, 2);
        }
    }

    #[test]
    fn test_format_sheet_freezes_header_row() {
        let mut sheet = MockSheet::default();
        format_sheet(&mut sheet, &sample_table(), &ExportConfig::default()).unwrap();
        assert_eq!(sheet.frozen, Some((1, 0)));
    }

    #[test]
    fn test_format_sheet_honors_config_switches() {
        let config = ExportConfig {
            conditional_formatting: false,
            freeze_panes: false,
            ..Default::default()
        };

        let mut sheet = MockSheet::default();
        format_sheet(&mut sheet, &sample_table(), &config).unwrap();

        assert!(sheet.formats.is_empty());
        assert!(sheet.frozen.is_none());
        assert!(!sheet.column_widths.is_empty());
    }

    #[test]
    fn test_export_table_writes_and_formats() {
        let mut workbook = MockWorkbook::new();
        export_table(
            &mut workbook,
            "资金分析",
            &sample_table(),
            &ExportConfig::default(),
        )
        .unwrap();

        let sheet = workbook.sheet("资金分析").unwrap();
        assert_eq!(sheet.table.n_rows(), 2);
        assert!(!sheet.column_widths.is_empty());
        assert_eq!(sheet.frozen, Some((1, 0)));
    }

    #[test]
    fn test_export_table_sanitizes_sheet_name() {
        let mut workbook = MockWorkbook::new();
        export_table(
            &mut workbook,
            "转账数据[原始]",
            &sample_table(),
            &ExportConfig::default(),
        )
        .unwrap();

        assert!(workbook.sheet("转账数据_原始_").is_some());
    }

    #[test]
    fn test_export_table_rejects_invalid_table() {
        let mut workbook = MockWorkbook::new();
        let err = export_table(
            &mut workbook,
            "空表",
            &DataTable::new(),
            &ExportConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidData(_)));
        // Rejected, not attempted
        assert!(workbook.sheets.is_empty());
    }
}
