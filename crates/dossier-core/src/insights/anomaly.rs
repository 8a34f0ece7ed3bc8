//! Anomaly narration

use super::types::{AnomalyKind, AnomalyReport};
use super::{format_thousands, join_clauses};

/// Narrate the anomalies detected upstream, one clause per anomaly.
///
/// Anomalies of the same kind are not deduplicated; an amount outlier with
/// an empty outlier list produces no clause, and unknown kinds are skipped.
pub fn analyze_anomalies(report: &AnomalyReport) -> String {
    let mut clauses = Vec::new();

    for anomaly in &report.anomalies {
        match anomaly.kind {
            AnomalyKind::HighFrequency => {
                clauses.push(format!("存在高频交易异常（{}次）", anomaly.count));
            }
            AnomalyKind::AmountOutlier => {
                // No clause without at least one outlier amount
                if let Some(max_amount) = anomaly.outlier_amounts.iter().copied().reduce(f64::max)
                {
                    clauses.push(format!(
                        "存在异常大额交易（{}元）",
                        format_thousands(max_amount)
                    ));
                }
            }
            AnomalyKind::ShortInterval => {
                clauses.push("存在短时间连续交易".to_string());
            }
            AnomalyKind::Unknown => {}
        }
    }

    join_clauses(&clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::Anomaly;

    fn anomaly(kind: AnomalyKind) -> Anomaly {
        Anomaly {
            kind,
            count: 0,
            outlier_amounts: vec![],
        }
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(analyze_anomalies(&AnomalyReport::default()), "");
    }

    #[test]
    fn test_high_frequency_includes_count() {
        let report = AnomalyReport {
            anomalies: vec![Anomaly {
                count: 37,
                ..anomaly(AnomalyKind::HighFrequency)
            }],
        };
        assert_eq!(analyze_anomalies(&report), "存在高频交易异常（37次）。");
    }

    #[test]
    fn test_amount_outlier_uses_maximum() {
        let report = AnomalyReport {
            anomalies: vec![Anomaly {
                outlier_amounts: vec![5000.0, 1234567.0, 80000.0],
                ..anomaly(AnomalyKind::AmountOutlier)
            }],
        };
        assert_eq!(analyze_anomalies(&report), "存在异常大额交易（1,234,567元）。");
    }

    #[test]
    fn test_amount_outlier_with_empty_list_is_skipped() {
        let report = AnomalyReport {
            anomalies: vec![
                anomaly(AnomalyKind::AmountOutlier),
                anomaly(AnomalyKind::ShortInterval),
            ],
        };
        assert_eq!(analyze_anomalies(&report), "存在短时间连续交易。");
    }

    #[test]
    fn test_unknown_kind_is_skipped() {
        let report = AnomalyReport {
            anomalies: vec![anomaly(AnomalyKind::Unknown)],
        };
        assert_eq!(analyze_anomalies(&report), "");
    }

    #[test]
    fn test_repeated_kinds_each_emit() {
        let report = AnomalyReport {
            anomalies: vec![
                Anomaly {
                    count: 12,
                    ..anomaly(AnomalyKind::HighFrequency)
                },
                Anomaly {
                    count: 44,
                    ..anomaly(AnomalyKind::HighFrequency)
                },
            ],
        };
        assert_eq!(
            analyze_anomalies(&report),
            "存在高频交易异常（12次）；存在高频交易异常（44次）。"
        );
    }
}
