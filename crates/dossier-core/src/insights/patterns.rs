//! Regularity and periodicity analysis

use super::join_clauses;
use super::types::{AdvancedStats, BankStats};

/// Infer likely fixed-expense patterns from the average transaction amount
/// and, when available, the small/large amount-bucket distribution.
///
/// The average-amount buckets overlap on paper (2000..=5000 satisfies two of
/// them); evaluation order is fixed and the first match wins.
pub fn analyze_regular_patterns(advanced: &AdvancedStats, bank: &BankStats) -> String {
    let mut clauses = Vec::new();

    let avg_amount = bank.avg_transaction_amount;
    if avg_amount > 0.0 {
        if (2000.0..=8000.0).contains(&avg_amount) {
            clauses.push("平均交易金额符合工资水平特征".to_string());
        } else if (1000.0..=5000.0).contains(&avg_amount) {
            clauses.push("平均交易金额符合房租或贷款特征".to_string());
        } else if avg_amount < 500.0 {
            clauses.push("以小额日常消费为主".to_string());
        } else if avg_amount > 20000.0 {
            clauses.push("以大额交易为主".to_string());
        }
    }

    if let Some(dist) = &advanced.amount_distribution {
        if dist.small_ratio > 0.7 {
            clauses.push("主要为日常小额消费".to_string());
        } else if dist.large_ratio > 0.3 {
            clauses.push("存在较多大额交易".to_string());
        }
    }

    join_clauses(&clauses)
}
