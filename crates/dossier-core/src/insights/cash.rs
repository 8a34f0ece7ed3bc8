//! Cash deposit/withdrawal behavior analysis

use super::join_clauses;
use super::types::BankStats;

/// Describe how a subject uses cash, based on transaction aggregates.
///
/// With no cash transactions at all the sentence is the single fixed
/// "no records" clause; otherwise up to three independent rule groups
/// contribute clauses (cash share of all transactions, deposit/withdrawal
/// count comparison, deposit/withdrawal amount comparison).
pub fn analyze_cash_behavior(stats: &BankStats) -> String {
    let mut clauses = Vec::new();

    if stats.cash_transaction_count > 0 {
        let cash_ratio = if stats.transaction_count > 0 {
            stats.cash_transaction_count as f64 / stats.transaction_count as f64
        } else {
            0.0
        };
        if cash_ratio > 0.5 {
            clauses.push("频繁进行存取现操作".to_string());
        } else if cash_ratio > 0.2 {
            clauses.push("较常进行存取现操作".to_string());
        }

        if stats.deposit_count > stats.withdraw_count {
            clauses.push("存现次数多于取现".to_string());
        } else if stats.withdraw_count > stats.deposit_count {
            clauses.push("取现次数多于存现".to_string());
        }

        if stats.deposit_amount > stats.withdraw_amount * 2.0 {
            clauses.push("存现金额显著大于取现金额".to_string());
        } else if stats.withdraw_amount > stats.deposit_amount * 2.0 {
            clauses.push("取现金额显著大于存现金额".to_string());
        }
    } else {
        clauses.push("无存取现交易记录".to_string());
    }

    join_clauses(&clauses)
}
