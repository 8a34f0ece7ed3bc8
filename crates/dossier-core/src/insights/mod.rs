//! Insight rules engine
//!
//! Maps precomputed aggregate statistics to short natural-language
//! behavioral summaries, one sentence per domain:
//! - Cash deposit/withdrawal behavior
//! - Detected transaction anomalies
//! - Regularity and periodicity patterns
//! - Call behavior
//!
//! Every function is pure and total: missing input fields default to
//! zero/empty, zero denominators yield 0, and an input that triggers no
//! rule produces the empty string. Clauses are joined with `；` and the
//! sentence closes with `。`.

mod anomaly;
mod calls;
mod cash;
mod patterns;
pub mod types;

pub use anomaly::analyze_anomalies;
pub use calls::analyze_call_behavior;
pub use cash::analyze_cash_behavior;
pub use patterns::analyze_regular_patterns;
pub use types::{
    AdvancedStats, AmountDistribution, Anomaly, AnomalyKind, AnomalyReport, BankStats, CallStats,
};

/// Join triggered clauses into a sentence; no clauses means no sentence
fn join_clauses(clauses: &[String]) -> String {
    if clauses.is_empty() {
        String::new()
    } else {
        format!("{}。", clauses.join("；"))
    }
}

/// Format an amount with thousands separators and no decimal places
fn format_thousands(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
