//! Call behavior analysis

use super::join_clauses;
use super::types::CallStats;

/// Describe calling habits from call-detail aggregates.
///
/// Three independent rule groups: overall call volume, contact
/// concentration (calls per distinct contact), and average duration.
/// A record set with zero calls produces no sentence at all.
pub fn analyze_call_behavior(stats: &CallStats) -> String {
    let mut clauses = Vec::new();

    if stats.total_calls > 0 {
        if stats.total_calls > 1000 {
            clauses.push("通话频率极高".to_string());
        } else if stats.total_calls > 500 {
            clauses.push("通话频率较高".to_string());
        } else if stats.total_calls < 50 {
            clauses.push("通话频率较低".to_string());
        }

        if stats.unique_contacts > 0 {
            let contact_ratio = stats.total_calls as f64 / stats.unique_contacts as f64;
            if contact_ratio > 10.0 {
                clauses.push("与少数人频繁通话".to_string());
            } else if contact_ratio < 2.0 {
                clauses.push("联系人分布较广泛".to_string());
            }
        }

        if stats.avg_call_duration > 300.0 {
            clauses.push("通话时长较长".to_string());
        } else if stats.avg_call_duration < 60.0 {
            clauses.push("通话时长较短".to_string());
        }
    }

    join_clauses(&clauses)
}
