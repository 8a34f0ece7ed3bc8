//! Aggregate statistics bundles consumed by the insight functions
//!
//! The upstream aggregation layer hands these over as loosely-shaped JSON
//! dictionaries where every key is optional. Each bundle is an explicit
//! struct whose fields default to zero/empty on a missing key, so the
//! tolerance lives in the type rather than scattered `.get(key, 0)` calls.

use serde::Deserialize;

use crate::error::Result;

/// Precomputed aggregates over a set of bank transactions
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BankStats {
    pub cash_transaction_count: u64,
    pub transaction_count: u64,
    pub deposit_count: u64,
    pub withdraw_count: u64,
    pub deposit_amount: f64,
    pub withdraw_amount: f64,
    pub avg_transaction_amount: f64,
}

impl BankStats {
    /// Build from an upstream JSON dictionary; missing keys default
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Kind of a detected transaction anomaly
///
/// A closed set; upstream may tag anomalies with kinds this library does not
/// know about, which are accepted and produce no clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    HighFrequency,
    AmountOutlier,
    ShortInterval,
    Unknown,
}

impl AnomalyKind {
    /// Map an upstream discriminant string; unrecognized tags become
    /// `Unknown` rather than an error
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "高频交易" => Self::HighFrequency,
            "金额异常" => Self::AmountOutlier,
            "时间间隔异常" => Self::ShortInterval,
            _ => Self::Unknown,
        }
    }
}

impl Default for AnomalyKind {
    fn default() -> Self {
        AnomalyKind::Unknown
    }
}

impl<'de> Deserialize<'de> for AnomalyKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// A single detected anomaly with its kind-specific measurements
#[derive(Debug, Clone, Deserialize)]
pub struct Anomaly {
    #[serde(rename = "type", default)]
    pub kind: AnomalyKind,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub outlier_amounts: Vec<f64>,
}

/// The anomaly list produced by upstream anomaly detection
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnomalyReport {
    pub anomalies: Vec<Anomaly>,
}

impl AnomalyReport {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Share of transactions falling into the small/large amount buckets
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AmountDistribution {
    pub small_ratio: f64,
    pub large_ratio: f64,
}

/// Higher-order pattern aggregates (amount distribution and friends)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdvancedStats {
    pub amount_distribution: Option<AmountDistribution>,
}

impl AdvancedStats {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Precomputed aggregates over a call-detail record set
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CallStats {
    pub total_calls: u64,
    pub unique_contacts: u64,
    /// Average call duration in seconds
    pub avg_call_duration: f64,
}

impl CallStats {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
