use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw value attached to a date key in the input mapping.
///
/// Two deployment shapes exist: a bare presence marker ("this date was
/// logged") or a small map of named integer metrics in 0..=10.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawActivity {
    Logged(bool),
    Metrics(BTreeMap<String, u8>),
}

/// Data attached to a logged date, after store construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ActivityRecord {
    Presence,
    Metrics(BTreeMap<String, u8>),
}

impl ActivityRecord {
    pub fn has_metrics(&self) -> bool {
        matches!(self, ActivityRecord::Metrics(_))
    }

    pub fn metric(&self, name: &str) -> Option<u8> {
        match self {
            ActivityRecord::Presence => None,
            ActivityRecord::Metrics(metrics) => metrics.get(name).copied(),
        }
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        match self {
            ActivityRecord::Presence => None.into_iter().flatten(),
            ActivityRecord::Metrics(metrics) => {
                Some(metrics.keys().map(String::as_str)).into_iter().flatten()
            }
        }
    }
}

/// Which value a grid cell's intensity is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricSelector {
    /// A single named metric.
    Metric(String),
    /// Round-half-up mean of all metrics a record carries.
    Overall,
    /// Binary logged / not-logged.
    Presence,
}
