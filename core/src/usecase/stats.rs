use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ActivityError;
use crate::model::date::CalendarDate;
use crate::store::ActivityStore;

/// What makes a stored day count as "active" in presence statistics.
/// The two observed deployments differed (any logged record vs a
/// positive exercise metric), so the criterion is explicit
/// configuration rather than an implicit rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityCriterion {
    /// Any stored record marks the day active.
    AnyLogged,
    /// Active only when the named metric is strictly positive; an
    /// explicit metric value of 0 is "not active".
    MetricPositive(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsRequest {
    Presence(ActivityCriterion),
    Metrics,
}

/// Roll-up statistics over a scope (one month, or all time).
/// Computed on demand and never cached; recomputing is cheap and
/// avoids staleness.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum StatsSummary {
    Presence {
        active_days: usize,
    },
    Metrics {
        avg_per_metric: BTreeMap<String, f64>,
        avg_overall: f64,
        total_days: usize,
        perfect_days: usize,
    },
}

pub fn month_stats(
    year: i32,
    month: u32,
    store: &ActivityStore,
    request: &StatsRequest,
) -> Result<StatsSummary, ActivityError> {
    if month > 11 {
        return Err(ActivityError::InvalidMonth(month));
    }
    summarize(store, request, Some((year, month)))
}

pub fn all_time_stats(
    store: &ActivityStore,
    request: &StatsRequest,
) -> Result<StatsSummary, ActivityError> {
    summarize(store, request, None)
}

fn summarize(
    store: &ActivityStore,
    request: &StatsRequest,
    scope: Option<(i32, u32)>,
) -> Result<StatsSummary, ActivityError> {
    let in_scope =
        |date: &CalendarDate| scope.is_none_or(|(y, m)| date.year == y && date.month == m);

    match request {
        StatsRequest::Presence(criterion) => {
            if let ActivityCriterion::MetricPositive(name) = criterion {
                store.validate_metric(name)?;
            }
            let active_days = store
                .all_records()
                .filter(|(date, _)| in_scope(date))
                .filter(|(_, record)| match criterion {
                    ActivityCriterion::AnyLogged => true,
                    ActivityCriterion::MetricPositive(name) => {
                        record.metric(name).unwrap_or(0) > 0
                    }
                })
                .count();
            Ok(StatsSummary::Presence { active_days })
        }
        StatsRequest::Metrics => {
            let names = store.metric_names();
            let scoped: Vec<_> = store
                .all_records()
                .filter(|(date, _)| in_scope(date))
                .map(|(_, record)| record)
                .collect();
            let total_days = scoped.len();

            // A metric a record does not carry counts as 0 for it.
            let mut avg_per_metric = BTreeMap::new();
            let mut value_sum: u64 = 0;
            for name in &names {
                let sum: u64 = scoped
                    .iter()
                    .map(|r| u64::from(r.metric(name).unwrap_or(0)))
                    .sum();
                value_sum += sum;
                let avg = if total_days == 0 {
                    0.0
                } else {
                    round1(sum as f64 / total_days as f64)
                };
                avg_per_metric.insert(name.clone(), avg);
            }

            let samples = total_days * names.len();
            let avg_overall = if samples == 0 {
                0.0
            } else {
                round1(value_sum as f64 / samples as f64)
            };

            let perfect_days = scoped
                .iter()
                .filter(|r| !names.is_empty() && names.iter().all(|n| r.metric(n) == Some(10)))
                .count();

            Ok(StatsSummary::Metrics {
                avg_per_metric,
                avg_overall,
                total_days,
                perfect_days,
            })
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
