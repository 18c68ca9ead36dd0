use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::ActivityError;
use crate::model::date::CalendarDate;
use crate::model::record::{ActivityRecord, RawActivity};

/// The sparse date-keyed record set, immutable for the session.
///
/// Built once at startup from the raw input mapping and then only
/// read. Backed by a BTreeMap so traversal and the year/month
/// inventory come out in date order for free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityStore {
    records: BTreeMap<CalendarDate, ActivityRecord>,
}

impl ActivityStore {
    /// Builds the store from the raw `"YYYY-MM-DD" -> value` mapping.
    /// A single malformed key rejects the whole construction. A
    /// `false` presence marker means the same thing as an absent key
    /// and is dropped.
    pub fn from_raw(raw: HashMap<String, RawActivity>) -> Result<Self, ActivityError> {
        let mut records = BTreeMap::new();
        for (key, value) in raw {
            let date = CalendarDate::parse_key(&key)?;
            match value {
                RawActivity::Logged(true) => {
                    records.insert(date, ActivityRecord::Presence);
                }
                RawActivity::Logged(false) => {}
                RawActivity::Metrics(metrics) => {
                    records.insert(date, ActivityRecord::Metrics(metrics));
                }
            }
        }
        Ok(Self { records })
    }

    /// Distinct years with data, newest first. Empty store gives an
    /// empty sequence.
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.keys().map(|d| d.year).collect();
        years.dedup();
        years.reverse();
        years
    }

    /// Distinct 0-based months with data for the given year, ascending.
    pub fn available_months(&self, year: i32) -> Vec<u32> {
        let mut months: Vec<u32> = self
            .records
            .keys()
            .filter(|d| d.year == year)
            .map(|d| d.month)
            .collect();
        months.dedup();
        months
    }

    /// Exact-match lookup; a miss is a normal "no data" result.
    pub fn lookup(&self, date: &CalendarDate) -> Option<&ActivityRecord> {
        self.records.get(date)
    }

    /// Restartable traversal of every stored record, in date order.
    pub fn all_records(&self) -> impl Iterator<Item = (&CalendarDate, &ActivityRecord)> {
        self.records.iter()
    }

    /// Union of metric names across all records (the store schema).
    pub fn metric_names(&self) -> BTreeSet<String> {
        self.records
            .values()
            .flat_map(|r| r.metric_names().map(str::to_string))
            .collect()
    }

    /// Rejects a metric name no stored record tracks. An empty store
    /// has no schema to check against and accepts any name.
    pub fn validate_metric(&self, name: &str) -> Result<(), ActivityError> {
        if !self.is_empty() && !self.metric_names().contains(name) {
            return Err(ActivityError::InvalidMetric(name.to_string()));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn raw_presence(keys: &[&str]) -> HashMap<String, RawActivity> {
        keys.iter()
            .map(|k| (k.to_string(), RawActivity::Logged(true)))
            .collect()
    }

    #[test]
    fn test_from_raw_rejects_malformed_key() {
        let mut raw = raw_presence(&["2025-09-12"]);
        raw.insert("2025-02-30".to_string(), RawActivity::Logged(true));
        assert_eq!(
            ActivityStore::from_raw(raw),
            Err(ActivityError::MalformedDate("2025-02-30".to_string()))
        );
    }

    #[test]
    fn test_false_presence_marker_is_dropped() {
        let mut raw = raw_presence(&["2025-09-12"]);
        raw.insert("2025-09-13".to_string(), RawActivity::Logged(false));
        let store = ActivityStore::from_raw(raw).unwrap();
        assert_eq!(store.len(), 1);
        let dropped = CalendarDate::parse_key("2025-09-13").unwrap();
        assert!(store.lookup(&dropped).is_none());
    }

    #[test]
    fn test_year_and_month_inventory() {
        let store =
            ActivityStore::from_raw(raw_presence(&["2024-12-31", "2025-09-12", "2025-11-02", "2025-09-14"]))
                .unwrap();
        assert_eq!(store.available_years(), vec![2025, 2024]);
        assert_eq!(store.available_months(2025), vec![8, 10]);
        assert_eq!(store.available_months(2024), vec![11]);
        assert_eq!(store.available_months(2023), Vec::<u32>::new());
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let store = ActivityStore::from_raw(raw_presence(&["2025-09-12"])).unwrap();
        let hit = CalendarDate::parse_key("2025-09-12").unwrap();
        let near_miss = CalendarDate::parse_key("2025-09-13").unwrap();
        assert!(store.lookup(&hit).is_some());
        assert!(store.lookup(&near_miss).is_none());
    }

    #[test]
    fn test_metric_schema_union() {
        let mut raw = HashMap::new();
        raw.insert(
            "2025-09-12".to_string(),
            RawActivity::Metrics(BTreeMap::from([("exercise".to_string(), 10)])),
        );
        raw.insert(
            "2025-09-14".to_string(),
            RawActivity::Metrics(BTreeMap::from([("calorie".to_string(), 5)])),
        );
        let store = ActivityStore::from_raw(raw).unwrap();
        let names: Vec<String> = store.metric_names().into_iter().collect();
        assert_eq!(names, vec!["calorie".to_string(), "exercise".to_string()]);
        assert!(store.validate_metric("exercise").is_ok());
        assert_eq!(
            store.validate_metric("discipline"),
            Err(ActivityError::InvalidMetric("discipline".to_string()))
        );
    }

    #[test]
    fn test_empty_store_accepts_any_metric_name() {
        let store = ActivityStore::default();
        assert!(store.validate_metric("anything").is_ok());
        assert!(store.available_years().is_empty());
    }
}
