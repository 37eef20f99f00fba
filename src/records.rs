//! Performance records and the calendar grouping a results board uses.
//!
//! Records come back from the persistence layer as flat rows; ranking and
//! progress views want them bucketed by year, month, or training week.
//! Grouping is done client-side over whatever slice the caller fetched.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::SwimTime;

/// A single stored performance, as exchanged with the persistence layer.
///
/// `time` serializes under the stored `time_seconds` column name, as the
/// canonical seconds number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub athlete_id: String,
    /// Event label, e.g. "100m freestyle".
    pub event: String,
    #[serde(rename = "time_seconds")]
    pub time: SwimTime,
    pub recorded_on: NaiveDate,
}

/// Group records by calendar year.
pub fn group_by_year(records: &[PerformanceRecord]) -> BTreeMap<i32, Vec<&PerformanceRecord>> {
    let mut groups: BTreeMap<i32, Vec<&PerformanceRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.recorded_on.year()).or_default().push(record);
    }
    groups
}

/// Group records by calendar month, keyed `(year, month)`.
pub fn group_by_month(
    records: &[PerformanceRecord],
) -> BTreeMap<(i32, u32), Vec<&PerformanceRecord>> {
    let mut groups: BTreeMap<(i32, u32), Vec<&PerformanceRecord>> = BTreeMap::new();
    for record in records {
        let key = (record.recorded_on.year(), record.recorded_on.month());
        groups.entry(key).or_default().push(record);
    }
    groups
}

/// Group records by ISO week, keyed `(iso_year, iso_week)`.
///
/// ISO weeks keep a training week intact across month boundaries; note the
/// ISO year can differ from the calendar year in the first and last days of
/// January and December.
pub fn group_by_week(
    records: &[PerformanceRecord],
) -> BTreeMap<(i32, u32), Vec<&PerformanceRecord>> {
    let mut groups: BTreeMap<(i32, u32), Vec<&PerformanceRecord>> = BTreeMap::new();
    for record in records {
        let week = record.recorded_on.iso_week();
        groups.entry((week.year(), week.week())).or_default().push(record);
    }
    groups
}

/// The fastest record in a group, `None` for an empty group.
///
/// Ties keep the earliest record in iteration order, which for the grouping
/// functions above is the order of the input slice.
pub fn best_time<'a, I>(records: I) -> Option<&'a PerformanceRecord>
where
    I: IntoIterator<Item = &'a PerformanceRecord>,
{
    records.into_iter().min_by_key(|record| record.time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(athlete: &str, centis: u32, date: (i32, u32, u32)) -> PerformanceRecord {
        PerformanceRecord {
            athlete_id: athlete.to_string(),
            event: "100m freestyle".to_string(),
            time: SwimTime::from_centiseconds(centis).unwrap(),
            recorded_on: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    fn sample() -> Vec<PerformanceRecord> {
        vec![
            record("ada", 6235, (2025, 3, 10)),
            record("ada", 6180, (2025, 3, 12)),
            record("ada", 6420, (2025, 11, 2)),
            record("ben", 5980, (2024, 12, 30)),
        ]
    }

    #[test]
    fn grouping_by_year_partitions_all_records() {
        let records = sample();
        let groups = group_by_year(&records);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![2024, 2025]);
        assert_eq!(groups[&2024].len(), 1);
        assert_eq!(groups[&2025].len(), 3);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), records.len());
    }

    #[test]
    fn grouping_by_month_keys_year_and_month() {
        let records = sample();
        let groups = group_by_month(&records);
        assert_eq!(groups[&(2025, 3)].len(), 2);
        assert_eq!(groups[&(2025, 11)].len(), 1);
        assert_eq!(groups[&(2024, 12)].len(), 1);
    }

    #[test]
    fn iso_week_crosses_the_year_boundary() {
        // 2024-12-30 is a Monday of ISO week 1 of 2025.
        let records = vec![record("ben", 5980, (2024, 12, 30))];
        let groups = group_by_week(&records);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![(2025, 1)]);
    }

    #[test]
    fn best_time_is_the_minimum() {
        let records = sample();
        let best = best_time(&records).unwrap();
        assert_eq!(best.athlete_id, "ben");
        assert_eq!(best.time.total_centiseconds(), 5980);

        let empty: Vec<PerformanceRecord> = Vec::new();
        assert_eq!(best_time(&empty), None);
    }

    #[test]
    fn record_serializes_with_stored_column_names() {
        let record = record("ada", 6235, (2025, 3, 10));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["time_seconds"], serde_json::json!(62.35));
        assert_eq!(json["athlete_id"], "ada");
        assert_eq!(json["recorded_on"], "2025-03-10");

        let back: PerformanceRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
