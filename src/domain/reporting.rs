//! Aggregation over in-memory record snapshots.
//!
//! Every function here is pure: it reads a slice of records, never mutates
//! it, and cannot fail. Reports recompute from scratch on each call.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, TimeDelta, Utc};

/// Record counts keyed by grouping key, ordered lexically by key.
pub type GroupCounts = BTreeMap<String, usize>;

/// Counts records per grouping key.
///
/// The sum of all counts equals `records.len()`.
pub fn count_by_field<'a, T, K, F>(records: &'a [T], key: F) -> GroupCounts
where
    F: Fn(&'a T) -> K,
    K: AsRef<str>,
{
    let mut counts = GroupCounts::new();
    for record in records {
        *counts.entry(key(record).as_ref().to_owned()).or_insert(0) += 1;
    }
    counts
}

/// Counts records per grouping key, bucketing records with an absent or
/// empty key under `fallback`.
pub fn count_by_field_or<'a, T, F>(records: &'a [T], key: F, fallback: &str) -> GroupCounts
where
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut counts = GroupCounts::new();
    for record in records {
        let group = key(record).filter(|k| !k.is_empty()).unwrap_or(fallback);
        *counts.entry(group.to_owned()).or_insert(0) += 1;
    }
    counts
}

/// Average number of records per group; `0.0` when there are no groups.
pub fn average_per_group(counts: &GroupCounts, total: usize) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    total as f64 / counts.len() as f64
}

/// Key with the highest count.
///
/// Ties go to the first key in iteration order, which for [`GroupCounts`]
/// is the lexically smallest one.
pub fn most_active_group(counts: &GroupCounts) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for (key, &count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((key.as_str(), count));
        }
    }
    best.map(|(key, _)| key)
}

/// Percentage of `total` made up by records lacking an attribute.
///
/// Returns `0.0` when `total` is zero.
pub fn percentage_without_attribute<T, F>(records: &[T], has_attribute: F, total: usize) -> f64
where
    F: Fn(&T) -> bool,
{
    if total == 0 {
        return 0.0;
    }
    let missing = records.iter().filter(|r| !has_attribute(*r)).count();
    missing as f64 / total as f64 * 100.0
}

/// Counts records whose timestamp lies in `[now - window_days, now]`.
///
/// Both edges are inclusive. Records without a timestamp, or stamped after
/// `now`, are not counted.
pub fn active_within_window<'a, T, F>(
    records: &'a [T],
    timestamp: F,
    now: DateTime<Utc>,
    window_days: u32,
) -> usize
where
    F: Fn(&'a T) -> Option<DateTime<Utc>>,
{
    let earliest = now.checked_sub_signed(TimeDelta::days(i64::from(window_days)));

    records
        .iter()
        .filter_map(|r| timestamp(r))
        .filter(|t| *t <= now && earliest.is_none_or(|edge| *t >= edge))
        .count()
}

/// Counts records whose calendar date lies in `[today - window_days, today]`.
///
/// Date-only fields are compared by day, so a record dated exactly
/// `window_days` before `today` is counted whatever the time of day.
pub fn dated_within_window<'a, T, F>(
    records: &'a [T],
    date: F,
    today: NaiveDate,
    window_days: u32,
) -> usize
where
    F: Fn(&'a T) -> Option<NaiveDate>,
{
    let earliest = today.checked_sub_days(Days::new(u64::from(window_days)));

    records
        .iter()
        .filter_map(|r| date(r))
        .filter(|d| *d <= today && earliest.is_none_or(|edge| *d >= edge))
        .count()
}

/// Sums a numeric field across records.
pub fn sum_by<T, F>(records: &[T], value: F) -> f64
where
    F: Fn(&T) -> f64,
{
    records.iter().map(value).sum()
}
