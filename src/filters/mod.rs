/// Launch filters and the pipeline that composes them
use crate::domain::{Category, FilterSelection, LaunchRecord, TimeWindow};
use chrono::{DateTime, Utc};

/// Past / upcoming classification on the `upcoming` flag
pub struct CategoryFilter;

impl CategoryFilter {
    pub fn matches(record: &LaunchRecord, category: Category) -> bool {
        match category {
            Category::All => true,
            Category::Past => !record.upcoming,
            Category::Upcoming => record.upcoming,
        }
    }

    pub fn apply(records: &[LaunchRecord], category: Category) -> Vec<LaunchRecord> {
        records
            .iter()
            .filter(|r| Self::matches(r, category))
            .cloned()
            .collect()
    }
}

/// Recency bound on the launch date.
///
/// Keeps a record when `now - launch_date_utc <= window`. Future launches have
/// a negative elapsed time, so they pass every window: the filter reads as
/// "launched within the last N days, or not launched yet".
pub struct TimeWindowFilter;

impl TimeWindowFilter {
    pub fn matches(record: &LaunchRecord, window: TimeWindow, now: DateTime<Utc>) -> bool {
        match window.duration() {
            None => true,
            Some(limit) => now.signed_duration_since(record.launch_date_utc) <= limit,
        }
    }

    pub fn apply(
        records: &[LaunchRecord],
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> Vec<LaunchRecord> {
        records
            .iter()
            .filter(|r| Self::matches(r, window, now))
            .cloned()
            .collect()
    }
}

/// Category filter, then time window filter
pub struct FilterPipeline;

impl FilterPipeline {
    /// Working set for `selection`; `now` is fixed for the whole derivation
    pub fn derive(
        records: &[LaunchRecord],
        selection: FilterSelection,
        now: DateTime<Utc>,
    ) -> Vec<LaunchRecord> {
        let by_category = CategoryFilter::apply(records, selection.category);
        TimeWindowFilter::apply(&by_category, selection.window, now)
    }
}
