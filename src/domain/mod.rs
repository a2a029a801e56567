/// Domain models for the launch dashboard
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One launch as consumed by the filter and pagination pipeline.
///
/// Records are decoded once at the fetch boundary and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub flight_number: i64,
    pub launch_date_utc: DateTime<Utc>,
    pub mission_name: String,
    pub launch_site: LaunchSite,
    pub rocket: Rocket,
    /// `None` while the outcome is pending
    pub launch_success: Option<bool>,
    pub upcoming: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchSite {
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rocket {
    pub rocket_name: String,
    /// Orbit of the first second-stage payload, if the launch lists one
    pub orbit: Option<String>,
}

impl LaunchRecord {
    pub fn outcome(&self) -> LaunchOutcome {
        match self.launch_success {
            Some(true) => LaunchOutcome::Success,
            Some(false) => LaunchOutcome::Failed,
            None => LaunchOutcome::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchOutcome {
    Success,
    Failed,
    Pending,
}

impl LaunchOutcome {
    pub fn label(self) -> &'static str {
        match self {
            LaunchOutcome::Success => "Success",
            LaunchOutcome::Failed => "Failed",
            LaunchOutcome::Pending => "Upcoming",
        }
    }
}

/// Past / upcoming split on the record's `upcoming` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    All,
    Past,
    Upcoming,
}

/// Relative recency bound on the launch date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "past_week")]
    PastWeek,
    #[serde(rename = "past_month")]
    PastMonth,
    #[serde(rename = "past_3_months")]
    Past3Months,
    #[serde(rename = "past_6_months")]
    Past6Months,
    #[serde(rename = "past_year")]
    PastYear,
    #[serde(rename = "past_2_years")]
    Past2Years,
}

impl TimeWindow {
    /// Window length in whole days; `None` for [`TimeWindow::All`]
    pub fn duration(self) -> Option<Duration> {
        let days = match self {
            TimeWindow::All => return None,
            TimeWindow::PastWeek => 7,
            TimeWindow::PastMonth => 30,
            TimeWindow::Past3Months => 90,
            TimeWindow::Past6Months => 180,
            TimeWindow::PastYear => 365,
            TimeWindow::Past2Years => 730,
        };
        Some(Duration::days(days))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub category: Category,
    pub window: TimeWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelection {
    pub page_size: usize,
    /// 1-based
    pub current_page: usize,
}

impl PageSelection {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }
}

/// Table row projection of a launch
#[derive(Debug, Clone, Serialize)]
pub struct LaunchRow {
    pub flight_number: i64,
    /// 1-based position on the current page
    pub no: usize,
    pub launched: String,
    pub location: String,
    pub mission: String,
    pub orbit: String,
    pub status: &'static str,
    pub outcome: LaunchOutcome,
    pub rocket: String,
}

impl LaunchRow {
    pub fn from_record(no: usize, record: &LaunchRecord) -> Self {
        let outcome = record.outcome();
        Self {
            flight_number: record.flight_number,
            no,
            launched: record
                .launch_date_utc
                .format("%B %-d, %Y at %H:%M")
                .to_string(),
            location: record.launch_site.site_name.clone(),
            mission: record.mission_name.clone(),
            orbit: record.rocket.orbit.clone().unwrap_or_default(),
            status: outcome.label(),
            outcome,
            rocket: record.rocket.rocket_name.clone(),
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
