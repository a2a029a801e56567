/// External launch API client module
use crate::domain::{LaunchRecord, LaunchSite, Rocket};
use crate::errors::FetchError;
use crate::utils::{int, s_at, timestamp, tri_bool};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{info, warn};

const ORBIT_POINTER: &str = "/rocket/second_stage/payloads/0/orbit";

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("launch-dash/0.1")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Anything that can produce the launch collection in one call
#[async_trait]
pub trait LaunchSource: Send + Sync {
    async fn fetch_launches(&self) -> Result<Vec<LaunchRecord>, FetchError>;
}

/// Launch list client for the SpaceX v3 API
pub struct LaunchClient {
    http_client: HttpClient,
    url: String,
}

impl LaunchClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LaunchSource for LaunchClient {
    async fn fetch_launches(&self) -> Result<Vec<LaunchRecord>, FetchError> {
        info!("Fetching launches from {}", self.url);
        let resp = self.http_client.get_client().get(&self.url).send().await?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let body = resp.text().await?;
        let json: Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Payload(e.to_string()))?;

        decode_launches(json)
    }
}

/// Coerce the raw payload into launch records.
///
/// Elements lacking a flight number, a parseable launch date or the upcoming
/// flag are skipped, as are repeated flight numbers. Everything else that is
/// missing degrades to an empty or unknown value. Server order is kept.
pub fn decode_launches(json: Value) -> Result<Vec<LaunchRecord>, FetchError> {
    let Value::Array(items) = json else {
        return Err(FetchError::Payload("expected a JSON array of launches".into()));
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let Some(record) = decode_launch(item) else {
            warn!("Skipping launch at index {}: missing required fields", index);
            continue;
        };
        if !seen.insert(record.flight_number) {
            warn!(
                "Skipping launch at index {}: duplicate flight number {}",
                index, record.flight_number
            );
            continue;
        }
        records.push(record);
    }

    Ok(records)
}

fn decode_launch(item: &Value) -> Option<LaunchRecord> {
    let flight_number = int(item.get("flight_number")?)?;
    let launch_date_utc = timestamp(item.get("launch_date_utc")?)?;
    let upcoming = item.get("upcoming")?.as_bool()?;

    Some(LaunchRecord {
        flight_number,
        launch_date_utc,
        mission_name: s_at(item, "/mission_name").unwrap_or_default(),
        launch_site: LaunchSite {
            site_name: s_at(item, "/launch_site/site_name").unwrap_or_default(),
        },
        rocket: Rocket {
            rocket_name: s_at(item, "/rocket/rocket_name").unwrap_or_default(),
            orbit: s_at(item, ORBIT_POINTER),
        },
        launch_success: item.get("launch_success").and_then(tri_bool),
        upcoming,
    })
}
