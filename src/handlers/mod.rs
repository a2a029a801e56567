/// HTTP request handlers
use crate::controller::ReadModel;
use crate::domain::{FilterSelection, Health, LaunchRecord};
use crate::errors::{ApiError, ApiResult};
use crate::services::DashboardService;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardService>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

#[derive(Serialize)]
pub struct LaunchDetail {
    pub launch: LaunchRecord,
}

/// Filter query; omitted fields keep their current value
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub category: Option<String>,
    pub window: Option<String>,
}

type ViewResponse = ApiResult<Json<SuccessResponse<ReadModel>>>;

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Current dashboard view
pub async fn get_launches(State(state): State<AppState>) -> ViewResponse {
    let view = state.dashboard.read_model().await;
    Ok(Json(SuccessResponse::new(view)))
}

/// Change category and/or time window; resets to page 1
pub async fn filter_launches(
    Query(query): Query<FilterQuery>,
    State(state): State<AppState>,
) -> ViewResponse {
    let view = state
        .dashboard
        .update_selection(|current| apply_filter_query(current, &query))
        .await?;
    Ok(Json(SuccessResponse::new(view)))
}

/// Jump to a page; out-of-range pages are clamped
pub async fn go_to_page(Path(page): Path<String>, State(state): State<AppState>) -> ViewResponse {
    let page = page
        .parse::<usize>()
        .map_err(|_| ApiError::InvalidInput(format!("invalid page number '{}'", page)))?;

    let view = state.dashboard.go_to_page(page).await;
    Ok(Json(SuccessResponse::new(view)))
}

pub async fn next_page(State(state): State<AppState>) -> ViewResponse {
    Ok(Json(SuccessResponse::new(state.dashboard.next_page().await)))
}

pub async fn previous_page(State(state): State<AppState>) -> ViewResponse {
    Ok(Json(SuccessResponse::new(
        state.dashboard.previous_page().await,
    )))
}

/// Launch detail for the overlay
pub async fn get_launch(
    Path(flight_number): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessResponse<LaunchDetail>>> {
    let flight_number = flight_number.parse::<i64>().map_err(|_| {
        ApiError::InvalidInput(format!("invalid flight number '{}'", flight_number))
    })?;

    match state.dashboard.launch(flight_number).await {
        Some(launch) => Ok(Json(SuccessResponse::new(LaunchDetail { launch }))),
        None => Err(ApiError::NotFound(format!("launch {}", flight_number))),
    }
}

fn apply_filter_query(
    current: FilterSelection,
    query: &FilterQuery,
) -> ApiResult<FilterSelection> {
    let mut selection = current;
    if let Some(raw) = &query.category {
        selection.category = parse_choice("category", raw)?;
    }
    if let Some(raw) = &query.window {
        selection.window = parse_choice("window", raw)?;
    }
    Ok(selection)
}

fn parse_choice<T: DeserializeOwned>(field: &str, raw: &str) -> ApiResult<T> {
    serde_json::from_value(Value::String(raw.trim().to_string()))
        .map_err(|_| ApiError::InvalidInput(format!("unknown {} '{}'", field, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::LaunchSource;
    use crate::controller::DashboardController;
    use crate::domain::fixtures::launch;
    use crate::domain::{Category, TimeWindow};
    use crate::errors::FetchError;
    use crate::routes::build_router;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::Router;
    use tower::ServiceExt;

    struct FixedSource(Vec<LaunchRecord>);

    #[async_trait]
    impl LaunchSource for FixedSource {
        async fn fetch_launches(&self) -> Result<Vec<LaunchRecord>, FetchError> {
            Ok(self.0.clone())
        }
    }

    async fn app_with(count: i64) -> Router {
        let now = Utc::now();
        let records = (1..=count).map(|i| launch(i, now, i * 2, false)).collect();
        let dashboard = Arc::new(DashboardService::new(
            DashboardController::new(12),
            Arc::new(FixedSource(records)),
        ));
        dashboard.mount().await.unwrap().await.unwrap();
        build_router(AppState { dashboard })
    }

    async fn get_json(app: &Router, uri: &str) -> Value {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn error_code(body: &Value) -> &str {
        assert_eq!(body["ok"], Value::Bool(false));
        body["error"]["code"].as_str().unwrap()
    }

    #[tokio::test]
    async fn test_launches_view_is_flattened_envelope() {
        let app = app_with(15).await;
        let body = get_json(&app, "/launches").await;

        assert_eq!(body["ok"], Value::Bool(true));
        assert_eq!(body["state"], "ready");
        assert_eq!(body["total_pages"], 2);
        assert_eq!(body["current_page"], 1);
        assert_eq!(body["page_records"].as_array().unwrap().len(), 12);
        assert_eq!(body["page_links"], serde_json::json!([1, 2]));
        assert_eq!(body["selection"]["category"], "all");
        assert_eq!(body["has_next"], Value::Bool(true));
    }

    #[tokio::test]
    async fn test_next_and_previous_are_not_flight_numbers() {
        let app = app_with(15).await;

        let body = get_json(&app, "/launches/next").await;
        assert_eq!(body["ok"], Value::Bool(true));
        assert_eq!(body["current_page"], 2);
        let rows = body["page_records"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["no"], 1);
        assert_eq!(rows[0]["flight_number"], 13);

        let body = get_json(&app, "/launches/previous").await;
        assert_eq!(body["current_page"], 1);
    }

    #[tokio::test]
    async fn test_page_route_clamps_and_validates() {
        let app = app_with(15).await;

        let body = get_json(&app, "/launches/page/99").await;
        assert_eq!(body["current_page"], 2);

        let body = get_json(&app, "/launches/page/two").await;
        assert_eq!(error_code(&body), "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_launch_detail_routes() {
        let app = app_with(15).await;

        let body = get_json(&app, "/launches/7").await;
        assert_eq!(body["ok"], Value::Bool(true));
        assert_eq!(body["launch"]["flight_number"], 7);
        assert_eq!(body["launch"]["rocket"]["orbit"], "LEO");

        let body = get_json(&app, "/launches/999").await;
        assert_eq!(error_code(&body), "NOT_FOUND");

        let body = get_json(&app, "/launches/falcon").await;
        assert_eq!(error_code(&body), "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_filter_route_resets_page_and_rejects_unknown() {
        let app = app_with(15).await;
        get_json(&app, "/launches/page/2").await;

        let body = get_json(&app, "/launches/filter?category=upcoming").await;
        assert_eq!(body["ok"], Value::Bool(true));
        assert_eq!(body["is_empty"], Value::Bool(true));
        assert_eq!(body["total_pages"], 0);
        assert_eq!(body["current_page"], 1);
        assert_eq!(body["selection"]["category"], "upcoming");

        let body = get_json(&app, "/launches/filter?window=past_decade").await;
        assert_eq!(error_code(&body), "INVALID_INPUT");

        let body = get_json(&app, "/launches").await;
        assert_eq!(body["selection"]["window"], "all");
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = app_with(0).await;
        let body = get_json(&app, "/health").await;
        assert_eq!(body["status"], "ok");
    }

    fn query(category: Option<&str>, window: Option<&str>) -> FilterQuery {
        FilterQuery {
            category: category.map(str::to_string),
            window: window.map(str::to_string),
        }
    }

    #[test]
    fn test_filter_query_sets_both_fields() {
        let selection = apply_filter_query(
            FilterSelection::default(),
            &query(Some("upcoming"), Some("past_year")),
        )
        .unwrap();
        assert_eq!(selection.category, Category::Upcoming);
        assert_eq!(selection.window, TimeWindow::PastYear);
    }

    #[test]
    fn test_filter_query_keeps_omitted_fields() {
        let current = FilterSelection {
            category: Category::Past,
            window: TimeWindow::Past6Months,
        };
        let selection = apply_filter_query(current, &query(None, Some("past_2_years"))).unwrap();
        assert_eq!(selection.category, Category::Past);
        assert_eq!(selection.window, TimeWindow::Past2Years);
    }

    #[test]
    fn test_filter_query_rejects_unknown_values() {
        let default = FilterSelection::default();
        let err = apply_filter_query(default, &query(Some("someday"), None)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        let err = apply_filter_query(default, &query(None, Some("past_decade"))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
