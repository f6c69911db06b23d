//! HTTP API handlers
//!
//! Thin wrappers around [`SlotChecker`](crate::crawler::SlotChecker). Every
//! check runs on the blocking thread pool and occupies one thread for the
//! whole retry cycle.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::ScrapeSummary;

use super::AppState;

const INDEX_HTML: &str = include_str!("index.html");

/// Name of the slot check tool
pub const CHECK_TOOL: &str = "check_camp_slot";

// ============================================================================
// Request / Response Types
// ============================================================================

/// Query string of `GET /check`
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub url: String,

    /// Comma-separated weekday names, e.g. "Friday,Saturday"
    pub weekdays: Option<String>,
}

/// Body of `POST /tools/check_camp_slot`
#[derive(Debug, Deserialize)]
pub struct ToolCallRequest {
    pub campground_url: String,

    #[serde(default)]
    pub weekdays: Option<Vec<String>>,
}

/// Description of a callable tool
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// Simple error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Split a comma-separated weekday list, dropping blanks
///
/// Returns `None` when nothing is left, which disables filtering.
pub fn parse_weekdays(raw: Option<&str>) -> Option<Vec<String>> {
    let days: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect();

    (!days.is_empty()).then_some(days)
}

// ============================================================================
// API Routes
// ============================================================================

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/status", get(status))
        .route("/check", get(check))
        .route("/tools", get(list_tools))
        .route("/tools/check_camp_slot", post(call_check_tool))
        .with_state(state)
}

/// Static form page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Liveness probe
async fn status() -> Json<serde_json::Value> {
    Json(json!({ "status": "Camp Slot Watcher is running" }))
}

/// Check a campground page for open slots
async fn check(State(state): State<AppState>, Query(query): Query<CheckQuery>) -> Response {
    let weekdays = parse_weekdays(query.weekdays.as_deref());
    run_check(state, query.url, weekdays).await
}

/// List the tools exposed by this server
async fn list_tools() -> Json<Vec<ToolDescriptor>> {
    Json(vec![ToolDescriptor {
        name: CHECK_TOOL,
        description: "Check a campground reservation page for available slots, \
                      optionally restricted to some weekdays",
        input_schema: json!({
            "type": "object",
            "properties": {
                "campground_url": { "type": "string", "description": "Reservation calendar URL" },
                "weekdays": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Weekday names to keep, e.g. [\"Friday\", \"Saturday\"]"
                }
            },
            "required": ["campground_url"]
        }),
    }])
}

/// Tool-style entry point for the slot check
async fn call_check_tool(
    State(state): State<AppState>,
    Json(request): Json<ToolCallRequest>,
) -> Response {
    let weekdays = request.weekdays.filter(|days| !days.is_empty());
    run_check(state, request.campground_url, weekdays).await
}

async fn run_check(state: AppState, url: String, weekdays: Option<Vec<String>>) -> Response {
    if url.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("url must not be empty")),
        )
            .into_response();
    }

    let checker = state.checker.clone();
    let task_url = url.clone();
    let task_weekdays = weekdays.clone();

    let result = tokio::task::spawn_blocking(move || {
        checker.check_slots(&task_url, task_weekdays.as_deref())
    })
    .await;

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(error = %e, url = %url, "Slot check task aborted");
            ScrapeSummary::failure(url, weekdays, format!("Slot check aborted: {e}"))
        }
    };

    Json(summary).into_response()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            parse_weekdays(Some("Friday, saturday")),
            Some(vec!["Friday".to_string(), "saturday".to_string()])
        );
        assert_eq!(parse_weekdays(Some("")), None);
        assert_eq!(parse_weekdays(Some(" , ,")), None);
        assert_eq!(parse_weekdays(None), None);
    }

    #[test]
    fn test_index_reads_canonical_field() {
        assert!(INDEX_HTML.contains("available_samples"));
        assert!(!INDEX_HTML.contains("available_list"));
    }
}
