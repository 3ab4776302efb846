//! Report loading: per-view state, stale-response protection, fetch groups.
//!
//! A view issues a token before each load and only applies the result if
//! that token is still the newest one; a slow response for an old filter
//! selection is discarded instead of overwriting fresher data.

use crate::shared::api_utils::{self, ApiError};
use crate::shared::filter_state::FilterState;
use contracts::dashboards::d100_project_reports::ReportKind;
use contracts::shared::report::Row;
use futures::future::join_all;
use serde_json::Value;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Load state of one data-driven view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Failed(String),
    Empty,
    Ready(T),
}

impl<T> ViewState<T> {
    /// Map a settled load to `Failed`, `Empty` or `Ready`.
    pub fn settle(
        result: Result<T, ApiError>,
        error_message: &str,
        is_empty: impl FnOnce(&T) -> bool,
    ) -> Self {
        match result {
            Ok(data) if is_empty(&data) => ViewState::Empty,
            Ok(data) => ViewState::Ready(data),
            Err(e) => {
                log::error!("{}: {}", error_message, e);
                ViewState::Failed(error_message.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Idle | ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Identifies one load attempt of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Hands out increasing tokens and remembers the latest.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt; every earlier token becomes stale.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// Rows of a payload that should be an array. Anything else becomes an
/// empty list; non-object elements are dropped.
pub fn coerce_rows(payload: Value) -> Vec<Row> {
    match payload {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(row) => Some(row),
                other => {
                    log::warn!("Dropping non-object report row: {}", other);
                    None
                }
            })
            .collect(),
        other => {
            let kind = match other {
                Value::Null => "null",
                Value::Bool(_) => "bool",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Object(_) => "object",
                Value::Array(_) => "array",
            };
            log::warn!("Expected an array of rows, got {}; using empty list", kind);
            Vec::new()
        }
    }
}

/// Run every request concurrently and wait for all of them.
///
/// The group fails as a whole if any member fails; the datasets that did
/// load are discarded so the view never shows a partial set of charts.
pub async fn fetch_group<F>(requests: Vec<F>) -> Result<Vec<Vec<Row>>, ApiError>
where
    F: Future<Output = Result<Value, ApiError>>,
{
    let settled = join_all(requests).await;
    let mut datasets = Vec::with_capacity(settled.len());
    let mut first_error = None;

    for (index, result) in settled.into_iter().enumerate() {
        match result {
            Ok(payload) => datasets.push(coerce_rows(payload)),
            Err(e) => {
                log::error!("Fetch group member {} failed: {}", index, e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(datasets),
    }
}

/// Filter fields each report forwards to the backend.
pub fn accepted_filters(kind: ReportKind) -> &'static [&'static str] {
    const COMMON: &[&str] = &[
        "departmentId",
        "countyId",
        "subcountyId",
        "wardId",
        "financialYearId",
        "categoryId",
        "status",
    ];
    const NO_YEAR: &[&str] = &[
        "departmentId",
        "countyId",
        "subcountyId",
        "wardId",
        "categoryId",
        "status",
    ];
    match kind {
        // these reports break results down by year, a year filter would
        // collapse them to a single bar
        ReportKind::StatusByYear | ReportKind::BudgetByFinancialYear => NO_YEAR,
        ReportKind::StatusSummary
        | ReportKind::ProjectsByDepartment
        | ReportKind::ProjectDetails => COMMON,
    }
}

/// Path plus query string for a report under the given filters.
pub fn report_path(kind: ReportKind, filters: &FilterState) -> String {
    let query = filters.to_query(accepted_filters(kind));
    if query.is_empty() {
        kind.path().to_string()
    } else {
        format!("{}?{}", kind.path(), query)
    }
}

/// Raw payload of one report.
pub async fn fetch_report(kind: ReportKind, filters: FilterState) -> Result<Value, ApiError> {
    api_utils::get_json(&report_path(kind, &filters)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{ready, BoxFuture, FutureExt};
    use serde_json::json;

    fn ok(value: Value) -> BoxFuture<'static, Result<Value, ApiError>> {
        ready(Ok(value)).boxed()
    }

    fn fail(status: u16) -> BoxFuture<'static, Result<Value, ApiError>> {
        ready(Err(ApiError::Http {
            status,
            message: None,
        }))
        .boxed()
    }

    #[test]
    fn test_group_with_one_failure_fails_as_a_whole() {
        let requests = vec![
            ok(json!([{ "statusName": "Ongoing", "count": 3 }])),
            ok(json!([])),
            fail(500),
            ok(json!([{ "year": 2021 }])),
            ok(json!([{ "id": 1 }])),
        ];
        let result = block_on(fetch_group(requests));
        assert_eq!(
            result,
            Err(ApiError::Http {
                status: 500,
                message: None
            })
        );

        let state = ViewState::settle(result, "Failed to load project reports", |d| d.is_empty());
        assert_eq!(state, ViewState::Failed("Failed to load project reports".into()));
    }

    #[test]
    fn test_group_success_keeps_request_order() {
        let requests = vec![ok(json!([{ "a": 1 }])), ok(json!([{ "b": 2 }, { "b": 3 }]))];
        let datasets = block_on(fetch_group(requests)).unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].len(), 1);
        assert_eq!(datasets[1].len(), 2);
        assert_eq!(datasets[1][1]["b"], json!(3));
    }

    #[test]
    fn test_non_array_payload_becomes_empty() {
        assert!(coerce_rows(json!({ "message": "no data" })).is_empty());
        assert!(coerce_rows(json!(null)).is_empty());
        assert_eq!(coerce_rows(json!([{ "a": 1 }, 5, "x"])).len(), 1);
    }

    #[test]
    fn test_settle_distinguishes_empty_from_error() {
        let state: ViewState<Vec<Row>> = ViewState::settle(Ok(Vec::new()), "x", |d| d.is_empty());
        assert_eq!(state, ViewState::Empty);

        let rows = coerce_rows(json!([{ "a": 1 }]));
        let state = ViewState::settle(Ok(rows.clone()), "x", |d| d.is_empty());
        assert_eq!(state.ready(), Some(&rows));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_only_latest_token_is_current() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_current(first));
        let second = tracker.issue();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));

        // clones share the counter
        let view_copy = tracker.clone();
        let third = view_copy.issue();
        assert!(!tracker.is_current(second));
        assert!(tracker.is_current(third));
    }

    #[test]
    fn test_report_path_forwards_accepted_filters_only() {
        let filters = FilterState::new()
            .change("departmentId", "4")
            .change("financialYearId", "2023/2024")
            .change("sortHint", "x");
        assert_eq!(
            report_path(ReportKind::StatusSummary, &filters),
            "/reports/project-status-summary?departmentId=4&financialYearId=2023%2F2024"
        );
        assert_eq!(
            report_path(ReportKind::StatusByYear, &filters),
            "/reports/project-status-by-year?departmentId=4"
        );
        assert_eq!(
            report_path(ReportKind::ProjectDetails, &FilterState::new()),
            "/reports/project-details"
        );
    }
}
