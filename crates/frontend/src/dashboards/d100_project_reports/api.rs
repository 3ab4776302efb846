use super::model::ReportData;
use crate::shared::api_utils::ApiError;
use crate::shared::filter_state::FilterState;
use crate::shared::report_fetcher::{fetch_group, fetch_report};
use contracts::dashboards::d100_project_reports::ReportKind;

/// Fetch every dashboard report under `filters` as one group.
pub async fn load_reports(filters: &FilterState) -> Result<ReportData, ApiError> {
    let requests: Vec<_> = ReportKind::DASHBOARD
        .iter()
        .map(|kind| fetch_report(*kind, filters.clone()))
        .collect();
    let datasets = fetch_group(requests).await?;
    Ok(ReportData::from_datasets(datasets))
}
