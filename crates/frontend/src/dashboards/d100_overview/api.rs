use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url_with_query, get_json};
use contracts::dashboards::d100_overview::{DashboardMetrics, DashboardQuery};

const API_PATH: &str = "/api/analytics/dashboard";

/// Overview metrics for the last `period_days`
pub async fn get_dashboard_metrics(query: DashboardQuery) -> Result<DashboardMetrics, ApiError> {
    let url = api_url_with_query(API_PATH, &query)?;
    get_json(&url).await
}
