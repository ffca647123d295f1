use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, api_url_with_query, get_json, path_segment, post_empty, post_json};
use contracts::usecases::u200_trend_research::{
    CompetitorQuery, ProfitQuery, TrendAnalysis, TrendAnalysisRequest,
};
use serde_json::Value;

const API_BASE: &str = "/api/trends";

/// Trend analysis for a keyword across the default platforms
pub async fn analyze_trend(keyword: String) -> Result<TrendAnalysis, ApiError> {
    let url = api_url(&format!("{}/analyze", API_BASE));
    post_json(&url, &TrendAnalysisRequest::new(keyword)).await
}

/// Viability check of a niche
pub async fn validate_niche(niche: String) -> Result<Value, ApiError> {
    let url = api_url(&format!("{}/validate-niche/{}", API_BASE, path_segment(&niche)));
    get_json(&url).await
}

/// Competitor products and pricing in a niche
pub async fn analyze_competitors(niche: String) -> Result<Value, ApiError> {
    let url = api_url_with_query(
        &format!("{}/competitors/{}", API_BASE, path_segment(&niche)),
        &CompetitorQuery::default(),
    )?;
    get_json(&url).await
}

/// Margins and ROI for a cost/price/ad-spend triple
pub async fn calculate_profit(query: ProfitQuery) -> Result<Value, ApiError> {
    let url = api_url_with_query(&format!("{}/profit-calculator", API_BASE), &query)?;
    post_empty(&url).await
}
