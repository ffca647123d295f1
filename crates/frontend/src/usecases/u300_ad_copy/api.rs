use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, api_url_with_query, post_empty, post_json};
use contracts::usecases::u300_ad_copy::{
    AdCopy, AdCopyRequest, EmailSequenceQuery, ProductDescriptionQuery, VideoScriptQuery,
};
use serde_json::Value;

const API_BASE: &str = "/api/marketing";

/// Headlines, body copy, CTAs and audiences for a product
pub async fn generate_ad_copy(request: AdCopyRequest) -> Result<AdCopy, ApiError> {
    let url = api_url(&format!("{}/generate-ad-copy", API_BASE));
    post_json(&url, &request).await
}

/// Short-form video script; `key_benefits` travel as the JSON body
pub async fn generate_video_script(
    query: VideoScriptQuery,
    key_benefits: Vec<String>,
) -> Result<Value, ApiError> {
    let url = api_url_with_query(&format!("{}/generate-video-script", API_BASE), &query)?;
    post_json(&url, &key_benefits).await
}

pub async fn generate_email_sequence(query: EmailSequenceQuery) -> Result<Value, ApiError> {
    let url = api_url_with_query(&format!("{}/generate-email-sequence", API_BASE), &query)?;
    post_empty(&url).await
}

/// SEO product description; `features` travel as the JSON body
pub async fn generate_product_description(
    query: ProductDescriptionQuery,
    features: Vec<String>,
) -> Result<Value, ApiError> {
    let url = api_url_with_query(
        &format!("{}/generate-product-description", API_BASE),
        &query,
    )?;
    post_json(&url, &features).await
}
