use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Platforms requested for a trend analysis
pub const DEFAULT_PLATFORMS: [&str; 2] = ["google_trends", "tiktok"];

/// How many competitor products to ask for
pub const COMPETITOR_LIMIT: u32 = 10;

/// Body of `POST /api/trends/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysisRequest {
    pub keyword: String,
    pub platforms: Vec<String>,
}

impl TrendAnalysisRequest {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            platforms: DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Query of `GET /api/trends/competitors/{niche}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorQuery {
    pub limit: u32,
}

impl Default for CompetitorQuery {
    fn default() -> Self {
        Self {
            limit: COMPETITOR_LIMIT,
        }
    }
}

/// Query of `POST /api/trends/profit-calculator`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitQuery {
    pub cost: f64,
    pub price: f64,
    pub ad_spend: f64,
}

/// Trend analysis result as sent by the trends service.
///
/// The payload is not validated. Two shapes are in circulation: the
/// aggregated one (`combined_score` + `platforms` object keyed by name)
/// and the flat one (`combined_trend_score` + `platform_data` array).
/// Accessors read whichever is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendAnalysis(pub Value);

/// Score of a single platform within a trend analysis
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformScore {
    pub platform: String,
    pub trend_score: f64,
}

impl PlatformScore {
    /// "google_trends" -> "Google Trends"
    ///
    /// Only the first underscore becomes a space; every word is capitalised.
    pub fn display_name(&self) -> String {
        self.platform
            .replacen('_', " ", 1)
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Verbal grade of a combined trend score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opportunity {
    Excellent,
    Good,
    Moderate,
}

impl Opportunity {
    pub fn from_score(score: f64) -> Self {
        if score > 75.0 {
            Opportunity::Excellent
        } else if score > 60.0 {
            Opportunity::Good
        } else {
            Opportunity::Moderate
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Opportunity::Excellent => "Excellent",
            Opportunity::Good => "Good",
            Opportunity::Moderate => "Moderate",
        }
    }
}

impl TrendAnalysis {
    pub fn combined_score(&self) -> Option<f64> {
        self.0
            .get("combined_trend_score")
            .or_else(|| self.0.get("combined_score"))
            .and_then(number)
    }

    pub fn opportunity(&self) -> Opportunity {
        Opportunity::from_score(self.combined_score().unwrap_or_default())
    }

    pub fn keyword(&self) -> Option<&str> {
        self.0.get("keyword").and_then(Value::as_str)
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.0.get("recommendation").and_then(Value::as_str)
    }

    pub fn platforms(&self) -> Vec<PlatformScore> {
        if let Some(items) = self.0.get("platform_data").and_then(Value::as_array) {
            return items
                .iter()
                .filter_map(|item| {
                    let platform = item.get("platform")?.as_str()?.to_string();
                    Some(PlatformScore {
                        platform,
                        trend_score: item.get("trend_score").and_then(number).unwrap_or_default(),
                    })
                })
                .collect();
        }

        match self.0.get("platforms").and_then(Value::as_object) {
            Some(map) => map
                .iter()
                .map(|(name, item)| PlatformScore {
                    platform: item
                        .get("platform")
                        .and_then(Value::as_str)
                        .unwrap_or(name.as_str())
                        .to_string(),
                    trend_score: item.get("trend_score").and_then(number).unwrap_or_default(),
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults_platforms() {
        let body = serde_json::to_value(TrendAnalysisRequest::new("wireless earbuds")).unwrap();
        assert_eq!(
            body,
            json!({ "keyword": "wireless earbuds", "platforms": ["google_trends", "tiktok"] })
        );
    }

    #[test]
    fn test_empty_keyword_is_a_valid_request() {
        let request = TrendAnalysisRequest::new("");
        assert_eq!(request.keyword, "");
        assert_eq!(request.platforms.len(), 2);
    }

    #[test]
    fn test_flat_shape() {
        let analysis = TrendAnalysis(json!({
            "combined_trend_score": 82,
            "platform_data": [
                { "platform": "google_trends", "trend_score": 78.5 },
                { "platform": "tiktok", "trend_score": 91 }
            ]
        }));

        assert_eq!(analysis.combined_score(), Some(82.0));
        assert_eq!(analysis.opportunity(), Opportunity::Excellent);
        let platforms = analysis.platforms();
        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[0].display_name(), "Google Trends");
        assert_eq!(platforms[1].trend_score, 91.0);
    }

    #[test]
    fn test_aggregated_shape() {
        let analysis = TrendAnalysis(json!({
            "keyword": "yoga mat",
            "combined_score": 64.2,
            "platforms": {
                "amazon": { "platform": "amazon", "trend_score": 70 },
                "reddit": { "trend_score": "55.5" }
            },
            "recommendation": "GOOD - Decent market potential, worth testing"
        }));

        assert_eq!(analysis.keyword(), Some("yoga mat"));
        assert_eq!(analysis.opportunity(), Opportunity::Good);
        assert!(analysis.recommendation().is_some());

        let platforms = analysis.platforms();
        assert_eq!(platforms.len(), 2);
        let reddit = platforms.iter().find(|p| p.platform == "reddit").unwrap();
        assert_eq!(reddit.trend_score, 55.5);
    }

    #[test]
    fn test_missing_fields() {
        let analysis = TrendAnalysis(json!({}));
        assert_eq!(analysis.combined_score(), None);
        assert_eq!(analysis.opportunity(), Opportunity::Moderate);
        assert!(analysis.platforms().is_empty());
    }

    #[test]
    fn test_opportunity_thresholds() {
        assert_eq!(Opportunity::from_score(75.1), Opportunity::Excellent);
        assert_eq!(Opportunity::from_score(75.0), Opportunity::Good);
        assert_eq!(Opportunity::from_score(60.5), Opportunity::Good);
        assert_eq!(Opportunity::from_score(60.0), Opportunity::Moderate);
        assert_eq!(Opportunity::Moderate.label(), "Moderate");
    }

    #[test]
    fn test_display_name_replaces_first_underscore_only() {
        let score = PlatformScore {
            platform: "amazon_best_sellers".to_string(),
            trend_score: 0.0,
        };
        assert_eq!(score.display_name(), "Amazon Best_sellers");
    }
}
