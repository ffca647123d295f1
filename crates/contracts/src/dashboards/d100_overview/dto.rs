use serde::{Deserialize, Serialize};

/// Periods offered by the dashboard period selector (days)
pub const PERIOD_OPTIONS: [u32; 3] = [7, 30, 90];

/// Period requested when the dashboard is opened
pub const DEFAULT_PERIOD_DAYS: u32 = 30;

/// Query for `GET /api/analytics/dashboard`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub period_days: u32,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            period_days: DEFAULT_PERIOD_DAYS,
        }
    }
}

/// Overview metrics returned by the analytics service.
///
/// Every field falls back to zero so a partial payload still renders,
/// the same way the page starts out before the first response arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardMetrics {
    pub period_days: u32,
    pub total_revenue: f64,
    pub total_sales: f64,
    pub total_ad_spend: f64,
    pub net_profit: f64,
    pub active_products: u64,
    pub average_order_value: f64,
    pub roi: f64,
}

/// One point of the revenue overview chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Axis label, e.g. "Jan 5"
    pub date: String,
    pub revenue: f64,
}

/// Row of the "Top Performing Products" list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: u32,
    /// Preformatted, e.g. "$24,975"
    pub revenue: String,
    /// Preformatted, e.g. "245%"
    pub roi: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload() {
        let metrics: DashboardMetrics = serde_json::from_value(json!({
            "period_days": 30,
            "total_revenue": 12500.5,
            "total_sales": 340,
            "total_ad_spend": 2500.0,
            "net_profit": 10000.5,
            "active_products": 12,
            "average_order_value": 36.77,
            "roi": 400.02
        }))
        .unwrap();

        assert_eq!(metrics.period_days, 30);
        assert_eq!(metrics.total_sales, 340.0);
        assert_eq!(metrics.active_products, 12);
        assert_eq!(metrics.roi, 400.02);
    }

    #[test]
    fn test_partial_payload_defaults_to_zero() {
        let metrics: DashboardMetrics =
            serde_json::from_value(json!({ "total_revenue": 99.0 })).unwrap();

        assert_eq!(metrics.total_revenue, 99.0);
        assert_eq!(metrics.total_sales, 0.0);
        assert_eq!(metrics.active_products, 0);
        assert_eq!(metrics.roi, 0.0);
    }

    #[test]
    fn test_default_query() {
        let query = DashboardQuery::default();
        assert_eq!(query.period_days, 30);
        assert!(PERIOD_OPTIONS.contains(&query.period_days));
    }
}
