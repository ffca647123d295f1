//! Fixed sample data for the presentation-only dashboard widgets.
//!
//! The revenue chart and the top products list are not wired to the
//! analytics service; they always render these rows.

use super::dto::{RevenuePoint, TopProduct};
use chrono::NaiveDate;

const REVENUE_SAMPLES: [(u32, f64); 7] = [
    (1, 4000.0),
    (5, 3000.0),
    (10, 5000.0),
    (15, 7000.0),
    (20, 6000.0),
    (25, 8000.0),
    (30, 9500.0),
];

const TOP_PRODUCTS: [(&str, u32, &str, &str); 5] = [
    ("Wireless Earbuds Pro", 1250, "$24,975", "245%"),
    ("Smart Watch Ultra", 890, "$35,600", "198%"),
    ("Portable Charger Max", 756, "$15,120", "176%"),
    ("Bluetooth Speaker Mini", 654, "$13,080", "165%"),
    ("Phone Stand Pro", 543, "$8,145", "142%"),
];

/// Revenue samples for January, labelled like "Jan 5"
pub fn revenue_overview() -> Vec<RevenuePoint> {
    REVENUE_SAMPLES
        .iter()
        .filter_map(|&(day, revenue)| {
            let date = NaiveDate::from_ymd_opt(2024, 1, day)?;
            Some(RevenuePoint {
                date: date.format("%b %-d").to_string(),
                revenue,
            })
        })
        .collect()
}

/// Top five products, best first
pub fn top_products() -> Vec<TopProduct> {
    TOP_PRODUCTS
        .iter()
        .map(|&(name, sales, revenue, roi)| TopProduct {
            name: name.to_string(),
            sales,
            revenue: revenue.to_string(),
            roi: roi.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_labels() {
        let points = revenue_overview();
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].date, "Jan 1");
        assert_eq!(points[6].date, "Jan 30");
        assert_eq!(points[6].revenue, 9500.0);
    }

    #[test]
    fn test_top_products_ordered_by_sales() {
        let products = top_products();
        assert_eq!(products.len(), 5);
        assert_eq!(products[0].name, "Wireless Earbuds Pro");
        assert!(products.windows(2).all(|w| w[0].sales >= w[1].sales));
    }
}
