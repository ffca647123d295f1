pub mod dashboard;
pub mod revenue_chart;
pub mod top_products;

pub use dashboard::DashboardPage;
pub use revenue_chart::RevenueChart;
pub use top_products::TopProducts;
