pub mod u200_trend_research;
pub mod u300_ad_copy;

pub use u200_trend_research::ui::ResearchPage;
pub use u300_ad_copy::ui::MarketingPage;
