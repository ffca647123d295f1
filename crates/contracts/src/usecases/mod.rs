pub mod u200_trend_research;
pub mod u300_ad_copy;
