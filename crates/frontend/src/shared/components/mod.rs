pub mod card_animated;
pub mod page_header;
pub mod stats_card;
pub mod tool_card;
pub mod ui;

pub use card_animated::CardAnimated;
pub use page_header::PageHeader;
pub use stats_card::{StatsCard, Trend, TrendColor};
pub use tool_card::ToolCard;
