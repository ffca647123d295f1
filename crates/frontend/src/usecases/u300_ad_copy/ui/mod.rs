pub mod page;
pub mod results;
pub mod tools;

pub use page::MarketingPage;
pub use results::AdCopyResults;
pub use tools::MarketingTools;
