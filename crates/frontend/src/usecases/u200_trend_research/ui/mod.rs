pub mod page;
pub mod results;
pub mod tools;

pub use page::ResearchPage;
pub use results::TrendResults;
pub use tools::ResearchTools;
