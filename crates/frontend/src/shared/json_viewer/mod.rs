pub mod widget;

pub use widget::JsonTree;
