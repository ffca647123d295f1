pub mod json_display;
pub mod number_format;
