pub mod api_error;
pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod icons;
pub mod json_viewer;
pub mod remote_data;
