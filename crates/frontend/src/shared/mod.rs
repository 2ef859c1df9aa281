pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod flash;
pub mod icons;
pub mod list_state;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
