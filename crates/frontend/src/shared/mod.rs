pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod http;
pub mod list_view;
pub mod notify;
