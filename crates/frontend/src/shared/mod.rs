pub mod api_utils;
pub mod charts;
pub mod column_visibility;
pub mod components;
pub mod config;
pub mod entity_dialog;
pub mod entity_form;
pub mod filter_state;
pub mod icons;
pub mod kv_store;
pub mod list_utils;
pub mod metadata_cache;
pub mod notify;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod report_fetcher;
pub mod reshape;
