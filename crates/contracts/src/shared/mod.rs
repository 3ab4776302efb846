pub mod api_error;
pub mod metadata;
pub mod report;
pub mod serde_utils;
