pub mod api;
pub mod context;
pub mod privileges;
pub mod storage;
