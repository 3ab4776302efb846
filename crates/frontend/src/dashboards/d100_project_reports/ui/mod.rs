pub mod dashboard;
pub mod report_table;

pub use dashboard::ProjectReportsDashboard;
