pub mod d100_project_reports;

pub use d100_project_reports::ProjectReportsDashboard;
