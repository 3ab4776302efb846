pub mod d100_project_reports;
