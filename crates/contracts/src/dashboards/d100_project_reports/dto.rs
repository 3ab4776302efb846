use serde::{Deserialize, Serialize};

/// Reports that make up the project reports dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Project count per status (`statusName`, `count`)
    StatusSummary,
    /// Project count per financial year and status (`year`, `status`, `projectCount`)
    StatusByYear,
    /// Allocated vs. paid per financial year
    BudgetByFinancialYear,
    /// Totals per department
    ProjectsByDepartment,
    /// One row per project
    ProjectDetails,
}

impl ReportKind {
    /// Order in which the composite dashboard requests its datasets.
    pub const DASHBOARD: [ReportKind; 5] = [
        ReportKind::StatusSummary,
        ReportKind::StatusByYear,
        ReportKind::BudgetByFinancialYear,
        ReportKind::ProjectsByDepartment,
        ReportKind::ProjectDetails,
    ];

    /// Path relative to the API base.
    pub fn path(&self) -> &'static str {
        match self {
            ReportKind::StatusSummary => "/reports/project-status-summary",
            ReportKind::StatusByYear => "/reports/project-status-by-year",
            ReportKind::BudgetByFinancialYear => "/reports/budget-by-financial-year",
            ReportKind::ProjectsByDepartment => "/reports/projects-by-department",
            ReportKind::ProjectDetails => "/reports/project-details",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::StatusSummary => "Project status",
            ReportKind::StatusByYear => "Projects by status and year",
            ReportKind::BudgetByFinancialYear => "Budget vs. paid",
            ReportKind::ProjectsByDepartment => "Projects by department",
            ReportKind::ProjectDetails => "Project details",
        }
    }
}
