use crate::shared::column_visibility::{ColumnAlign, ColumnDef};
use crate::shared::list_utils::{Searchable, SortValue, Sortable};
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::reshape::parse_amount;
use contracts::domain::a101_project::Project;

const fn column(
    id: &'static str,
    label: &'static str,
    default_visible: bool,
    align: ColumnAlign,
    min_width: u32,
) -> ColumnDef {
    ColumnDef {
        id,
        label,
        default_visible,
        align,
        min_width,
    }
}

pub static PROJECT_COLUMNS: [ColumnDef; 11] = [
    column("projectName", "Project", true, ColumnAlign::Left, 220),
    column("projectCode", "Code", false, ColumnAlign::Left, 100),
    column("departmentName", "Department", true, ColumnAlign::Left, 160),
    column("countyName", "County", true, ColumnAlign::Left, 120),
    column("financialYearName", "Financial year", true, ColumnAlign::Left, 120),
    column("status", "Status", true, ColumnAlign::Left, 110),
    column("costOfProject", "Cost", true, ColumnAlign::Right, 140),
    column("paidOut", "Paid", false, ColumnAlign::Right, 140),
    column("progressPercentage", "Progress", true, ColumnAlign::Right, 90),
    column("startDate", "Start", false, ColumnAlign::Left, 100),
    column("endDate", "End", false, ColumnAlign::Left, 100),
];

/// Project list row with amounts parsed once.
#[derive(Clone, Debug)]
pub struct ProjectRow {
    pub source: Project,
    pub cost: f64,
    pub paid: f64,
    pub progress: f64,
}

impl From<Project> for ProjectRow {
    fn from(source: Project) -> Self {
        Self {
            cost: parse_amount(&source.cost_of_project),
            paid: parse_amount(&source.paid_out),
            progress: parse_amount(&source.progress_percentage),
            source,
        }
    }
}

fn amount_text(value: f64, format: fn(f64) -> String) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format(value)
    }
}

impl ProjectRow {
    pub fn id(&self) -> &str {
        &self.source.id
    }

    fn text(&self, column: &str) -> Option<&str> {
        let p = &self.source;
        match column {
            "projectName" => Some(p.project_name.as_str()),
            "projectCode" => p.project_code.as_deref(),
            "departmentName" => p.department_name.as_deref(),
            "countyName" => p.county_name.as_deref(),
            "financialYearName" => p.financial_year_name.as_deref(),
            "status" => p.status.as_deref(),
            "startDate" => p.start_date.as_deref(),
            "endDate" => p.end_date.as_deref(),
            _ => None,
        }
    }

    /// Display text of one cell.
    pub fn cell_text(&self, column: &str) -> String {
        match column {
            "costOfProject" => amount_text(self.cost, format_money),
            "paidOut" => amount_text(self.paid, format_money),
            "progressPercentage" => amount_text(self.progress, format_percent),
            other => self.text(other).unwrap_or_default().to_string(),
        }
    }
}

impl Sortable for ProjectRow {
    fn sort_value(&self, column: &str) -> SortValue {
        match column {
            "costOfProject" => SortValue::from_amount(self.cost),
            "paidOut" => SortValue::from_amount(self.paid),
            "progressPercentage" => SortValue::from_amount(self.progress),
            // codes and names sort as text even when they look numeric
            "projectName" | "projectCode" => match self.text(column) {
                Some(t) if !t.trim().is_empty() => SortValue::Text(t.to_string()),
                _ => SortValue::Null,
            },
            other => self.text(other).map_or(SortValue::Null, SortValue::from_text),
        }
    }
}

impl Searchable for ProjectRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        ["projectName", "projectCode", "departmentName", "countyName", "status"]
            .iter()
            .filter_map(|c| self.text(c))
            .any(|t| t.to_lowercase().contains(&needle))
    }
}
