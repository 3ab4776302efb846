//! Dashboard view model built from the five report datasets.

use crate::shared::column_visibility::{ColumnAlign, ColumnDef};
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::reshape::{
    amount_field, budget_series, donut_slices, first_present, parse_amount, pivot_wide,
    series_keys, value_to_label, UNKNOWN_LABEL,
};
use contracts::shared::report::{BudgetPoint, DonutSlice, Row};
use serde_json::Value;

const YEAR_KEYS: &[&str] = &["financialYear", "financialYearName", "year"];
const STATUS_KEYS: &[&str] = &["status", "statusName", "name"];
const COUNT_KEYS: &[&str] = &["projectCount", "count", "value", "total"];

/// Category × series matrix for bar charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesMatrix {
    pub categories: Vec<String>,
    pub series: Vec<String>,
    /// `values[category][series]`, `NaN` where the pair never occurs
    pub values: Vec<Vec<f64>>,
}

impl SeriesMatrix {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportData {
    pub status: Vec<DonutSlice>,
    pub status_by_year: SeriesMatrix,
    pub budget: Vec<BudgetPoint>,
    pub departments: Vec<Row>,
    pub details: Vec<Row>,
}

impl ReportData {
    /// Assemble from datasets in `ReportKind::DASHBOARD` order.
    pub fn from_datasets(datasets: Vec<Vec<Row>>) -> Self {
        let mut sets = datasets.into_iter();
        let mut next = || sets.next().unwrap_or_default();
        let status = next();
        let by_year = next();
        let budget = next();
        let departments = next();
        let details = next();

        Self {
            status: donut_slices(&status),
            status_by_year: status_by_year(&by_year),
            budget: budget_series(&budget),
            departments: departments.iter().map(department_row).collect(),
            details,
        }
    }

    /// True when no report returned a single row.
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
            && self.status_by_year.is_empty()
            && self.budget.is_empty()
            && self.departments.is_empty()
            && self.details.is_empty()
    }
}

/// Long `{year, status, count}` rows to a year × status matrix.
pub fn status_by_year(rows: &[Row]) -> SeriesMatrix {
    let canonical: Vec<Row> = rows
        .iter()
        .map(|row| {
            let mut out = Row::new();
            out.insert(
                "year".into(),
                first_present(row, YEAR_KEYS)
                    .cloned()
                    .unwrap_or_else(|| Value::String(UNKNOWN_LABEL.into())),
            );
            if let Some(status) = first_present(row, STATUS_KEYS) {
                out.insert("status".into(), status.clone());
            }
            out.insert("count".into(), Value::from(amount_field(row, COUNT_KEYS)));
            out
        })
        .collect();

    let wide = pivot_wide(&canonical, "year", "status", "count");
    let series = series_keys(&wide, "year");
    let values = wide
        .iter()
        .map(|row| {
            series
                .iter()
                .map(|s| row.get(s).map_or(f64::NAN, parse_amount))
                .collect()
        })
        .collect();

    SeriesMatrix {
        categories: wide
            .iter()
            .map(|row| row.get("year").map(value_to_label).unwrap_or_default())
            .collect(),
        series,
        values,
    }
}

/// Department row under the column ids of [`DEPARTMENT_COLUMNS`].
pub fn department_row(row: &Row) -> Row {
    const FIELDS: [(&str, &[&str]); 4] = [
        ("departmentName", &["departmentName", "department", "name"]),
        ("projectCount", &["projectCount", "count", "total"]),
        ("totalBudget", &["totalBudget", "budget", "allocatedBudget"]),
        ("totalPaid", &["totalPaid", "paid", "amountPaid"]),
    ];
    FIELDS
        .iter()
        .filter_map(|(id, keys)| first_present(row, keys).map(|v| (id.to_string(), v.clone())))
        .collect()
}

/// Budget points as a two-series matrix (budget, paid).
pub fn budget_matrix(points: &[BudgetPoint]) -> SeriesMatrix {
    SeriesMatrix {
        categories: points.iter().map(|p| p.label.clone()).collect(),
        series: vec!["Budget".into(), "Paid".into()],
        values: points.iter().map(|p| vec![p.budget, p.paid]).collect(),
    }
}

const fn column(id: &'static str, label: &'static str, align: ColumnAlign, min_width: u32) -> ColumnDef {
    ColumnDef {
        id,
        label,
        default_visible: true,
        align,
        min_width,
    }
}

pub static DEPARTMENT_COLUMNS: [ColumnDef; 4] = [
    column("departmentName", "Department", ColumnAlign::Left, 200),
    column("projectCount", "Projects", ColumnAlign::Right, 90),
    column("totalBudget", "Budget", ColumnAlign::Right, 140),
    column("totalPaid", "Paid", ColumnAlign::Right, 140),
];

pub static DETAIL_COLUMNS: [ColumnDef; 7] = [
    column("projectName", "Project", ColumnAlign::Left, 220),
    column("departmentName", "Department", ColumnAlign::Left, 160),
    column("countyName", "County", ColumnAlign::Left, 120),
    column("financialYearName", "Financial year", ColumnAlign::Left, 120),
    column("status", "Status", ColumnAlign::Left, 110),
    column("costOfProject", "Cost", ColumnAlign::Right, 140),
    column("progressPercentage", "Progress", ColumnAlign::Right, 90),
];

/// Display text of a report cell. Unparseable amounts render blank.
pub fn cell_text(column_id: &str, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let amount = || parse_amount(value);
    match column_id {
        "totalBudget" | "totalPaid" | "costOfProject" | "paidOut" => {
            let a = amount();
            if a.is_nan() {
                String::new()
            } else {
                format_money(a)
            }
        }
        "progressPercentage" => {
            let a = amount();
            if a.is_nan() {
                String::new()
            } else {
                format_percent(a)
            }
        }
        _ => value_to_label(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<Row> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_status_by_year_matrix() {
        let matrix = status_by_year(&rows(json!([
            { "year": "2021", "status": "Ongoing", "projectCount": 5 },
            { "year": "2021", "status": "Completed", "projectCount": "3" },
            { "year": "2022", "status": "Ongoing", "projectCount": 2 }
        ])));
        assert_eq!(matrix.categories, vec!["2021", "2022"]);
        // series keep backend order, not alphabetical
        assert_eq!(matrix.series, vec!["Ongoing", "Completed"]);
        assert_eq!(matrix.values[0], vec![5.0, 3.0]);
        assert_eq!(matrix.values[1][0], 2.0);
        assert!(matrix.values[1][1].is_nan());
    }

    #[test]
    fn test_status_by_year_field_fallbacks() {
        let matrix = status_by_year(&rows(json!([
            { "financialYearName": "2023/2024", "statusName": "Stalled", "count": 1 },
            { "financialYearName": "2023/2024" }
        ])));
        assert_eq!(matrix.categories, vec!["2023/2024"]);
        assert_eq!(matrix.series, vec!["Stalled"]);
    }

    #[test]
    fn test_from_datasets_in_dashboard_order() {
        let data = ReportData::from_datasets(vec![
            rows(json!([{ "statusName": "Ongoing", "count": 4 }])),
            Vec::new(),
            rows(json!([{ "financialYear": "2022/2023", "totalBudget": "1,000", "totalPaid": 250 }])),
            rows(json!([{ "departmentName": "Health" }])),
            Vec::new(),
        ]);
        assert_eq!(data.status[0].name, "Ongoing");
        assert_eq!(data.budget[0].budget, 1000.0);
        assert_eq!(data.departments.len(), 1);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_all_empty_datasets() {
        let data = ReportData::from_datasets(vec![Vec::new(); 5]);
        assert!(data.is_empty());
        // missing datasets are treated as empty
        assert!(ReportData::from_datasets(Vec::new()).is_empty());
    }

    #[test]
    fn test_department_row_fallbacks() {
        let row = department_row(&rows(json!([
            { "department": "Roads", "count": 7, "budget": "2,000", "extra": 1 }
        ]))[0]);
        assert_eq!(row["departmentName"], "Roads");
        assert_eq!(row["projectCount"], 7);
        assert_eq!(row["totalBudget"], "2,000");
        assert!(row.get("totalPaid").is_none());
        assert!(row.get("extra").is_none());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text("costOfProject", Some(&json!("oops"))), "");
        assert_eq!(cell_text("status", Some(&json!("Ongoing"))), "Ongoing");
        assert_eq!(cell_text("projectCount", Some(&json!(12))), "12");
        assert_eq!(cell_text("status", None), "");
        assert_eq!(cell_text("progressPercentage", Some(&json!(40))), "40.0%");
    }

    #[test]
    fn test_budget_matrix() {
        let m = budget_matrix(&[BudgetPoint {
            label: "2021/2022".into(),
            budget: 10.0,
            paid: f64::NAN,
        }]);
        assert_eq!(m.series, vec!["Budget", "Paid"]);
        assert_eq!(m.values[0][0], 10.0);
        assert!(m.values[0][1].is_nan());
    }
}
