//! Pure transformations from flat report rows to chart inputs.
//!
//! Backend field names have drifted over time (`name` vs `statusName`,
//! `value` vs `count`), so every reader looks through a short list of
//! candidate keys. Nothing here panics on unexpected input.

use contracts::shared::report::{BudgetPoint, DonutSlice, Row};
use serde_json::{Map, Value};

const LABEL_KEYS: &[&str] = &["name", "statusName", "status", "label"];
const VALUE_KEYS: &[&str] = &["value", "count", "projectCount", "total"];
const YEAR_KEYS: &[&str] = &["financialYear", "financialYearName", "year"];
const BUDGET_KEYS: &[&str] = &["totalBudget", "budget", "allocatedBudget"];
const PAID_KEYS: &[&str] = &["totalPaid", "paid", "amountPaid"];

/// Label used when a row carries none of the known label fields.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// First non-null value among `keys`.
pub fn first_present<'a>(row: &'a Row, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .find(|v| !v.is_null())
}

/// Display text of a scalar cell.
pub fn value_to_label(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse an amount from its transport form.
///
/// Numbers pass through, strings may carry thousands separators and
/// padding. Anything else yields `NaN`, which renderers show as blank.
pub fn parse_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_amount_text(s),
        _ => f64::NAN,
    }
}

/// Amount text with thousands separators and padding removed; `NaN` when
/// the rest is not a number.
pub fn parse_amount_text(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

/// [`parse_amount`] over the first present key; missing fields are `NaN`.
pub fn amount_field(row: &Row, keys: &[&str]) -> f64 {
    first_present(row, keys).map_or(f64::NAN, parse_amount)
}

/// One `{name, value}` slice per row, in source order.
pub fn donut_slices(rows: &[Row]) -> Vec<DonutSlice> {
    rows.iter()
        .map(|row| {
            let name = first_present(row, LABEL_KEYS)
                .map(value_to_label)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
            DonutSlice {
                name,
                value: amount_field(row, VALUE_KEYS),
            }
        })
        .collect()
}

/// Budget vs. paid per label, in source order.
pub fn budget_series(rows: &[Row]) -> Vec<BudgetPoint> {
    rows.iter()
        .map(|row| BudgetPoint {
            label: first_present(row, YEAR_KEYS)
                .map(value_to_label)
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            budget: amount_field(row, BUDGET_KEYS),
            paid: amount_field(row, PAID_KEYS),
        })
        .collect()
}

/// Fold `{group, series, value}` rows into one wide row per group.
///
/// Groups appear in order of first appearance. A combination that never
/// occurs is left out of the output row entirely (not zero-filled). Rows
/// lacking the group or series key are skipped; a repeated pair keeps the
/// last value seen.
pub fn pivot_wide(rows: &[Row], group_key: &str, series_key: &str, value_key: &str) -> Vec<Row> {
    let mut out: Vec<Row> = Vec::new();

    for row in rows {
        let Some(group) = row.get(group_key).filter(|v| !v.is_null()) else {
            continue;
        };
        let Some(series) = row.get(series_key).filter(|v| !v.is_null()) else {
            continue;
        };
        let series_name = value_to_label(series);
        if series_name == group_key {
            continue;
        }
        let value = row.get(value_key).cloned().unwrap_or(Value::Null);

        let index = match out.iter().position(|r| r.get(group_key) == Some(group)) {
            Some(i) => i,
            None => {
                let mut fresh = Map::new();
                fresh.insert(group_key.to_string(), group.clone());
                out.push(fresh);
                out.len() - 1
            }
        };
        out[index].insert(series_name, value);
    }

    out
}

/// Series columns of a wide table, in first-seen order.
pub fn series_keys(wide_rows: &[Row], group_key: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for row in wide_rows {
        for key in row.keys() {
            if key != group_key && !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<Row> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_donut_prefers_canonical_fields() {
        let input = rows(json!([
            { "name": "Ongoing", "value": 12 },
            { "name": "Completed", "value": 30 }
        ]));
        assert_eq!(
            donut_slices(&input),
            vec![
                DonutSlice { name: "Ongoing".into(), value: 12.0 },
                DonutSlice { name: "Completed".into(), value: 30.0 },
            ]
        );
    }

    #[test]
    fn test_donut_falls_back_to_status_name_and_count() {
        let input = rows(json!([
            { "statusName": "Stalled", "count": "4" },
            { "statusName": "Not started", "count": 7 }
        ]));
        let slices = donut_slices(&input);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0], DonutSlice { name: "Stalled".into(), value: 4.0 });
        assert_eq!(slices[1], DonutSlice { name: "Not started".into(), value: 7.0 });
    }

    #[test]
    fn test_donut_without_label_or_value() {
        let slices = donut_slices(&rows(json!([{ "other": 1 }])));
        assert_eq!(slices[0].name, UNKNOWN_LABEL);
        assert!(slices[0].value.is_nan());
    }

    #[test]
    fn test_pivot_wide_leaves_missing_combinations_absent() {
        let input = rows(json!([
            { "year": 2020, "status": "Active", "projectCount": 3 },
            { "year": 2020, "status": "Closed", "projectCount": 2 },
            { "year": 2021, "status": "Active", "projectCount": 5 }
        ]));
        let wide = pivot_wide(&input, "year", "status", "projectCount");
        let expected = rows(json!([
            { "year": 2020, "Active": 3, "Closed": 2 },
            { "year": 2021, "Active": 5 }
        ]));
        assert_eq!(wide, expected);
        assert!(!wide[1].contains_key("Closed"));
        assert_eq!(series_keys(&wide, "year"), vec!["Active", "Closed"]);
    }

    #[test]
    fn test_series_keys_follow_first_appearance() {
        let input = rows(json!([
            { "year": 2020, "status": "Stalled", "projectCount": 1 },
            { "year": 2020, "status": "Active", "projectCount": 4 },
            { "year": 2021, "status": "Completed", "projectCount": 2 },
            { "year": 2021, "status": "Active", "projectCount": 3 }
        ]));
        let wide = pivot_wide(&input, "year", "status", "projectCount");
        assert_eq!(series_keys(&wide, "year"), vec!["Stalled", "Active", "Completed"]);
    }

    #[test]
    fn test_pivot_wide_is_idempotent_and_skips_incomplete_rows() {
        let input = rows(json!([
            { "year": 2022, "status": "Active", "projectCount": 1 },
            { "status": "Active", "projectCount": 9 },
            { "year": 2022, "projectCount": 9 },
            { "year": 2022, "status": "Active", "projectCount": 6 }
        ]));
        let first = pivot_wide(&input, "year", "status", "projectCount");
        let second = pivot_wide(&input, "year", "status", "projectCount");
        assert_eq!(first, second);
        assert_eq!(first, rows(json!([{ "year": 2022, "Active": 6 }])));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(&json!(1500)), 1500.0);
        assert_eq!(parse_amount(&json!("1,250,000.50")), 1_250_000.5);
        assert_eq!(parse_amount(&json!(" 42 ")), 42.0);
        assert!(parse_amount(&json!("n/a")).is_nan());
        assert!(parse_amount(&json!(null)).is_nan());
        assert!(parse_amount(&json!(true)).is_nan());
        assert!(parse_amount(&json!("")).is_nan());
    }

    #[test]
    fn test_budget_series_with_drifted_fields() {
        let input = rows(json!([
            { "financialYear": "2022/2023", "totalBudget": "2,000", "totalPaid": 500 },
            { "year": "2023/2024", "budget": 100, "paid": "garbage" }
        ]));
        let points = budget_series(&input);
        assert_eq!(points[0].label, "2022/2023");
        assert_eq!(points[0].budget, 2000.0);
        assert_eq!(points[0].paid, 500.0);
        assert_eq!(points[1].label, "2023/2024");
        assert_eq!(points[1].budget, 100.0);
        assert!(points[1].paid.is_nan());
    }
}
