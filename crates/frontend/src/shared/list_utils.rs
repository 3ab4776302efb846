//! Shared list utilities: search, sorting, sort indicators.
//!
//! Sorting never touches the caller's rows; it returns a new vector and is
//! stable in both directions, so re-sorting a column with duplicates does
//! not shuffle unrelated rows.

use crate::shared::reshape::parse_amount_text;
use contracts::shared::report::Row;
use serde_json::Value;
use std::cmp::Ordering;

/// Trait for rows that support text search
pub trait Searchable {
    /// Case-insensitive match against the search text
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Comparable cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Null,
    Number(f64),
    Text(String),
}

impl SortValue {
    /// Text that parses as a number, grouping commas included, sorts as a
    /// number.
    pub fn from_text(text: &str) -> Self {
        if text.trim().is_empty() {
            return SortValue::Null;
        }
        let amount = parse_amount_text(text);
        if amount.is_finite() {
            SortValue::Number(amount)
        } else {
            SortValue::Text(text.to_string())
        }
    }

    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => SortValue::Null,
            Some(Value::Number(n)) => n.as_f64().map_or(SortValue::Null, SortValue::Number),
            Some(Value::String(s)) => SortValue::from_text(s),
            Some(Value::Bool(b)) => SortValue::Text(b.to_string()),
            Some(other) => SortValue::Text(other.to_string()),
        }
    }

    pub fn from_amount(amount: f64) -> Self {
        if amount.is_nan() {
            SortValue::Null
        } else {
            SortValue::Number(amount)
        }
    }
}

/// Ascending order: nulls, then numbers, then text. Text compares by
/// bytes, without locale rules.
pub fn compare_sort_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Null, SortValue::Null) => Ordering::Equal,
        (SortValue::Null, _) => Ordering::Less,
        (_, SortValue::Null) => Ordering::Greater,
        (SortValue::Number(x), SortValue::Number(y)) => x.total_cmp(y),
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        (SortValue::Text(x), SortValue::Text(y)) => x.cmp(y),
    }
}

/// Trait for rows that support sorting
pub trait Sortable {
    /// Value of `column` for comparison
    fn sort_value(&self, column: &str) -> SortValue;
}

impl Sortable for Row {
    fn sort_value(&self, column: &str) -> SortValue {
        SortValue::from_json(self.get(column))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: SortDirection::Desc,
        }
    }

    /// Header click: the active column flips direction, any other column
    /// starts ascending.
    pub fn toggle(current: Option<&SortSpec>, column: &str) -> SortSpec {
        match current {
            Some(spec) if spec.column == column => SortSpec {
                column: spec.column.clone(),
                direction: spec.direction.flipped(),
            },
            _ => SortSpec::asc(column),
        }
    }
}

/// Sorted copy of `rows`.
pub fn sort_rows<T: Sortable + Clone>(rows: &[T], spec: &SortSpec) -> Vec<T> {
    let mut keyed: Vec<(SortValue, &T)> = rows
        .iter()
        .map(|row| (row.sort_value(&spec.column), row))
        .collect();

    // `sort_by` is stable; descending swaps the operands instead of
    // reversing the result so ties keep their input order.
    keyed.sort_by(|(a, _), (b, _)| match spec.direction {
        SortDirection::Asc => compare_sort_values(a, b),
        SortDirection::Desc => compare_sort_values(b, a),
    });

    keyed.into_iter().map(|(_, row)| row.clone()).collect()
}

/// Filter rows by search text (ignored below 3 characters)
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.chars().count() < 3 {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Sort indicator for a header
pub fn get_sort_indicator(current: Option<&SortSpec>, column: &str) -> &'static str {
    match current {
        Some(spec) if spec.column == column => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

/// CSS class for the sort indicator span
pub fn get_sort_class(current: Option<&SortSpec>, column: &str) -> &'static str {
    match current {
        Some(spec) if spec.column == column => "sort-icon sort-icon--active",
        _ => "sort-icon",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<Row> {
        serde_json::from_value(value).unwrap()
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn test_desc_is_exact_reverse_for_distinct_values() {
        let input = rows(json!([
            { "id": 1, "name": "Borehole" },
            { "id": 2, "name": "Access road" },
            { "id": 3, "name": "Dispensary" },
            { "id": 4, "name": "ECDE classroom" }
        ]));
        let asc = sort_rows(&input, &SortSpec::asc("name"));
        let desc = sort_rows(&asc, &SortSpec::desc("name"));
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
        assert_eq!(ids(&asc), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_duplicates_keep_input_order_in_both_directions() {
        let input = rows(json!([
            { "id": 1, "status": "Ongoing" },
            { "id": 2, "status": "Completed" },
            { "id": 3, "status": "Ongoing" },
            { "id": 4, "status": "Completed" },
            { "id": 5, "status": "Ongoing" }
        ]));
        let asc = sort_rows(&input, &SortSpec::asc("status"));
        assert_eq!(ids(&asc), vec![2, 4, 1, 3, 5]);

        let desc = sort_rows(&asc, &SortSpec::desc("status"));
        assert_eq!(ids(&desc), vec![1, 3, 5, 2, 4]);

        // repeated sorts do not reshuffle ties
        let again = sort_rows(&asc, &SortSpec::asc("status"));
        assert_eq!(ids(&again), ids(&asc));
    }

    #[test]
    fn test_numeric_columns_compare_numerically() {
        let input = rows(json!([
            { "id": 1, "cost": "900" },
            { "id": 2, "cost": 10000 },
            { "id": 3, "cost": "85.5" },
            { "id": 4, "cost": null }
        ]));
        let asc = sort_rows(&input, &SortSpec::asc("cost"));
        assert_eq!(ids(&asc), vec![4, 3, 1, 2]);
    }

    #[test]
    fn test_grouped_amounts_compare_numerically() {
        let input = rows(json!([
            { "id": 1, "totalBudget": "1,000,000" },
            { "id": 2, "totalBudget": "900" },
            { "id": 3, "totalBudget": "25,000" }
        ]));
        let asc = sort_rows(&input, &SortSpec::asc("totalBudget"));
        assert_eq!(ids(&asc), vec![2, 3, 1]);
        assert_eq!(SortValue::from_text(" 1,250.5 "), SortValue::Number(1250.5));
    }

    #[test]
    fn test_text_comparison_is_lexical() {
        let input = rows(json!([
            { "id": 1, "name": "b" },
            { "id": 2, "name": "B" },
            { "id": 3, "name": "a" }
        ]));
        let asc = sort_rows(&input, &SortSpec::asc("name"));
        assert_eq!(ids(&asc), vec![2, 3, 1]);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let input = rows(json!([{ "id": 2 }, { "id": 1 }]));
        let _ = sort_rows(&input, &SortSpec::asc("id"));
        assert_eq!(ids(&input), vec![2, 1]);
    }

    #[test]
    fn test_toggle_cycle() {
        let first = SortSpec::toggle(None, "name");
        assert_eq!(first, SortSpec::asc("name"));
        let second = SortSpec::toggle(Some(&first), "name");
        assert_eq!(second, SortSpec::desc("name"));
        let third = SortSpec::toggle(Some(&second), "name");
        assert_eq!(third, SortSpec::asc("name"));
        let other = SortSpec::toggle(Some(&second), "cost");
        assert_eq!(other, SortSpec::asc("cost"));
    }

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::desc("cost");
        assert_eq!(get_sort_indicator(Some(&spec), "cost"), " ▼");
        assert_eq!(get_sort_indicator(Some(&spec), "name"), " ⇅");
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");
    }
}
