//! Filter state shared by every report on the dashboard.
//!
//! A flat `field -> value` mapping. Updates never mutate in place: each
//! operation returns a fresh state so the dashboard can hold it in a signal
//! and compare snapshots cheaply.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected value of one filter field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Many(Vec<String>),
}

impl FilterValue {
    /// Empty selections are kept in the map but never sent or counted.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Single(v) => v.trim().is_empty(),
            FilterValue::Many(vs) => vs.iter().all(|v| v.trim().is_empty()),
        }
    }

    /// Query-string form; multi-select values are comma joined.
    pub fn to_param(&self) -> String {
        match self {
            FilterValue::Single(v) => v.trim().to_string(),
            FilterValue::Many(vs) => vs
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            FilterValue::Single(v) => vec![v.as_str()],
            FilterValue::Many(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Single(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Many(values)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    fields: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value at `field`, keeping all other entries.
    pub fn change(&self, field: &str, value: impl Into<FilterValue>) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(field.to_string(), value.into());
        Self { fields }
    }

    /// Drop one field (filter chip removal).
    pub fn without(&self, field: &str) -> Self {
        let mut fields = self.fields.clone();
        fields.remove(field);
        Self { fields }
    }

    /// Empty mapping.
    pub fn clear(&self) -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.fields.get(field)
    }

    /// Text of a single-valued field, `""` when unset.
    pub fn get_str(&self, field: &str) -> &str {
        match self.fields.get(field) {
            Some(FilterValue::Single(v)) => v.as_str(),
            _ => "",
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Non-empty entries, in key order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.fields
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Number of filters with a value (panel badge).
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// URL-encoded query string (without `?`) restricted to the fields a
    /// report accepts. Unknown keys are left for the server to ignore, so
    /// they are simply not forwarded.
    pub fn to_query(&self, accepted: &[&str]) -> String {
        self.active()
            .filter(|(k, _)| accepted.contains(k))
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(&v.to_param())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FilterState {
        FilterState::new()
            .change("departmentId", "4")
            .change("countyId", "22")
            .change("status", vec!["Ongoing".to_string(), "Stalled".to_string()])
    }

    #[test]
    fn test_change_preserves_other_entries() {
        let before = sample();
        let after = before.change("countyId", "47");
        assert_eq!(after.get_str("countyId"), "47");
        assert_eq!(after.get_str("departmentId"), "4");
        assert_eq!(after.len(), 3);
        // the original snapshot is untouched
        assert_eq!(before.get_str("countyId"), "22");
    }

    #[test]
    fn test_clear_then_change_has_no_leakage() {
        let states = [
            FilterState::new(),
            sample(),
            sample().change("financialYearId", "2023/2024"),
        ];
        for state in states {
            let next = state.clear().change("categoryId", "9");
            assert_eq!(next.len(), 1);
            assert_eq!(next.get_str("categoryId"), "9");
            assert!(next.get("departmentId").is_none());
        }
    }

    #[test]
    fn test_without_removes_one_field() {
        let state = sample().without("countyId");
        assert!(state.get("countyId").is_none());
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_empty_values_are_inactive() {
        let state = FilterState::new()
            .change("departmentId", "")
            .change("status", Vec::<String>::new())
            .change("countyId", "  ");
        assert_eq!(state.len(), 3);
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.to_query(&["departmentId", "status", "countyId"]), "");
    }

    #[test]
    fn test_to_query_skips_unaccepted_keys() {
        let state = sample().change("unknownKey", "x");
        assert_eq!(
            state.to_query(&["departmentId", "status"]),
            "departmentId=4&status=Ongoing%2CStalled"
        );
    }

    #[test]
    fn test_to_query_encodes_values() {
        let state = FilterState::new().change("financialYearId", "2023/2024");
        assert_eq!(
            state.to_query(&["financialYearId"]),
            "financialYearId=2023%2F2024"
        );
    }
}
