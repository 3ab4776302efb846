use crate::shared::serde_utils::string_or_number;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Read model
// ============================================================================

/// Project as listed by `GET /projects`.
///
/// Amounts are kept in their transport form (the backend sends decimals as
/// strings for some tables); callers parse them before display or charting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub project_name: String,
    pub project_code: Option<String>,
    pub department_name: Option<String>,
    pub county_name: Option<String>,
    pub financial_year_name: Option<String>,
    pub status: Option<String>,
    pub cost_of_project: Value,
    pub paid_out: Value,
    pub progress_percentage: Value,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// ============================================================================
// Write model
// ============================================================================

/// Editable project fields for `POST /projects` and `PUT /projects/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub project_name: String,
    pub project_code: String,
    pub department_id: String,
    pub county_id: String,
    pub financial_year_id: String,
    pub category_id: String,
    pub status: String,
    pub cost_of_project: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl From<&Project> for ProjectPayload {
    /// Seeds an edit form from a listed project; reference ids are not part
    /// of the list response and stay empty until the user picks them.
    fn from(p: &Project) -> Self {
        Self {
            project_name: p.project_name.clone(),
            project_code: p.project_code.clone().unwrap_or_default(),
            status: p.status.clone().unwrap_or_default(),
            cost_of_project: match &p.cost_of_project {
                Value::Null => String::new(),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            start_date: p.start_date.clone().unwrap_or_default(),
            end_date: p.end_date.clone().unwrap_or_default(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_tolerates_sparse_rows() {
        let p: Project = serde_json::from_value(json!({
            "id": 42,
            "projectName": "Kiambu water pan",
            "costOfProject": "1,250,000.00"
        }))
        .unwrap();
        assert_eq!(p.id, "42");
        assert_eq!(p.status, None);
        assert_eq!(p.paid_out, Value::Null);

        let payload = ProjectPayload::from(&p);
        assert_eq!(payload.cost_of_project, "1,250,000.00");
        assert_eq!(payload.department_id, "");
    }

    #[test]
    fn test_null_project_name_reads_as_empty() {
        let p: Project = serde_json::from_value(json!({ "id": 1, "projectName": null })).unwrap();
        assert_eq!(p.id, "1");
        assert_eq!(p.project_name, "");
    }
}
