use crate::shared::api_utils::{self, ApiError};
use crate::shared::report_fetcher::coerce_rows;
use contracts::domain::a101_project::Project;
use serde_json::Value;

const PROJECTS_PATH: &str = "/projects";

/// `GET /projects`
pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    let payload = api_utils::get_json(PROJECTS_PATH).await?;
    Ok(decode_projects(payload))
}

/// Projects from a list payload. A non-array payload is an empty list;
/// rows that do not decode are logged and skipped.
pub fn decode_projects(payload: Value) -> Vec<Project> {
    coerce_rows(payload)
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<Project>(Value::Object(row)) {
            Ok(project) => Some(project),
            Err(e) => {
                log::warn!("Skipping undecodable project row: {}", e);
                None
            }
        })
        .collect()
}

/// `DELETE /projects/{id}`
pub async fn delete_project(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", PROJECTS_PATH, urlencoding::encode(id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_array_payload_is_empty_list() {
        assert!(decode_projects(json!({ "data": [] })).is_empty());
        assert!(decode_projects(json!(null)).is_empty());
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let projects = decode_projects(json!([
            { "id": 1, "projectName": null },
            { "id": 2, "projectName": "Market shed", "status": 5 },
            "not a row",
            { "id": 3, "projectName": "Borehole" }
        ]));
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(projects[0].project_name, "");
    }
}
