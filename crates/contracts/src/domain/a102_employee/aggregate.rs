use serde::{Deserialize, Serialize};

/// Editable employee fields for `POST /employees` and `PUT /employees/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub department_id: String,
    pub job_title: String,
    pub employment_type: String,
    pub start_date: String,
}
