use serde::{Deserialize, Serialize};

/// Editable strategic plan fields for `POST /strategic-plans`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicPlanPayload {
    pub cidp_name: String,
    pub start_date: String,
    pub end_date: String,
    pub program_id: String,
    pub sub_program_id: String,
    pub key_outcome: String,
    pub kpi: String,
    pub baseline: String,
    pub target: String,
}
