//! Create/edit forms for the entities managed from the dashboard.
//!
//! One dialog serves every entity kind; everything kind-specific (fields,
//! endpoint, privilege) is answered by an exhaustive match on [`EntityForm`].

use crate::shared::api_utils::{self, ApiError, Method};
use crate::system::auth::privileges::{self, PrivilegeSet};
use chrono::NaiveDate;
use contracts::domain::a101_project::ProjectPayload;
use contracts::domain::a102_employee::EmployeePayload;
use contracts::domain::a103_leave_request::LeaveRequestPayload;
use contracts::domain::a104_strategic_plan::StrategicPlanPayload;
use contracts::shared::metadata::MetadataEntity;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Date,
    Number,
    TextArea,
    /// Dropdown fed by the metadata cache
    Reference(MetadataEntity),
    /// Dropdown with fixed `(value, label)` options
    Choice(&'static [(&'static str, &'static str)]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn form_field(key: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FormField {
    FormField {
        key,
        label,
        kind,
        required,
    }
}

pub const PROJECT_STATUSES: &[(&str, &str)] = &[
    ("Not Started", "Not Started"),
    ("Ongoing", "Ongoing"),
    ("Completed", "Completed"),
    ("Stalled", "Stalled"),
    ("Cancelled", "Cancelled"),
];

const EMPLOYMENT_TYPES: &[(&str, &str)] = &[
    ("Permanent", "Permanent"),
    ("Contract", "Contract"),
    ("Casual", "Casual"),
    ("Intern", "Intern"),
];

const LEAVE_TYPES: &[(&str, &str)] = &[
    ("1", "Annual leave"),
    ("2", "Sick leave"),
    ("3", "Maternity leave"),
    ("4", "Compassionate leave"),
];

/// Field layout and string access for one payload type.
pub trait FormPayload: Serialize + Default + Clone {
    const FIELDS: &'static [FormField];

    fn field(&self, key: &str) -> Option<&str>;

    fn field_mut(&mut self, key: &str) -> Option<&mut String>;
}

impl FormPayload for ProjectPayload {
    const FIELDS: &'static [FormField] = &[
        form_field("projectName", "Project name", FieldKind::Text, true),
        form_field("projectCode", "Project code", FieldKind::Text, false),
        form_field("departmentId", "Department", FieldKind::Reference(MetadataEntity::Departments), true),
        form_field("countyId", "County", FieldKind::Reference(MetadataEntity::Counties), false),
        form_field(
            "financialYearId",
            "Financial year",
            FieldKind::Reference(MetadataEntity::FinancialYears),
            true,
        ),
        form_field("categoryId", "Category", FieldKind::Reference(MetadataEntity::Categories), false),
        form_field("status", "Status", FieldKind::Choice(PROJECT_STATUSES), true),
        form_field("costOfProject", "Cost of project", FieldKind::Number, false),
        form_field("startDate", "Start date", FieldKind::Date, false),
        form_field("endDate", "End date", FieldKind::Date, false),
        form_field("description", "Description", FieldKind::TextArea, false),
    ];

    fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "projectName" => &self.project_name,
            "projectCode" => &self.project_code,
            "departmentId" => &self.department_id,
            "countyId" => &self.county_id,
            "financialYearId" => &self.financial_year_id,
            "categoryId" => &self.category_id,
            "status" => &self.status,
            "costOfProject" => &self.cost_of_project,
            "startDate" => &self.start_date,
            "endDate" => &self.end_date,
            "description" => &self.description,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        Some(match key {
            "projectName" => &mut self.project_name,
            "projectCode" => &mut self.project_code,
            "departmentId" => &mut self.department_id,
            "countyId" => &mut self.county_id,
            "financialYearId" => &mut self.financial_year_id,
            "categoryId" => &mut self.category_id,
            "status" => &mut self.status,
            "costOfProject" => &mut self.cost_of_project,
            "startDate" => &mut self.start_date,
            "endDate" => &mut self.end_date,
            "description" => &mut self.description,
            _ => return None,
        })
    }
}

impl FormPayload for EmployeePayload {
    const FIELDS: &'static [FormField] = &[
        form_field("staffId", "Staff ID", FieldKind::Text, true),
        form_field("firstName", "First name", FieldKind::Text, true),
        form_field("lastName", "Last name", FieldKind::Text, true),
        form_field("email", "Email", FieldKind::Email, true),
        form_field("phoneNumber", "Phone number", FieldKind::Text, false),
        form_field("departmentId", "Department", FieldKind::Reference(MetadataEntity::Departments), true),
        form_field("jobTitle", "Job title", FieldKind::Text, false),
        form_field("employmentType", "Employment type", FieldKind::Choice(EMPLOYMENT_TYPES), false),
        form_field("startDate", "Start date", FieldKind::Date, false),
    ];

    fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "staffId" => &self.staff_id,
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "email" => &self.email,
            "phoneNumber" => &self.phone_number,
            "departmentId" => &self.department_id,
            "jobTitle" => &self.job_title,
            "employmentType" => &self.employment_type,
            "startDate" => &self.start_date,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        Some(match key {
            "staffId" => &mut self.staff_id,
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "email" => &mut self.email,
            "phoneNumber" => &mut self.phone_number,
            "departmentId" => &mut self.department_id,
            "jobTitle" => &mut self.job_title,
            "employmentType" => &mut self.employment_type,
            "startDate" => &mut self.start_date,
            _ => return None,
        })
    }
}

impl FormPayload for LeaveRequestPayload {
    const FIELDS: &'static [FormField] = &[
        form_field("staffId", "Staff ID", FieldKind::Text, true),
        form_field("leaveTypeId", "Leave type", FieldKind::Choice(LEAVE_TYPES), true),
        form_field("startDate", "Start date", FieldKind::Date, true),
        form_field("endDate", "End date", FieldKind::Date, true),
        form_field("reason", "Reason", FieldKind::TextArea, false),
        form_field("handoverStaffId", "Handover to (staff ID)", FieldKind::Text, false),
    ];

    fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "staffId" => &self.staff_id,
            "leaveTypeId" => &self.leave_type_id,
            "startDate" => &self.start_date,
            "endDate" => &self.end_date,
            "reason" => &self.reason,
            "handoverStaffId" => &self.handover_staff_id,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        Some(match key {
            "staffId" => &mut self.staff_id,
            "leaveTypeId" => &mut self.leave_type_id,
            "startDate" => &mut self.start_date,
            "endDate" => &mut self.end_date,
            "reason" => &mut self.reason,
            "handoverStaffId" => &mut self.handover_staff_id,
            _ => return None,
        })
    }
}

impl FormPayload for StrategicPlanPayload {
    const FIELDS: &'static [FormField] = &[
        form_field("cidpName", "CIDP name", FieldKind::Text, true),
        form_field("startDate", "Start date", FieldKind::Date, true),
        form_field("endDate", "End date", FieldKind::Date, true),
        form_field("programId", "Program", FieldKind::Reference(MetadataEntity::Programs), false),
        form_field(
            "subProgramId",
            "Sub-program",
            FieldKind::Reference(MetadataEntity::SubPrograms),
            false,
        ),
        form_field("keyOutcome", "Key outcome", FieldKind::TextArea, false),
        form_field("kpi", "KPI", FieldKind::Text, false),
        form_field("baseline", "Baseline", FieldKind::Text, false),
        form_field("target", "Target", FieldKind::Text, false),
    ];

    fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "cidpName" => &self.cidp_name,
            "startDate" => &self.start_date,
            "endDate" => &self.end_date,
            "programId" => &self.program_id,
            "subProgramId" => &self.sub_program_id,
            "keyOutcome" => &self.key_outcome,
            "kpi" => &self.kpi,
            "baseline" => &self.baseline,
            "target" => &self.target,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        Some(match key {
            "cidpName" => &mut self.cidp_name,
            "startDate" => &mut self.start_date,
            "endDate" => &mut self.end_date,
            "programId" => &mut self.program_id,
            "subProgramId" => &mut self.sub_program_id,
            "keyOutcome" => &mut self.key_outcome,
            "kpi" => &mut self.kpi,
            "baseline" => &mut self.baseline,
            "target" => &mut self.target,
            _ => return None,
        })
    }
}

/// Payload plus the id of the record being edited (`None` when creating).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityDraft<P> {
    pub id: Option<String>,
    pub payload: P,
}

impl<P> EntityDraft<P> {
    pub fn create(payload: P) -> Self {
        Self { id: None, payload }
    }

    pub fn edit(id: impl Into<String>, payload: P) -> Self {
        Self {
            id: Some(id.into()),
            payload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    Employee,
    LeaveRequest,
    StrategicPlan,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Project,
        EntityKind::Employee,
        EntityKind::LeaveRequest,
        EntityKind::StrategicPlan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Project => "Project",
            EntityKind::Employee => "Employee",
            EntityKind::LeaveRequest => "Leave request",
            EntityKind::StrategicPlan => "Strategic plan",
        }
    }

    pub fn collection_path(&self) -> &'static str {
        match self {
            EntityKind::Project => "/projects",
            EntityKind::Employee => "/employees",
            EntityKind::LeaveRequest => "/leave-requests",
            EntityKind::StrategicPlan => "/strategic-plans",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub key: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityForm {
    Project(EntityDraft<ProjectPayload>),
    Employee(EntityDraft<EmployeePayload>),
    LeaveRequest(EntityDraft<LeaveRequestPayload>),
    StrategicPlan(EntityDraft<StrategicPlanPayload>),
}

impl EntityForm {
    /// Empty create form.
    pub fn blank(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Project => EntityForm::Project(EntityDraft::default()),
            EntityKind::Employee => EntityForm::Employee(EntityDraft::default()),
            EntityKind::LeaveRequest => EntityForm::LeaveRequest(EntityDraft::default()),
            EntityKind::StrategicPlan => EntityForm::StrategicPlan(EntityDraft::default()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            EntityForm::Project(_) => EntityKind::Project,
            EntityForm::Employee(_) => EntityKind::Employee,
            EntityForm::LeaveRequest(_) => EntityKind::LeaveRequest,
            EntityForm::StrategicPlan(_) => EntityKind::StrategicPlan,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            EntityForm::Project(d) => d.id.as_deref(),
            EntityForm::Employee(d) => d.id.as_deref(),
            EntityForm::LeaveRequest(d) => d.id.as_deref(),
            EntityForm::StrategicPlan(d) => d.id.as_deref(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id().is_some()
    }

    pub fn title(&self) -> String {
        let verb = if self.is_edit() { "Edit" } else { "New" };
        format!("{} {}", verb, self.kind().label().to_lowercase())
    }

    pub fn fields(&self) -> &'static [FormField] {
        match self {
            EntityForm::Project(_) => ProjectPayload::FIELDS,
            EntityForm::Employee(_) => EmployeePayload::FIELDS,
            EntityForm::LeaveRequest(_) => LeaveRequestPayload::FIELDS,
            EntityForm::StrategicPlan(_) => StrategicPlanPayload::FIELDS,
        }
    }

    pub fn get_field(&self, key: &str) -> &str {
        let value = match self {
            EntityForm::Project(d) => d.payload.field(key),
            EntityForm::Employee(d) => d.payload.field(key),
            EntityForm::LeaveRequest(d) => d.payload.field(key),
            EntityForm::StrategicPlan(d) => d.payload.field(key),
        };
        value.unwrap_or("")
    }

    /// Returns `false` for keys the form does not have.
    pub fn set_field(&mut self, key: &str, value: &str) -> bool {
        let slot = match self {
            EntityForm::Project(d) => d.payload.field_mut(key),
            EntityForm::Employee(d) => d.payload.field_mut(key),
            EntityForm::LeaveRequest(d) => d.payload.field_mut(key),
            EntityForm::StrategicPlan(d) => d.payload.field_mut(key),
        };
        match slot {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => {
                log::warn!("{} form has no field '{}'", self.kind().label(), key);
                false
            }
        }
    }

    pub fn required_privilege(&self) -> &'static str {
        let edit = self.is_edit();
        match (self.kind(), edit) {
            (EntityKind::Project, false) => privileges::PROJECT_CREATE,
            (EntityKind::Project, true) => privileges::PROJECT_UPDATE,
            (EntityKind::Employee, false) => privileges::EMPLOYEE_CREATE,
            (EntityKind::Employee, true) => privileges::EMPLOYEE_UPDATE,
            (EntityKind::LeaveRequest, false) => privileges::LEAVE_REQUEST_CREATE,
            (EntityKind::LeaveRequest, true) => privileges::LEAVE_REQUEST_UPDATE,
            (EntityKind::StrategicPlan, false) => privileges::STRATEGIC_PLAN_CREATE,
            (EntityKind::StrategicPlan, true) => privileges::STRATEGIC_PLAN_UPDATE,
        }
    }

    /// Request path: the collection when creating, the record when editing.
    pub fn target_path(&self) -> String {
        let collection = self.kind().collection_path();
        match self.id() {
            Some(id) => format!("{}/{}", collection, urlencoding::encode(id)),
            None => collection.to_string(),
        }
    }

    /// Missing required fields plus date ranges that end before they start.
    pub fn validate_required(&self) -> Vec<FieldError> {
        let mut errors: Vec<FieldError> = self
            .fields()
            .iter()
            .filter(|f| f.required && self.get_field(f.key).trim().is_empty())
            .map(|f| FieldError {
                key: f.key,
                message: format!("{} is required", f.label),
            })
            .collect();

        let parse = |key: &str| NaiveDate::parse_from_str(self.get_field(key).trim(), "%Y-%m-%d").ok();
        if let (Some(start), Some(end)) = (parse("startDate"), parse("endDate")) {
            if end < start {
                errors.push(FieldError {
                    key: "endDate",
                    message: "End date cannot be before start date".to_string(),
                });
            }
        }

        if let EntityForm::Project(draft) = self {
            let cost = draft.payload.cost_of_project.trim();
            if !cost.is_empty() && cost.replace(',', "").parse::<f64>().is_err() {
                errors.push(FieldError {
                    key: "costOfProject",
                    message: "Cost of project must be a number".to_string(),
                });
            }
        }
        errors
    }

    /// Check the privilege, then POST or PUT the payload.
    pub async fn submit(&self, privileges: &PrivilegeSet) -> Result<Value, ApiError> {
        privileges.require(self.required_privilege())?;

        let method = if self.is_edit() { Method::Put } else { Method::Post };
        let path = self.target_path();
        log::info!("{} {:?} {}", self.kind().label(), method, path);

        match self {
            EntityForm::Project(d) => api_utils::send_json(method, &path, &d.payload).await,
            EntityForm::Employee(d) => api_utils::send_json(method, &path, &d.payload).await,
            EntityForm::LeaveRequest(d) => {
                api_utils::send_json(method, &path, &LeaveRequestBody::from(&d.payload)).await
            }
            EntityForm::StrategicPlan(d) => api_utils::send_json(method, &path, &d.payload).await,
        }
    }
}

/// Leave requests are sent with the day count the backend expects.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaveRequestBody<'a> {
    #[serde(flatten)]
    payload: &'a LeaveRequestPayload,
    number_of_days: Option<i64>,
}

impl<'a> From<&'a LeaveRequestPayload> for LeaveRequestBody<'a> {
    fn from(payload: &'a LeaveRequestPayload) -> Self {
        Self {
            payload,
            number_of_days: payload.number_of_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_every_declared_field_is_addressable() {
        for kind in EntityKind::ALL {
            let mut form = EntityForm::blank(kind);
            for f in form.fields() {
                assert!(form.set_field(f.key, "x"), "{:?}.{}", kind, f.key);
                assert_eq!(form.get_field(f.key), "x");
            }
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = EntityForm::blank(EntityKind::Employee);
        assert!(!form.set_field("salary", "1"));
        assert_eq!(form.get_field("salary"), "");
    }

    #[test]
    fn test_required_fields_reported() {
        let mut form = EntityForm::blank(EntityKind::Project);
        form.set_field("projectName", "Borehole");
        form.set_field("status", "Ongoing");
        let keys: Vec<&str> = form.validate_required().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["departmentId", "financialYearId"]);
    }

    #[test]
    fn test_leave_end_before_start() {
        let mut form = EntityForm::blank(EntityKind::LeaveRequest);
        for (key, value) in [
            ("staffId", "S-001"),
            ("leaveTypeId", "1"),
            ("startDate", "2024-05-10"),
            ("endDate", "2024-05-01"),
        ] {
            form.set_field(key, value);
        }
        let errors = form.validate_required();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "endDate");

        form.set_field("endDate", "2024-05-12");
        assert!(form.validate_required().is_empty());
    }

    #[test]
    fn test_project_cost_must_be_numeric() {
        let mut form = EntityForm::blank(EntityKind::Project);
        for (key, value) in [
            ("projectName", "Dispensary"),
            ("departmentId", "3"),
            ("financialYearId", "2023/2024"),
            ("status", "Ongoing"),
            ("costOfProject", "1,500,000"),
        ] {
            form.set_field(key, value);
        }
        assert!(form.validate_required().is_empty());

        form.set_field("costOfProject", "lots");
        assert_eq!(form.validate_required()[0].key, "costOfProject");
    }

    #[test]
    fn test_privilege_and_path_follow_mode() {
        let create = EntityForm::blank(EntityKind::StrategicPlan);
        assert_eq!(create.required_privilege(), privileges::STRATEGIC_PLAN_CREATE);
        assert_eq!(create.target_path(), "/strategic-plans");
        assert_eq!(create.title(), "New strategic plan");

        let edit = EntityForm::Project(EntityDraft::edit("17", ProjectPayload::default()));
        assert_eq!(edit.required_privilege(), privileges::PROJECT_UPDATE);
        assert_eq!(edit.target_path(), "/projects/17");
        assert_eq!(edit.title(), "Edit project");
    }

    #[test]
    fn test_submit_without_privilege_sends_nothing() {
        let form = EntityForm::blank(EntityKind::Employee);
        let result = block_on(form.submit(&PrivilegeSet::default()));
        assert_eq!(
            result,
            Err(ApiError::PermissionDenied {
                privilege: privileges::EMPLOYEE_CREATE.to_string()
            })
        );
    }

    #[test]
    fn test_leave_body_carries_day_count() {
        let payload = LeaveRequestPayload {
            staff_id: "S-9".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-03".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(LeaveRequestBody::from(&payload)).unwrap();
        assert_eq!(body["staffId"], "S-9");
        assert_eq!(body["numberOfDays"], 3);
    }
}
