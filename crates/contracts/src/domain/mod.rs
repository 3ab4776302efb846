pub mod a101_project;
pub mod a102_employee;
pub mod a103_leave_request;
pub mod a104_strategic_plan;
