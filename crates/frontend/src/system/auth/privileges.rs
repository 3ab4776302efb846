//! Client-side privilege checks.
//!
//! The server is the authority; these checks only keep the UI from sending
//! requests that are bound to be rejected and give the user a clear notice.

use crate::shared::api_utils::ApiError;
use contracts::system::auth::UserInfo;
use std::collections::HashSet;

pub const PROJECT_CREATE: &str = "project.create";
pub const PROJECT_UPDATE: &str = "project.update";
pub const PROJECT_DELETE: &str = "project.delete";
pub const EMPLOYEE_CREATE: &str = "employee.create";
pub const EMPLOYEE_UPDATE: &str = "employee.update";
pub const LEAVE_REQUEST_CREATE: &str = "leave_request.create";
pub const LEAVE_REQUEST_UPDATE: &str = "leave_request.update";
pub const STRATEGIC_PLAN_CREATE: &str = "strategic_plan.create";
pub const STRATEGIC_PLAN_UPDATE: &str = "strategic_plan.update";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivilegeSet {
    granted: HashSet<String>,
}

impl PrivilegeSet {
    pub fn from_user(user: &UserInfo) -> Self {
        user.privileges.iter().cloned().collect()
    }

    pub fn has(&self, privilege: &str) -> bool {
        self.granted.contains(privilege)
    }

    /// `Err(PermissionDenied)` when the privilege is missing.
    pub fn require(&self, privilege: &str) -> Result<(), ApiError> {
        if self.has(privilege) {
            Ok(())
        } else {
            Err(ApiError::PermissionDenied {
                privilege: privilege.to_string(),
            })
        }
    }
}

impl FromIterator<String> for PrivilegeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        let user = UserInfo {
            privileges: vec![PROJECT_CREATE.to_string()],
            ..Default::default()
        };
        let set = PrivilegeSet::from_user(&user);
        assert!(set.require(PROJECT_CREATE).is_ok());
        assert_eq!(
            set.require(PROJECT_DELETE),
            Err(ApiError::PermissionDenied {
                privilege: PROJECT_DELETE.to_string()
            })
        );
    }

    #[test]
    fn test_empty_set_denies_everything() {
        let set = PrivilegeSet::default();
        assert!(!set.has(PROJECT_UPDATE));
        assert!(set.require(EMPLOYEE_CREATE).is_err());
    }
}
