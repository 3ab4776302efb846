use serde::{Deserialize, Serialize};

/// Current user as returned by `GET /auth/me`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(deserialize_with = "crate::shared::serde_utils::string_or_number", default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Privilege names such as `project.create`.
    #[serde(default)]
    pub privileges: Vec<String>,
}

impl UserInfo {
    /// Full name when present, otherwise the login name.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user: UserInfo = serde_json::from_value(json!({
            "id": 7,
            "username": "jdoe",
            "fullName": " "
        }))
        .unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.display_name(), "jdoe");
        assert!(user.privileges.is_empty());
    }
}
