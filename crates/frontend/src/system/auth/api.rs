use contracts::system::auth::UserInfo;

use crate::shared::api_utils::{self, ApiError};

/// Current user with resolved privileges
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    api_utils::get::<UserInfo>("/auth/me").await
}
