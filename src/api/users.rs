/// User API operations.

use crate::api::client::{get_json, patch_json};
use crate::types::{block_request, AdminUser};

/// Fetch all users for the users table.
pub async fn fetch_users() -> Result<Vec<AdminUser>, String> {
    get_json("/admin/api/users").await
}

/// Flip a user's blocked flag. Sends the inverse of `currently_blocked`;
/// the response body is deliberately ignored (optimistic update).
pub async fn toggle_user_block(user_id: i64, currently_blocked: bool) -> Result<(), String> {
    patch_json(
        &format!("/admin/api/users/{}", user_id),
        &block_request(currently_blocked),
    )
    .await
}
