/// VPN key API operations.

use crate::api::client::{get_json, patch_empty};
use crate::types::VpnKey;

/// Fetch all VPN keys for the keys table.
pub async fn fetch_keys() -> Result<Vec<VpnKey>, String> {
    get_json("/admin/api/vpn-keys").await
}

/// Deactivate a key. The response body is deliberately ignored; the caller
/// applies the optimistic badge update on success.
pub async fn deactivate_key(key_id: i64) -> Result<(), String> {
    patch_empty(&format!("/admin/api/vpn-keys/{}/deactivate", key_id)).await
}
