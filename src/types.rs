/// Type definitions for the WireAdmin web console
///
/// Wire types for the admin API plus the notification model shared by the
/// UI components.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A VPN node as listed by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub healthy: bool,
    pub current_users: u32,
    pub max_users: u32,
    pub last_check: Option<DateTime<Utc>>,
}

/// A per-user VPN key (credential/config artifact).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VpnKey {
    pub id: i64,
    pub user: String,
    pub node: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// An end user of the VPN service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub is_blocked: bool,
    pub keys: u32,
    pub created_at: DateTime<Utc>,
}

/// Generic outcome envelope returned by node operations.
///
/// Older endpoints report failures in `reason`, newer ones in `message`;
/// both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ActionResponse {
    /// Failure text for the toast: server-supplied reason wins, then the
    /// message field, then the caller's generic fallback.
    pub fn failure_text(&self, fallback: &str) -> String {
        self.reason
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Response of the fleet-wide health check: a per-node result map plus an
/// optional human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthCheckReport {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: HashMap<String, serde_json::Value>,
}

impl HealthCheckReport {
    /// Toast text: the server message when present, otherwise a summary
    /// derived from the number of nodes in the result map.
    pub fn summary(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("Health check ran for {} nodes", self.results.len()),
        }
    }
}

/// PATCH body for the user block toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockRequest {
    pub is_blocked: bool,
}

/// Request body inverting the user's current blocked flag.
pub fn block_request(currently_blocked: bool) -> BlockRequest {
    BlockRequest {
        is_blocked: !currently_blocked,
    }
}

/// Toast wording for the transition just made, chosen from the pre-toggle
/// flag.
pub fn block_transition_message(was_blocked: bool) -> &'static str {
    if was_blocked {
        "User unblocked"
    } else {
        "User blocked"
    }
}

/// Tooltip title of the toggle button, describing the action it performs.
pub fn block_button_title(is_blocked: bool) -> &'static str {
    if is_blocked {
        "Unblock user"
    } else {
        "Block user"
    }
}

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

/// A transient toast notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_text_prefers_reason_over_message() {
        let response = ActionResponse {
            success: false,
            message: Some("generic message".to_string()),
            reason: Some("node 3 unreachable".to_string()),
        };
        assert_eq!(response.failure_text("fallback"), "node 3 unreachable");
    }

    #[test]
    fn failure_text_falls_back_to_message_then_generic() {
        let response = ActionResponse {
            success: false,
            message: Some("capacity exceeded".to_string()),
            reason: None,
        };
        assert_eq!(response.failure_text("fallback"), "capacity exceeded");

        let bare = ActionResponse {
            success: false,
            message: None,
            reason: None,
        };
        assert_eq!(bare.failure_text("fallback"), "fallback");
    }

    #[test]
    fn action_response_defaults_to_success_when_field_missing() {
        let response: ActionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.success);
    }

    #[test]
    fn health_summary_prefers_server_message() {
        let report = HealthCheckReport {
            success: true,
            message: Some("All nodes healthy".to_string()),
            results: HashMap::new(),
        };
        assert_eq!(report.summary(), "All nodes healthy");
    }

    #[test]
    fn health_summary_counts_result_map_entries() {
        let report: HealthCheckReport = serde_json::from_str(
            r#"{"success": true, "results": {"1": {"healthy": true}, "2": {"healthy": false}}}"#,
        )
        .unwrap();
        assert_eq!(report.summary(), "Health check ran for 2 nodes");
    }

    #[test]
    fn block_toggle_inverts_current_flag() {
        assert_eq!(block_request(false), BlockRequest { is_blocked: true });
        assert_eq!(block_request(true), BlockRequest { is_blocked: false });
    }

    #[test]
    fn block_request_serializes_inverted_flag() {
        let body = serde_json::to_string(&block_request(false)).unwrap();
        assert_eq!(body, r#"{"is_blocked":true}"#);
    }

    #[test]
    fn block_wording_uses_pre_toggle_flag() {
        assert_eq!(block_transition_message(false), "User blocked");
        assert_eq!(block_transition_message(true), "User unblocked");
    }

    #[test]
    fn block_button_title_matches_stored_state() {
        assert_eq!(block_button_title(true), "Unblock user");
        assert_eq!(block_button_title(false), "Block user");
    }
}
