/// Node fleet API operations.

use crate::api::client::{get_json, post_json};
use crate::types::{ActionResponse, HealthCheckReport, Node};

/// Fetch all nodes for the fleet table.
pub async fn fetch_nodes() -> Result<Vec<Node>, String> {
    get_json("/admin/api/nodes").await
}

/// Trigger a fleet-wide client rebalance.
pub async fn rebalance_nodes() -> Result<ActionResponse, String> {
    post_json("/admin/nodes/rebalance").await
}

/// Run a health check across every node.
pub async fn check_all_health() -> Result<HealthCheckReport, String> {
    post_json("/admin/nodes/check-all-health").await
}

/// Probe connectivity of a single node.
pub async fn test_node(node_id: i64) -> Result<ActionResponse, String> {
    post_json(&format!("/admin/nodes/{}/test", node_id)).await
}

/// Remove a node; assigned users are migrated server-side.
pub async fn delete_node(node_id: i64) -> Result<ActionResponse, String> {
    post_json(&format!("/admin/nodes/{}/delete", node_id)).await
}
