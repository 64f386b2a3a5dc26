/// API client for the WireAdmin backend
///
/// One module per admin resource; all functions are thin `gloo-net`
/// wrappers returning `Result<_, String>` with human-readable errors.

pub mod client;
pub mod keys;
pub mod nodes;
pub mod users;
