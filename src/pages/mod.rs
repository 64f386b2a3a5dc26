/// Page components for the WireAdmin web console.

pub mod keys;
pub mod nodes;
pub mod not_found;
pub mod users;
