/// Utility functions for the web console.

pub mod browser;
pub mod time;
