//! Path list discovery and job construction
//!
//! This module loads path and site lists from disk, resolves paths against
//! targets and expands them into the jobs handed to the scan engine.

pub mod jobs;
pub mod loader;
pub mod resolver;

// Re-export commonly used items
pub use jobs::{breach_jobs, directory_jobs};
pub use loader::{load_list, parse_list_str};
pub use resolver::resolve;
