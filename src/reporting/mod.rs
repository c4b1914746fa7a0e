//! Analysis and reporting
//!
//! This module turns finished scans into tables, JSON or minimal listings,
//! and holds the structured logging helpers.

pub mod logging;
pub mod report;

// Re-export commonly used items
pub use report::ScanReport;
