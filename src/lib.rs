//! Probe lists of paths against web targets and flag the ones that answer.
//!
//! Two scan modes share one concurrent engine: a directory scan resolves a
//! path list against a single target, a breach scan crosses a list of
//! sensitive paths with every configured site.

pub mod config;
pub mod core;
pub mod discovery;
pub mod probe;
pub mod reporting;
pub mod scan;
pub mod ui;

pub use crate::config::{CliConfig, Config};
pub use crate::core::{Job, ProbeResult, Result, ScanError, ScanMode};
pub use crate::reporting::ScanReport;
pub use crate::scan::{ScanEngine, ScanObserver, Scanner};
