//! HTTP probing
//!
//! This module issues the single GET request behind every job and turns
//! the response, or the transport error, into a status/reason pair.

pub mod http;

// Re-export commonly used items
pub use http::{HttpProber, Probe, ProbeOutcome};
