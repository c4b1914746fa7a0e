use serde::Serialize;
use std::fmt;

use crate::core::constants::http_status;

/// Which of the two scan flavours produced a set of jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// One path list against a single user supplied target
    Directory,
    /// One path list against every configured site
    Breach,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Directory => write!(f, "directory"),
            ScanMode::Breach => write!(f, "breach"),
        }
    }
}

/// A single unit of work: probe `url`, which was resolved from `site` + `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub site: String,
    pub path: String,
    pub url: String,
}

impl Job {
    pub fn new(site: impl Into<String>, path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Outcome of probing one job.
///
/// `index` is the job's submission position; `status` is 0 when the request
/// failed before a response arrived, in which case `reason` holds the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub index: usize,
    #[serde(flatten)]
    pub job: Job,
    pub status: u16,
    pub reason: String,
}

impl ProbeResult {
    pub fn new(index: usize, job: Job, status: u16, reason: String) -> Self {
        Self {
            index,
            job,
            status,
            reason,
        }
    }

    /// A finding is any response in [200, 400): success or redirect.
    pub fn is_finding(&self) -> bool {
        is_finding_status(self.status)
    }

    pub fn is_transport_failure(&self) -> bool {
        self.status == http_status::TRANSPORT_FAILURE
    }
}

/// Check whether a status code falls in the finding range.
pub fn is_finding_status(status: u16) -> bool {
    (http_status::FINDING_MIN..http_status::FINDING_MAX).contains(&status)
}

/// Broad classification of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    TransportFailure,
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
    NonStandard,
}

impl StatusClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            0 => StatusClass::TransportFailure,
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::NonStandard,
        }
    }
}

/// Styling applied to the line streamed for each completed probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveStyle {
    Success,
    Redirect,
    HttpError,
    TransportError,
    /// 2xx in breach mode: the reachable path is itself the finding
    PossibleBreach,
}

impl LiveStyle {
    pub fn for_status(mode: ScanMode, status: u16) -> Self {
        match (StatusClass::from_status(status), mode) {
            (StatusClass::TransportFailure, _) => LiveStyle::TransportError,
            (StatusClass::Success, ScanMode::Breach) => LiveStyle::PossibleBreach,
            (StatusClass::Success, ScanMode::Directory) => LiveStyle::Success,
            (StatusClass::Redirect, _) => LiveStyle::Redirect,
            _ => LiveStyle::HttpError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_status(status: u16) -> ProbeResult {
        ProbeResult::new(
            0,
            Job::new("https://example.com", "admin", "https://example.com/admin"),
            status,
            String::new(),
        )
    }

    #[test]
    fn test_finding_boundaries() {
        assert!(!result_with_status(0).is_finding());
        assert!(!result_with_status(199).is_finding());
        assert!(result_with_status(200).is_finding());
        assert!(result_with_status(302).is_finding());
        assert!(result_with_status(399).is_finding());
        assert!(!result_with_status(400).is_finding());
        assert!(!result_with_status(500).is_finding());
    }

    #[test]
    fn test_transport_failure() {
        assert!(result_with_status(0).is_transport_failure());
        assert!(!result_with_status(404).is_transport_failure());
    }

    #[test]
    fn test_status_class() {
        assert_eq!(StatusClass::from_status(0), StatusClass::TransportFailure);
        assert_eq!(StatusClass::from_status(101), StatusClass::Informational);
        assert_eq!(StatusClass::from_status(204), StatusClass::Success);
        assert_eq!(StatusClass::from_status(301), StatusClass::Redirect);
        assert_eq!(StatusClass::from_status(403), StatusClass::ClientError);
        assert_eq!(StatusClass::from_status(503), StatusClass::ServerError);
        assert_eq!(StatusClass::from_status(999), StatusClass::NonStandard);
    }

    #[test]
    fn test_live_style_directory_mode() {
        let mode = ScanMode::Directory;
        assert_eq!(LiveStyle::for_status(mode, 200), LiveStyle::Success);
        assert_eq!(LiveStyle::for_status(mode, 301), LiveStyle::Redirect);
        assert_eq!(LiveStyle::for_status(mode, 404), LiveStyle::HttpError);
        assert_eq!(LiveStyle::for_status(mode, 502), LiveStyle::HttpError);
        assert_eq!(LiveStyle::for_status(mode, 0), LiveStyle::TransportError);
    }

    #[test]
    fn test_live_style_breach_mode_flags_success() {
        let mode = ScanMode::Breach;
        assert_eq!(LiveStyle::for_status(mode, 200), LiveStyle::PossibleBreach);
        assert_eq!(LiveStyle::for_status(mode, 302), LiveStyle::Redirect);
        assert_eq!(LiveStyle::for_status(mode, 500), LiveStyle::HttpError);
        assert_eq!(LiveStyle::for_status(mode, 0), LiveStyle::TransportError);
    }

    #[test]
    fn test_result_serializes_flat() {
        let json = serde_json::to_value(result_with_status(200)).unwrap();
        assert_eq!(json["url"], "https://example.com/admin");
        assert_eq!(json["site"], "https://example.com");
        assert_eq!(json["status"], 200);
    }
}
