use std::fmt;

/// Error types for pathsweep operations.
///
/// Per-request network failures are not represented here: they are recorded
/// as data on the probe result and never abort a scan.
#[derive(Debug)]
pub enum ScanError {
    /// IO error (file operations, terminal reads, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// HTTP client could not be built
    Http(reqwest::Error),

    /// Interactive prompt failure
    Prompt(dialoguer::Error),

    /// Report serialization failure
    Serialization(serde_json::Error),

    /// A required list file is absent or holds no entries
    ListMissing { path: String },

    /// The scan target entered by the user is unusable
    InvalidTarget(String),

    /// Breach mode has no sites configured
    NoSites,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(err) => write!(f, "IO error: {err}"),
            ScanError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ScanError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            ScanError::Http(err) => write!(f, "HTTP client error: {err}"),
            ScanError::Prompt(err) => write!(f, "Prompt error: {err}"),
            ScanError::Serialization(err) => write!(f, "Serialization error: {err}"),
            ScanError::ListMissing { path } => {
                write!(f, "List missing: '{path}' is empty or not found")
            }
            ScanError::InvalidTarget(target) => {
                if target.is_empty() {
                    write!(f, "Invalid target: a target is required")
                } else {
                    write!(f, "Invalid target: '{target}'")
                }
            }
            ScanError::NoSites => write!(f, "No sites: breach mode has no sites configured"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(err) => Some(err),
            ScanError::TomlParsing(err) => Some(err),
            ScanError::Http(err) => Some(err),
            ScanError::Prompt(err) => Some(err),
            ScanError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl ScanError {
    /// Whether the error is an expected abort path (missing input) that
    /// should be reported as a warning rather than a failure.
    pub fn is_input_abort(&self) -> bool {
        matches!(
            self,
            ScanError::ListMissing { .. } | ScanError::InvalidTarget(_) | ScanError::NoSites
        )
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

impl From<toml::de::Error> for ScanError {
    fn from(err: toml::de::Error) -> Self {
        ScanError::TomlParsing(err)
    }
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::Http(err)
    }
}

impl From<dialoguer::Error> for ScanError {
    fn from(err: dialoguer::Error) -> Self {
        ScanError::Prompt(err)
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::Serialization(err)
    }
}

/// Type alias for Results using ScanError
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = ScanError::Config("Invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid timeout"
        );

        let list_error = ScanError::ListMissing {
            path: "directoary.txt".to_string(),
        };
        assert_eq!(
            format!("{list_error}"),
            "List missing: 'directoary.txt' is empty or not found"
        );
    }

    #[test]
    fn test_invalid_target_display() {
        assert_eq!(
            ScanError::InvalidTarget(String::new()).to_string(),
            "Invalid target: a target is required"
        );
        assert_eq!(
            ScanError::InvalidTarget("ftp:/x".to_string()).to_string(),
            "Invalid target: 'ftp:/x'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let scan_error = ScanError::from(io_error);

        assert!(matches!(scan_error, ScanError::Io(_)));
        assert!(scan_error.source().is_some());
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let scan_error = ScanError::from(toml_error);

        assert!(matches!(scan_error, ScanError::TomlParsing(_)));
        assert!(format!("{scan_error}").contains("TOML parsing error:"));
    }

    #[test]
    fn test_input_abort_classification() {
        assert!(
            ScanError::ListMissing {
                path: "x".to_string()
            }
            .is_input_abort()
        );
        assert!(ScanError::InvalidTarget(String::new()).is_input_abort());
        assert!(ScanError::NoSites.is_input_abort());
        assert!(!ScanError::Config("x".to_string()).is_input_abort());
    }

    #[test]
    fn test_no_source_variants() {
        let errors_without_source = vec![
            ScanError::Config("test".to_string()),
            ScanError::ListMissing {
                path: "test".to_string(),
            },
            ScanError::InvalidTarget("test".to_string()),
            ScanError::NoSites,
        ];

        for error in errors_without_source {
            assert!(error.source().is_none());
            assert!(format!("{error}").contains(':'));
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScanError>();
    }
}
