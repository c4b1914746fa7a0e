/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Default file names, network defaults and display symbols live here so the
/// scanner, the configuration layer and the UI agree on them.
/// Output format constants
pub mod output_formats {
    /// Text output format - tables, live lines and progress
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one `status url` line per finding
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// HTTP status ranges used for classification
pub mod http_status {
    /// Status recorded when the request never produced a response
    pub const TRANSPORT_FAILURE: u16 = 0;
    /// First status counted as a finding (inclusive)
    pub const FINDING_MIN: u16 = 200;
    /// End of the finding range (exclusive)
    pub const FINDING_MAX: u16 = 400;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 8;
    /// Maximum accepted timeout in seconds
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// Default configuration values
pub mod defaults {
    /// Default number of requests in flight
    pub const WORKERS: usize = 20;
    /// Upper bound on the worker pool
    pub const MAX_WORKERS: usize = 1000;
    /// Redirect hops followed before giving up
    pub const MAX_REDIRECTS: usize = 10;
}

/// Input and configuration file names
pub mod files {
    /// Path list used by directory mode
    pub const DIRECTORY_LIST: &str = "directoary.txt";
    /// Path list used by breach mode
    pub const BREACH_LIST: &str = "databreach.txt";
    /// Site list used by breach mode when no inline list is configured
    pub const SITES_LIST: &str = "sites.txt";
    /// Configuration file looked up in the working directory and its parents
    pub const CONFIG_FILE: &str = ".pathsweep.toml";
    /// Prefix marking a comment line in list files
    pub const COMMENT_PREFIX: char = '#';
}

/// Error message constants
pub mod error_messages {
    /// Fallback when a transport error renders as an empty string
    pub const UNKNOWN_ERROR: &str = "Unknown error";
    /// Fallback reason phrase for non-standard status codes
    pub const UNKNOWN_REASON: &str = "Unknown";
}

/// Display and formatting constants
pub mod display {
    /// Marker printed for transport failures in live lines
    pub const ERROR_MARKER: &str = "ERR";
    /// Marker printed for 2xx responses in breach mode
    pub const BREACH_MARKER: &str = "BREACH?";
    /// Emoji for warnings
    pub const WARNING_EMOJI: &str = "⚠️";
    /// Emoji for errors
    pub const ERROR_EMOJI: &str = "❌";
}
