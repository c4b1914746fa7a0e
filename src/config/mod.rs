//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{defaults, files, output_formats, timeouts};
use crate::core::error::{Result, ScanError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Timeout in seconds for HTTP requests
    pub timeout: Option<u64>,

    /// Number of requests kept in flight
    pub workers: Option<usize>,

    /// Path list probed in directory mode
    pub directory_list: Option<String>,

    /// Path list probed in breach mode
    pub breach_list: Option<String>,

    /// Sites probed in breach mode (takes precedence over `sites_file`)
    pub breach_sites: Option<Vec<String>>,

    /// Newline separated site list used when `breach_sites` is unset
    pub sites_file: Option<String>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Skip SSL certificate verification
    pub skip_ssl_verification: Option<bool>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            workers: Some(defaults::WORKERS),
            directory_list: Some(files::DIRECTORY_LIST.to_string()),
            breach_list: Some(files::BREACH_LIST.to_string()),
            breach_sites: None,
            sites_file: Some(files::SITES_LIST.to_string()),
            user_agent: None,
            skip_ssl_verification: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults for missing keys
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScanError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ScanError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(files::CONFIG_FILE) {
            return config;
        }

        // Parent directories, up to 3 levels
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), files::CONFIG_FILE);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(workers) = cli_config.workers {
            self.workers = Some(workers);
        }

        // Inputs
        if let Some(ref list) = cli_config.directory_list {
            self.directory_list = Some(list.clone());
        }
        if let Some(ref list) = cli_config.breach_list {
            self.breach_list = Some(list.clone());
        }
        if let Some(ref sites) = cli_config.breach_sites {
            self.breach_sites = Some(sites.clone());
        }
        if let Some(ref sites_file) = cli_config.sites_file {
            self.sites_file = Some(sites_file.clone());
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }

        // Network & security
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.skip_ssl_verification {
            self.skip_ssl_verification = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or(defaults::WORKERS).max(1)
    }

    pub fn directory_list_path(&self) -> &str {
        self.directory_list.as_deref().unwrap_or(files::DIRECTORY_LIST)
    }

    pub fn breach_list_path(&self) -> &str {
        self.breach_list.as_deref().unwrap_or(files::BREACH_LIST)
    }

    pub fn sites_file_path(&self) -> &str {
        self.sites_file.as_deref().unwrap_or(files::SITES_LIST)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout < timeouts::MIN_TIMEOUT_SECONDS {
                return Err(ScanError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(ScanError::Config(format!(
                    "Timeout of {timeout} seconds is too large. Expected at most {} seconds.",
                    timeouts::MAX_TIMEOUT_SECONDS
                )));
            }
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(ScanError::Config(
                    "Worker count cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if workers > defaults::MAX_WORKERS {
                return Err(ScanError::Config(format!(
                    "Worker count of {workers} is extremely high. Expected at most {}.",
                    defaults::MAX_WORKERS
                )));
            }
        }

        if let Some(ref format) = self.output_format {
            if !output_formats::ALL.contains(&format.as_str()) {
                return Err(ScanError::Config(format!(
                    "Invalid output format '{format}'. Expected one of: {}.",
                    output_formats::ALL.join(", ")
                )));
            }
        }

        if let Some(ref sites) = self.breach_sites {
            if let Some(site) = sites.iter().find(|s| s.trim().is_empty()) {
                return Err(ScanError::Config(format!(
                    "Breach site entry '{site}' is blank."
                )));
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,    // --timeout
    pub workers: Option<usize>,  // --workers

    // Inputs
    pub directory_list: Option<String>,     // --directory-list
    pub breach_list: Option<String>,        // --breach-list
    pub breach_sites: Option<Vec<String>>,  // --sites
    pub sites_file: Option<String>,         // --sites-file

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress

    // Network & security
    pub user_agent: Option<String>,  // --user-agent
    pub skip_ssl_verification: bool, // --insecure

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout, Some(8));
        assert_eq!(config.workers, Some(20));
        assert_eq!(config.directory_list_path(), "directoary.txt");
        assert_eq!(config.breach_list_path(), "databreach.txt");
        assert!(config.breach_sites.is_none());
        assert_eq!(config.output_format(), "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            b"timeout = 3\nworkers = 5\nbreach_sites = [\"https://a.example\", \"https://b.example\"]\n",
        )?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.timeout, Some(3));
        assert_eq!(config.worker_count(), 5);
        assert_eq!(
            config.breach_sites,
            Some(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
        // Keys absent from the file keep their defaults
        assert_eq!(config.directory_list_path(), "directoary.txt");

        Ok(())
    }

    #[test]
    fn test_config_load_invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"timeout = [")?;

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = Config::load_from_file("/definitely/not/here/.pathsweep.toml").unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            timeout: Some(2),
            workers: Some(4),
            breach_sites: Some(vec!["https://x.example".to_string()]),
            verbose: true,
            skip_ssl_verification: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.timeout, Some(2));
        assert_eq!(config.workers, Some(4));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.skip_ssl_verification, Some(true));
        assert_eq!(
            config.breach_sites,
            Some(vec!["https://x.example".to_string()])
        );
    }

    #[test]
    fn test_merge_keeps_values_cli_does_not_set() {
        let mut config = Config {
            timeout: Some(30),
            ..Default::default()
        };
        config.merge_with_cli(&CliConfig::default());
        assert_eq!(config.timeout, Some(30));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_timeout = Config {
            timeout: Some(0),
            ..Default::default()
        };
        assert!(zero_timeout.validate().is_err());

        let zero_workers = Config {
            workers: Some(0),
            ..Default::default()
        };
        assert!(zero_workers.validate().is_err());

        let too_many_workers = Config {
            workers: Some(5000),
            ..Default::default()
        };
        assert!(too_many_workers.validate().is_err());

        let bad_format = Config {
            output_format: Some("xml".to_string()),
            ..Default::default()
        };
        assert!(bad_format.validate().is_err());

        let blank_site = Config {
            breach_sites: Some(vec!["  ".to_string()]),
            ..Default::default()
        };
        assert!(blank_site.validate().is_err());
    }

    #[test]
    fn test_timeout_duration() {
        let config = Config {
            timeout: Some(3),
            ..Default::default()
        };
        assert_eq!(config.timeout_duration(), Duration::from_secs(3));
    }
}
