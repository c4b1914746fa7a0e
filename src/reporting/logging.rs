use crate::config::Config;
use crate::core::types::{ProbeResult, ScanMode};
use crate::reporting::ScanReport;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
///
/// `RUST_LOG` is honored unless `--quiet` or `--verbose` is given.
pub fn init_logger(verbose: bool, quiet: bool) {
    let rust_log_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level_override(verbose, quiet, rust_log_set) {
        builder.filter_level(level);
    }

    // A second initialization (tests, repeated sessions) keeps the first logger
    let _ = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized (verbose={verbose}, quiet={quiet}, RUST_LOG set={rust_log_set})");
}

/// Level forced over the environment filter, if any
pub fn level_override(verbose: bool, quiet: bool, rust_log_set: bool) -> Option<log::LevelFilter> {
    if quiet {
        Some(log::LevelFilter::Off)
    } else if verbose {
        Some(log::LevelFilter::Debug)
    } else if rust_log_set {
        None
    } else {
        // Only show structured logs in verbose mode
        Some(log::LevelFilter::Off)
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: workers={}, timeout={}s, format={}",
        config.worker_count(),
        config.timeout_duration().as_secs(),
        config.output_format()
    );
    info!(
        "Lists: directory={}, breach={}, sites={}",
        config.directory_list_path(),
        config.breach_list_path(),
        match config.breach_sites {
            Some(ref sites) => format!("{} inline", sites.len()),
            None => config.sites_file_path().to_string(),
        }
    );
    info!(
        "HTTP: skip_ssl={}",
        config.skip_ssl_verification.unwrap_or(false)
    );
}

/// Log a loaded list file
pub fn log_list_loaded(path: &Path, entries: usize) {
    info!("Loaded {entries} entries from {}", path.display());
}

/// Log the start of a scan
pub fn log_scan_start(mode: ScanMode, jobs: usize, workers: usize) {
    info!("Starting {mode} scan: {jobs} jobs, {workers} workers");
}

/// Log individual probe results for debugging
pub fn log_probe_result(result: &ProbeResult) {
    if result.is_transport_failure() {
        debug!("✗ {} -> {}", result.job.url, result.reason);
    } else {
        debug!("✓ {} -> {} ({})", result.job.url, result.status, result.reason);
    }
}

/// Log scan completion
pub fn log_scan_complete(report: &ScanReport) {
    let total = report.results().len();
    let valid = report.valid().len();
    let failures = report
        .results()
        .iter()
        .filter(|r| r.is_transport_failure())
        .count();
    info!(
        "{} scan complete: {total} probed, {valid} valid, {failures} unreachable ({}ms)",
        report.mode(),
        report.elapsed().as_millis()
    );
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
