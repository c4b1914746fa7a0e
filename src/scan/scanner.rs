use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::core::error::{Result, ScanError};
use crate::core::types::ScanMode;
use crate::discovery::{breach_jobs, directory_jobs, load_list};
use crate::probe::{HttpProber, Probe};
use crate::reporting::ScanReport;
use crate::reporting::logging;
use crate::scan::engine::{ScanEngine, ScanObserver};

/// Runs directory and breach scans according to a [`Config`].
pub struct Scanner<P: Probe + ?Sized> {
    config: Config,
    engine: ScanEngine<P>,
}

impl Scanner<HttpProber> {
    /// Build a scanner that probes over HTTP.
    pub fn from_config(config: Config) -> Result<Self> {
        let prober = Arc::new(HttpProber::from_config(&config)?);
        Ok(Self::new(config, prober))
    }
}

impl<P: Probe + ?Sized> Scanner<P> {
    pub fn new(config: Config, prober: Arc<P>) -> Self {
        let engine = ScanEngine::new(prober, config.worker_count());
        Self { config, engine }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Paths for directory mode; an empty or missing list aborts the scan.
    pub fn load_directory_paths(&self) -> Result<Vec<String>> {
        load_required(self.config.directory_list_path())
    }

    /// Paths for breach mode; an empty or missing list aborts the scan.
    pub fn load_breach_paths(&self) -> Result<Vec<String>> {
        load_required(self.config.breach_list_path())
    }

    /// Sites for breach mode: the inline list if configured, else the sites file.
    pub fn breach_sites(&self) -> Result<Vec<String>> {
        let sites: Vec<String> = match self.config.breach_sites {
            Some(ref sites) => sites
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => load_list(self.config.sites_file_path())?,
        };

        if sites.is_empty() {
            return Err(ScanError::NoSites);
        }
        Ok(sites)
    }

    /// Probe `paths` against `target`.
    pub async fn directory_scan(
        &self,
        target: &str,
        paths: &[String],
        observer: &dyn ScanObserver,
    ) -> Result<ScanReport> {
        let target = check_target(target)?;
        if paths.is_empty() {
            return Err(ScanError::ListMissing {
                path: self.config.directory_list_path().to_string(),
            });
        }

        let jobs = directory_jobs(&target, paths);
        let started = Instant::now();
        let results = self.engine.run(ScanMode::Directory, jobs, observer).await;
        let report = ScanReport::new(ScanMode::Directory, Some(target), results, started.elapsed());

        logging::log_scan_complete(&report);
        Ok(report)
    }

    /// Probe the breach list against every configured site.
    pub async fn breach_scan(&self, observer: &dyn ScanObserver) -> Result<ScanReport> {
        let paths = self.load_breach_paths()?;
        let sites = self.breach_sites()?;

        let jobs = breach_jobs(&sites, &paths);
        let started = Instant::now();
        let results = self.engine.run(ScanMode::Breach, jobs, observer).await;
        let report = ScanReport::new(ScanMode::Breach, None, results, started.elapsed());

        logging::log_scan_complete(&report);
        Ok(report)
    }
}

/// Trim a user supplied target, rejecting blank input.
pub fn check_target(target: &str) -> Result<String> {
    let target = target.trim();
    if target.is_empty() {
        return Err(ScanError::InvalidTarget(String::new()));
    }
    Ok(target.to_string())
}

fn load_required(path: &str) -> Result<Vec<String>> {
    let entries = load_list(path)?;
    if entries.is_empty() {
        return Err(ScanError::ListMissing {
            path: path.to_string(),
        });
    }
    Ok(entries)
}
