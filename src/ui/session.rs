//! Scan runs as seen from the console
//!
//! Shared by the one-shot subcommands and the interactive menu: prints the
//! mode notice, streams progress, renders the report in the chosen format
//! and turns input aborts into warnings.

use tokio::runtime::Handle;

use crate::config::{CliConfig, Config};
use crate::core::constants::output_formats;
use crate::core::error::{Result, ScanError};
use crate::core::types::ScanMode;
use crate::probe::Probe;
use crate::reporting::ScanReport;
use crate::reporting::logging;
use crate::scan::Scanner;
use crate::ui::menu::MenuActions;
use crate::ui::output::{print_notice, print_warning};
use crate::ui::progress::ProgressReporter;
use crate::ui::prompt::Prompt;

pub const TARGET_PROMPT: &str = "Enter target (e.g. https://example.com)";

/// Settings for output formatting and display
#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

impl OutputSettings {
    pub fn new(cli_config: &CliConfig, config: &Config) -> Self {
        let quiet = cli_config.quiet;
        Self {
            quiet,
            verbose: config.verbose.unwrap_or(false),
            output_format: config.output_format().to_string(),
            show_progress: !quiet && !cli_config.no_progress,
        }
    }

    pub fn is_text(&self) -> bool {
        self.output_format == output_formats::TEXT
    }

    /// Per-result lines are only streamed for human readers
    pub fn live_lines(&self) -> bool {
        !self.quiet && self.is_text()
    }

    pub fn progress_enabled(&self) -> bool {
        self.show_progress && self.live_lines()
    }

    pub fn reporter(&self) -> ProgressReporter {
        ProgressReporter::new(self.progress_enabled(), self.live_lines())
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            output_format: output_formats::DEFAULT.to_string(),
            show_progress: true,
        }
    }
}

/// Warning text for a scan that was aborted before probing
pub fn abort_message(err: &ScanError, config: &Config) -> String {
    match err {
        ScanError::ListMissing { path } => {
            format!("File '{path}' is empty or not found. Make sure it lists at least one path.")
        }
        ScanError::InvalidTarget(target) if target.is_empty() => {
            "A target is required.".to_string()
        }
        ScanError::InvalidTarget(target) => format!("Invalid target '{target}'."),
        ScanError::NoSites => format!(
            "No breach sites configured. Pass --sites or list them in '{}'.",
            config.sites_file_path()
        ),
        other => other.to_string(),
    }
}

/// Announce the scan mode and the list it reads (text output only)
pub fn print_mode_notice(mode: ScanMode, config: &Config, settings: &OutputSettings) {
    if !settings.is_text() || settings.quiet {
        return;
    }
    let (title, list) = match mode {
        ScanMode::Directory => ("Directory scan", config.directory_list_path()),
        ScanMode::Breach => ("Data breach scan", config.breach_list_path()),
    };
    print_notice(&format!("Mode: {title} - paths from {list}"));
}

/// Print a finished report in the configured format
pub fn print_report(report: &ScanReport, settings: &OutputSettings) -> Result<()> {
    let rendered = report.render(&settings.output_format)?;
    print!("{rendered}");
    Ok(())
}

/// Run a directory scan and print its report
pub async fn scan_directory<P: Probe + ?Sized>(
    scanner: &Scanner<P>,
    target: &str,
    paths: &[String],
    settings: &OutputSettings,
) -> Result<ScanReport> {
    let reporter = settings.reporter();
    let report = scanner.directory_scan(target, paths, &reporter).await?;
    print_report(&report, settings)?;
    Ok(report)
}

/// Run a breach scan and print its report
pub async fn scan_breach<P: Probe + ?Sized>(
    scanner: &Scanner<P>,
    settings: &OutputSettings,
) -> Result<ScanReport> {
    let reporter = settings.reporter();
    let report = scanner.breach_scan(&reporter).await?;
    print_report(&report, settings)?;
    Ok(report)
}

/// Report an input abort as a warning; pass every other error through.
pub fn warn_on_abort<T>(result: Result<T>, config: &Config) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_input_abort() => {
            let message = abort_message(&e, config);
            logging::log_warning(&message);
            print_warning(&message);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Menu actions backed by a scanner.
///
/// Runs on a blocking thread and drives each scan to completion on the
/// runtime behind `handle`.
pub struct InteractiveSession<P: Probe + ?Sized> {
    scanner: Scanner<P>,
    handle: Handle,
    settings: OutputSettings,
}

impl<P: Probe + ?Sized> InteractiveSession<P> {
    pub fn new(scanner: Scanner<P>, handle: Handle, settings: OutputSettings) -> Self {
        Self {
            scanner,
            handle,
            settings,
        }
    }

    fn finish(&self, result: Result<ScanReport>) -> Result<()> {
        warn_on_abort(result, self.scanner.config()).map(|_| ())
    }
}

impl<P: Probe + ?Sized> MenuActions for InteractiveSession<P> {
    fn directory_scan(&mut self, prompt: &mut dyn Prompt) -> Result<()> {
        print_mode_notice(ScanMode::Directory, self.scanner.config(), &self.settings);

        // The list is checked before asking for a target
        let paths = match warn_on_abort(self.scanner.load_directory_paths(), self.scanner.config())? {
            Some(paths) => paths,
            None => return Ok(()),
        };
        let target = prompt.read_line(TARGET_PROMPT)?;

        let result = self.handle.block_on(scan_directory(
            &self.scanner,
            &target,
            &paths,
            &self.settings,
        ));
        self.finish(result)
    }

    fn breach_scan(&mut self) -> Result<()> {
        print_mode_notice(ScanMode::Breach, self.scanner.config(), &self.settings);

        let result = self
            .handle
            .block_on(scan_breach(&self.scanner, &self.settings));
        self.finish(result)
    }
}
