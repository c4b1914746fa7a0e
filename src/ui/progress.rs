use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::types::{ProbeResult, ScanMode};
use crate::scan::ScanObserver;
use crate::ui::output::live_line;

/// Streams live result lines and drives the scan progress bar.
pub struct ProgressReporter {
    bar: ProgressBar,
    live_lines: bool,
}

impl ProgressReporter {
    pub fn new(show_progress: bool, live_lines: bool) -> Self {
        let bar = if show_progress {
            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg} ({eta})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        Self { bar, live_lines }
    }
}

impl ScanObserver for ProgressReporter {
    fn on_start(&self, mode: ScanMode, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_message(match mode {
            ScanMode::Directory => "Scanning...",
            ScanMode::Breach => "Scanning breaches...",
        });
        self.bar.enable_steady_tick(Duration::from_millis(120));
    }

    fn on_result(&self, mode: ScanMode, result: &ProbeResult, completed: usize) {
        if self.live_lines {
            // Hidden bars still run the closure
            self.bar.suspend(|| println!("{}", live_line(mode, result)));
        }
        self.bar.set_position(completed as u64);
    }

    fn on_finish(&self, _mode: ScanMode, _results: &[ProbeResult]) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Job;

    fn result() -> ProbeResult {
        ProbeResult::new(
            0,
            Job::new("https://a.example", "admin", "https://a.example/admin"),
            200,
            "OK".to_string(),
        )
    }

    #[test]
    fn test_disabled_reporter_is_hidden() {
        let reporter = ProgressReporter::new(false, false);
        assert!(reporter.bar.is_hidden());
    }

    #[test]
    fn test_observer_lifecycle_tracks_position() {
        let reporter = ProgressReporter::new(false, false);
        reporter.on_start(ScanMode::Directory, 3);
        reporter.on_result(ScanMode::Directory, &result(), 1);
        reporter.on_result(ScanMode::Directory, &result(), 2);

        assert_eq!(reporter.bar.length(), Some(3));
        assert_eq!(reporter.bar.position(), 2);

        reporter.on_finish(ScanMode::Directory, &[]);
        assert!(reporter.bar.is_finished());
    }

    #[test]
    fn test_reporter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProgressReporter>();
    }
}
