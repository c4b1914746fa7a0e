use futures::{StreamExt, stream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::types::{Job, ProbeResult, ScanMode};
use crate::probe::Probe;
use crate::reporting::logging;

/// Receives scan events as they happen.
///
/// The engine calls `on_result` once per completed job, in completion order,
/// from the task driving the scan.
pub trait ScanObserver: Send + Sync {
    fn on_start(&self, _mode: ScanMode, _total: usize) {}
    fn on_result(&self, mode: ScanMode, result: &ProbeResult, completed: usize);
    fn on_finish(&self, _mode: ScanMode, _results: &[ProbeResult]) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ScanObserver for NullObserver {
    fn on_result(&self, _mode: ScanMode, _result: &ProbeResult, _completed: usize) {}
}

/// Bounded fan-out/fan-in over a fixed job list.
pub struct ScanEngine<P: Probe + ?Sized> {
    prober: Arc<P>,
    workers: usize,
}

impl<P: Probe + ?Sized> ScanEngine<P> {
    pub fn new(prober: Arc<P>, workers: usize) -> Self {
        Self {
            prober,
            workers: workers.max(1),
        }
    }

    /// Probe every job with at most `workers` requests in flight.
    ///
    /// Returns exactly one result per job, ordered by submission index.
    pub async fn run(
        &self,
        mode: ScanMode,
        jobs: Vec<Job>,
        observer: &dyn ScanObserver,
    ) -> Vec<ProbeResult> {
        let total = jobs.len();
        logging::log_scan_start(mode, total, self.workers);
        observer.on_start(mode, total);

        let completed = Arc::new(AtomicUsize::new(0));
        let mut in_flight = stream::iter(jobs.into_iter().enumerate())
            .map(|(index, job)| {
                let prober = Arc::clone(&self.prober);
                async move {
                    let outcome = prober.probe(&job.url).await;
                    ProbeResult::new(index, job, outcome.status, outcome.reason)
                }
            })
            .buffer_unordered(self.workers);

        let mut results = Vec::with_capacity(total);
        while let Some(result) = in_flight.next().await {
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            logging::log_probe_result(&result);
            observer.on_result(mode, &result, done);
            results.push(result);
        }

        results.sort_by_key(|result| result.index);
        observer.on_finish(mode, &results);
        results
    }
}
