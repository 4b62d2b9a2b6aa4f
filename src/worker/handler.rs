//! Background search worker.
//!
//! Runs [`SearchTransport`] calls on a dedicated thread so the input loop
//! keeps redrawing (loading indicator, connectivity banner) while a request is
//! in flight. Jobs are processed in arrival order; nothing is cancelled.

use crate::domain::SearchFailure;
use crate::search::SearchTransport;
use crate::worker::{SearchJob, WorkerResponse};
use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// How long dropping the handle waits for an in-flight request.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// Handle to the worker thread.
///
/// Dropping the handle closes the job channel and discards queued jobs. A
/// request already running gets [`SHUTDOWN_GRACE`] to finish; past that the
/// thread is detached and left to end on its own.
pub struct SearchWorker {
    jobs: Option<Sender<SearchJob>>,
    responses: Receiver<WorkerResponse>,
    stopping: Arc<AtomicBool>,
    /// Disconnects when the thread exits.
    exited: Receiver<()>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Spawns the worker thread around `transport`.
    #[must_use]
    pub fn spawn(transport: Box<dyn SearchTransport>) -> Self {
        let (job_tx, job_rx) = unbounded::<SearchJob>();
        let (resp_tx, resp_rx) = unbounded::<WorkerResponse>();
        let (exit_tx, exit_rx) = bounded::<()>(0);
        let stopping = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stopping);

        let handle = std::thread::spawn(move || {
            let _exit_tx = exit_tx;
            tracing::debug!("search worker started");
            for job in &job_rx {
                if stop_flag.load(Ordering::SeqCst) {
                    tracing::debug!(seq = job.seq, "worker stopping, dropping queued job");
                    break;
                }
                let response = Self::handle_search(transport.as_ref(), job);
                if resp_tx.send(response).is_err() {
                    tracing::debug!("response channel closed, stopping worker");
                    break;
                }
            }
            tracing::debug!("search worker stopped");
        });

        Self {
            jobs: Some(job_tx),
            responses: resp_rx,
            stopping,
            exited: exit_rx,
            handle: Some(handle),
        }
    }

    /// Runs one job and wraps its outcome.
    fn handle_search(transport: &dyn SearchTransport, job: SearchJob) -> WorkerResponse {
        let _span = tracing::debug_span!("worker_search", seq = job.seq).entered();

        let outcome = transport.search(&job.request).map_err(SearchFailure::from);
        match &outcome {
            Ok(result) => tracing::debug!(movies = result.movies.len(), "search job succeeded"),
            Err(e) => tracing::debug!(error = %e, "search job failed"),
        }

        WorkerResponse::SearchCompleted {
            seq: job.seq,
            outcome,
        }
    }

    /// Queues `job`. Returns `false` if the worker thread is gone.
    pub fn post(&self, job: SearchJob) -> bool {
        self.jobs.as_ref().is_some_and(|tx| tx.send(job).is_ok())
    }

    /// Receiver for completed jobs, for use in the main loop's `select!`.
    #[must_use]
    pub const fn responses(&self) -> &Receiver<WorkerResponse> {
        &self.responses
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.stopping.store(true, Ordering::SeqCst);
        drop(self.jobs.take());

        match self.exited.recv_timeout(SHUTDOWN_GRACE) {
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!("search still running at shutdown, detaching worker");
                drop(self.handle.take());
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                if let Some(handle) = self.handle.take() {
                    if handle.join().is_err() {
                        tracing::error!("search worker panicked");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{ReelfindError, Result};
    use crate::domain::{FilterConfig, SearchResult};
    use crate::search::SearchRequest;
    use std::time::Instant;

    struct EchoTransport;

    impl SearchTransport for EchoTransport {
        fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
            if request.query == "fail" {
                return Err(ReelfindError::RateLimited);
            }
            Ok(SearchResult {
                answer: request.query.clone(),
                movies: vec![],
            })
        }
    }

    fn job(seq: u64, query: &str) -> SearchJob {
        SearchJob {
            seq,
            request: SearchRequest::new(query, FilterConfig::default()),
        }
    }

    #[test]
    fn responses_echo_sequence_numbers() {
        let worker = SearchWorker::spawn(Box::new(EchoTransport));
        assert!(worker.post(job(1, "alien")));
        assert!(worker.post(job(2, "fail")));

        let first = worker.responses().recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(
            first,
            WorkerResponse::SearchCompleted {
                seq: 1,
                outcome: Ok(SearchResult {
                    answer: "alien".into(),
                    movies: vec![],
                }),
            }
        );

        let second = worker.responses().recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(second.seq(), 2);
        assert!(matches!(
            second,
            WorkerResponse::SearchCompleted {
                outcome: Err(SearchFailure::RateLimited),
                ..
            }
        ));
    }

    /// Blocks every search until `gate` is released or dropped.
    struct GatedTransport {
        gate: Receiver<()>,
    }

    impl SearchTransport for GatedTransport {
        fn search(&self, _request: &SearchRequest) -> Result<SearchResult> {
            let _ = self.gate.recv();
            Ok(SearchResult::default())
        }
    }

    #[test]
    fn drop_does_not_wait_for_running_search() {
        let (release, gate) = bounded::<()>(0);
        let worker = SearchWorker::spawn(Box::new(GatedTransport { gate }));
        assert!(worker.post(job(1, "slow")));
        assert!(worker.post(job(2, "queued")));
        std::thread::sleep(Duration::from_millis(50));

        let started = Instant::now();
        drop(worker);
        assert!(started.elapsed() < Duration::from_secs(2));

        drop(release);
    }

    #[test]
    fn drop_joins_idle_worker() {
        let worker = SearchWorker::spawn(Box::new(EchoTransport));
        assert!(worker.post(job(1, "alien")));
        worker.responses().recv_timeout(Duration::from_secs(2)).unwrap();

        let started = Instant::now();
        drop(worker);
        assert!(started.elapsed() < SHUTDOWN_GRACE);
    }
}
