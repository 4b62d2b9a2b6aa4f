//! Search orchestration.
//!
//! [`SearchController`] owns the transient [`SearchSession`] and turns a
//! submitted query into a sequence-tagged [`SearchJob`]. Completions come back
//! through [`SearchController::finish`]; only the most recently issued job may
//! change state, so a slow earlier response can never overwrite a newer one.
//!
//! # Lifecycle
//!
//! ```text
//! begin(query, filters) ──► SearchJob { seq, request } ──► transport
//!        │                                                    │
//!   isLoading = true                                  outcome │
//!   error cleared                                             ▼
//!                                  finish(seq, outcome, history)
//!                                    isLoading = false
//!                                    Ok  → result, page = 1, history.add
//!                                    Err → error text, result kept
//! ```

use crate::domain::error::{Result, SearchFailure};
use crate::domain::{FilterConfig, Movie, SearchResult};
use crate::search::client::{SearchRequest, SearchTransport};
use crate::search::pagination::{page_slice, total_pages};
use crate::storage::{HistoryStore, PreferenceStore};
use crate::worker::SearchJob;

/// Transient state of the current search. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    /// Query of the latest accepted submission.
    pub query: String,
    pub is_loading: bool,
    /// Display text of the latest failure.
    pub error: Option<String>,
    /// Latest successful result. Kept across later failures.
    pub result: Option<SearchResult>,
    /// 1-based page into `result.movies`.
    pub page: usize,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            is_loading: false,
            error: None,
            result: None,
            page: 1,
        }
    }
}

/// Owner of [`SearchSession`] and the request sequence counter.
#[derive(Debug, Default)]
pub struct SearchController {
    session: SearchSession,
    latest_seq: u64,
}

impl SearchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller whose first job is numbered after `seq`.
    ///
    /// Used when state is rebuilt while the worker may still answer jobs
    /// issued by the previous controller.
    #[must_use]
    pub fn resuming_after(seq: u64) -> Self {
        Self {
            session: SearchSession::default(),
            latest_seq: seq,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Sequence number of the most recently issued job, `0` before any.
    #[must_use]
    pub const fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Starts a search for `query` with a snapshot of `filters`.
    ///
    /// Whitespace-only queries are ignored: `None` is returned and no state
    /// changes. Otherwise loading starts, any previous error is cleared, and
    /// the returned job carries a fresh sequence number.
    pub fn begin(&mut self, query: &str, filters: &FilterConfig) -> Option<SearchJob> {
        if query.trim().is_empty() {
            tracing::trace!("ignoring empty query");
            return None;
        }

        self.latest_seq += 1;
        self.session.query = query.to_string();
        self.session.is_loading = true;
        self.session.error = None;

        tracing::debug!(seq = self.latest_seq, query, "search started");

        Some(SearchJob {
            seq: self.latest_seq,
            request: SearchRequest::new(query, filters.clone()),
        })
    }

    /// Applies the outcome of job `seq`.
    ///
    /// Returns `Ok(false)` without touching state if `seq` is stale. On
    /// success the result replaces the previous one, the page resets to 1,
    /// and the query is pushed into `history`.
    ///
    /// # Errors
    ///
    /// Returns the history store's write error. Session state is already
    /// settled when that happens.
    pub fn finish(
        &mut self,
        seq: u64,
        outcome: std::result::Result<SearchResult, SearchFailure>,
        history: &mut HistoryStore,
    ) -> Result<bool> {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale search completion");
            return Ok(false);
        }

        self.session.is_loading = false;

        match outcome {
            Ok(result) => {
                tracing::debug!(seq, movies = result.movies.len(), "search succeeded");
                self.session.result = Some(result);
                self.session.page = 1;
                history.add(&self.session.query)?;
            }
            Err(failure) => {
                tracing::error!(seq, error = %failure, "search failed");
                self.session.error = Some(failure.to_string());
            }
        }
        Ok(true)
    }

    /// Runs a complete search synchronously on the calling thread.
    ///
    /// Returns `Ok(false)` if the query was ignored.
    ///
    /// # Errors
    ///
    /// Returns the history store's write error.
    pub fn submit(
        &mut self,
        query: &str,
        preferences: &PreferenceStore,
        history: &mut HistoryStore,
        transport: &dyn SearchTransport,
    ) -> Result<bool> {
        let Some(job) = self.begin(query, preferences.get()) else {
            return Ok(false);
        };
        let outcome = transport.search(&job.request).map_err(SearchFailure::from);
        self.finish(job.seq, outcome, history)
    }

    pub fn dismiss_error(&mut self) {
        self.session.error = None;
    }

    /// Page count of the current result, `0` when there is none.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.session
            .result
            .as_ref()
            .map_or(0, |r| total_pages(r.movies.len()))
    }

    /// Movies on the current page.
    #[must_use]
    pub fn visible_movies(&self) -> &[Movie] {
        self.session
            .result
            .as_ref()
            .map_or(&[] as &[Movie], |r| page_slice(&r.movies, self.session.page))
    }

    /// Jumps to `page`, clamped to `[1, max(1, total_pages)]`.
    pub fn set_page(&mut self, page: usize) {
        self.session.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.session.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.session.page.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{ReelfindError, RATE_LIMITED_MESSAGE};
    use crate::storage::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeTransport {
        response: std::result::Result<SearchResult, u16>,
        calls: AtomicUsize,
    }

    impl SearchTransport for FakeTransport {
        fn search(&self, _request: &SearchRequest) -> Result<SearchResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(result) => Ok(result.clone()),
                Err(429) => Err(ReelfindError::RateLimited),
                Err(0) => Err(ReelfindError::Transport("connection reset by peer".into())),
                Err(status) => Err(ReelfindError::Server(*status)),
            }
        }
    }

    fn movies(n: usize) -> SearchResult {
        SearchResult {
            answer: format!("{n} movies"),
            movies: (0..n)
                .map(|i| Movie {
                    id: i.to_string(),
                    title: format!("Movie {i}"),
                    year: None,
                    plot: None,
                    genres: vec![],
                })
                .collect(),
        }
    }

    fn fixture() -> (PreferenceStore, HistoryStore) {
        let backend = MemoryStore::new();
        (
            PreferenceStore::load(Box::new(backend.clone())),
            HistoryStore::load(Box::new(backend)),
        )
    }

    fn transport(response: std::result::Result<SearchResult, u16>) -> FakeTransport {
        FakeTransport {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    #[test]
    fn blank_queries_are_ignored() {
        let (prefs, mut history) = fixture();
        let fake = transport(Ok(movies(1)));
        let mut controller = SearchController::new();

        for query in ["", "   ", "\t\n"] {
            assert!(!controller.submit(query, &prefs, &mut history, &fake).unwrap());
        }
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.session(), &SearchSession::default());
    }

    #[test]
    fn blank_query_keeps_existing_error() {
        let (prefs, mut history) = fixture();
        let mut controller = SearchController::new();
        controller
            .submit("x", &prefs, &mut history, &transport(Err(500)))
            .unwrap();
        let before = controller.session().clone();

        controller.submit(" ", &prefs, &mut history, &transport(Ok(movies(1)))).unwrap();
        assert_eq!(controller.session(), &before);
    }

    #[test]
    fn rate_limit_sets_friendly_message() {
        let (prefs, mut history) = fixture();
        let mut controller = SearchController::new();
        controller
            .submit("x", &prefs, &mut history, &transport(Err(429)))
            .unwrap();

        let session = controller.session();
        assert!(!session.is_loading);
        assert_eq!(session.error.as_deref(), Some(RATE_LIMITED_MESSAGE));
        assert!(history.get().is_empty());
    }

    #[test]
    fn failure_keeps_previous_result() {
        let (prefs, mut history) = fixture();
        let mut controller = SearchController::new();
        controller
            .submit("alien", &prefs, &mut history, &transport(Ok(movies(3))))
            .unwrap();
        controller
            .submit("aliens", &prefs, &mut history, &transport(Err(503)))
            .unwrap();

        let session = controller.session();
        assert_eq!(session.result, Some(movies(3)));
        assert_eq!(
            session.error.as_deref(),
            Some("Server error (503). Please try again later.")
        );
        assert_eq!(history.get().queries().collect::<Vec<_>>(), vec!["alien"]);
    }

    #[test]
    fn transport_failure_surfaces_message() {
        let (prefs, mut history) = fixture();
        let mut controller = SearchController::new();
        controller.submit("x", &prefs, &mut history, &transport(Err(0))).unwrap();
        assert_eq!(controller.session().error.as_deref(), Some("connection reset by peer"));
    }

    #[test]
    fn success_records_history_and_clears_error() {
        let (prefs, mut history) = fixture();
        let mut controller = SearchController::new();
        controller.submit("x", &prefs, &mut history, &transport(Err(500))).unwrap();
        controller
            .submit("heat", &prefs, &mut history, &transport(Ok(movies(2))))
            .unwrap();

        assert_eq!(controller.session().error, None);
        assert_eq!(history.get().queries().next(), Some("heat"));
    }

    #[test]
    fn pagination_over_twelve_movies() {
        let (prefs, mut history) = fixture();
        let mut controller = SearchController::new();
        controller
            .submit("x", &prefs, &mut history, &transport(Ok(movies(12))))
            .unwrap();

        assert_eq!(controller.total_pages(), 3);
        let ids = |c: &SearchController| c.visible_movies().iter().map(|m| m.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&controller), vec!["0", "1", "2", "3", "4"]);

        controller.set_page(3);
        assert_eq!(ids(&controller), vec!["10", "11"]);

        controller.next_page();
        assert_eq!(controller.session().page, 3);
        controller.set_page(0);
        assert_eq!(controller.session().page, 1);
        controller.prev_page();
        assert_eq!(controller.session().page, 1);
    }

    #[test]
    fn new_success_resets_page() {
        let (prefs, mut history) = fixture();
        let mut controller = SearchController::new();
        controller
            .submit("big", &prefs, &mut history, &transport(Ok(movies(12))))
            .unwrap();
        controller.set_page(3);
        controller
            .submit("small", &prefs, &mut history, &transport(Ok(movies(2))))
            .unwrap();

        assert_eq!(controller.session().page, 1);
        assert_eq!(controller.visible_movies().len(), 2);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let (prefs, mut history) = fixture();
        let mut controller = SearchController::new();
        let first = controller.begin("first", prefs.get()).unwrap();
        let second = controller.begin("second", prefs.get()).unwrap();
        assert!(second.seq > first.seq);

        assert!(!controller.finish(first.seq, Ok(movies(1)), &mut history).unwrap());
        assert!(controller.session().is_loading);
        assert!(controller.session().result.is_none());

        assert!(controller.finish(second.seq, Ok(movies(4)), &mut history).unwrap());
        assert!(!controller.session().is_loading);
        assert_eq!(controller.session().result, Some(movies(4)));
        assert_eq!(history.get().queries().collect::<Vec<_>>(), vec!["second"]);
    }

    #[test]
    fn resumed_controller_rejects_earlier_jobs() {
        let (prefs, mut history) = fixture();
        let mut old = SearchController::new();
        let before = old.begin("alien", prefs.get()).unwrap();

        let mut rebuilt = SearchController::resuming_after(old.latest_seq());
        let after = rebuilt.begin("comedy", prefs.get()).unwrap();
        assert!(after.seq > before.seq);

        assert!(!rebuilt.finish(before.seq, Ok(movies(1)), &mut history).unwrap());
        assert!(rebuilt.session().is_loading);
        assert!(rebuilt.session().result.is_none());
        assert!(history.get().is_empty());
    }

    #[test]
    fn begin_uses_current_filters() {
        let (mut prefs, _history) = fixture();
        prefs.update(|f| f.toggle_genre("Drama")).unwrap();
        let mut controller = SearchController::new();
        let job = controller.begin("quiet films", prefs.get()).unwrap();
        assert_eq!(job.request.filters.genres_param(), "Drama");
        assert_eq!(job.request.query, "quiet films");
    }

    #[test]
    fn dismiss_error_clears_text() {
        let (prefs, mut history) = fixture();
        let mut controller = SearchController::new();
        controller.submit("x", &prefs, &mut history, &transport(Err(500))).unwrap();
        controller.dismiss_error();
        assert_eq!(controller.session().error, None);
    }
}
