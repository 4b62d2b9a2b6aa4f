//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single place where [`AppState`] changes. It
//! returns whether the screen needs a redraw plus the [`Action`]s the main
//! loop must carry out.
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `Submit`, `ClearInput`
//! - **Focus**: `FocusResults`, `FocusSearch`, `OpenFilters`, `CloseFilters`
//! - **Results**: `NextPage`, `PrevPage`, `DismissError`
//! - **History**: `RunHistory`, `ClearHistory`
//! - **Filters**: `GenreDown`, `GenreUp`, `ToggleGenre`, `CycleSort`,
//!   `ShiftYearStart`, `ShiftYearEnd`, `ResetFilters`
//! - **Appearance**: `ToggleDarkMode`
//! - **Connectivity**: `Connectivity`, `Tick`, `DismissReconnected`
//! - **Worker**: `WorkerResponse`
//! - **Lifecycle**: `Reload`, `Quit`
//!
//! Store writes that fail are logged at warn level; the in-memory state
//! keeps the change.
//!
//! # Example
//!
//! ```
//! use reelfind::app::{handle_event, Action, AppState, Event};
//! use reelfind::storage::MemoryStore;
//!
//! let mut state = AppState::new(MemoryStore::new(), true);
//! for c in "heat".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (redraw, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(redraw);
//! assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
//! # Ok::<(), reelfind::ReelfindError>(())
//! ```

use crate::app::{Action, AppState, InputMode};
use crate::domain::error::Result;
use crate::worker::WorkerResponse;
use std::time::Instant;

/// Events triggered by user input, timers, connectivity, or the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,
    /// Submits the search box contents.
    Submit,
    /// Empties the search box.
    ClearInput,

    /// Leaves the search box for single-key commands.
    FocusResults,
    /// Returns focus to the search box.
    FocusSearch,

    NextPage,
    PrevPage,

    /// Re-runs the recent search at this 0-based index.
    RunHistory(usize),
    ClearHistory,

    OpenFilters,
    CloseFilters,
    GenreDown,
    GenreUp,
    /// Toggles the genre under the cursor.
    ToggleGenre,
    CycleSort,
    /// Moves the lower year bound by the given number of years.
    ShiftYearStart(i32),
    /// Moves the upper year bound by the given number of years.
    ShiftYearEnd(i32),
    ResetFilters,

    ToggleDarkMode,
    DismissError,
    DismissReconnected,

    /// The connectivity watcher saw a transition.
    Connectivity { online: bool, at: Instant },
    /// Periodic timer, used to expire the reconnected notice.
    Tick(Instant),

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),

    /// Rebuild everything after a render failure.
    Reload,
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(redraw, actions)`. While the render boundary is tripped only
/// `Reload` and `Quit` have any effect.
///
/// # Errors
///
/// Store write failures are logged rather than returned, so this currently
/// always succeeds; the `Result` keeps the door open for fatal conditions.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Quit => return Ok((false, vec![Action::Quit])),
        Event::Reload => {
            tracing::info!("reload requested");
            return Ok((true, vec![Action::Reload]));
        }
        _ if state.boundary.is_tripped() => {
            tracing::trace!("render boundary tripped, ignoring event");
            return Ok((false, vec![]));
        }
        _ => {}
    }

    match event {
        Event::Char(c) => {
            state.query.push(*c);
            tracing::trace!(query = %state.query, "search query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => Ok((state.query.pop().is_some(), vec![])),
        Event::ClearInput => {
            let changed = !state.query.is_empty();
            state.query.clear();
            Ok((changed, vec![]))
        }
        Event::Submit => {
            let query = state.query.clone();
            Ok(start_search(state, &query))
        }
        Event::FocusResults => {
            state.input_mode = InputMode::Browsing;
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            state.input_mode = InputMode::Typing;
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let before = state.controller.session().page;
            state.controller.next_page();
            Ok((state.controller.session().page != before, vec![]))
        }
        Event::PrevPage => {
            let before = state.controller.session().page;
            state.controller.prev_page();
            Ok((state.controller.session().page != before, vec![]))
        }
        Event::RunHistory(index) => {
            let Some(entry) = state.history.get().get(*index) else {
                tracing::debug!(index, "no recent search at index");
                return Ok((false, vec![]));
            };
            let query = entry.query.clone();
            state.query.clone_from(&query);
            Ok(start_search(state, &query))
        }
        Event::ClearHistory => {
            if state.history.get().is_empty() {
                return Ok((false, vec![]));
            }
            log_write_failure(state.history.clear(), "search history");
            Ok((true, vec![]))
        }
        Event::OpenFilters => {
            state.input_mode = InputMode::Filters;
            Ok((true, vec![]))
        }
        Event::CloseFilters => {
            state.input_mode = InputMode::Browsing;
            Ok((true, vec![]))
        }
        Event::GenreDown => {
            state.move_genre_cursor_down();
            Ok((true, vec![]))
        }
        Event::GenreUp => {
            state.move_genre_cursor_up();
            Ok((true, vec![]))
        }
        Event::ToggleGenre => {
            let genre = state.cursor_genre();
            log_write_failure(
                state.preferences.update(|f| f.toggle_genre(genre)),
                "filter preferences",
            );
            Ok((true, vec![]))
        }
        Event::CycleSort => {
            log_write_failure(
                state.preferences.update(crate::domain::FilterConfig::cycle_sort),
                "filter preferences",
            );
            Ok((true, vec![]))
        }
        Event::ShiftYearStart(delta) => {
            let before = state.preferences.get().year_range;
            log_write_failure(
                state.preferences.update(|f| f.shift_year_start(*delta)),
                "filter preferences",
            );
            Ok((state.preferences.get().year_range != before, vec![]))
        }
        Event::ShiftYearEnd(delta) => {
            let before = state.preferences.get().year_range;
            log_write_failure(
                state.preferences.update(|f| f.shift_year_end(*delta)),
                "filter preferences",
            );
            Ok((state.preferences.get().year_range != before, vec![]))
        }
        Event::ResetFilters => {
            log_write_failure(state.preferences.reset(), "filter preferences");
            Ok((true, vec![]))
        }
        Event::ToggleDarkMode => {
            log_write_failure(state.appearance.toggle(), "appearance");
            Ok((true, vec![]))
        }
        Event::DismissError => {
            let had_error = state.controller.session().error.is_some();
            state.controller.dismiss_error();
            Ok((had_error, vec![]))
        }
        Event::DismissReconnected => Ok((state.monitor.dismiss_reconnected(), vec![])),
        Event::Connectivity { online, at } => {
            let changed = state.monitor.observe(*online, *at);
            if changed {
                tracing::info!(online, "connectivity changed");
            }
            Ok((changed, vec![]))
        }
        Event::Tick(now) => Ok((state.monitor.tick(*now), vec![])),
        Event::WorkerResponse(WorkerResponse::SearchCompleted { seq, outcome }) => {
            match state.controller.finish(*seq, outcome.clone(), &mut state.history) {
                Ok(applied) => Ok((applied, vec![])),
                Err(e) => {
                    tracing::warn!(error = %e, store = "search history", "failed to persist");
                    Ok((true, vec![]))
                }
            }
        }
        Event::Quit | Event::Reload => Ok((false, vec![])),
    }
}

/// Begins a search for `query` with the current filters.
fn start_search(state: &mut AppState, query: &str) -> (bool, Vec<Action>) {
    match state.controller.begin(query, state.preferences.get()) {
        Some(job) => {
            state.input_mode = InputMode::Browsing;
            (true, vec![Action::PostToWorker(job)])
        }
        None => (false, vec![]),
    }
}

fn log_write_failure(result: Result<()>, store: &str) {
    if let Err(e) = result {
        tracing::warn!(error = %e, store, "failed to persist");
    }
}
