//! Side effects produced by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) mutates state directly and
//! returns the effects it cannot perform itself. The main loop executes them
//! in order.

use crate::worker::SearchJob;

/// Commands for the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hand a search to the background worker.
    PostToWorker(SearchJob),

    /// Rebuild the whole application state from configuration and storage.
    Reload,

    /// Leave the event loop and restore the terminal.
    Quit,
}
