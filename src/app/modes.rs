//! Input mode state machine.
//!
//! The mode decides which keybindings are active and what the body area
//! shows:
//! - **Typing**: the search box has focus; characters edit the query
//! - **Browsing**: single-key commands over results and history
//! - **Filters**: the filter panel replaces the results

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Characters edit the query. Enter submits, Tab leaves for Browsing.
    #[default]
    Typing,

    /// Paging, history recall, appearance and notice dismissal.
    Browsing,

    /// Genre cursor, sort cycling, year shifting.
    Filters,
}
