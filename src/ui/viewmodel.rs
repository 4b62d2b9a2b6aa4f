//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only: no stores,
//! no business rules.
//!
//! # Example
//!
//! ```
//! use reelfind::ui::viewmodel::{Body, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Reelfind ".to_string() },
//!     banner: None,
//!     search_bar: SearchBarInfo {
//!         query: String::new(),
//!         placeholder: "Search for movies...".to_string(),
//!         is_focused: true,
//!         is_loading: false,
//!     },
//!     history: vec![],
//!     filter_summary: "Years 1900-2026 | Genres: Any | Sort: Relevance".to_string(),
//!     error: None,
//!     body: Body::Empty(EmptyState {
//!         message: "Find your next movie".to_string(),
//!         subtitle: "Type a question and press Enter".to_string(),
//!     }),
//!     footer: FooterInfo { keybindings: "Enter: search".to_string() },
//! };
//! assert!(vm.banner.is_none());
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Connectivity notice, if any is active.
    pub banner: Option<Banner>,

    pub search_bar: SearchBarInfo,

    /// Recent searches, most recent first.
    pub history: Vec<HistoryChip>,

    /// One-line description of the active filters.
    pub filter_summary: String,

    /// Error alert text.
    pub error: Option<String>,

    pub body: Body,

    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Offline,
    Reconnected,
}

/// Connectivity notice shown above the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current contents of the input buffer.
    pub query: String,
    /// Shown dimmed when `query` is empty.
    pub placeholder: String,
    pub is_focused: bool,
    pub is_loading: bool,
}

/// A recent search with the digit that re-runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryChip {
    /// 1-based key.
    pub key: usize,
    pub query: String,
}

/// Main content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Nothing searched yet.
    Empty(EmptyState),
    /// A search is in flight.
    Loading,
    Results(ResultsView),
    /// Filter editing panel.
    Filters(FiltersView),
}

/// Centered two-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// The latest successful result, current page only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub answer: String,
    pub movies: Vec<MovieCard>,
    /// `Some("Page 2 of 3")` when there is more than one page.
    pub page_label: Option<String>,
}

/// One movie on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    /// Title with the year appended, e.g. `Heat (1995)`.
    pub title: String,
    /// Character ranges of `title` matching query terms, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
    pub plot: String,
    /// Comma-separated genres.
    pub genres: String,
}

/// Filter editing panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiltersView {
    /// e.g. `1990 - 2026`.
    pub year_range: String,
    pub sort_label: String,
    pub genres: Vec<GenreOption>,
}

/// One catalog genre in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreOption {
    pub name: String,
    pub is_selected: bool,
    /// Whether the cursor is on this row.
    pub is_cursor: bool,
}
