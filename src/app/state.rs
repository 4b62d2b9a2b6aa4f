//! Application state and view model computation.
//!
//! [`AppState`] aggregates everything the main loop owns: the input buffer and
//! mode, the search controller, the three persisted stores, the connectivity
//! monitor and the render boundary. It is mutated only by
//! [`handle_event`](crate::app::handle_event) and read by the renderer
//! through [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```
//! use reelfind::app::AppState;
//! use reelfind::storage::MemoryStore;
//!
//! let state = AppState::new(MemoryStore::new(), true);
//! let vm = state.compute_viewmodel();
//! assert!(vm.banner.is_none());
//! assert!(vm.search_bar.is_focused);
//! ```

use super::modes::InputMode;
use crate::domain::{Movie, GENRES};
use crate::network::NetworkMonitor;
use crate::search::SearchController;
use crate::storage::{AppearanceStore, HistoryStore, KeyValueStore, PreferenceStore};
use crate::ui::boundary::RenderBoundary;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Banner, BannerKind, Body, EmptyState, FiltersView, FooterInfo, GenreOption, HeaderInfo,
    HistoryChip, MovieCard, ResultsView, SearchBarInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::collections::BTreeSet;

pub const SEARCH_PLACEHOLDER: &str = "Search for movies... (e.g., sci-fi movies about virtual reality)";
pub const OFFLINE_TEXT: &str = "You are offline. Please check your internet connection.";
pub const RECONNECTED_TEXT: &str = "Back online!";

/// Query words shorter than this are not highlighted in titles.
const MIN_HIGHLIGHT_TOKEN: usize = 3;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    pub input_mode: InputMode,

    /// Contents of the search box. Submitting copies it into the session.
    pub query: String,

    pub controller: SearchController,
    pub preferences: PreferenceStore,
    pub history: HistoryStore,
    pub appearance: AppearanceStore,
    pub monitor: NetworkMonitor,
    pub boundary: RenderBoundary,

    /// Index into [`GENRES`] of the filter panel cursor.
    pub genre_cursor: usize,
}

impl AppState {
    /// Loads every store from `backend` and starts in typing mode.
    ///
    /// `initially_online` seeds the connectivity monitor.
    #[must_use]
    pub fn new<K>(backend: K, initially_online: bool) -> Self
    where
        K: KeyValueStore + Clone + 'static,
    {
        Self {
            input_mode: InputMode::Typing,
            query: String::new(),
            controller: SearchController::new(),
            preferences: PreferenceStore::load(Box::new(backend.clone())),
            history: HistoryStore::load(Box::new(backend.clone())),
            appearance: AppearanceStore::load(Box::new(backend)),
            monitor: NetworkMonitor::new(initially_online),
            boundary: RenderBoundary::new(),
            genre_cursor: 0,
        }
    }

    /// Palette for the persisted appearance flag.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        Theme::for_mode(self.appearance.is_dark())
    }

    /// Catalog genre under the filter cursor.
    #[must_use]
    pub fn cursor_genre(&self) -> &'static str {
        GENRES[self.genre_cursor % GENRES.len()]
    }

    /// Moves the genre cursor down, wrapping to the top.
    pub fn move_genre_cursor_down(&mut self) {
        self.genre_cursor = (self.genre_cursor + 1) % GENRES.len();
    }

    /// Moves the genre cursor up, wrapping to the bottom.
    pub fn move_genre_cursor_up(&mut self) {
        if self.genre_cursor == 0 {
            self.genre_cursor = GENRES.len() - 1;
        } else {
            self.genre_cursor -= 1;
        }
    }

    /// Computes the view model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: " Reelfind ".to_string(),
            },
            banner: self.compute_banner(),
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
                is_focused: self.input_mode == InputMode::Typing,
                is_loading: self.controller.session().is_loading,
            },
            history: self
                .history
                .get()
                .queries()
                .enumerate()
                .map(|(i, query)| HistoryChip {
                    key: i + 1,
                    query: query.to_string(),
                })
                .collect(),
            filter_summary: self.compute_filter_summary(),
            error: self.controller.session().error.clone(),
            body: self.compute_body(),
            footer: self.compute_footer(),
        }
    }

    fn compute_banner(&self) -> Option<Banner> {
        if !self.monitor.is_online() {
            return Some(Banner {
                kind: BannerKind::Offline,
                text: OFFLINE_TEXT.to_string(),
            });
        }
        self.monitor.show_reconnected().then(|| Banner {
            kind: BannerKind::Reconnected,
            text: RECONNECTED_TEXT.to_string(),
        })
    }

    fn compute_filter_summary(&self) -> String {
        let filters = self.preferences.get();
        let genres = if filters.genres.is_empty() {
            "Any".to_string()
        } else {
            filters.genres.iter().cloned().collect::<Vec<_>>().join(", ")
        };
        format!(
            "Years {}-{} | Genres: {} | Sort: {}",
            filters.year_range.0,
            filters.year_range.1,
            genres,
            filters.sort_by.label()
        )
    }

    fn compute_body(&self) -> Body {
        if self.input_mode == InputMode::Filters {
            return Body::Filters(self.compute_filters());
        }

        let session = self.controller.session();
        if session.is_loading {
            return Body::Loading;
        }

        let Some(result) = &session.result else {
            return Body::Empty(EmptyState {
                message: "Find your next movie".to_string(),
                subtitle: "Describe what you want to watch and press Enter".to_string(),
            });
        };

        let matcher = SkimMatcherV2::default().ignore_case();
        let tokens: Vec<&str> = session
            .query
            .split_whitespace()
            .filter(|t| t.chars().count() >= MIN_HIGHLIGHT_TOKEN)
            .collect();

        let total = self.controller.total_pages();
        Body::Results(ResultsView {
            answer: result.answer.clone(),
            movies: self
                .controller
                .visible_movies()
                .iter()
                .map(|movie| Self::compute_movie_card(movie, &tokens, &matcher))
                .collect(),
            page_label: (total > 1).then(|| format!("Page {} of {total}", session.page)),
        })
    }

    fn compute_movie_card(movie: &Movie, tokens: &[&str], matcher: &SkimMatcherV2) -> MovieCard {
        let title = movie.display_title();
        let highlight_ranges = Self::compute_highlight_ranges(&title, tokens, matcher);
        MovieCard {
            title,
            highlight_ranges,
            plot: movie.plot.clone().unwrap_or_default(),
            genres: movie.genres.join(", "),
        }
    }

    /// Char ranges of `text` where a query token appears contiguously.
    ///
    /// Fuzzy matches that scatter across the title are dropped; the indices
    /// of the remaining matches are coalesced into `(start, end)` runs.
    fn compute_highlight_ranges(text: &str, tokens: &[&str], matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let mut matched = BTreeSet::new();
        for token in tokens {
            if let Some((_score, indices)) = matcher.fuzzy_indices(text, token) {
                let contiguous = indices.windows(2).all(|w| w[1] == w[0] + 1);
                if contiguous {
                    matched.extend(indices);
                }
            }
        }

        let mut ranges = Vec::new();
        let mut start = None;
        let mut prev = None;

        for &idx in &matched {
            match (start, prev) {
                (None, _) => {
                    start = Some(idx);
                    prev = Some(idx);
                }
                (Some(_), Some(p)) if idx == p + 1 => {
                    prev = Some(idx);
                }
                (Some(s), Some(p)) => {
                    ranges.push((s, p + 1));
                    start = Some(idx);
                    prev = Some(idx);
                }
                _ => {}
            }
        }

        if let (Some(s), Some(p)) = (start, prev) {
            ranges.push((s, p + 1));
        }

        ranges
    }

    fn compute_filters(&self) -> FiltersView {
        let filters = self.preferences.get();
        FiltersView {
            year_range: format!("{} - {}", filters.year_range.0, filters.year_range.1),
            sort_label: filters.sort_by.label().to_string(),
            genres: GENRES
                .iter()
                .enumerate()
                .map(|(i, name)| GenreOption {
                    name: (*name).to_string(),
                    is_selected: filters.genres.contains(*name),
                    is_cursor: i == self.genre_cursor,
                })
                .collect(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Typing => "Enter: search  Tab: browse  Esc: clear  Ctrl+c: quit",
            InputMode::Browsing => {
                "n/p: page  1-5: recent  c: clear recent  f: filters  d: dark mode  x/b: dismiss  /: type  q: quit"
            }
            InputMode::Filters => "Up/Down: genre  Space: toggle  s: sort  [ ]/{ }: years  R: reset  Esc: done",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
