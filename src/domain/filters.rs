//! Search filter configuration.
//!
//! [`FilterConfig`] narrows a search by release year, genre, and sort order.
//! Its JSON shape matches what the search client persisted historically, so
//! existing `filterPreferences` values keep loading:
//!
//! ```json
//! {"yearRange":[1900,2026],"genres":["Drama"],"sortBy":"year_desc"}
//! ```

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Earliest selectable release year.
pub const MIN_YEAR: i32 = 1900;

/// Genres offered by the filter panel, in display order.
pub const GENRES: [&str; 15] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Horror",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "War",
];

/// Latest selectable release year (the current calendar year).
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Result ordering requested from the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Service-defined relevance ranking.
    #[default]
    Relevance,
    YearDesc,
    YearAsc,
    TitleAsc,
    TitleDesc,
}

impl SortBy {
    /// Every variant in cycling order.
    pub const ALL: [Self; 5] = [
        Self::Relevance,
        Self::YearDesc,
        Self::YearAsc,
        Self::TitleAsc,
        Self::TitleDesc,
    ];

    /// Wire value sent as the `sortBy` query parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::YearDesc => "year_desc",
            Self::YearAsc => "year_asc",
            Self::TitleAsc => "title_asc",
            Self::TitleDesc => "title_desc",
        }
    }

    /// Human-readable label for the filter panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::YearDesc => "Year (Newest)",
            Self::YearAsc => "Year (Oldest)",
            Self::TitleAsc => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
        }
    }

    /// The next ordering, wrapping back to `Relevance` after `TitleDesc`.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// User-selected search narrowing options.
///
/// `set` on the preference store accepts any value of this type. The editing
/// helpers below (`shift_year_start`, `shift_year_end`) are what the UI uses,
/// and they keep `year_range.0 <= year_range.1` within
/// `[MIN_YEAR, current_year()]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Inclusive `(start, end)` release year bounds.
    pub year_range: (i32, i32),

    /// Selected genres. Order is irrelevant; serialized sorted.
    #[serde(default)]
    pub genres: BTreeSet<String>,

    /// Requested result order.
    #[serde(default)]
    pub sort_by: SortBy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            year_range: (MIN_YEAR, current_year()),
            genres: BTreeSet::new(),
            sort_by: SortBy::Relevance,
        }
    }
}

impl FilterConfig {
    /// Adds the genre if absent, removes it if present.
    pub fn toggle_genre(&mut self, genre: &str) {
        if !self.genres.remove(genre) {
            self.genres.insert(genre.to_string());
        }
    }

    /// Advances the sort order to the next variant.
    pub fn cycle_sort(&mut self) {
        self.sort_by = self.sort_by.next();
    }

    /// Moves the start year by `delta`, clamped to `[MIN_YEAR, end]`.
    pub fn shift_year_start(&mut self, delta: i32) {
        let (start, end) = self.year_range;
        self.year_range.0 = start.saturating_add(delta).clamp(MIN_YEAR, end.max(MIN_YEAR));
    }

    /// Moves the end year by `delta`, clamped to `[start, current_year()]`.
    pub fn shift_year_end(&mut self, delta: i32) {
        let (start, end) = self.year_range;
        let max = current_year();
        self.year_range.1 = end.saturating_add(delta).clamp(start.min(max), max);
    }

    /// Comma-joined genre list as sent in the `genres` query parameter.
    #[must_use]
    pub fn genres_param(&self) -> String {
        self.genres.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }

    /// Query parameters contributed by the filters, in request order.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("yearStart", self.year_range.0.to_string()),
            ("yearEnd", self.year_range.1.to_string()),
            ("genres", self.genres_param()),
            ("sortBy", self.sort_by.as_param().to_string()),
        ]
    }
}
