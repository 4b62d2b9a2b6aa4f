//! Search response model.
//!
//! These types mirror the JSON body returned by the search service's
//! `GET /search` endpoint. Fields the client does not use are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// One movie card in a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Service-side identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub plot: Option<String>,

    /// Genres in the order the service returned them.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,
}

impl Movie {
    /// Title with the release year appended when known, e.g. `"Alien (1979)"`.
    #[must_use]
    pub fn display_title(&self) -> String {
        self.year.map_or_else(
            || self.title.clone(),
            |year| format!("{} ({year})", self.title),
        )
    }
}

/// A natural-language answer plus the ranked movies backing it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub answer: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub movies: Vec<Movie>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
