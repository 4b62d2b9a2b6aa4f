//! Domain layer for the Reelfind client.
//!
//! Core data types independent of storage, networking, or terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`filters`]: Filter configuration, sort orders, genre catalog
//! - [`history`]: Bounded search history log
//! - [`movie`]: Search response model

pub mod error;
pub mod filters;
pub mod history;
pub mod movie;

pub use error::{ReelfindError, Result, SearchFailure, RATE_LIMITED_MESSAGE};
pub use filters::{current_year, FilterConfig, SortBy, GENRES, MIN_YEAR};
pub use history::{HistoryEntry, HistoryLog, MAX_HISTORY_ITEMS};
pub use movie::{Movie, SearchResult};
