//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled frames through
//! composable components, with render-failure containment around the whole
//! pipeline.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_layout → frame String
//!                          (inside RenderBoundary)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`boundary`]: Render-failure containment and fallback screen
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, wrapping)
//! - [`theme`]: Light and dark palettes, ANSI escape generation

pub mod boundary;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use boundary::{RenderBoundary, RenderError};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Banner, BannerKind, Body, EmptyState, FiltersView, FooterInfo, GenreOption, HeaderInfo,
    HistoryChip, MovieCard, ResultsView, SearchBarInfo, UIViewModel,
};
