//! Composable UI component renderers.
//!
//! Each component writes one part of the screen into the frame buffer and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`banner`]: Offline / back-online notice
//! - [`search`]: Search input box
//! - [`history`]: Recent searches line
//! - [`results`]: Answer, movie cards, page indicator
//! - [`filters`]: Filter editing panel
//! - [`empty`]: Empty and loading states
//! - [`footer`]: Keybinding hints
//! - [`fallback`]: Screen shown after a render failure
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Banner]                 (when offline or just reconnected)
//! [Search Bar - 3 lines]
//! [Filter summary]
//! [Recent searches]        (when history is not empty)
//! [Error alert]            (when the last search failed)
//! [Border]
//! [Body: results | filters | empty | loading]
//! [Border]
//! [Footer]
//! ```

mod banner;
mod empty;
mod fallback;
mod filters;
mod footer;
mod header;
mod history;
mod results;
mod search;

pub use fallback::render_fallback;

use crate::ui::boundary::RenderError;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};
use std::fmt::Write;

use banner::render_banner;
use empty::{render_empty_state, render_loading};
use filters::render_filters;
use footer::render_footer;
use header::render_header;
use history::render_history;
use results::render_results;
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> Result<usize, RenderError> {
    position_cursor(out, row, 1)?;
    write!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset())?;
    Ok(row + 1)
}

fn render_line(out: &mut String, row: usize, text: &str, fg: &str, cols: usize) -> Result<usize, RenderError> {
    position_cursor(out, row, 1)?;
    write!(out, "{}{}{}", Theme::fg(fg), truncate(text, cols), Theme::reset())?;
    Ok(row + 1)
}

/// Renders a full frame for `vm`.
///
/// The screen is cleared first. The footer and its border always take the
/// last two rows; the body gets whatever is left in between.
///
/// # Errors
///
/// Propagates any component failure.
pub fn render_layout(
    out: &mut String,
    vm: &UIViewModel,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> Result<(), RenderError> {
    out.push_str("\u{1b}[2J");

    let mut row = 1;
    row = render_header(out, row, &vm.header, theme, cols)?;
    row = render_border(out, row, theme.colors.border, cols)?;
    if let Some(banner) = &vm.banner {
        row = render_banner(out, row, banner, theme, cols)?;
    }
    row = render_search_bar(out, row, &vm.search_bar, theme, cols)?;
    row = render_line(out, row, &format!("  {}", vm.filter_summary), theme.colors.text_dim, cols)?;
    row = render_history(out, row, &vm.history, theme, cols)?;
    if let Some(error) = &vm.error {
        row = render_line(out, row, &format!("  ✗ {error}  (x: dismiss)"), theme.colors.error_fg, cols)?;
    }
    row = render_border(out, row, theme.colors.border, cols)?;

    let footer_row = rows.max(row + 2);
    let body_last_row = footer_row.saturating_sub(2);

    if row <= body_last_row {
        match &vm.body {
            Body::Empty(empty) => {
                render_empty_state(out, row, empty, theme, cols)?;
            }
            Body::Loading => {
                render_loading(out, row, theme, cols)?;
            }
            Body::Results(results) => {
                render_results(out, row, body_last_row, results, theme, cols)?;
            }
            Body::Filters(filters) => {
                render_filters(out, row, body_last_row, filters, theme, cols)?;
            }
        }
    }

    render_border(out, footer_row - 1, theme.colors.border, cols)?;
    render_footer(out, footer_row, &vm.footer, theme, cols)?;
    Ok(())
}
