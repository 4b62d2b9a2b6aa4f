//! Empty and loading state renderers.

use crate::ui::boundary::RenderError;
use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting two rows below `row`.
pub fn render_empty_state(
    out: &mut String,
    row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) -> Result<usize, RenderError> {
    position_cursor(out, row + 2, 1)?;
    out.push_str(&Theme::fg(theme.colors.empty_state_fg));
    write_centered(out, &empty.message, cols)?;
    out.push_str(Theme::reset());

    position_cursor(out, row + 3, 1)?;
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(theme.colors.text_dim));
    write_centered(out, &empty.subtitle, cols)?;
    out.push_str(Theme::reset());

    Ok(row + 4)
}

/// Renders the in-flight indicator.
pub fn render_loading(out: &mut String, row: usize, theme: &Theme, cols: usize) -> Result<usize, RenderError> {
    position_cursor(out, row + 2, 1)?;
    out.push_str(&Theme::fg(theme.colors.accent_fg));
    write_centered(out, "Searching...", cols)?;
    out.push_str(Theme::reset());
    Ok(row + 3)
}
