//! Header component renderer.

use crate::ui::boundary::RenderError;
use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered bold title bar and returns the next row.
///
/// The palette's optional header background fills the whole line.
pub fn render_header(
    out: &mut String,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> Result<usize, RenderError> {
    position_cursor(out, row, 1)?;
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(theme.colors.header_fg));
    if let Some(bg) = theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    write_centered(out, &header.title, cols)?;
    out.push_str(Theme::reset());
    Ok(row + 1)
}
