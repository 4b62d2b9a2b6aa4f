//! Static screen shown by a tripped render boundary.

use crate::ui::boundary::{RenderError, FALLBACK_ACTION, FALLBACK_MESSAGE, FALLBACK_TITLE};
use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;

/// Clears the screen and draws the error message with its reload hint.
pub fn render_fallback(
    out: &mut String,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> Result<(), RenderError> {
    out.push_str("\u{1b}[2J");
    let top = (rows / 2).saturating_sub(2).max(1);

    position_cursor(out, top, 1)?;
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(theme.colors.error_fg));
    write_centered(out, FALLBACK_TITLE, cols)?;
    out.push_str(Theme::reset());

    position_cursor(out, top + 2, 1)?;
    out.push_str(&Theme::fg(theme.colors.text_normal));
    write_centered(out, FALLBACK_MESSAGE, cols)?;
    out.push_str(Theme::reset());

    position_cursor(out, top + 4, 1)?;
    out.push_str(&Theme::fg(theme.colors.text_dim));
    write_centered(out, &format!("{FALLBACK_ACTION}  q: Quit"), cols)?;
    out.push_str(Theme::reset());

    Ok(())
}
