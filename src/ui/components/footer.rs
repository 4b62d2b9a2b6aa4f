//! Footer component renderer.

use crate::ui::boundary::RenderError;
use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the centered, dimmed keybinding hints at `row`.
///
/// Hints longer than the terminal are truncated so the layout holds on
/// narrow terminals.
pub fn render_footer(
    out: &mut String,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> Result<usize, RenderError> {
    position_cursor(out, row, 1)?;
    out.push_str(&Theme::fg(theme.colors.text_dim));
    write_centered(out, &footer.keybindings, cols)?;
    out.push_str(Theme::reset());
    Ok(row + 1)
}
