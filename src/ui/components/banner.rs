//! Connectivity banner renderer.

use crate::ui::boundary::RenderError;
use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Banner, BannerKind};

/// Renders a full-width colored notice line and returns the next row.
pub fn render_banner(
    out: &mut String,
    row: usize,
    banner: &Banner,
    theme: &Theme,
    cols: usize,
) -> Result<usize, RenderError> {
    let (fg, bg) = match banner.kind {
        BannerKind::Offline => (theme.colors.offline_fg, theme.colors.offline_bg),
        BannerKind::Reconnected => (theme.colors.reconnected_fg, theme.colors.reconnected_bg),
    };

    position_cursor(out, row, 1)?;
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(fg));
    out.push_str(&Theme::bg(bg));
    write_centered(out, &banner.text, cols)?;
    out.push_str(Theme::reset());
    Ok(row + 1)
}
