//! Filter editing panel.

use crate::ui::boundary::RenderError;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FiltersView, GenreOption};
use std::fmt::Write;

/// Renders year range, sort order and the genre checklist.
///
/// When the checklist does not fit it is windowed around the cursor, the
/// same way a long list scrolls.
pub fn render_filters(
    out: &mut String,
    row: usize,
    last_row: usize,
    filters: &FiltersView,
    theme: &Theme,
    cols: usize,
) -> Result<usize, RenderError> {
    let mut current_row = row;

    position_cursor(out, current_row, 1)?;
    write!(
        out,
        "  {}Year range:{} {}   {}[ ] start  {{ }} end{}",
        Theme::bold(),
        Theme::reset(),
        filters.year_range,
        Theme::fg(theme.colors.text_dim),
        Theme::reset()
    )?;
    current_row += 1;

    position_cursor(out, current_row, 1)?;
    write!(
        out,
        "  {}Sort by:{} {}   {}s: next{}",
        Theme::bold(),
        Theme::reset(),
        filters.sort_label,
        Theme::fg(theme.colors.text_dim),
        Theme::reset()
    )?;
    current_row += 2;

    position_cursor(out, current_row, 1)?;
    write!(out, "  {}Genres{}", Theme::bold(), Theme::reset())?;
    current_row += 1;

    let available = (last_row + 1).saturating_sub(current_row);
    let (start, end) = visible_window(&filters.genres, available);

    for genre in &filters.genres[start..end] {
        current_row = render_genre(out, current_row, genre, theme, cols)?;
    }

    Ok(current_row)
}

/// Slice bounds of at most `available` genres keeping the cursor centered.
fn visible_window(genres: &[GenreOption], available: usize) -> (usize, usize) {
    if genres.len() <= available {
        return (0, genres.len());
    }
    let cursor = genres.iter().position(|g| g.is_cursor).unwrap_or(0);
    let start = cursor
        .saturating_sub(available / 2)
        .min(genres.len() - available);
    (start, start + available)
}

fn render_genre(
    out: &mut String,
    row: usize,
    genre: &GenreOption,
    theme: &Theme,
    cols: usize,
) -> Result<usize, RenderError> {
    let mark = if genre.is_selected { "[x]" } else { "[ ]" };
    let text = truncate(&format!("    {mark} {}", genre.name), cols);

    position_cursor(out, row, 1)?;
    if genre.is_cursor {
        out.push_str(&Theme::fg(theme.colors.selection_fg));
        out.push_str(&Theme::bg(theme.colors.selection_bg));
        write!(out, "{text:<width$}", width = cols.min(30))?;
    } else {
        out.push_str(&Theme::fg(theme.colors.text_normal));
        out.push_str(&text);
    }
    out.push_str(Theme::reset());
    Ok(row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(n: usize, cursor: usize) -> Vec<GenreOption> {
        (0..n)
            .map(|i| GenreOption {
                name: format!("G{i}"),
                is_selected: false,
                is_cursor: i == cursor,
            })
            .collect()
    }

    #[test]
    fn window_covers_everything_when_it_fits() {
        assert_eq!(visible_window(&genres(5, 2), 10), (0, 5));
    }

    #[test]
    fn window_follows_cursor() {
        assert_eq!(visible_window(&genres(15, 0), 4), (0, 4));
        assert_eq!(visible_window(&genres(15, 8), 4), (6, 10));
        assert_eq!(visible_window(&genres(15, 14), 4), (11, 15));
    }
}
