//! Search bar component renderer.

use crate::ui::boundary::RenderError;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;
use std::fmt::Write;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

const LOADING_SUFFIX: &str = " Searching... ";

/// Renders the 3-line bordered search box at `row` and returns `row + 3`.
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ Search: sci-fi heists     │ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
///
/// The border takes the focus color while the box has keyboard focus. An
/// empty query shows the placeholder dimmed; an in-flight search appends a
/// loading marker on the right.
pub fn render_search_bar(
    out: &mut String,
    row: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
) -> Result<usize, RenderError> {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = if search.is_focused {
        theme.colors.search_bar_focus
    } else {
        theme.colors.search_bar_border
    };

    position_cursor(out, row, 1)?;
    write!(out, "{margin}{}┌{}┐{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset())?;

    let suffix = if search.is_loading { LOADING_SUFFIX } else { "" };
    let label = " Search: ";
    let text_width = inner_width.saturating_sub(label.chars().count() + suffix.chars().count());

    let (text, text_fg) = if search.query.is_empty() {
        (truncate(&search.placeholder, text_width), theme.colors.text_dim)
    } else {
        (tail(&search.query, text_width), theme.colors.text_normal)
    };
    let cursor = if search.is_focused && text.chars().count() < text_width && !search.query.is_empty() {
        "_"
    } else {
        ""
    };
    let used = label.chars().count() + text.chars().count() + cursor.len() + suffix.chars().count();

    position_cursor(out, row + 1, 1)?;
    write!(
        out,
        "{margin}{}│{}{label}{}{text}{cursor}{}",
        Theme::fg(border),
        Theme::fg(theme.colors.text_normal),
        Theme::fg(text_fg),
        " ".repeat(inner_width.saturating_sub(used)),
    )?;
    if search.is_loading {
        write!(out, "{}{suffix}", Theme::fg(theme.colors.accent_fg))?;
    }
    write!(out, "{}│{}", Theme::fg(border), Theme::reset())?;

    position_cursor(out, row + 2, 1)?;
    write!(out, "{margin}{}└{}┘{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset())?;

    Ok(row + 3)
}

/// Last `width` chars of `text`, so the end of a long query stays visible.
fn tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(width)).collect()
}
