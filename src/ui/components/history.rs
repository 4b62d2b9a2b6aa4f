//! Recent searches line.

use crate::ui::boundary::RenderError;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HistoryChip;
use std::fmt::Write;

/// Renders `Recent Searches: [1] heat  [2] alien` on one line.
///
/// Writes nothing and returns `row` unchanged when there is no history.
pub fn render_history(
    out: &mut String,
    row: usize,
    chips: &[HistoryChip],
    theme: &Theme,
    cols: usize,
) -> Result<usize, RenderError> {
    if chips.is_empty() {
        return Ok(row);
    }

    let mut line = String::from("  Recent Searches:");
    for chip in chips {
        write!(line, "  [{}] {}", chip.key, chip.query)?;
    }

    position_cursor(out, row, 1)?;
    out.push_str(&Theme::fg(theme.colors.text_dim));
    out.push_str(&truncate(&line, cols));
    out.push_str(Theme::reset());
    Ok(row + 1)
}
