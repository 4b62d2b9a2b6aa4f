//! Shared rendering utilities.
//!
//! Everything here writes into a frame buffer (`&mut String`) rather than
//! stdout, so a failed frame can be thrown away whole. Widths are counted in
//! chars, not bytes.

use crate::ui::boundary::RenderError;
use crate::ui::theme::Theme;
use std::fmt::Write;

/// Moves the cursor to `row`, `col` (both 1-indexed) and clears that line.
///
/// # Errors
///
/// Returns [`RenderError::Format`] if the buffer write fails.
pub fn position_cursor(out: &mut String, row: usize, col: usize) -> Result<(), RenderError> {
    write!(out, "\u{1b}[{row};{col}H\u{1b}[2K")?;
    Ok(())
}

/// Writes `text` with the char ranges in `ranges` highlighted.
///
/// # Errors
///
/// Returns [`RenderError::InvalidHighlight`] if a range is reversed or runs
/// past the end of `text`.
///
/// # Example
///
/// ```
/// use reelfind::ui::helpers::render_highlighted_text;
/// use reelfind::ui::Theme;
///
/// let mut out = String::new();
/// render_highlighted_text(&mut out, "Heat", &[(0, 2)], &Theme::default(), "#000000").unwrap();
/// assert!(out.contains("He"));
/// assert!(out.ends_with("at"));
/// ```
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
) -> Result<(), RenderError> {
    if ranges.is_empty() {
        out.push_str(text);
        return Ok(());
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start < current_pos || end < start || end > chars.len() {
            return Err(RenderError::InvalidHighlight {
                start,
                end,
                len: chars.len(),
            });
        }

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(base_fg));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    Ok(())
}

/// Cuts `text` to at most `width` chars, ending in `...` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Greedy word wrap into at most `max_lines` lines of `width` chars.
///
/// The last line is truncated with `...` if text remains.
#[must_use]
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut overflow = false;

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if lines.len() == max_lines {
            overflow = true;
            break;
        }
        current = truncate(word, width);
    }

    if !current.is_empty() {
        if lines.len() < max_lines {
            lines.push(current);
        } else {
            overflow = true;
        }
    }

    if overflow {
        if let Some(last) = lines.last_mut() {
            *last = truncate(&format!("{last} ..."), width);
        }
    }

    lines
}

/// Writes `text` centered in `cols` columns, padded on both sides.
///
/// # Errors
///
/// Returns [`RenderError::Format`] if the buffer write fails.
pub fn write_centered(out: &mut String, text: &str, cols: usize) -> Result<(), RenderError> {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;
    write!(
        out,
        "{}{text}{}",
        " ".repeat(padding),
        " ".repeat(cols.saturating_sub(padding + len))
    )?;
    Ok(())
}
