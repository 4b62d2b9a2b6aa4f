//! Search result renderer: answer text, movie cards, page indicator.

use crate::ui::boundary::RenderError;
use crate::ui::helpers::{self, position_cursor, truncate, wrap, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MovieCard, ResultsView};
use std::fmt::Write;

const ANSWER_MAX_LINES: usize = 3;
const PLOT_MAX_LINES: usize = 2;
const INDENT: &str = "  ";

/// Renders the answer and the current page of movies between `row` and
/// `last_row` inclusive.
///
/// Cards that do not fit are skipped; the page label always gets the last
/// row when present.
pub fn render_results(
    out: &mut String,
    row: usize,
    last_row: usize,
    results: &ResultsView,
    theme: &Theme,
    cols: usize,
) -> Result<usize, RenderError> {
    let width = cols.saturating_sub(INDENT.len() * 2);
    let card_limit = if results.page_label.is_some() {
        last_row.saturating_sub(1)
    } else {
        last_row
    };
    let mut current_row = row;

    for line in wrap(&results.answer, width, ANSWER_MAX_LINES) {
        if current_row > card_limit {
            break;
        }
        position_cursor(out, current_row, 1)?;
        write!(out, "{INDENT}{}{line}{}", Theme::fg(theme.colors.accent_fg), Theme::reset())?;
        current_row += 1;
    }
    current_row += 1;

    if results.movies.is_empty() && current_row <= card_limit {
        position_cursor(out, current_row, 1)?;
        write!(
            out,
            "{INDENT}{}No movies matched. Try a different query or adjust the filters.{}",
            Theme::fg(theme.colors.empty_state_fg),
            Theme::reset()
        )?;
        current_row += 1;
    }

    for movie in &results.movies {
        let height = card_height(movie, width);
        if current_row + height - 1 > card_limit {
            break;
        }
        current_row = render_card(out, current_row, movie, theme, width)?;
        current_row += 1;
    }

    if let Some(label) = &results.page_label {
        position_cursor(out, last_row, 1)?;
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(theme.colors.header_fg));
        write_centered(out, &format!("< {label} >"), cols)?;
        out.push_str(Theme::reset());
        current_row = last_row + 1;
    }

    Ok(current_row)
}

/// Rows a card occupies: title, genres if any, plot lines.
fn card_height(movie: &MovieCard, width: usize) -> usize {
    let genre_rows = usize::from(!movie.genres.is_empty());
    1 + genre_rows + wrap(&movie.plot, width, PLOT_MAX_LINES).len()
}

/// Renders one movie card and returns the row after it.
///
/// ```text
///   Heat (1995)
///   Action, Crime, Drama
///   A group of professional bank robbers start to feel the heat from
///   police when they unknowingly leave a clue at their latest heist.
/// ```
fn render_card(
    out: &mut String,
    row: usize,
    movie: &MovieCard,
    theme: &Theme,
    width: usize,
) -> Result<usize, RenderError> {
    let mut current_row = row;

    position_cursor(out, current_row, 1)?;
    out.push_str(INDENT);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(theme.colors.text_normal));
    if movie.title.chars().count() > width {
        out.push_str(&truncate(&movie.title, width));
    } else {
        helpers::render_highlighted_text(
            out,
            &movie.title,
            &movie.highlight_ranges,
            theme,
            theme.colors.text_normal,
        )?;
    }
    out.push_str(Theme::reset());
    current_row += 1;

    if !movie.genres.is_empty() {
        position_cursor(out, current_row, 1)?;
        write!(
            out,
            "{INDENT}{}{}{}",
            Theme::fg(theme.colors.accent_fg),
            truncate(&movie.genres, width),
            Theme::reset()
        )?;
        current_row += 1;
    }

    for line in wrap(&movie.plot, width, PLOT_MAX_LINES) {
        position_cursor(out, current_row, 1)?;
        write!(out, "{INDENT}{}{line}{}", Theme::fg(theme.colors.text_dim), Theme::reset())?;
        current_row += 1;
    }

    Ok(current_row)
}
