//! Keyboard to [`Event`] mapping.
//!
//! The active [`InputMode`] decides what a key means. `Ctrl+C` quits from
//! anywhere; once the render boundary has tripped only `r` and `q` do
//! anything.

use crate::app::{AppState, Event, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Years moved per `[` / `]` / `{` / `}` press.
const YEAR_STEP: i32 = 1;

/// Maps a terminal key press to an application event.
///
/// Returns `None` for keys with no binding in the current mode and for key
/// release or repeat reports.
#[must_use]
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    tracing::trace!(code = ?key.code, mode = ?state.input_mode, "key event");

    if state.boundary.is_tripped() {
        return match key.code {
            KeyCode::Char('r') => Some(Event::Reload),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Typing => map_typing_key(key),
        InputMode::Browsing => map_browsing_key(key),
        InputMode::Filters => map_filters_key(key),
    }
}

fn map_typing_key(key: KeyEvent) -> Option<Event> {
    Some(match key.code {
        KeyCode::Enter => Event::Submit,
        KeyCode::Tab => Event::FocusResults,
        KeyCode::Esc => Event::ClearInput,
        KeyCode::Backspace => Event::Backspace,
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Event::Char(c)
        }
        _ => return None,
    })
}

fn map_browsing_key(key: KeyEvent) -> Option<Event> {
    Some(match key.code {
        KeyCode::Char('n') | KeyCode::Right => Event::NextPage,
        KeyCode::Char('p') | KeyCode::Left => Event::PrevPage,
        KeyCode::Char(c @ '1'..='5') => Event::RunHistory(c as usize - '1' as usize),
        KeyCode::Char('c') => Event::ClearHistory,
        KeyCode::Char('f') => Event::OpenFilters,
        KeyCode::Char('d') => Event::ToggleDarkMode,
        KeyCode::Char('x') => Event::DismissError,
        KeyCode::Char('b') => Event::DismissReconnected,
        KeyCode::Char('/') | KeyCode::Tab => Event::FocusSearch,
        KeyCode::Char('q') => Event::Quit,
        _ => return None,
    })
}

fn map_filters_key(key: KeyEvent) -> Option<Event> {
    Some(match key.code {
        KeyCode::Down | KeyCode::Char('j') => Event::GenreDown,
        KeyCode::Up | KeyCode::Char('k') => Event::GenreUp,
        KeyCode::Char(' ') => Event::ToggleGenre,
        KeyCode::Char('s') => Event::CycleSort,
        KeyCode::Char('[') => Event::ShiftYearStart(-YEAR_STEP),
        KeyCode::Char(']') => Event::ShiftYearStart(YEAR_STEP),
        KeyCode::Char('{') => Event::ShiftYearEnd(-YEAR_STEP),
        KeyCode::Char('}') => Event::ShiftYearEnd(YEAR_STEP),
        KeyCode::Char('R') => Event::ResetFilters,
        KeyCode::Esc | KeyCode::Char('f') => Event::CloseFilters,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::ui::boundary::RenderError;
    use crate::ui::Theme;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_in(mode: InputMode) -> AppState {
        let mut state = AppState::new(MemoryStore::new(), true);
        state.input_mode = mode;
        state
    }

    #[test]
    fn typing_keys_edit_query() {
        let state = state_in(InputMode::Typing);
        assert_eq!(map_key(&state, press(KeyCode::Char('q'))), Some(Event::Char('q')));
        assert_eq!(map_key(&state, press(KeyCode::Enter)), Some(Event::Submit));
        assert_eq!(map_key(&state, press(KeyCode::Esc)), Some(Event::ClearInput));
        assert_eq!(map_key(&state, press(KeyCode::Tab)), Some(Event::FocusResults));
        assert_eq!(map_key(&state, press(KeyCode::F(2))), None);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Typing, InputMode::Browsing, InputMode::Filters] {
            assert_eq!(map_key(&state_in(mode), ctrl_c), Some(Event::Quit));
        }
    }

    #[test]
    fn browsing_digits_pick_history_entries() {
        let state = state_in(InputMode::Browsing);
        assert_eq!(map_key(&state, press(KeyCode::Char('1'))), Some(Event::RunHistory(0)));
        assert_eq!(map_key(&state, press(KeyCode::Char('5'))), Some(Event::RunHistory(4)));
        assert_eq!(map_key(&state, press(KeyCode::Char('6'))), None);
        assert_eq!(map_key(&state, press(KeyCode::Right)), Some(Event::NextPage));
        assert_eq!(map_key(&state, press(KeyCode::Char('q'))), Some(Event::Quit));
    }

    #[test]
    fn filter_keys_shift_years() {
        let state = state_in(InputMode::Filters);
        assert_eq!(map_key(&state, press(KeyCode::Char('['))), Some(Event::ShiftYearStart(-1)));
        assert_eq!(map_key(&state, press(KeyCode::Char('}'))), Some(Event::ShiftYearEnd(1)));
        assert_eq!(map_key(&state, press(KeyCode::Char(' '))), Some(Event::ToggleGenre));
        assert_eq!(map_key(&state, press(KeyCode::Char('f'))), Some(Event::CloseFilters));
    }

    #[test]
    fn tripped_boundary_limits_keys() {
        let mut state = state_in(InputMode::Typing);
        let _ = state
            .boundary
            .render(&Theme::default(), 24, 80, |_| Err(RenderError::Format(std::fmt::Error)));

        assert_eq!(map_key(&state, press(KeyCode::Char('r'))), Some(Event::Reload));
        assert_eq!(map_key(&state, press(KeyCode::Char('q'))), Some(Event::Quit));
        assert_eq!(map_key(&state, press(KeyCode::Char('a'))), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let state = state_in(InputMode::Typing);
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&state, key), None);
    }
}
