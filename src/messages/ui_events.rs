//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Search bar
    StartSearch,
    StopSearch,
    SearchChar(char),
    SearchBackspace,
    ClearSearch,

    // Card selection
    SelectNext,
    SelectPrev,

    // Pagination
    PrevPage,
    NextPage,
    GoToPage(usize),
    OpenPageJump,
    PageJumpChar(char),
    PageJumpBackspace,
    SubmitPageJump,
    CancelPageJump,

    // Card actions
    ToggleFavorite,
    ShowDetail,
    CloseDetail,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search bar
    Search,
    /// Typing a page number
    PageJump,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    input_mode: InputMode,
    show_help: bool,
    show_detail: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Unbound Ctrl chords are dropped, not treated as plain keys
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            KeyCode::Char('u') if input_mode == InputMode::Search => Some(UiEvent::ClearSearch),
            _ => None,
        };
    }

    // Popups swallow the next key
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if show_detail {
        return match key.code {
            KeyCode::Char('f') | KeyCode::Char(' ') => Some(UiEvent::ToggleFavorite),
            KeyCode::Char('q') => Some(UiEvent::Quit),
            _ => Some(UiEvent::CloseDetail),
        };
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('/') | KeyCode::Char('s') => Some(UiEvent::StartSearch),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
            KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevPage),
            KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextPage),
            KeyCode::Home => Some(UiEvent::GoToPage(1)),
            KeyCode::Char('g') => Some(UiEvent::OpenPageJump),
            KeyCode::Char('f') | KeyCode::Char(' ') => Some(UiEvent::ToggleFavorite),
            KeyCode::Enter => Some(UiEvent::ShowDetail),
            _ => None,
        },
        InputMode::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopSearch),
            KeyCode::Backspace => Some(UiEvent::SearchBackspace),
            KeyCode::Char(c) => Some(UiEvent::SearchChar(c)),
            _ => None,
        },
        InputMode::PageJump => match key.code {
            KeyCode::Esc => Some(UiEvent::CancelPageJump),
            KeyCode::Enter => Some(UiEvent::SubmitPageJump),
            KeyCode::Backspace => Some(UiEvent::PageJumpBackspace),
            KeyCode::Char(c) => Some(UiEvent::PageJumpChar(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let map = |code| key_to_ui_event(press(code), InputMode::Normal, false, false);
        assert_eq!(map(KeyCode::Char('/')), Some(UiEvent::StartSearch));
        assert_eq!(map(KeyCode::Right), Some(UiEvent::NextPage));
        assert_eq!(map(KeyCode::Char('h')), Some(UiEvent::PrevPage));
        assert_eq!(map(KeyCode::Char('f')), Some(UiEvent::ToggleFavorite));
        assert_eq!(map(KeyCode::Enter), Some(UiEvent::ShowDetail));
        assert_eq!(map(KeyCode::Char('g')), Some(UiEvent::OpenPageJump));
        assert_eq!(map(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_search_mode_types_letters() {
        let map = |code| key_to_ui_event(press(code), InputMode::Search, false, false);
        assert_eq!(map(KeyCode::Char('q')), Some(UiEvent::SearchChar('q')));
        assert_eq!(map(KeyCode::Char('f')), Some(UiEvent::SearchChar('f')));
        assert_eq!(map(KeyCode::Backspace), Some(UiEvent::SearchBackspace));
        assert_eq!(map(KeyCode::Esc), Some(UiEvent::StopSearch));

        let clear = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_ui_event(clear, InputMode::Search, false, false),
            Some(UiEvent::ClearSearch)
        );
    }

    #[test]
    fn test_page_jump_mode() {
        let map = |code| key_to_ui_event(press(code), InputMode::PageJump, false, false);
        assert_eq!(map(KeyCode::Char('7')), Some(UiEvent::PageJumpChar('7')));
        assert_eq!(map(KeyCode::Enter), Some(UiEvent::SubmitPageJump));
        assert_eq!(map(KeyCode::Esc), Some(UiEvent::CancelPageJump));
    }

    #[test]
    fn test_popups_take_priority() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), InputMode::Normal, true, false),
            Some(UiEvent::CloseHelp)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Esc), InputMode::Normal, false, true),
            Some(UiEvent::CloseDetail)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('f')), InputMode::Normal, false, true),
            Some(UiEvent::ToggleFavorite)
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, InputMode::Search, false, false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(key, InputMode::Normal, true, false), Some(UiEvent::Quit));
    }

    #[test]
    fn test_unbound_ctrl_chords_are_ignored() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        // Would otherwise type into the query
        assert_eq!(key_to_ui_event(ctrl('a'), InputMode::Search, false, false), None);
        assert_eq!(key_to_ui_event(ctrl('7'), InputMode::PageJump, false, false), None);

        // Would otherwise toggle a favorite, quit or page
        assert_eq!(key_to_ui_event(ctrl('f'), InputMode::Normal, false, false), None);
        assert_eq!(key_to_ui_event(ctrl('q'), InputMode::Normal, false, false), None);
        assert_eq!(key_to_ui_event(ctrl('l'), InputMode::Normal, false, false), None);
        assert_eq!(key_to_ui_event(ctrl('u'), InputMode::Normal, false, false), None);

        // Popups stay open
        assert_eq!(key_to_ui_event(ctrl('x'), InputMode::Normal, true, false), None);
        assert_eq!(key_to_ui_event(ctrl('x'), InputMode::Normal, false, true), None);
    }
}
