//! Keyboard input mapping for the viewer.
//!
//! Keys recognised:
//! - ESC, `q`, Ctrl+C: quit
//! - Space: re-check the watched file
//!
//! A terminal resize asks for the current frame to be drawn again.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the viewer should do in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the viewer
    Exit,
    /// Re-check the file for changes (manual refresh)
    Refresh,
    /// Repaint the current frame (terminal was resized)
    Redraw,
    /// Nothing to do
    None,
}

/// Map a terminal event to a viewer action.
pub fn handle_event(event: Event) -> KeyAction {
    match event {
        Event::Key(key) => handle_key_event(key),
        Event::Resize(_, _) => KeyAction::Redraw,
        _ => KeyAction::None,
    }
}

/// Map a key event to a viewer action. Key releases are ignored.
pub fn handle_key_event(event: KeyEvent) -> KeyAction {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Exit,
            _ => KeyAction::None,
        };
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Exit,
        KeyCode::Char(' ') => KeyAction::Refresh,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_exit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Esc)), KeyAction::Exit);
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), KeyAction::Exit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Exit
        );
    }

    #[test]
    fn test_space_refreshes() {
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), KeyAction::Refresh);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handle_key_event(key(KeyCode::Enter)), KeyAction::None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            KeyAction::None
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut ev = key(KeyCode::Esc);
        ev.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(ev), KeyAction::None);
    }

    #[test]
    fn test_resize_redraws() {
        assert_eq!(handle_event(Event::Resize(80, 24)), KeyAction::Redraw);
    }
}
