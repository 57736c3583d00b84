use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Composer gestures
    Enter { shift: bool },
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    QuickAction(usize), // F1..F9, zero-based

    // Host controls
    OpenFilePicker, // Ctrl+O
    ToggleDisabled, // Ctrl+D
    ScrollUp,
    ScrollDown,
    Escape,
    ForceQuit, // Ctrl+C
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO).ok().flatten()
}

/// Map a raw crossterm event onto a `TuiEvent`.
pub fn translate(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => {
            // Keyboard enhancement reports releases too; only presses count
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            let shift = key_event.modifiers.contains(KeyModifiers::SHIFT);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('o')) => Some(TuiEvent::OpenFilePicker),
                (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(TuiEvent::ToggleDisabled),
                // Ctrl+J is what many terminals send for Ctrl+Enter
                (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::Enter { shift: false }),
                (_, KeyCode::Enter) => Some(TuiEvent::Enter { shift }),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
                (_, KeyCode::F(n @ 1..=9)) => Some(TuiEvent::QuickAction(usize::from(n - 1))),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn enter_reports_shift() {
        assert_eq!(
            translate(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(TuiEvent::Enter { shift: false })
        );
        assert_eq!(
            translate(key(KeyCode::Enter, KeyModifiers::SHIFT)),
            Some(TuiEvent::Enter { shift: true })
        );
    }

    #[test]
    fn other_modifiers_on_enter_are_not_shift() {
        assert_eq!(
            translate(key(KeyCode::Enter, KeyModifiers::ALT)),
            Some(TuiEvent::Enter { shift: false })
        );
    }

    #[test]
    fn function_keys_map_to_quick_actions() {
        assert_eq!(
            translate(key(KeyCode::F(1), KeyModifiers::NONE)),
            Some(TuiEvent::QuickAction(0))
        );
        assert_eq!(translate(key(KeyCode::F(12), KeyModifiers::NONE)), None);
    }

    #[test]
    fn control_shortcuts() {
        assert_eq!(
            translate(key(KeyCode::Char('o'), KeyModifiers::CONTROL)),
            Some(TuiEvent::OpenFilePicker)
        );
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn paste_is_preserved() {
        assert_eq!(
            translate(Event::Paste("a\nb".to_string())),
            Some(TuiEvent::Paste("a\nb".to_string()))
        );
    }
}
