//! Key mapping from terminal events to keypad keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key on the scoring keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKey {
    Digit(u8),
    Double,
    Triple,
    Bull,
    Miss,
    Enter,
    Backspace,
    Escape,
    NextRound,
    RetryRound,
    Restart,
}

/// Map keyboard input to keypad keys.
pub fn handle_key_event(key: KeyEvent) -> Option<PadKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char(c @ '0'..='9') => Some(PadKey::Digit(c as u8 - b'0')),

        // Multipliers
        KeyCode::Char('d') | KeyCode::Char('D') => Some(PadKey::Double),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(PadKey::Triple),

        // Special segments
        KeyCode::Char('b') | KeyCode::Char('B') => Some(PadKey::Bull),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(PadKey::Miss),

        // Entry editing
        KeyCode::Enter => Some(PadKey::Enter),
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(PadKey::Backspace)
        }
        KeyCode::Esc => Some(PadKey::Escape),

        // Round control
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char(' ') => Some(PadKey::NextRound),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PadKey::RetryRound),
        KeyCode::F(5) => Some(PadKey::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        for d in 0..=9u8 {
            let ch = (b'0' + d) as char;
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(ch))),
                Some(PadKey::Digit(d))
            );
        }
    }

    #[test]
    fn test_multiplier_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(PadKey::Double)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('T'))),
            Some(PadKey::Triple)
        );
    }

    #[test]
    fn test_segment_and_editing_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('b'))),
            Some(PadKey::Bull)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('M'))),
            Some(PadKey::Miss)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(PadKey::Backspace)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(PadKey::Escape)
        );
    }

    #[test]
    fn test_round_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(PadKey::NextRound)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(PadKey::RetryRound)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::F(5))),
            Some(PadKey::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_control_chords_ignored() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
