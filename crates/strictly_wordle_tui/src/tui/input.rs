//! Key event translation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the game, before the current dialog is
/// taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A letter typed into the entry line.
    Letter(char),
    /// Remove the last letter.
    Erase,
    /// Enter: submit, acknowledge, or answer yes.
    Confirm,
    /// Esc: clear the entry, dismiss, or answer no.
    Cancel,
    /// Ctrl+C: leave immediately.
    Interrupt,
}

/// Translates a key event, ignoring releases and unbound keys.
pub fn translate(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Interrupt)
        }
        KeyCode::Char(c) if c.is_alphabetic() => Some(Command::Letter(c)),
        KeyCode::Backspace => Some(Command::Erase),
        KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_controls() {
        assert_eq!(translate(KeyCode::Char('a').into()), Some(Command::Letter('a')));
        assert_eq!(translate(KeyCode::Enter.into()), Some(Command::Confirm));
        assert_eq!(translate(KeyCode::Esc.into()), Some(Command::Cancel));
        assert_eq!(translate(KeyCode::Backspace.into()), Some(Command::Erase));
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(key), Some(Command::Interrupt));
    }

    #[test]
    fn test_digits_and_releases_ignored() {
        assert_eq!(translate(KeyCode::Char('7').into()), None);
        assert_eq!(translate(KeyCode::Tab.into()), None);

        let mut release = KeyEvent::from(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(release), None);
    }
}
