//! Key bindings.

use crate::session::Command;
use crossterm::event::KeyCode;
use proset_cards::SlotIndex;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward a command to the session.
    Session(Command),
    /// Leave the game.
    Quit,
}

/// Maps a key to an action. Unbound keys yield `None`.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Session(Command::Restart)),
        KeyCode::Char('s') => Some(Action::Session(Command::Solve)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Session(Command::Submit)),
        KeyCode::Char(c) => {
            // Slots are numbered from 1 on screen.
            let digit = c.to_digit(10)? as usize;
            let index = SlotIndex::new(digit.checked_sub(1)?)?;
            Some(Action::Session(Command::Toggle(index)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_toggle_one_based_slots() {
        assert_eq!(
            action_for_key(KeyCode::Char('1')),
            SlotIndex::new(0).map(|i| Action::Session(Command::Toggle(i)))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('7')),
            SlotIndex::new(6).map(|i| Action::Session(Command::Toggle(i)))
        );
        assert_eq!(action_for_key(KeyCode::Char('0')), None);
        assert_eq!(action_for_key(KeyCode::Char('8')), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(action_for_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(
            action_for_key(KeyCode::Enter),
            Some(Action::Session(Command::Submit))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('s')),
            Some(Action::Session(Command::Solve))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('r')),
            Some(Action::Session(Command::Restart))
        );
        assert_eq!(action_for_key(KeyCode::Tab), None);
    }
}
