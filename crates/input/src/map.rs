//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a raw key identifier to a game action (case-insensitive).
///
/// Accepts single letters (`"a"`, `"W"`) as well as named keys such as
/// `"ArrowLeft"`, `"left"`, `"Enter"` or `"space"`.
///
/// # Examples
///
/// ```
/// use blocktris_input::map_key_name;
/// use blocktris_types::GameAction;
///
/// assert_eq!(map_key_name("A"), Some(GameAction::MoveLeft));
/// assert_eq!(map_key_name("arrowUp"), Some(GameAction::RotateCw));
/// assert_eq!(map_key_name("x"), None);
/// ```
pub fn map_key_name(name: &str) -> Option<GameAction> {
    match name.to_lowercase().as_str() {
        "a" | "left" | "arrowleft" => Some(GameAction::MoveLeft),
        "d" | "right" | "arrowright" => Some(GameAction::MoveRight),
        "s" | "down" | "arrowdown" => Some(GameAction::SoftDrop),
        "w" | "up" | "arrowup" => Some(GameAction::RotateCw),
        "enter" | "return" | "space" | " " => Some(GameAction::Start),
        "r" => Some(GameAction::Restart),
        _ => None,
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::RotateCw),
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char(c) => {
            let mut buf = [0u8; 4];
            map_key_name(c.encode_utf8(&mut buf))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::RotateCw)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::RotateCw)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameAction::RotateCw)
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_key_names_are_case_insensitive() {
        for (lower, upper) in [("a", "A"), ("d", "D"), ("s", "S"), ("w", "W")] {
            assert!(map_key_name(lower).is_some());
            assert_eq!(map_key_name(lower), map_key_name(upper));
        }
        assert_eq!(map_key_name("ArrowRight"), Some(GameAction::MoveRight));
        assert_eq!(map_key_name("ARROWDOWN"), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
