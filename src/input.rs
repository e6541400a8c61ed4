//! Keyboard mapping
//!
//! Browser `KeyboardEvent.key` values are mapped to game actions here so the
//! mapping can be tested without a DOM.

use crate::sim::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    TogglePause,
    ToggleMute,
    Restart,
    None,
}

impl KeyAction {
    pub fn from_key(key: &str) -> Self {
        if let Some(direction) = direction_for_key(key) {
            return KeyAction::Move(direction);
        }

        match key {
            "p" | "P" | "Escape" | " " => KeyAction::TogglePause,
            "m" | "M" => KeyAction::ToggleMute,
            "r" | "R" | "Enter" => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }

    /// Keys the game handles should not also scroll or submit the page
    pub fn prevents_default(&self) -> bool {
        *self != KeyAction::None
    }
}

/// Arrow keys and WASD
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Which direction keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    down: [bool; 4],
}

impl KeyState {
    pub fn set(&mut self, direction: Direction, down: bool) {
        self.down[direction.index()] = down;
    }

    pub fn is_down(&self, direction: Direction) -> bool {
        self.down[direction.index()]
    }

    /// Record a key event; returns the direction when the key is a direction key
    pub fn track(&mut self, key: &str, down: bool) -> Option<Direction> {
        let direction = direction_for_key(key)?;
        self.set(direction, down);
        Some(direction)
    }

    pub fn release_all(&mut self) {
        self.down = [false; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(KeyAction::from_key("ArrowUp"), KeyAction::Move(Direction::Up));
        assert_eq!(KeyAction::from_key("ArrowDown"), KeyAction::Move(Direction::Down));
        assert_eq!(KeyAction::from_key("ArrowLeft"), KeyAction::Move(Direction::Left));
        assert_eq!(KeyAction::from_key("ArrowRight"), KeyAction::Move(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(KeyAction::from_key("w"), KeyAction::Move(Direction::Up));
        assert_eq!(KeyAction::from_key("S"), KeyAction::Move(Direction::Down));
        assert_eq!(KeyAction::from_key("a"), KeyAction::Move(Direction::Left));
        assert_eq!(KeyAction::from_key("D"), KeyAction::Move(Direction::Right));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(KeyAction::from_key("Escape"), KeyAction::TogglePause);
        assert_eq!(KeyAction::from_key("p"), KeyAction::TogglePause);
        assert_eq!(KeyAction::from_key("m"), KeyAction::ToggleMute);
        assert_eq!(KeyAction::from_key("Enter"), KeyAction::Restart);
        assert_eq!(KeyAction::from_key("x"), KeyAction::None);
    }

    #[test]
    fn test_bound_keys_suppress_browser_default() {
        for key in ["ArrowDown", " ", "Escape", "m", "Enter"] {
            assert!(KeyAction::from_key(key).prevents_default(), "{key:?}");
        }
        assert!(!KeyAction::from_key("Tab").prevents_default());
        assert!(!KeyAction::from_key("F5").prevents_default());
    }

    #[test]
    fn test_key_state_tracking() {
        let mut keys = KeyState::default();
        assert_eq!(keys.track("ArrowLeft", true), Some(Direction::Left));
        assert!(keys.is_down(Direction::Left));
        assert!(!keys.is_down(Direction::Right));
        assert_eq!(keys.track("q", true), None);

        keys.track("ArrowLeft", false);
        assert!(!keys.is_down(Direction::Left));

        keys.set(Direction::Up, true);
        keys.release_all();
        assert!(!keys.is_down(Direction::Up));
    }
}
