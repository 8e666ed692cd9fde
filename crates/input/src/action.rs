use serde::{Deserialize, Serialize};
use std::fmt;

/// A player action the simulation understands.
///
/// The kernel consumes actions, never raw key events, so any host (browser,
/// window, headless script) drives the same world logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::Fire,
    ];

    /// Default binding from a DOM-style key code (`KeyA`, `Space`, ...).
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyA" | "ArrowLeft" => Some(Action::MoveLeft),
            "KeyD" | "ArrowRight" => Some(Action::MoveRight),
            "KeyW" | "ArrowUp" => Some(Action::MoveUp),
            "KeyS" | "ArrowDown" => Some(Action::MoveDown),
            "Space" => Some(Action::Fire),
            _ => None,
        }
    }

    /// Primary key code bound to this action.
    pub fn key_code(&self) -> &'static str {
        match self {
            Action::MoveLeft => "KeyA",
            Action::MoveRight => "KeyD",
            Action::MoveUp => "KeyW",
            Action::MoveDown => "KeyS",
            Action::Fire => "Space",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_space_are_bound() {
        assert_eq!(Action::from_key_code("KeyA"), Some(Action::MoveLeft));
        assert_eq!(Action::from_key_code("KeyD"), Some(Action::MoveRight));
        assert_eq!(Action::from_key_code("KeyW"), Some(Action::MoveUp));
        assert_eq!(Action::from_key_code("KeyS"), Some(Action::MoveDown));
        assert_eq!(Action::from_key_code("Space"), Some(Action::Fire));
    }

    #[test]
    fn arrows_alias_movement() {
        assert_eq!(Action::from_key_code("ArrowLeft"), Some(Action::MoveLeft));
        assert_eq!(Action::from_key_code("ArrowUp"), Some(Action::MoveUp));
    }

    #[test]
    fn unbound_key_is_none() {
        assert_eq!(Action::from_key_code("KeyQ"), None);
        assert_eq!(Action::from_key_code(""), None);
    }

    #[test]
    fn primary_binding_maps_back() {
        for action in Action::ALL {
            assert_eq!(Action::from_key_code(action.key_code()), Some(action));
        }
    }
}
