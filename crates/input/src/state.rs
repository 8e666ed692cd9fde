use std::collections::BTreeSet;

use crate::action::Action;

/// Read-only view of which actions are currently held.
pub trait InputSource {
    fn is_active(&self, action: Action) -> bool;
}

/// Host-maintained set of held actions.
///
/// BTreeSet keeps iteration order stable for logging and scripted replays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    active: BTreeSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.active.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.active.remove(&action);
    }

    /// Press by key code. Returns false for unbound keys.
    pub fn press_key(&mut self, code: &str) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.press(action);
                true
            }
            None => {
                tracing::trace!(code, "ignoring unbound key press");
                false
            }
        }
    }

    /// Release by key code. Returns false for unbound keys.
    pub fn release_key(&mut self, code: &str) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.release(action);
                true
            }
            None => {
                tracing::trace!(code, "ignoring unbound key release");
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn active(&self) -> impl Iterator<Item = Action> + '_ {
        self.active.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl InputSource for InputState {
    fn is_active(&self, action: Action) -> bool {
        self.active.contains(&action)
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn is_active(&self, action: Action) -> bool {
        (**self).is_active(action)
    }
}
