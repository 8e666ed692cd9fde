//! Scripted input timelines for headless runs.
//!
//! Format: `;`-separated entries of `<frame>:<key>[,<key>...]`. A key
//! prefixed with `-` is released, otherwise pressed. Example:
//! `0:KeyD,Space;30:-KeyD`.

use std::collections::BTreeMap;

use anyhow::{Context, bail};
use starblaster_input::InputState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChange {
    pub code: String,
    pub pressed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    changes: BTreeMap<u64, Vec<KeyChange>>,
}

impl InputScript {
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let mut changes: BTreeMap<u64, Vec<KeyChange>> = BTreeMap::new();
        for entry in source.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((frame, keys)) = entry.split_once(':') else {
                bail!("script entry `{entry}` is missing `:`");
            };
            let frame: u64 = frame
                .trim()
                .parse()
                .with_context(|| format!("bad frame number in `{entry}`"))?;
            for key in keys.split(',').map(str::trim).filter(|k| !k.is_empty()) {
                let change = match key.strip_prefix('-') {
                    Some(code) => KeyChange {
                        code: code.to_string(),
                        pressed: false,
                    },
                    None => KeyChange {
                        code: key.to_string(),
                        pressed: true,
                    },
                };
                changes.entry(frame).or_default().push(change);
            }
        }
        Ok(Self { changes })
    }

    /// Apply the changes scheduled for `frame`.
    pub fn apply(&self, frame: u64, input: &mut InputState) {
        let Some(changes) = self.changes.get(&frame) else {
            return;
        };
        for change in changes {
            let bound = if change.pressed {
                input.press_key(&change.code)
            } else {
                input.release_key(&change.code)
            };
            if !bound {
                tracing::warn!(code = %change.code, frame, "script uses an unbound key");
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starblaster_input::{Action, InputSource};

    #[test]
    fn parses_press_and_release() {
        let script = InputScript::parse("0:KeyD,Space; 30:-KeyD").unwrap();
        let mut input = InputState::new();
        script.apply(0, &mut input);
        assert!(input.is_active(Action::MoveRight));
        assert!(input.is_active(Action::Fire));
        script.apply(15, &mut input);
        assert!(input.is_active(Action::MoveRight));
        script.apply(30, &mut input);
        assert!(!input.is_active(Action::MoveRight));
        assert!(input.is_active(Action::Fire));
    }

    #[test]
    fn empty_script_is_allowed() {
        assert!(InputScript::parse("").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(InputScript::parse("KeyD").is_err());
        assert!(InputScript::parse("x:KeyD").is_err());
    }
}
