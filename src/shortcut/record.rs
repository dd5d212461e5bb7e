//! Shortcut recording from live key events.
//!
//! The shortcut-config popup forwards each `keydown` as a [`KeyEvent`] and
//! shows the outcome: held modifiers while the user is still pressing them,
//! the finished shortcut once a real key lands, or the rejection reason.

use serde::Deserialize;

use super::error::ShortcutError;
use super::types::{Key, Modifiers, Shortcut};

/// A raw keydown as reported by the webview (`KeyboardEvent.code` plus
/// modifier flags).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    pub code: String,
    #[serde(default)]
    pub meta_key: bool,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub alt_key: bool,
    #[serde(default)]
    pub ctrl_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Only modifier keys are down so far.
    Pending(Modifiers),
    Complete(Shortcut),
    Rejected(ShortcutError),
}

const MODIFIER_CODES: &[&str] = &[
    "MetaLeft",
    "MetaRight",
    "OSLeft",
    "OSRight",
    "ShiftLeft",
    "ShiftRight",
    "AltLeft",
    "AltRight",
    "ControlLeft",
    "ControlRight",
];

pub fn record(event: &KeyEvent) -> RecordOutcome {
    let modifiers =
        Modifiers::from_flags(event.meta_key, event.shift_key, event.alt_key, event.ctrl_key);

    if MODIFIER_CODES.contains(&event.code.as_str()) {
        return RecordOutcome::Pending(modifiers);
    }

    let Some(key) = Key::parse(&event.code) else {
        return RecordOutcome::Rejected(ShortcutError::UnknownKey(event.code.clone()));
    };

    if modifiers.is_empty() {
        return RecordOutcome::Rejected(ShortcutError::MissingModifier);
    }

    RecordOutcome::Complete(Shortcut { modifiers, key })
}
