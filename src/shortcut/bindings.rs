//! The three app actions and the shortcuts bound to them.

use super::error::ShortcutError;
use super::parse::parse_shortcut;
use super::types::{Key, Modifiers, Shortcut};

pub const DEFAULT_FULLSCREEN_SHORTCUT: &str = "Cmd+Shift+3";
pub const DEFAULT_AREA_SHORTCUT: &str = "Cmd+Shift+4";
pub const DEFAULT_STITCH_SHORTCUT: &str = "Cmd+Shift+2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Fullscreen,
    Area,
    Stitch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutBindings {
    pub fullscreen: Shortcut,
    pub area: Shortcut,
    pub stitch: Shortcut,
}

/// Result of resolving stored shortcut strings at startup.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub bindings: ShortcutBindings,
    /// True when any stored string differs from its canonical replacement.
    pub changed: bool,
}

impl Default for ShortcutBindings {
    fn default() -> Self {
        Self {
            fullscreen: cmd_shift_digit(3),
            area: cmd_shift_digit(4),
            stitch: cmd_shift_digit(2),
        }
    }
}

fn cmd_shift_digit(d: u8) -> Shortcut {
    Shortcut {
        modifiers: Modifiers::from_flags(true, true, false, false),
        key: Key::Digit(d),
    }
}

impl ShortcutBindings {
    /// Parse all three, rejecting invalid text or any repeated shortcut.
    pub fn parse(fullscreen: &str, area: &str, stitch: &str) -> Result<Self, ShortcutError> {
        let bindings = Self {
            fullscreen: parse_shortcut(fullscreen)?,
            area: parse_shortcut(area)?,
            stitch: parse_shortcut(stitch)?,
        };
        bindings.ensure_distinct()?;
        Ok(bindings)
    }

    /// Startup migration for persisted strings: invalid entries fall back to
    /// their defaults, and a collision resets all three.
    pub fn resolve_or_default(fullscreen: &str, area: &str, stitch: &str) -> Resolved {
        let defaults = Self::default();
        let mut changed = false;

        let mut resolve = |raw: &str, fallback: Shortcut, label: &str| match parse_shortcut(raw) {
            Ok(shortcut) => {
                changed |= shortcut.to_string() != raw;
                shortcut
            }
            Err(e) => {
                log::warn!("[shortcut] stored {} shortcut '{}' is invalid: {}", label, raw, e);
                changed = true;
                fallback
            }
        };

        let bindings = Self {
            fullscreen: resolve(fullscreen, defaults.fullscreen, "fullscreen"),
            area: resolve(area, defaults.area, "area"),
            stitch: resolve(stitch, defaults.stitch, "stitch"),
        };

        if let Err(e) = bindings.ensure_distinct() {
            log::warn!("[shortcut] {}; restoring defaults", e);
            return Resolved { bindings: defaults, changed: true };
        }

        Resolved { bindings, changed }
    }

    pub fn ensure_distinct(&self) -> Result<(), ShortcutError> {
        let pairs = [
            (self.fullscreen, self.area),
            (self.fullscreen, self.stitch),
            (self.area, self.stitch),
        ];
        match pairs.iter().find(|(a, b)| a == b) {
            Some((dup, _)) => Err(ShortcutError::Duplicate(dup.to_string())),
            None => Ok(()),
        }
    }

    pub fn action_for(&self, pressed: &Shortcut) -> Option<ShortcutAction> {
        if *pressed == self.area {
            Some(ShortcutAction::Area)
        } else if *pressed == self.fullscreen {
            Some(ShortcutAction::Fullscreen)
        } else if *pressed == self.stitch {
            Some(ShortcutAction::Stitch)
        } else {
            None
        }
    }

    pub fn all(&self) -> [Shortcut; 3] {
        [self.fullscreen, self.area, self.stitch]
    }
}

/// Validate a candidate from the recording popup against another binding.
///
/// Returns the candidate's canonical string.
pub fn check_distinct(candidate: &str, other: &str) -> Result<String, ShortcutError> {
    let candidate = parse_shortcut(candidate)?;
    if let Ok(other) = parse_shortcut(other) {
        if other == candidate {
            return Err(ShortcutError::Duplicate(candidate.to_string()));
        }
    }
    Ok(candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_their_strings() {
        let defaults = ShortcutBindings::default();
        assert_eq!(defaults.fullscreen.to_string(), DEFAULT_FULLSCREEN_SHORTCUT);
        assert_eq!(defaults.area.to_string(), DEFAULT_AREA_SHORTCUT);
        assert_eq!(defaults.stitch.to_string(), DEFAULT_STITCH_SHORTCUT);
    }

    #[test]
    fn parse_rejects_duplicates() {
        let err = ShortcutBindings::parse("cmd+shift+3", "Shift+Cmd+Digit3", "cmd+shift+2").unwrap_err();
        assert_eq!(err, ShortcutError::Duplicate("Cmd+Shift+3".into()));
        assert!(!err.is_invalid_format());
    }

    #[test]
    fn parse_surfaces_format_errors() {
        let err = ShortcutBindings::parse("cmd+shift+3", "shift", "cmd+shift+2").unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn resolve_keeps_valid_and_reports_rewrites() {
        let resolved = ShortcutBindings::resolve_or_default("shift+cmd+3", "Cmd+Shift+4", "Cmd+Shift+2");
        assert!(resolved.changed);
        assert_eq!(resolved.bindings.fullscreen.to_string(), "Cmd+Shift+3");

        let clean = ShortcutBindings::resolve_or_default("Cmd+Shift+3", "Cmd+Shift+4", "Cmd+Shift+2");
        assert!(!clean.changed);
    }

    #[test]
    fn resolve_replaces_invalid_entry_only() {
        let resolved = ShortcutBindings::resolve_or_default("Cmd+Alt+9", "garbage", "Cmd+Shift+2");
        assert!(resolved.changed);
        assert_eq!(resolved.bindings.fullscreen.to_string(), "Cmd+Alt+9");
        assert_eq!(resolved.bindings.area.to_string(), DEFAULT_AREA_SHORTCUT);
    }

    #[test]
    fn resolve_resets_all_on_collision() {
        let resolved = ShortcutBindings::resolve_or_default("Cmd+K", "cmd+k", "Cmd+J");
        assert!(resolved.changed);
        assert_eq!(resolved.bindings, ShortcutBindings::default());
    }

    #[test]
    fn action_lookup() {
        let bindings = ShortcutBindings::default();
        let pressed: Shortcut = "Cmd+Shift+2".parse().unwrap();
        assert_eq!(bindings.action_for(&pressed), Some(ShortcutAction::Stitch));
        let other: Shortcut = "Cmd+Shift+9".parse().unwrap();
        assert_eq!(bindings.action_for(&other), None);
    }

    #[test]
    fn check_distinct_against_other() {
        assert_eq!(check_distinct("shift+cmd+5", "Cmd+Shift+4").unwrap(), "Cmd+Shift+5");
        assert!(matches!(
            check_distinct("cmd+shift+4", "Cmd+Shift+4"),
            Err(ShortcutError::Duplicate(_))
        ));
        // A malformed "other" cannot collide with anything.
        assert!(check_distinct("cmd+shift+4", "???").is_ok());
    }
}
