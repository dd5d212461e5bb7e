//! Core shortcut types: modifiers, keys, and the combined `Shortcut`.

use std::fmt;

/// A modifier key. Declaration order is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Cmd,
    Shift,
    Alt,
    Ctrl,
}

impl Modifier {
    pub const ALL: [Modifier; 4] = [Modifier::Cmd, Modifier::Shift, Modifier::Alt, Modifier::Ctrl];

    /// Resolve a case-insensitive modifier alias.
    pub fn from_alias(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "cmd" | "command" | "super" | "meta" => Some(Modifier::Cmd),
            "shift" => Some(Modifier::Shift),
            "alt" | "option" => Some(Modifier::Alt),
            "ctrl" | "control" => Some(Modifier::Ctrl),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Modifier::Cmd => "Cmd",
            Modifier::Shift => "Shift",
            Modifier::Alt => "Alt",
            Modifier::Ctrl => "Ctrl",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Modifier::Cmd => '\u{2318}',   // ⌘
            Modifier::Shift => '\u{21E7}', // ⇧
            Modifier::Alt => '\u{2325}',   // ⌥
            Modifier::Ctrl => '\u{2303}',  // ⌃
        }
    }

    fn bit(self) -> u8 {
        match self {
            Modifier::Cmd => 0b0001,
            Modifier::Shift => 0b0010,
            Modifier::Alt => 0b0100,
            Modifier::Ctrl => 0b1000,
        }
    }
}

/// Set of held modifiers. Iteration always yields canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub fn empty() -> Self {
        Self(0)
    }

    /// Build from raw modifier flags, as reported by a key event.
    pub fn from_flags(cmd: bool, shift: bool, alt: bool, ctrl: bool) -> Self {
        [cmd, shift, alt, ctrl]
            .into_iter()
            .zip(Modifier::ALL)
            .filter(|(held, _)| *held)
            .map(|(_, modifier)| modifier)
            .collect()
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        Modifier::ALL.into_iter().filter(|m| self.contains(*m))
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut mods = Self::empty();
        for m in iter {
            mods.insert(m);
        }
        mods
    }
}

/// The single non-modifier key of a shortcut. Closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Uppercase `'A'..='Z'`.
    Letter(char),
    /// `0..=9`.
    Digit(u8),
    /// `F1..=F12`.
    Function(u8),
    Minus,
    Equal,
    BracketLeft,
    BracketRight,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
    Backslash,
    Backquote,
    Space,
    Enter,
    Tab,
    Escape,
    Backspace,
}

impl Key {
    /// Resolve any accepted spelling of a key (case-insensitive).
    ///
    /// Letters accept `a` and `KeyA`, digits accept `3` and `Digit3`,
    /// punctuation accepts its glyph or its name.
    pub fn parse(token: &str) -> Option<Self> {
        let lower = token.to_lowercase();
        let key = match lower.as_str() {
            "space" => Key::Space,
            "enter" => Key::Enter,
            "tab" => Key::Tab,
            "escape" | "esc" => Key::Escape,
            "backspace" => Key::Backspace,
            "minus" | "-" => Key::Minus,
            "equal" | "equals" | "=" => Key::Equal,
            "bracketleft" | "lbracket" | "[" => Key::BracketLeft,
            "bracketright" | "rbracket" | "]" => Key::BracketRight,
            "semicolon" | ";" => Key::Semicolon,
            "quote" | "'" => Key::Quote,
            "comma" | "," => Key::Comma,
            "period" | "." => Key::Period,
            "slash" | "/" => Key::Slash,
            "backslash" | "intlbackslash" | "\\" => Key::Backslash,
            "backquote" | "grave" | "`" => Key::Backquote,
            other => return Self::parse_alphanumeric(other),
        };
        Some(key)
    }

    fn parse_alphanumeric(lower: &str) -> Option<Self> {
        let letter = lower.strip_prefix("key").unwrap_or(lower);
        if let [c] = letter.as_bytes() {
            if c.is_ascii_lowercase() {
                return Some(Key::Letter(c.to_ascii_uppercase() as char));
            }
        }

        let digit = lower.strip_prefix("digit").unwrap_or(lower);
        if let [c] = digit.as_bytes() {
            if c.is_ascii_digit() {
                return Some(Key::Digit(c - b'0'));
            }
        }

        let digits = lower.strip_prefix('f')?;
        let n: u8 = digits.parse().ok()?;
        // "f01" parses as 1 but is not a spelling we accept.
        if (1..=12).contains(&n) && digits == n.to_string() {
            return Some(Key::Function(n));
        }
        None
    }

    /// Canonical token as it appears in a normalized shortcut string.
    pub fn canonical(&self) -> String {
        match self {
            Key::Letter(c) => c.to_string(),
            Key::Digit(d) => d.to_string(),
            Key::Function(n) => format!("F{n}"),
            Key::Minus => "-".into(),
            Key::Equal => "=".into(),
            Key::BracketLeft => "[".into(),
            Key::BracketRight => "]".into(),
            Key::Semicolon => ";".into(),
            Key::Quote => "'".into(),
            Key::Comma => ",".into(),
            Key::Period => ".".into(),
            Key::Slash => "/".into(),
            Key::Backslash => "\\".into(),
            Key::Backquote => "`".into(),
            Key::Space => "Space".into(),
            Key::Enter => "Enter".into(),
            Key::Tab => "Tab".into(),
            Key::Escape => "Escape".into(),
            Key::Backspace => "Backspace".into(),
        }
    }
}

/// A keyboard accelerator: at least one modifier plus exactly one key.
///
/// Two shortcuts are equal exactly when their canonical strings are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in self.modifiers.iter() {
            write!(f, "{}+", modifier.name())?;
        }
        f.write_str(&self.key.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_aliases_are_case_insensitive() {
        assert_eq!(Modifier::from_alias("COMMAND"), Some(Modifier::Cmd));
        assert_eq!(Modifier::from_alias("Meta"), Some(Modifier::Cmd));
        assert_eq!(Modifier::from_alias("option"), Some(Modifier::Alt));
        assert_eq!(Modifier::from_alias("Control"), Some(Modifier::Ctrl));
        assert_eq!(Modifier::from_alias("hyper"), None);
    }

    #[test]
    fn modifiers_iterate_in_canonical_order() {
        let mods: Modifiers = [Modifier::Ctrl, Modifier::Cmd, Modifier::Alt].into_iter().collect();
        let order: Vec<_> = mods.iter().collect();
        assert_eq!(order, vec![Modifier::Cmd, Modifier::Alt, Modifier::Ctrl]);
    }

    #[test]
    fn flags_map_to_their_modifiers() {
        let mods = Modifiers::from_flags(false, true, false, true);
        assert!(mods.contains(Modifier::Shift) && mods.contains(Modifier::Ctrl));
        assert!(!mods.contains(Modifier::Cmd) && !mods.contains(Modifier::Alt));
        assert!(Modifiers::from_flags(false, false, false, false).is_empty());
    }

    #[test]
    fn key_spellings() {
        assert_eq!(Key::parse("a"), Some(Key::Letter('A')));
        assert_eq!(Key::parse("KeyZ"), Some(Key::Letter('Z')));
        assert_eq!(Key::parse("Digit7"), Some(Key::Digit(7)));
        assert_eq!(Key::parse("0"), Some(Key::Digit(0)));
        assert_eq!(Key::parse("f12"), Some(Key::Function(12)));
        assert_eq!(Key::parse("F13"), None);
        assert_eq!(Key::parse("f01"), None);
        assert_eq!(Key::parse("esc"), Some(Key::Escape));
        assert_eq!(Key::parse("IntlBackslash"), Some(Key::Backslash));
        assert_eq!(Key::parse("grave"), Some(Key::Backquote));
        assert_eq!(Key::parse("keyab"), None);
        assert_eq!(Key::parse("é"), None);
    }

    #[test]
    fn display_is_canonical() {
        let shortcut = Shortcut {
            modifiers: Modifiers::from_flags(true, true, false, false),
            key: Key::Equal,
        };
        assert_eq!(shortcut.to_string(), "Cmd+Shift+=");
    }
}
