use super::error::ShortcutError;
use super::types::{Key, Modifier, Modifiers, Shortcut};

/// Parses free-form accelerator text like `"shift+cmd+3"` or
/// `"Command+Option+KeyK"` into a [`Shortcut`].
///
/// Tokens are split on `+` and trimmed. Modifiers may repeat and appear in
/// any order; exactly one key token is allowed.
pub fn parse_shortcut(raw: &str) -> Result<Shortcut, ShortcutError> {
    let tokens: Vec<&str> = raw.split('+').map(str::trim).collect();
    if tokens.len() < 2 {
        return Err(ShortcutError::TooFewTokens);
    }

    let mut modifiers = Modifiers::empty();
    let mut key: Option<Key> = None;

    for token in tokens {
        if token.is_empty() {
            return Err(ShortcutError::EmptyToken);
        }

        if let Some(modifier) = Modifier::from_alias(token) {
            modifiers.insert(modifier);
            continue;
        }

        if key.is_some() {
            return Err(ShortcutError::MultipleKeys);
        }
        key = Some(Key::parse(token).ok_or_else(|| ShortcutError::UnknownKey(token.to_string()))?);
    }

    let key = key.ok_or(ShortcutError::MissingKey)?;
    if modifiers.is_empty() {
        return Err(ShortcutError::MissingModifier);
    }

    Ok(Shortcut { modifiers, key })
}

/// Canonical string form: modifiers as `Cmd+Shift+Alt+Ctrl`, key last.
pub fn normalize(raw: &str) -> Result<String, ShortcutError> {
    parse_shortcut(raw).map(|s| s.to_string())
}

impl std::str::FromStr for Shortcut {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_shortcut(s)
    }
}
