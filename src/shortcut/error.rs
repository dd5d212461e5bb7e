/// Why a shortcut was rejected.
///
/// Everything except `Duplicate` is an invalid-format error; `Duplicate` is
/// only produced by binding-level checks, never by parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    #[error("Shortcut must have at least one modifier and one key")]
    TooFewTokens,

    #[error("Shortcut contains an empty token")]
    EmptyToken,

    #[error("Shortcut must have only one main key")]
    MultipleKeys,

    #[error("No key specified in shortcut")]
    MissingKey,

    #[error("At least one modifier required")]
    MissingModifier,

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Shortcuts must be different ({0} is used twice)")]
    Duplicate(String),
}

impl ShortcutError {
    pub fn is_invalid_format(&self) -> bool {
        !matches!(self, ShortcutError::Duplicate(_))
    }
}
