//! Shortcut codec: free-form accelerator text to canonical form and back.
//!
//! Pure and host-independent. The settings panel, the recording popup and
//! the tray all go through here; only `global` touches the OS plugin.

mod bindings;
mod display;
mod error;
#[cfg(feature = "desktop")]
mod global;
mod parse;
mod record;
mod types;

pub use bindings::{
    check_distinct, Resolved, ShortcutAction, ShortcutBindings, DEFAULT_AREA_SHORTCUT,
    DEFAULT_FULLSCREEN_SHORTCUT, DEFAULT_STITCH_SHORTCUT,
};
pub use display::format_for_display;
pub use error::ShortcutError;
pub use parse::{normalize, parse_shortcut};
pub use record::{record, KeyEvent, RecordOutcome};
pub use types::{Key, Modifier, Modifiers, Shortcut};
