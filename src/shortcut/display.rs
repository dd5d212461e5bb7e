use super::parse::parse_shortcut;

/// Renders a shortcut as a compact glyph sequence, e.g. `"Cmd+Shift+3"`
/// becomes `"⌘⇧3"`.
///
/// Never fails: text that does not parse is rendered from the raw string so
/// malformed persisted settings still show something.
pub fn format_for_display(raw: &str) -> String {
    let canonical = match parse_shortcut(raw) {
        Ok(shortcut) => shortcut.to_string(),
        Err(e) => {
            log::debug!("[shortcut] displaying unparsed '{}': {}", raw, e);
            raw.to_string()
        }
    };

    canonical
        .replace("Cmd", "\u{2318}")
        .replace("Shift", "\u{21E7}")
        .replace("Alt", "\u{2325}")
        .replace("Ctrl", "\u{2303}")
        .replace('+', "")
}
