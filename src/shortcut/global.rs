//! Bridge to the global shortcut plugin's key types.

use tauri_plugin_global_shortcut::{Code, Modifiers as GlobalModifiers, Shortcut as GlobalShortcut};

use super::types::{Key, Modifier, Shortcut};

impl From<&Shortcut> for GlobalShortcut {
    fn from(shortcut: &Shortcut) -> Self {
        let mut mods = GlobalModifiers::empty();
        for modifier in shortcut.modifiers.iter() {
            mods |= match modifier {
                Modifier::Cmd => GlobalModifiers::SUPER,
                Modifier::Shift => GlobalModifiers::SHIFT,
                Modifier::Alt => GlobalModifiers::ALT,
                Modifier::Ctrl => GlobalModifiers::CONTROL,
            };
        }
        GlobalShortcut::new(Some(mods), key_code(shortcut.key))
    }
}

fn key_code(key: Key) -> Code {
    match key {
        Key::Letter(c) => letter_code(c),
        Key::Digit(d) => digit_code(d),
        Key::Function(n) => function_code(n),
        Key::Minus => Code::Minus,
        Key::Equal => Code::Equal,
        Key::BracketLeft => Code::BracketLeft,
        Key::BracketRight => Code::BracketRight,
        Key::Semicolon => Code::Semicolon,
        Key::Quote => Code::Quote,
        Key::Comma => Code::Comma,
        Key::Period => Code::Period,
        Key::Slash => Code::Slash,
        Key::Backslash => Code::Backslash,
        Key::Backquote => Code::Backquote,
        Key::Space => Code::Space,
        Key::Enter => Code::Enter,
        Key::Tab => Code::Tab,
        Key::Escape => Code::Escape,
        Key::Backspace => Code::Backspace,
    }
}

fn letter_code(c: char) -> Code {
    const LETTERS: [Code; 26] = [
        Code::KeyA, Code::KeyB, Code::KeyC, Code::KeyD, Code::KeyE, Code::KeyF, Code::KeyG,
        Code::KeyH, Code::KeyI, Code::KeyJ, Code::KeyK, Code::KeyL, Code::KeyM, Code::KeyN,
        Code::KeyO, Code::KeyP, Code::KeyQ, Code::KeyR, Code::KeyS, Code::KeyT, Code::KeyU,
        Code::KeyV, Code::KeyW, Code::KeyX, Code::KeyY, Code::KeyZ,
    ];
    let idx = (c as u8).saturating_sub(b'A') as usize;
    LETTERS[idx.min(25)]
}

fn digit_code(d: u8) -> Code {
    const DIGITS: [Code; 10] = [
        Code::Digit0, Code::Digit1, Code::Digit2, Code::Digit3, Code::Digit4,
        Code::Digit5, Code::Digit6, Code::Digit7, Code::Digit8, Code::Digit9,
    ];
    DIGITS[(d as usize).min(9)]
}

fn function_code(n: u8) -> Code {
    const FUNCTION_KEYS: [Code; 12] = [
        Code::F1, Code::F2, Code::F3, Code::F4, Code::F5, Code::F6,
        Code::F7, Code::F8, Code::F9, Code::F10, Code::F11, Code::F12,
    ];
    FUNCTION_KEYS[(n as usize).clamp(1, 12) - 1]
}
