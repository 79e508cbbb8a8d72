//! Human-readable names for bindable keys and buttons
//!
//! Used by the TOML config so bindings read as `toggle = ["F12"]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use winit::keyboard::KeyCode;

/// Keys that may be bound to menu controls
const KEY_NAMES: &[(KeyCode, &str)] = &[
    // Letters
    (KeyCode::KeyA, "A"),
    (KeyCode::KeyB, "B"),
    (KeyCode::KeyC, "C"),
    (KeyCode::KeyD, "D"),
    (KeyCode::KeyE, "E"),
    (KeyCode::KeyF, "F"),
    (KeyCode::KeyG, "G"),
    (KeyCode::KeyH, "H"),
    (KeyCode::KeyI, "I"),
    (KeyCode::KeyJ, "J"),
    (KeyCode::KeyK, "K"),
    (KeyCode::KeyL, "L"),
    (KeyCode::KeyM, "M"),
    (KeyCode::KeyN, "N"),
    (KeyCode::KeyO, "O"),
    (KeyCode::KeyP, "P"),
    (KeyCode::KeyQ, "Q"),
    (KeyCode::KeyR, "R"),
    (KeyCode::KeyS, "S"),
    (KeyCode::KeyT, "T"),
    (KeyCode::KeyU, "U"),
    (KeyCode::KeyV, "V"),
    (KeyCode::KeyW, "W"),
    (KeyCode::KeyX, "X"),
    (KeyCode::KeyY, "Y"),
    (KeyCode::KeyZ, "Z"),
    // Numbers
    (KeyCode::Digit0, "0"),
    (KeyCode::Digit1, "1"),
    (KeyCode::Digit2, "2"),
    (KeyCode::Digit3, "3"),
    (KeyCode::Digit4, "4"),
    (KeyCode::Digit5, "5"),
    (KeyCode::Digit6, "6"),
    (KeyCode::Digit7, "7"),
    (KeyCode::Digit8, "8"),
    (KeyCode::Digit9, "9"),
    // Arrows
    (KeyCode::ArrowUp, "ArrowUp"),
    (KeyCode::ArrowDown, "ArrowDown"),
    (KeyCode::ArrowLeft, "ArrowLeft"),
    (KeyCode::ArrowRight, "ArrowRight"),
    // Function keys
    (KeyCode::F1, "F1"),
    (KeyCode::F2, "F2"),
    (KeyCode::F3, "F3"),
    (KeyCode::F4, "F4"),
    (KeyCode::F5, "F5"),
    (KeyCode::F6, "F6"),
    (KeyCode::F7, "F7"),
    (KeyCode::F8, "F8"),
    (KeyCode::F9, "F9"),
    (KeyCode::F10, "F10"),
    (KeyCode::F11, "F11"),
    (KeyCode::F12, "F12"),
    // Modifiers and locks
    (KeyCode::ShiftLeft, "ShiftLeft"),
    (KeyCode::ShiftRight, "ShiftRight"),
    (KeyCode::ControlLeft, "ControlLeft"),
    (KeyCode::ControlRight, "ControlRight"),
    (KeyCode::AltLeft, "AltLeft"),
    (KeyCode::AltRight, "AltRight"),
    (KeyCode::CapsLock, "CapsLock"),
    (KeyCode::ScrollLock, "ScrollLock"),
    (KeyCode::Pause, "Pause"),
    (KeyCode::PrintScreen, "PrintScreen"),
    // Editing and whitespace
    (KeyCode::Space, "Space"),
    (KeyCode::Enter, "Enter"),
    (KeyCode::Escape, "Escape"),
    (KeyCode::Backspace, "Backspace"),
    (KeyCode::Tab, "Tab"),
    (KeyCode::Insert, "Insert"),
    (KeyCode::Delete, "Delete"),
    (KeyCode::Home, "Home"),
    (KeyCode::End, "End"),
    (KeyCode::PageUp, "PageUp"),
    (KeyCode::PageDown, "PageDown"),
    // Punctuation
    (KeyCode::Backquote, "Backquote"),
    (KeyCode::Minus, "Minus"),
    (KeyCode::Equal, "Equal"),
    (KeyCode::BracketLeft, "BracketLeft"),
    (KeyCode::BracketRight, "BracketRight"),
    (KeyCode::Comma, "Comma"),
    (KeyCode::Period, "Period"),
    (KeyCode::Slash, "Slash"),
    (KeyCode::Backslash, "Backslash"),
    (KeyCode::Semicolon, "Semicolon"),
    (KeyCode::Quote, "Quote"),
    // Numpad
    (KeyCode::Numpad0, "Numpad0"),
    (KeyCode::Numpad1, "Numpad1"),
    (KeyCode::Numpad2, "Numpad2"),
    (KeyCode::Numpad3, "Numpad3"),
    (KeyCode::Numpad4, "Numpad4"),
    (KeyCode::Numpad5, "Numpad5"),
    (KeyCode::Numpad6, "Numpad6"),
    (KeyCode::Numpad7, "Numpad7"),
    (KeyCode::Numpad8, "Numpad8"),
    (KeyCode::Numpad9, "Numpad9"),
    (KeyCode::NumpadEnter, "NumpadEnter"),
    (KeyCode::NumpadAdd, "NumpadAdd"),
    (KeyCode::NumpadSubtract, "NumpadSubtract"),
    (KeyCode::NumpadMultiply, "NumpadMultiply"),
    (KeyCode::NumpadDivide, "NumpadDivide"),
    (KeyCode::NumpadDecimal, "NumpadDecimal"),
];

/// Config name of a key, if it has one
pub fn try_key_name(key: KeyCode) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

/// Name of a bindable key ("Unknown" for keys outside the table)
pub fn key_name(key: KeyCode) -> &'static str {
    try_key_name(key).unwrap_or("Unknown")
}

/// Parse a key name (case-insensitive)
pub fn parse_key(name: &str) -> Option<KeyCode> {
    KEY_NAMES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(k, _)| *k)
}

/// Serde adapter for `Vec<KeyCode>` as a list of key names
pub(crate) mod keys {
    use super::*;

    /// Fails on keys without a config name so they are never saved as a
    /// name the loader would reject
    pub fn serialize<S: Serializer>(keys: &[KeyCode], serializer: S) -> Result<S::Ok, S::Error> {
        let names = keys
            .iter()
            .map(|key| {
                try_key_name(*key).ok_or_else(|| {
                    serde::ser::Error::custom(format!("key {:?} cannot be saved to config", key))
                })
            })
            .collect::<Result<Vec<&str>, S::Error>>()?;
        names.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<KeyCode>, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names
            .iter()
            .map(|name| {
                parse_key(name)
                    .ok_or_else(|| serde::de::Error::custom(format!("unknown key name: '{}'", name)))
            })
            .collect()
    }
}

#[cfg(feature = "gamepad")]
pub use gamepad::{button_name, parse_button, try_button_name};

#[cfg(feature = "gamepad")]
mod gamepad {
    use gilrs::Button;

    const BUTTON_NAMES: &[(Button, &str)] = &[
        (Button::South, "South"),
        (Button::East, "East"),
        (Button::North, "North"),
        (Button::West, "West"),
        (Button::LeftTrigger, "LeftBumper"),
        (Button::RightTrigger, "RightBumper"),
        (Button::LeftTrigger2, "LeftTrigger"),
        (Button::RightTrigger2, "RightTrigger"),
        (Button::Select, "Select"),
        (Button::Start, "Start"),
        (Button::Mode, "Mode"),
        (Button::LeftThumb, "LeftStick"),
        (Button::RightThumb, "RightStick"),
        (Button::DPadUp, "DPadUp"),
        (Button::DPadDown, "DPadDown"),
        (Button::DPadLeft, "DPadLeft"),
        (Button::DPadRight, "DPadRight"),
    ];

    /// Config name of a button, if it has one
    pub fn try_button_name(button: Button) -> Option<&'static str> {
        BUTTON_NAMES
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, name)| *name)
    }

    /// Name of a gamepad button ("Unknown" for unmapped buttons)
    pub fn button_name(button: Button) -> &'static str {
        try_button_name(button).unwrap_or("Unknown")
    }

    /// Parse a button name (case-insensitive)
    pub fn parse_button(name: &str) -> Option<Button> {
        BUTTON_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
            .map(|(b, _)| *b)
    }
}

/// Serde adapter for `Vec<gilrs::Button>` as a list of button names
#[cfg(feature = "gamepad")]
pub(crate) mod buttons {
    use super::*;
    use gilrs::Button;

    pub fn serialize<S: Serializer>(buttons: &[Button], serializer: S) -> Result<S::Ok, S::Error> {
        let names = buttons
            .iter()
            .map(|button| {
                try_button_name(*button).ok_or_else(|| {
                    serde::ser::Error::custom(format!(
                        "gamepad button {:?} cannot be saved to config",
                        button
                    ))
                })
            })
            .collect::<Result<Vec<&str>, S::Error>>()?;
        names.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Button>, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names
            .iter()
            .map(|name| {
                parse_button(name).ok_or_else(|| {
                    serde::de::Error::custom(format!("unknown gamepad button: '{}'", name))
                })
            })
            .collect()
    }
}
