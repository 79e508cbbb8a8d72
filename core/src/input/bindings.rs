//! Key and button bindings for menu controls

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use super::MenuControl;
use super::names::{key_name, keys};

/// Keyboard keys bound to each menu control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardBindings {
    #[serde(default = "default_toggle_keys", with = "keys")]
    pub toggle: Vec<KeyCode>,
    #[serde(default = "default_up_keys", with = "keys")]
    pub up: Vec<KeyCode>,
    #[serde(default = "default_down_keys", with = "keys")]
    pub down: Vec<KeyCode>,
    #[serde(default = "default_left_keys", with = "keys")]
    pub left: Vec<KeyCode>,
    #[serde(default = "default_right_keys", with = "keys")]
    pub right: Vec<KeyCode>,
    #[serde(default = "default_enter_keys", with = "keys")]
    pub enter: Vec<KeyCode>,
}

fn default_toggle_keys() -> Vec<KeyCode> {
    vec![KeyCode::F12]
}
fn default_up_keys() -> Vec<KeyCode> {
    vec![KeyCode::ArrowUp]
}
fn default_down_keys() -> Vec<KeyCode> {
    vec![KeyCode::ArrowDown]
}
fn default_left_keys() -> Vec<KeyCode> {
    vec![KeyCode::ArrowLeft]
}
fn default_right_keys() -> Vec<KeyCode> {
    vec![KeyCode::ArrowRight]
}
fn default_enter_keys() -> Vec<KeyCode> {
    vec![KeyCode::Enter]
}

impl Default for KeyboardBindings {
    fn default() -> Self {
        Self {
            toggle: default_toggle_keys(),
            up: default_up_keys(),
            down: default_down_keys(),
            left: default_left_keys(),
            right: default_right_keys(),
            enter: default_enter_keys(),
        }
    }
}

impl KeyboardBindings {
    /// Keys bound to a control
    pub fn keys_for(&self, control: MenuControl) -> &[KeyCode] {
        match control {
            MenuControl::Toggle => &self.toggle,
            MenuControl::Up => &self.up,
            MenuControl::Down => &self.down,
            MenuControl::Left => &self.left,
            MenuControl::Right => &self.right,
            MenuControl::Enter => &self.enter,
        }
    }

    /// Whether `key` is bound to any control
    pub fn is_bound(&self, key: KeyCode) -> bool {
        MenuControl::ALL
            .iter()
            .any(|&control| self.keys_for(control).contains(&key))
    }
}

/// Gamepad buttons bound to each menu control
#[cfg(feature = "gamepad")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamepadBindings {
    #[serde(default = "gamepad_defaults::toggle", with = "super::names::buttons")]
    pub toggle: Vec<gilrs::Button>,
    #[serde(default = "gamepad_defaults::up", with = "super::names::buttons")]
    pub up: Vec<gilrs::Button>,
    #[serde(default = "gamepad_defaults::down", with = "super::names::buttons")]
    pub down: Vec<gilrs::Button>,
    #[serde(default = "gamepad_defaults::left", with = "super::names::buttons")]
    pub left: Vec<gilrs::Button>,
    #[serde(default = "gamepad_defaults::right", with = "super::names::buttons")]
    pub right: Vec<gilrs::Button>,
    #[serde(default = "gamepad_defaults::enter", with = "super::names::buttons")]
    pub enter: Vec<gilrs::Button>,
}

#[cfg(feature = "gamepad")]
mod gamepad_defaults {
    use gilrs::Button;

    pub fn toggle() -> Vec<Button> {
        vec![Button::Select]
    }
    pub fn up() -> Vec<Button> {
        vec![Button::DPadUp]
    }
    pub fn down() -> Vec<Button> {
        vec![Button::DPadDown]
    }
    pub fn left() -> Vec<Button> {
        vec![Button::DPadLeft]
    }
    pub fn right() -> Vec<Button> {
        vec![Button::DPadRight]
    }
    pub fn enter() -> Vec<Button> {
        vec![Button::South]
    }
}

#[cfg(feature = "gamepad")]
impl Default for GamepadBindings {
    fn default() -> Self {
        Self {
            toggle: gamepad_defaults::toggle(),
            up: gamepad_defaults::up(),
            down: gamepad_defaults::down(),
            left: gamepad_defaults::left(),
            right: gamepad_defaults::right(),
            enter: gamepad_defaults::enter(),
        }
    }
}

#[cfg(feature = "gamepad")]
impl GamepadBindings {
    /// Buttons bound to a control
    pub fn buttons_for(&self, control: MenuControl) -> &[gilrs::Button] {
        match control {
            MenuControl::Toggle => &self.toggle,
            MenuControl::Up => &self.up,
            MenuControl::Down => &self.down,
            MenuControl::Left => &self.left,
            MenuControl::Right => &self.right,
            MenuControl::Enter => &self.enter,
        }
    }

    /// Whether `button` is bound to any control
    pub fn is_bound(&self, button: gilrs::Button) -> bool {
        MenuControl::ALL
            .iter()
            .any(|&control| self.buttons_for(control).contains(&button))
    }
}

/// All menu bindings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuBindings {
    #[serde(default)]
    pub keyboard: KeyboardBindings,
    #[cfg(feature = "gamepad")]
    #[serde(default)]
    pub gamepad: GamepadBindings,
}

impl MenuBindings {
    /// Report keys or buttons bound to more than one control
    ///
    /// Returns one warning per conflicting binding. An empty list means the
    /// bindings are unambiguous.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut key_owners: HashMap<KeyCode, MenuControl> = HashMap::new();
        for control in MenuControl::ALL {
            for &key in self.keyboard.keys_for(control) {
                match key_owners.insert(key, control) {
                    Some(owner) if owner != control => warnings.push(format!(
                        "keyboard.{} key '{}' is also bound to keyboard.{}",
                        control.name(),
                        key_name(key),
                        owner.name()
                    )),
                    _ => {}
                }
            }
        }

        #[cfg(feature = "gamepad")]
        {
            let mut button_owners: HashMap<gilrs::Button, MenuControl> = HashMap::new();
            for control in MenuControl::ALL {
                for &button in self.gamepad.buttons_for(control) {
                    match button_owners.insert(button, control) {
                        Some(owner) if owner != control => warnings.push(format!(
                            "gamepad.{} button '{}' is also bound to gamepad.{}",
                            control.name(),
                            super::names::button_name(button),
                            owner.name()
                        )),
                        _ => {}
                    }
                }
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keyboard_bindings() {
        let bindings = KeyboardBindings::default();
        assert_eq!(bindings.keys_for(MenuControl::Toggle), &[KeyCode::F12]);
        assert_eq!(bindings.keys_for(MenuControl::Enter), &[KeyCode::Enter]);
        assert!(bindings.is_bound(KeyCode::ArrowLeft));
        assert!(!bindings.is_bound(KeyCode::KeyW));
    }

    #[test]
    fn test_defaults_have_no_conflicts() {
        assert!(MenuBindings::default().validate().is_empty());
    }

    #[test]
    fn test_conflicting_keys_reported() {
        let mut bindings = MenuBindings::default();
        bindings.keyboard.enter.push(KeyCode::F12);

        let warnings = bindings.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("keyboard.enter"));
        assert!(warnings[0].contains("F12"));
        assert!(warnings[0].contains("keyboard.toggle"));
    }

    #[test]
    fn test_duplicate_key_on_same_control_is_fine() {
        let mut bindings = MenuBindings::default();
        bindings.keyboard.up.push(KeyCode::ArrowUp);
        assert!(bindings.validate().is_empty());
    }

    #[test]
    fn test_keyboard_bindings_toml() {
        let parsed: KeyboardBindings = toml::from_str(
            r#"
toggle = ["Backquote", "F12"]
up = ["W", "ArrowUp"]
"#,
        )
        .unwrap();
        assert_eq!(parsed.toggle, vec![KeyCode::Backquote, KeyCode::F12]);
        assert_eq!(parsed.up, vec![KeyCode::KeyW, KeyCode::ArrowUp]);
        // Unspecified controls keep their defaults
        assert_eq!(parsed.down, vec![KeyCode::ArrowDown]);

        let text = toml::to_string(&parsed).unwrap();
        assert!(text.contains(r#"toggle = ["Backquote", "F12"]"#));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<KeyboardBindings, _> = toml::from_str(r#"toggle = ["Hyper"]"#);
        assert!(result.is_err());
    }

    #[cfg(feature = "gamepad")]
    #[test]
    fn test_default_gamepad_bindings() {
        use gilrs::Button;
        let bindings = GamepadBindings::default();
        assert_eq!(bindings.buttons_for(MenuControl::Toggle), &[Button::Select]);
        assert_eq!(bindings.buttons_for(MenuControl::Enter), &[Button::South]);
        assert!(bindings.is_bound(Button::DPadLeft));
        assert!(!bindings.is_bound(Button::North));
    }
}
