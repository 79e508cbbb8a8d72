//! Press-edge tracking for menu controls

use hashbrown::HashMap;
use winit::keyboard::KeyCode;

use super::{MenuBindings, MenuControl, MenuEdges};

/// Turns raw key/button state into per-frame menu edges
///
/// The host forwards keyboard (and gamepad) events as they arrive and calls
/// [`poll`](Self::poll) once per frame. A control fires only on the poll where
/// it went from released to pressed; holding it does not fire again.
///
/// Acquisition follows the menu's lifecycle. The whole tracker is enabled or
/// disabled with the component, and navigation controls are only claimed
/// from the host (see [`captures`](Self::captures)) while the menu is visible.
pub struct MenuInput {
    bindings: MenuBindings,

    /// Current keyboard state (key -> pressed), bound keys only
    keyboard_state: HashMap<KeyCode, bool>,

    /// Current gamepad button state, bound buttons only
    #[cfg(feature = "gamepad")]
    button_state: HashMap<gilrs::Button, bool>,

    /// Control levels seen by the previous poll
    last_levels: MenuEdges,

    /// Whether the tracker reports anything at all
    enabled: bool,

    /// Whether navigation controls are claimed from the host
    navigation_acquired: bool,
}

impl Default for MenuInput {
    fn default() -> Self {
        Self::new(MenuBindings::default())
    }
}

impl MenuInput {
    pub fn new(bindings: MenuBindings) -> Self {
        Self {
            bindings,
            keyboard_state: HashMap::new(),
            #[cfg(feature = "gamepad")]
            button_state: HashMap::new(),
            last_levels: MenuEdges::default(),
            enabled: true,
            navigation_acquired: false,
        }
    }

    pub fn bindings(&self) -> &MenuBindings {
        &self.bindings
    }

    /// Replace the bindings. Held state is dropped so nothing fires spuriously.
    pub fn set_bindings(&mut self, bindings: MenuBindings) {
        self.bindings = bindings;
        self.clear_state();
    }

    /// Start tracking input (component became active)
    pub fn enable(&mut self) {
        if !self.enabled {
            tracing::debug!("debug menu: input enabled");
        }
        self.enabled = true;
    }

    /// Stop tracking input and release everything (component became inactive)
    pub fn disable(&mut self) {
        if self.enabled {
            tracing::debug!("debug menu: input disabled");
        }
        self.enabled = false;
        self.navigation_acquired = false;
        self.clear_state();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Claim or release navigation controls
    ///
    /// While released, only the toggle binding is captured from the host.
    /// Held state is kept across a release, so a key still held when the menu
    /// is shown again does not fire.
    pub fn set_navigation_acquired(&mut self, acquired: bool) {
        if self.navigation_acquired != acquired {
            tracing::debug!(
                "debug menu: navigation input {}",
                if acquired { "acquired" } else { "released" }
            );
        }
        self.navigation_acquired = acquired && self.enabled;
    }

    pub fn navigation_acquired(&self) -> bool {
        self.navigation_acquired
    }

    /// Whether the host should treat `key` as consumed by the menu
    pub fn captures(&self, key: KeyCode) -> bool {
        if !self.enabled {
            return false;
        }
        MenuControl::ALL.iter().any(|&control| {
            (self.navigation_acquired || !control.is_navigation())
                && self.bindings.keyboard.keys_for(control).contains(&key)
        })
    }

    /// Record a keyboard key state change
    pub fn update_keyboard(&mut self, key: KeyCode, pressed: bool) {
        if !self.enabled || !self.bindings.keyboard.is_bound(key) {
            return;
        }
        self.keyboard_state.insert(key, pressed);
    }

    /// Record a gamepad button state change
    #[cfg(feature = "gamepad")]
    pub fn update_gamepad_button(&mut self, button: gilrs::Button, pressed: bool) {
        if !self.enabled || !self.bindings.gamepad.is_bound(button) {
            return;
        }
        self.button_state.insert(button, pressed);
    }

    /// Record a gamepad event already drained by the host's gilrs loop
    #[cfg(feature = "gamepad")]
    pub fn handle_gamepad_event(&mut self, event: &gilrs::EventType) {
        match event {
            gilrs::EventType::ButtonPressed(button, _) => self.update_gamepad_button(*button, true),
            gilrs::EventType::ButtonReleased(button, _) => {
                self.update_gamepad_button(*button, false)
            }
            gilrs::EventType::Disconnected => self.button_state.clear(),
            _ => {}
        }
    }

    /// Drain all pending gilrs events into the tracker
    ///
    /// For hosts that let the menu own the gilrs context. Hosts with their own
    /// event loop should forward through [`handle_gamepad_event`](Self::handle_gamepad_event).
    #[cfg(feature = "gamepad")]
    pub fn poll_gilrs(&mut self, gilrs: &mut gilrs::Gilrs) {
        while let Some(event) = gilrs.next_event() {
            self.handle_gamepad_event(&event.event);
        }
    }

    /// Whether a control is currently held on any bound key or button
    pub fn is_held(&self, control: MenuControl) -> bool {
        let key_held = self
            .bindings
            .keyboard
            .keys_for(control)
            .iter()
            .any(|key| self.keyboard_state.get(key).copied().unwrap_or(false));

        #[cfg(feature = "gamepad")]
        let button_held = self
            .bindings
            .gamepad
            .buttons_for(control)
            .iter()
            .any(|button| self.button_state.get(button).copied().unwrap_or(false));
        #[cfg(not(feature = "gamepad"))]
        let button_held = false;

        key_held || button_held
    }

    /// Compute this frame's press edges
    ///
    /// Call exactly once per frame. Returns no edges while disabled.
    pub fn poll(&mut self) -> MenuEdges {
        if !self.enabled {
            return MenuEdges::none();
        }

        let mut levels = MenuEdges::none();
        let mut edges = MenuEdges::none();
        for control in MenuControl::ALL {
            let held = self.is_held(control);
            levels.set(control, held);
            edges.set(control, held && !self.last_levels.get(control));
        }
        self.last_levels = levels;
        edges
    }

    fn clear_state(&mut self) {
        self.keyboard_state.clear();
        #[cfg(feature = "gamepad")]
        self.button_state.clear();
        self.last_levels = MenuEdges::none();
    }
}
