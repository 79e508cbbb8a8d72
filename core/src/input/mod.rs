//! Menu input: controls, bindings and press-edge detection
//!
//! The menu consumes six edge-triggered signals per frame ([`MenuEdges`]).
//! [`MenuInput`] derives them from keyboard and gamepad state using the
//! configured [`MenuBindings`], and owns the acquire/release discipline that
//! keeps menu-only controls out of the host's way while the menu is hidden.

mod bindings;
mod names;
mod tracker;

pub use bindings::{KeyboardBindings, MenuBindings};
#[cfg(feature = "gamepad")]
pub use bindings::GamepadBindings;
pub use names::{key_name, parse_key, try_key_name};
#[cfg(feature = "gamepad")]
pub use names::{button_name, parse_button, try_button_name};
pub use tracker::MenuInput;

/// A menu control signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuControl {
    Toggle,
    Up,
    Down,
    Left,
    Right,
    Enter,
}

impl MenuControl {
    /// All controls, in the order they are evaluated each tick
    pub const ALL: [MenuControl; 6] = [
        MenuControl::Toggle,
        MenuControl::Up,
        MenuControl::Down,
        MenuControl::Enter,
        MenuControl::Left,
        MenuControl::Right,
    ];

    /// Config key for this control
    pub fn name(self) -> &'static str {
        match self {
            MenuControl::Toggle => "toggle",
            MenuControl::Up => "up",
            MenuControl::Down => "down",
            MenuControl::Left => "left",
            MenuControl::Right => "right",
            MenuControl::Enter => "enter",
        }
    }

    /// Whether this control only matters while the menu is visible
    pub fn is_navigation(self) -> bool {
        self != MenuControl::Toggle
    }
}

/// Press edges for one frame
///
/// Each flag is true only on the frame its control went from released to
/// pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuEdges {
    pub toggle: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub enter: bool,
}

impl MenuEdges {
    /// No edges this frame
    pub fn none() -> Self {
        Self::default()
    }

    /// Edges for exactly the given controls
    pub fn from_controls(controls: &[MenuControl]) -> Self {
        let mut edges = Self::default();
        for &control in controls {
            edges.set(control, true);
        }
        edges
    }

    pub fn get(&self, control: MenuControl) -> bool {
        match control {
            MenuControl::Toggle => self.toggle,
            MenuControl::Up => self.up,
            MenuControl::Down => self.down,
            MenuControl::Left => self.left,
            MenuControl::Right => self.right,
            MenuControl::Enter => self.enter,
        }
    }

    pub fn set(&mut self, control: MenuControl, pressed: bool) {
        let slot = match control {
            MenuControl::Toggle => &mut self.toggle,
            MenuControl::Up => &mut self.up,
            MenuControl::Down => &mut self.down,
            MenuControl::Left => &mut self.left,
            MenuControl::Right => &mut self.right,
            MenuControl::Enter => &mut self.enter,
        };
        *slot = pressed;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy with every navigation edge cleared, keeping only toggle
    pub fn toggle_only(self) -> Self {
        Self {
            toggle: self.toggle,
            ..Self::default()
        }
    }
}

impl From<MenuControl> for MenuEdges {
    fn from(control: MenuControl) -> Self {
        Self::from_controls(&[control])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_set_get() {
        let mut edges = MenuEdges::none();
        assert!(edges.is_empty());

        for control in MenuControl::ALL {
            edges.set(control, true);
            assert!(edges.get(control));
        }
        assert!(!edges.is_empty());

        edges.set(MenuControl::Up, false);
        assert!(!edges.up);
    }

    #[test]
    fn test_edges_from_controls() {
        let edges = MenuEdges::from_controls(&[MenuControl::Down, MenuControl::Enter]);
        assert!(edges.down && edges.enter);
        assert!(!edges.toggle && !edges.up && !edges.left && !edges.right);
        assert_eq!(MenuEdges::from(MenuControl::Toggle).toggle_only(), MenuEdges::from(MenuControl::Toggle));
    }

    #[test]
    fn test_toggle_only() {
        let edges = MenuEdges::from_controls(&[MenuControl::Toggle, MenuControl::Down]).toggle_only();
        assert!(edges.toggle);
        assert!(!edges.down);
    }

    #[test]
    fn test_control_names_unique() {
        let mut names: Vec<&str> = MenuControl::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MenuControl::ALL.len());
        assert!(!MenuControl::Toggle.is_navigation());
        assert!(MenuControl::Enter.is_navigation());
    }
}
