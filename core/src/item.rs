//! Menu item capability
//!
//! A menu item is a single row: a label, a display value and up to three
//! optional actions. Items are generic over the host context `C` so they can
//! read and tweak host state (vsync, time scale, frame limits) without globals.

use bitflags::bitflags;

bitflags! {
    /// Optional actions an item responds to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemActions: u8 {
        /// Enter / confirm
        const ACTIVATE = 1 << 0;
        /// Left / decrease
        const DECREMENT = 1 << 1;
        /// Right / increase
        const INCREMENT = 1 << 2;
        /// Left and right both present
        const ADJUST = Self::DECREMENT.bits() | Self::INCREMENT.bits();
    }
}

/// A single entry in the debug menu
///
/// Only `label` is required. The default `actions` is empty, which makes the
/// row display-only; the default action bodies are no-ops. The menu checks
/// `actions` before dispatching, so an action that is not advertised is never
/// called.
pub trait MenuItem<C> {
    /// Display name, fixed for the lifetime of the item
    fn label(&self) -> &str;

    /// Current display value, recomputed every time the menu is drawn
    ///
    /// Takes `&mut self` so items can keep sampling state (e.g. a rolling
    /// frame-time window).
    fn value(&mut self, _host: &C) -> String {
        String::new()
    }

    /// Actions this item responds to
    fn actions(&self) -> ItemActions {
        ItemActions::empty()
    }

    /// Enter was pressed on this row
    fn activate(&mut self, _host: &mut C) {}

    /// Left was pressed on this row
    fn decrement(&mut self, _host: &mut C) {}

    /// Right was pressed on this row
    fn increment(&mut self, _host: &mut C) {}
}

/// Invoke an item action if the item advertises it.
///
/// Returns true if the action was dispatched.
pub(crate) fn dispatch<C, I>(item: &mut I, action: ItemActions, host: &mut C) -> bool
where
    I: MenuItem<C> + ?Sized,
{
    if !item.actions().contains(action) {
        return false;
    }
    if action == ItemActions::ACTIVATE {
        item.activate(host);
    } else if action == ItemActions::DECREMENT {
        item.decrement(host);
    } else if action == ItemActions::INCREMENT {
        item.increment(host);
    } else {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        actions: ItemActions,
    }

    impl MenuItem<i32> for Counter {
        fn label(&self) -> &str {
            "Counter"
        }

        fn value(&mut self, host: &i32) -> String {
            host.to_string()
        }

        fn actions(&self) -> ItemActions {
            self.actions
        }

        fn activate(&mut self, host: &mut i32) {
            *host = 0;
        }

        fn decrement(&mut self, host: &mut i32) {
            *host -= 1;
        }

        fn increment(&mut self, host: &mut i32) {
            *host += 1;
        }
    }

    struct Label;

    impl MenuItem<i32> for Label {
        fn label(&self) -> &str {
            "Label"
        }
    }

    #[test]
    fn test_dispatch_advertised_actions() {
        let mut item = Counter {
            actions: ItemActions::all(),
        };
        let mut host = 5;

        assert!(dispatch(&mut item, ItemActions::INCREMENT, &mut host));
        assert_eq!(host, 6);
        assert!(dispatch(&mut item, ItemActions::DECREMENT, &mut host));
        assert!(dispatch(&mut item, ItemActions::DECREMENT, &mut host));
        assert_eq!(host, 4);
        assert!(dispatch(&mut item, ItemActions::ACTIVATE, &mut host));
        assert_eq!(host, 0);
    }

    #[test]
    fn test_dispatch_skips_missing_actions() {
        let mut item = Counter {
            actions: ItemActions::ACTIVATE,
        };
        let mut host = 5;

        assert!(!dispatch(&mut item, ItemActions::INCREMENT, &mut host));
        assert!(!dispatch(&mut item, ItemActions::DECREMENT, &mut host));
        assert_eq!(host, 5);
    }

    #[test]
    fn test_dispatch_rejects_combined_flags() {
        let mut item = Counter {
            actions: ItemActions::all(),
        };
        let mut host = 5;
        assert!(!dispatch(&mut item, ItemActions::ADJUST, &mut host));
        assert_eq!(host, 5);
    }

    #[test]
    fn test_defaults_are_display_only() {
        let mut item = Label;
        let mut host = 1;
        assert_eq!(item.value(&host), "");
        assert!(item.actions().is_empty());
        assert!(!dispatch(&mut item, ItemActions::ACTIVATE, &mut host));
    }
}
