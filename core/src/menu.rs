//! Debug menu state machine
//!
//! [`DebugMenu`] owns the registry and a [`Navigator`] and is driven by one
//! [`tick`](DebugMenu::tick) per frame. Everything is synchronous: each edge
//! is fully applied before `tick` returns.
//!
//! # Usage
//!
//! ```rust,ignore
//! let registry = MenuRegistry::build(catalog());
//! let mut menu = DebugMenu::new(registry);
//! menu.on_event(|event| tracing::info!("debug menu: {:?}", event));
//!
//! // every frame
//! menu.tick_input(&mut input, &mut host);
//! menu.present(&mut presenter, &host);
//! ```

use crate::input::{MenuEdges, MenuInput};
use crate::item::{self, ItemActions};
use crate::navigator::{DIR_VALUE, Navigator, Row};
use crate::registry::MenuRegistry;
use crate::view::{MenuView, Presenter, RowView};

/// Whether the overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Lifecycle notification, fired once per visibility transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Shown,
    Hidden,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Visibility transition, if the toggle fired
    pub event: Option<MenuEvent>,
    /// Whether any edge was used by the menu
    pub consumed: bool,
    /// Whether the current folder changed
    pub navigated: bool,
}

type Listener = Box<dyn FnMut(MenuEvent)>;

/// The debug menu: registry, navigation and input handling
pub struct DebugMenu<C> {
    registry: MenuRegistry<C>,
    navigator: Navigator,
    visibility: Visibility,
    listeners: Vec<Listener>,
}

impl<C> DebugMenu<C> {
    /// Create a hidden menu over a built registry
    pub fn new(registry: MenuRegistry<C>) -> Self {
        Self {
            registry,
            navigator: Navigator::new(),
            visibility: Visibility::Hidden,
            listeners: Vec::new(),
        }
    }

    pub fn registry(&self) -> &MenuRegistry<C> {
        &self.registry
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Register a listener for shown/hidden notifications
    pub fn on_event(&mut self, listener: impl FnMut(MenuEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Flip visibility, reset selection and notify listeners
    pub fn toggle(&mut self) -> MenuEvent {
        let event = match self.visibility {
            Visibility::Hidden => {
                self.visibility = Visibility::Visible;
                MenuEvent::Shown
            }
            Visibility::Visible => {
                self.visibility = Visibility::Hidden;
                MenuEvent::Hidden
            }
        };
        self.navigator.reset_selection();
        tracing::debug!("debug menu: {:?}", event);

        for listener in &mut self.listeners {
            listener(event);
        }
        event
    }

    /// Show the menu if hidden
    pub fn show(&mut self) -> Option<MenuEvent> {
        (!self.is_visible()).then(|| self.toggle())
    }

    /// Hide the menu if visible
    pub fn hide(&mut self) -> Option<MenuEvent> {
        self.is_visible().then(|| self.toggle())
    }

    /// Navigate to a folder directly
    pub fn load_path(&mut self, folder_path: &str) {
        self.navigator.load_path(&self.registry, folder_path);
    }

    /// Apply one frame of input
    ///
    /// Edges are applied in order: toggle, down, up, enter, left, right.
    /// Toggle goes first since it decides whether the rest apply. While
    /// hidden, only toggle is consumed.
    pub fn tick(&mut self, edges: MenuEdges, host: &mut C) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if edges.toggle {
            outcome.event = Some(self.toggle());
            outcome.consumed = true;
        }

        if !self.is_visible() {
            return outcome;
        }

        let navigation = edges.toggle_only() != edges;
        if navigation {
            self.navigator.ensure_loaded(&self.registry);
            outcome.consumed = true;
        }

        if edges.down {
            self.navigator.select_next();
        }
        if edges.up {
            self.navigator.select_previous();
        }
        if edges.enter {
            outcome.navigated |= self.activate_selected(host);
        }
        if edges.left {
            self.adjust_selected(ItemActions::DECREMENT, host);
        }
        if edges.right {
            self.adjust_selected(ItemActions::INCREMENT, host);
        }

        outcome
    }

    /// Poll `input`, tick, and claim or release navigation controls to match
    /// the resulting visibility
    pub fn tick_input(&mut self, input: &mut MenuInput, host: &mut C) -> TickOutcome {
        let edges = input.poll();
        let outcome = self.tick(edges, host);
        input.set_navigation_acquired(self.is_visible());
        outcome
    }

    /// Enter on the selected row. Returns true if the folder changed.
    fn activate_selected(&mut self, host: &mut C) -> bool {
        let Some(row) = self.navigator.selected_row().cloned() else {
            return false;
        };

        match row {
            Row::Up { target } | Row::Folder { path: target } => {
                self.navigator.load_path(&self.registry, &target);
                true
            }
            Row::Item { index } => {
                self.dispatch_item(index, ItemActions::ACTIVATE, host);
                false
            }
        }
    }

    /// Left/right on the selected row. Navigation rows ignore both.
    fn adjust_selected(&mut self, action: ItemActions, host: &mut C) {
        if let Some(&Row::Item { index }) = self.navigator.selected_row() {
            self.dispatch_item(index, action, host);
        }
    }

    fn dispatch_item(&mut self, index: usize, action: ItemActions, host: &mut C) {
        let folder = self.navigator.current_path().unwrap_or_default();
        if let Some(item) = self.registry.item_mut(folder, index) {
            item::dispatch(&mut **item, action, host);
        }
    }

    /// Snapshot for drawing this frame
    ///
    /// Loads the root folder first if nothing has been loaded yet, so the
    /// view is never built from an uninitialized row set.
    pub fn view(&mut self, host: &C) -> MenuView {
        self.navigator.ensure_loaded(&self.registry);

        let folder = self.navigator.current_path().unwrap_or_default();
        let selected = self.navigator.selected_index();
        let mut rows = Vec::with_capacity(self.navigator.row_count());

        for (i, row) in self.navigator.rows().iter().enumerate() {
            let view = match row {
                Row::Item { index } => {
                    let Some(item) = self.registry.item_mut(folder, *index) else {
                        continue;
                    };
                    let actions = item.actions();
                    RowView {
                        label: item.label().to_string(),
                        value: item.value(host),
                        selected: i == selected,
                        has_decrement: actions.contains(ItemActions::DECREMENT),
                        has_increment: actions.contains(ItemActions::INCREMENT),
                    }
                }
                nav => RowView {
                    label: nav.navigation_label().unwrap_or_default().to_string(),
                    value: DIR_VALUE.to_string(),
                    selected: i == selected,
                    has_decrement: false,
                    has_increment: false,
                },
            };
            rows.push(view);
        }

        MenuView {
            title: self.navigator.title().to_string(),
            rows,
        }
    }

    /// Hand the current view to a presenter. Does nothing while hidden.
    ///
    /// Returns true if something was presented.
    pub fn present(&mut self, presenter: &mut dyn Presenter, host: &C) -> bool {
        if !self.is_visible() {
            return false;
        }
        let view = self.view(host);
        presenter.present(&view);
        true
    }
}
