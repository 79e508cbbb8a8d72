//! Nethercore Debug Menu - hierarchical in-game debug overlay
//!
//! Items are registered under slash-separated folder paths, browsed with six
//! edge-triggered controls and drawn by a host-supplied presenter.
//!
//! # Architecture
//!
//! - [`MenuRegistry`] - Folder tree built once from [`ItemDescriptor`]s
//! - [`Navigator`] - Current folder, visible rows and the selection cursor
//! - [`DebugMenu`] - Visibility, per-frame input handling and item dispatch
//! - [`MenuInput`] - Keyboard/gamepad press edges from [`MenuBindings`]
//! - [`MenuView`] / [`Presenter`] - Draw-ready snapshot and the drawing seam
//!
//! Items are generic over a host context `C` that is passed to every value
//! read and action, so they never reach for global state.

pub mod config;
pub mod error;
pub mod input;
pub mod item;
pub mod items;
pub mod menu;
pub mod navigator;
pub mod path;
pub mod registry;
pub mod view;

pub use config::{ColorConfig, LayoutConfig, MenuConfig};
pub use error::{ConfigError, DiscoveryFailure, ItemInitError};
pub use input::{KeyboardBindings, MenuBindings, MenuControl, MenuEdges, MenuInput};
#[cfg(feature = "gamepad")]
pub use input::GamepadBindings;
pub use item::{ItemActions, MenuItem};
pub use items::{Command, Readout, Stepper, Toggle};
pub use menu::{DebugMenu, MenuEvent, TickOutcome, Visibility};
pub use navigator::{Navigator, Row};
pub use registry::{Folder, ItemDescriptor, MenuRegistry};
pub use view::{MenuView, Presenter, RowView, TextPresenter};
