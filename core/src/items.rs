//! Stock item adapters
//!
//! Closure-backed items for the common row shapes, so a host can expose a
//! setting without writing a new type. Each adapter is a plain [`MenuItem`].

use crate::item::{ItemActions, MenuItem};

type Getter<C, T> = Box<dyn Fn(&C) -> T>;
type Mutator<C> = Box<dyn FnMut(&mut C)>;

/// Display-only row
pub struct Readout<C> {
    label: String,
    read: Getter<C, String>,
}

impl<C> Readout<C> {
    pub fn new(label: impl Into<String>, read: impl Fn(&C) -> String + 'static) -> Self {
        Self {
            label: label.into(),
            read: Box::new(read),
        }
    }
}

impl<C> MenuItem<C> for Readout<C> {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&mut self, host: &C) -> String {
        (self.read)(host)
    }
}

/// Action-only row (e.g. "Exit Game")
pub struct Command<C> {
    label: String,
    run: Mutator<C>,
}

impl<C> Command<C> {
    pub fn new(label: impl Into<String>, run: impl FnMut(&mut C) + 'static) -> Self {
        Self {
            label: label.into(),
            run: Box::new(run),
        }
    }
}

impl<C> MenuItem<C> for Command<C> {
    fn label(&self) -> &str {
        &self.label
    }

    fn actions(&self) -> ItemActions {
        ItemActions::ACTIVATE
    }

    fn activate(&mut self, host: &mut C) {
        (self.run)(host);
    }
}

/// Boolean row. Enter, left and right all flip the value.
pub struct Toggle<C> {
    label: String,
    get: Getter<C, bool>,
    set: Box<dyn FnMut(&mut C, bool)>,
    on_text: &'static str,
    off_text: &'static str,
}

impl<C> Toggle<C> {
    pub fn new(
        label: impl Into<String>,
        get: impl Fn(&C) -> bool + 'static,
        set: impl FnMut(&mut C, bool) + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            get: Box::new(get),
            set: Box::new(set),
            on_text: "Enabled",
            off_text: "Disabled",
        }
    }

    /// Override the displayed text for both states
    pub fn with_text(mut self, on_text: &'static str, off_text: &'static str) -> Self {
        self.on_text = on_text;
        self.off_text = off_text;
        self
    }

    fn flip(&mut self, host: &mut C) {
        let current = (self.get)(host);
        (self.set)(host, !current);
    }
}

impl<C> MenuItem<C> for Toggle<C> {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&mut self, host: &C) -> String {
        if (self.get)(host) {
            self.on_text.to_string()
        } else {
            self.off_text.to_string()
        }
    }

    fn actions(&self) -> ItemActions {
        ItemActions::all()
    }

    fn activate(&mut self, host: &mut C) {
        self.flip(host);
    }

    fn decrement(&mut self, host: &mut C) {
        self.flip(host);
    }

    fn increment(&mut self, host: &mut C) {
        self.flip(host);
    }
}

/// Adjustable row with left/right steps and an optional reset on enter
pub struct Stepper<C> {
    label: String,
    format: Getter<C, String>,
    decrement: Mutator<C>,
    increment: Mutator<C>,
    reset: Option<Mutator<C>>,
}

impl<C> Stepper<C> {
    pub fn new(
        label: impl Into<String>,
        format: impl Fn(&C) -> String + 'static,
        decrement: impl FnMut(&mut C) + 'static,
        increment: impl FnMut(&mut C) + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            format: Box::new(format),
            decrement: Box::new(decrement),
            increment: Box::new(increment),
            reset: None,
        }
    }

    /// Run `reset` when enter is pressed on the row
    pub fn with_reset(mut self, reset: impl FnMut(&mut C) + 'static) -> Self {
        self.reset = Some(Box::new(reset));
        self
    }
}

impl<C> MenuItem<C> for Stepper<C> {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&mut self, host: &C) -> String {
        (self.format)(host)
    }

    fn actions(&self) -> ItemActions {
        if self.reset.is_some() {
            ItemActions::all()
        } else {
            ItemActions::ADJUST
        }
    }

    fn activate(&mut self, host: &mut C) {
        if let Some(reset) = &mut self.reset {
            reset(host);
        }
    }

    fn decrement(&mut self, host: &mut C) {
        (self.decrement)(host);
    }

    fn increment(&mut self, host: &mut C) {
        (self.increment)(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Host {
        vsync: bool,
        time_scale: f32,
        quit: bool,
    }

    #[test]
    fn test_readout() {
        let mut item = Readout::new("Scale", |h: &Host| format!("{:.1}", h.time_scale));
        let host = Host {
            time_scale: 0.5,
            ..Default::default()
        };
        assert_eq!(item.label(), "Scale");
        assert_eq!(item.value(&host), "0.5");
        assert!(item.actions().is_empty());
    }

    #[test]
    fn test_command() {
        let mut item = Command::new("Exit Game", |h: &mut Host| h.quit = true);
        let mut host = Host::default();
        assert_eq!(item.actions(), ItemActions::ACTIVATE);
        item.activate(&mut host);
        assert!(host.quit);
    }

    #[test]
    fn test_toggle_flips_from_every_action() {
        let mut item = Toggle::new("VSync", |h: &Host| h.vsync, |h: &mut Host, v| h.vsync = v);
        let mut host = Host::default();
        assert_eq!(item.value(&host), "Disabled");

        item.activate(&mut host);
        assert_eq!(item.value(&host), "Enabled");
        item.decrement(&mut host);
        assert!(!host.vsync);
        item.increment(&mut host);
        assert!(host.vsync);
    }

    #[test]
    fn test_toggle_custom_text() {
        let mut item = Toggle::new("Auto Simulation", |h: &Host| h.vsync, |h: &mut Host, v| h.vsync = v)
            .with_text("True", "False");
        let host = Host::default();
        assert_eq!(item.value(&host), "False");
    }

    #[test]
    fn test_stepper_actions_depend_on_reset() {
        let step = Stepper::new(
            "Time Scale",
            |h: &Host| format!("{:.1}", h.time_scale),
            |h: &mut Host| h.time_scale = (h.time_scale - 0.1).max(0.0),
            |h: &mut Host| h.time_scale = (h.time_scale + 0.1).min(10.0),
        );
        assert_eq!(step.actions(), ItemActions::ADJUST);

        let mut step = step.with_reset(|h: &mut Host| h.time_scale = 1.0);
        assert_eq!(step.actions(), ItemActions::all());

        let mut host = Host {
            time_scale: 0.05,
            ..Default::default()
        };
        step.decrement(&mut host);
        assert_eq!(step.value(&host), "0.0");
        step.activate(&mut host);
        assert_eq!(step.value(&host), "1.0");
        step.increment(&mut host);
        assert_eq!(step.value(&host), "1.1");
    }
}
