//! Presenter-facing snapshot of the menu
//!
//! A [`MenuView`] is recomputed on demand each frame; presenters must not
//! hold on to one across ticks since item values change underneath them.

/// One row as a presenter should draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub label: String,
    pub value: String,
    pub selected: bool,
    pub has_decrement: bool,
    pub has_increment: bool,
}

impl RowView {
    /// Value with left/right markers for adjustable rows, e.g. `"< 60 >"`
    pub fn decorated_value(&self) -> String {
        let left = if self.has_decrement { '<' } else { ' ' };
        let right = if self.has_increment { '>' } else { ' ' };
        format!("{} {} {}", left, self.value, right)
    }
}

/// Everything needed to draw the menu for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuView {
    pub title: String,
    pub rows: Vec<RowView>,
}

impl MenuView {
    /// The selected row, if any
    pub fn selected(&self) -> Option<&RowView> {
        self.rows.iter().find(|row| row.selected)
    }
}

/// Draws a [`MenuView`]. Painting, fonts and colors live behind this trait.
pub trait Presenter {
    fn present(&mut self, view: &MenuView);
}

/// Plain-text presenter for headless runs and logs
#[derive(Debug, Clone, Default)]
pub struct TextPresenter {
    lines: Vec<String>,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines produced by the last `present` call
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Last output joined with newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Presenter for TextPresenter {
    fn present(&mut self, view: &MenuView) {
        self.lines.clear();
        self.lines.push(format!("== {} ==", view.title));
        for row in &view.rows {
            let cursor = if row.selected { '>' } else { ' ' };
            let line = format!("{} {}  {}", cursor, row.label, row.decorated_value());
            self.lines.push(line.trim_end().to_string());
        }
    }
}
