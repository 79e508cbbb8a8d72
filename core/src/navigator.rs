//! Folder navigation
//!
//! Tracks the current folder, the rows visible in it and the selected row.
//! Rows are rebuilt from the registry on every path change, never patched.

use crate::path;
use crate::registry::MenuRegistry;

/// Title shown for the root folder
pub const ROOT_TITLE: &str = "Debug Menu";

/// Label of the synthetic "go up" row
pub const UP_LABEL: &str = "/..";

/// Value shown on navigation rows
pub const DIR_VALUE: &str = "(dir)";

/// A visible row in the current folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Go to the parent folder
    Up { target: String },
    /// Enter a child folder
    Folder { path: String },
    /// Registered item, by index into the current folder's items
    Item { index: usize },
}

impl Row {
    /// Whether activating this row changes the current folder
    pub fn is_navigation(&self) -> bool {
        !matches!(self, Row::Item { .. })
    }

    /// Folder this row navigates to, if it is a navigation row
    pub fn target(&self) -> Option<&str> {
        match self {
            Row::Up { target } => Some(target),
            Row::Folder { path } => Some(path),
            Row::Item { .. } => None,
        }
    }

    /// Label of a navigation row. Folders are labelled with their full path.
    pub fn navigation_label(&self) -> Option<&str> {
        match self {
            Row::Up { .. } => Some(UP_LABEL),
            Row::Folder { path } => Some(path),
            Row::Item { .. } => None,
        }
    }
}

/// Current folder, visible rows and selection
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    /// Loaded folder path (None until the first load)
    current_path: Option<String>,
    /// Index into `rows`
    selected: usize,
    /// Rows of the current folder
    rows: Vec<Row>,
    /// Header text for the current folder
    title: String,
}

impl Navigator {
    /// Create a navigator with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a folder, rebuilding the visible rows and resetting selection
    ///
    /// Rows are ordered: "up" (unless at root), then immediate child folders
    /// in registry order, then the items declared at exactly this path.
    /// Loading an unknown path is allowed; it shows only the "up" row.
    pub fn load_path<C>(&mut self, registry: &MenuRegistry<C>, folder_path: &str) {
        let folder_path = path::normalize(folder_path);
        let mut rows = Vec::new();

        if path::depth(&folder_path) >= 1 {
            rows.push(Row::Up {
                target: path::parent(&folder_path),
            });
        }

        rows.extend(
            registry
                .subfolders_of(&folder_path)
                .map(|sub| Row::Folder {
                    path: sub.to_string(),
                }),
        );

        let item_count = registry.items_at(&folder_path).len();
        rows.extend((0..item_count).map(|index| Row::Item { index }));

        self.title = if folder_path.is_empty() {
            ROOT_TITLE.to_string()
        } else {
            path::last_segment(&folder_path).to_string()
        };

        tracing::debug!(
            "debug menu: loaded '{}' ({} rows)",
            folder_path,
            rows.len()
        );

        self.rows = rows;
        self.selected = 0;
        self.current_path = Some(folder_path);
    }

    /// Load the root folder if nothing has been loaded yet
    ///
    /// Returns true if a load happened.
    pub fn ensure_loaded<C>(&mut self, registry: &MenuRegistry<C>) -> bool {
        if self.current_path.is_some() {
            return false;
        }
        self.load_path(registry, "");
        true
    }

    /// Currently loaded folder, if any
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.current_path.is_some()
    }

    /// Header text for the current folder
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Selected row (None when the folder has no rows)
    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.selected)
    }

    /// Move selection down, wrapping to the first row
    pub fn select_next(&mut self) {
        let count = self.rows.len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    /// Move selection up, wrapping to the last row
    pub fn select_previous(&mut self) {
        let count = self.rows.len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + count - 1) % count;
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::MenuItem;
    use crate::registry::ItemDescriptor;

    #[derive(Default)]
    struct Leaf;

    impl MenuItem<()> for Leaf {
        fn label(&self) -> &str {
            "Leaf"
        }
    }

    fn registry() -> MenuRegistry<()> {
        MenuRegistry::build(vec![
            ItemDescriptor::listed::<Leaf>(""),
            ItemDescriptor::listed::<Leaf>("Rendering"),
            ItemDescriptor::listed::<Leaf>("Rendering"),
            ItemDescriptor::listed::<Leaf>("Rendering/Post"),
            ItemDescriptor::listed::<Leaf>("Time"),
        ])
    }

    #[test]
    fn test_root_rows() {
        let registry = registry();
        let mut nav = Navigator::new();
        nav.load_path(&registry, "");

        assert_eq!(nav.current_path(), Some(""));
        assert_eq!(nav.title(), ROOT_TITLE);
        assert_eq!(
            nav.rows(),
            &[
                Row::Folder {
                    path: "Rendering".to_string()
                },
                Row::Folder {
                    path: "Time".to_string()
                },
                Row::Item { index: 0 },
            ]
        );
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn test_nested_rows() {
        let registry = registry();
        let mut nav = Navigator::new();
        nav.load_path(&registry, "Rendering");

        assert_eq!(nav.title(), "Rendering");
        assert_eq!(
            nav.rows(),
            &[
                Row::Up {
                    target: String::new()
                },
                Row::Folder {
                    path: "Rendering/Post".to_string()
                },
                Row::Item { index: 0 },
                Row::Item { index: 1 },
            ]
        );
    }

    #[test]
    fn test_up_target_drops_last_segment() {
        let registry = registry();
        let mut nav = Navigator::new();
        nav.load_path(&registry, "Rendering/Post");

        assert_eq!(nav.title(), "Post");
        assert_eq!(nav.rows()[0].target(), Some("Rendering"));
        assert_eq!(nav.rows()[0].navigation_label(), Some(UP_LABEL));
    }

    #[test]
    fn test_load_is_idempotent_and_resets_selection() {
        let registry = registry();
        let mut nav = Navigator::new();

        nav.load_path(&registry, "Rendering");
        let first = nav.rows().to_vec();
        nav.select_next();
        nav.select_next();
        assert_eq!(nav.selected_index(), 2);

        nav.load_path(&registry, "Rendering");
        assert_eq!(nav.rows(), first.as_slice());
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn test_selection_wraps() {
        let registry = registry();
        let mut nav = Navigator::new();
        nav.load_path(&registry, "");
        let count = nav.row_count();

        nav.select_previous();
        assert_eq!(nav.selected_index(), count - 1);
        nav.select_next();
        assert_eq!(nav.selected_index(), 0);

        for start in 0..count {
            nav.reset_selection();
            for _ in 0..start {
                nav.select_next();
            }
            for _ in 0..count {
                nav.select_next();
            }
            assert_eq!(nav.selected_index(), start);
            for _ in 0..count {
                nav.select_previous();
            }
            assert_eq!(nav.selected_index(), start);
        }
    }

    #[test]
    fn test_empty_folder_is_noop() {
        let registry = MenuRegistry::<()>::empty();
        let mut nav = Navigator::new();
        nav.load_path(&registry, "");

        assert_eq!(nav.row_count(), 0);
        assert!(nav.selected_row().is_none());
        nav.select_next();
        nav.select_previous();
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn test_unknown_path_only_has_up_row() {
        let registry = registry();
        let mut nav = Navigator::new();
        nav.load_path(&registry, "Missing/Folder");
        assert_eq!(
            nav.rows(),
            &[Row::Up {
                target: "Missing".to_string()
            }]
        );
    }

    #[test]
    fn test_ensure_loaded_only_once() {
        let registry = registry();
        let mut nav = Navigator::new();
        assert!(!nav.is_loaded());
        assert!(nav.ensure_loaded(&registry));
        assert_eq!(nav.current_path(), Some(""));

        nav.load_path(&registry, "Time");
        assert!(!nav.ensure_loaded(&registry));
        assert_eq!(nav.current_path(), Some("Time"));
    }
}
