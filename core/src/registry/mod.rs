//! Menu item registry
//!
//! The startup catalog mapping folder paths to the items declared there.
//! Built once from a list of [`ItemDescriptor`]s before the menu is used;
//! after that its folder structure never changes.

mod descriptor;

pub use descriptor::ItemDescriptor;

use hashbrown::HashMap;

use crate::error::DiscoveryFailure;
use crate::item::MenuItem;
use crate::path;

/// Items declared at exactly one folder path
pub struct Folder<C> {
    path: String,
    items: Vec<Box<dyn MenuItem<C>>>,
}

impl<C> Folder<C> {
    /// Folder path (empty for root)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Items declared at this path, in registration order
    pub fn items(&self) -> &[Box<dyn MenuItem<C>>] {
        &self.items
    }
}

/// Registry of menu items keyed by folder path
pub struct MenuRegistry<C> {
    /// Folders in first-insertion order (root is always first)
    folders: Vec<Folder<C>>,
    /// Folder path -> index into `folders`
    index: HashMap<String, usize>,
    /// Items that failed to instantiate during build
    failures: Vec<DiscoveryFailure>,
}

impl<C: 'static> Default for MenuRegistry<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: 'static> MenuRegistry<C> {
    /// A registry with only the (empty) root folder
    pub fn empty() -> Self {
        let mut registry = Self {
            folders: Vec::new(),
            index: HashMap::new(),
            failures: Vec::new(),
        };
        registry.ensure_folder("");
        registry
    }

    /// Build the catalog from item descriptors
    ///
    /// Listed descriptors are instantiated exactly once, in the order given.
    /// Unlisted descriptors are skipped. A factory that fails is recorded in
    /// [`failures`](Self::failures) and the build carries on with the rest.
    pub fn build(descriptors: impl IntoIterator<Item = ItemDescriptor<C>>) -> Self {
        let mut registry = Self::empty();

        for descriptor in descriptors {
            let ItemDescriptor {
                name,
                path: declared,
                factory,
            } = descriptor;

            let Some(declared) = declared else {
                tracing::trace!("debug menu: {} has no path, not listed", name);
                continue;
            };
            let folder_path = path::normalize(&declared);

            match factory() {
                Ok(item) => {
                    let idx = registry.ensure_folder(&folder_path);
                    registry.folders[idx].items.push(item);
                }
                Err(reason) => {
                    let failure = DiscoveryFailure {
                        item: name,
                        path: folder_path,
                        reason,
                    };
                    tracing::warn!("debug menu: {}", failure);
                    registry.failures.push(failure);
                }
            }
        }

        tracing::info!(
            "debug menu: registered {} items in {} folders",
            registry.item_count(),
            registry.folders.len()
        );
        if !registry.failures.is_empty() {
            tracing::warn!(
                "debug menu: {} items failed to load",
                registry.failures.len()
            );
        }

        registry
    }

    /// Index of the folder at `folder_path`, creating it and any missing
    /// ancestors so the folder can be reached from root
    fn ensure_folder(&mut self, folder_path: &str) -> usize {
        if let Some(&idx) = self.index.get(folder_path) {
            return idx;
        }
        for ancestor in path::ancestors(folder_path) {
            self.insert_folder(ancestor);
        }
        self.insert_folder(folder_path.to_string())
    }

    fn insert_folder(&mut self, folder_path: String) -> usize {
        if let Some(&idx) = self.index.get(&folder_path) {
            return idx;
        }
        let idx = self.folders.len();
        self.index.insert(folder_path.clone(), idx);
        self.folders.push(Folder {
            path: folder_path,
            items: Vec::new(),
        });
        idx
    }
}

impl<C> MenuRegistry<C> {
    /// Whether `folder_path` is a known folder
    pub fn contains(&self, folder_path: &str) -> bool {
        self.index.contains_key(folder_path)
    }

    /// All folders in first-insertion order
    pub fn folders(&self) -> &[Folder<C>] {
        &self.folders
    }

    /// Folder at `folder_path`, if known
    pub fn folder(&self, folder_path: &str) -> Option<&Folder<C>> {
        self.index.get(folder_path).map(|&idx| &self.folders[idx])
    }

    /// Items declared at exactly `folder_path` (empty if unknown)
    pub fn items_at(&self, folder_path: &str) -> &[Box<dyn MenuItem<C>>] {
        self.folder(folder_path).map(Folder::items).unwrap_or(&[])
    }

    /// Immediate child folders of `folder_path`, in registry order
    pub fn subfolders_of<'a>(&'a self, folder_path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.folders
            .iter()
            .map(Folder::path)
            .filter(move |candidate| path::is_child_of(candidate, folder_path))
    }

    /// Mutable access to one item, used for action dispatch and value reads
    pub(crate) fn item_mut(
        &mut self,
        folder_path: &str,
        index: usize,
    ) -> Option<&mut Box<dyn MenuItem<C>>> {
        let idx = *self.index.get(folder_path)?;
        self.folders[idx].items.get_mut(index)
    }

    /// Items that failed to instantiate
    pub fn failures(&self) -> &[DiscoveryFailure] {
        &self.failures
    }

    /// Total number of registered items
    pub fn item_count(&self) -> usize {
        self.folders.iter().map(|f| f.items.len()).sum()
    }

    /// Number of folders, root included
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }
}
