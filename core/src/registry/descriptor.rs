//! Item descriptors fed to the registry build

use std::any::type_name;

use crate::error::ItemInitError;
use crate::item::MenuItem;

type Factory<C> = Box<dyn FnOnce() -> Result<Box<dyn MenuItem<C>>, ItemInitError>>;

/// Describes one item type for the startup catalog
///
/// A descriptor carries the folder path the item is declared under (or none,
/// for item types that exist only for reuse) and a factory that creates the
/// single instance. Factories run exactly once, during
/// [`MenuRegistry::build`](super::MenuRegistry::build).
pub struct ItemDescriptor<C> {
    pub(super) name: &'static str,
    pub(super) path: Option<String>,
    pub(super) factory: Factory<C>,
}

impl<C: 'static> ItemDescriptor<C> {
    /// Declare `T` under `path`, created with `T::default()`
    pub fn listed<T>(path: &str) -> Self
    where
        T: MenuItem<C> + Default + 'static,
    {
        Self::with_factory(path, || Ok(T::default()))
    }

    /// Declare `T` without a path. It is skipped by the catalog.
    pub fn unlisted<T>() -> Self
    where
        T: MenuItem<C> + Default + 'static,
    {
        Self {
            name: type_name::<T>(),
            path: None,
            factory: Box::new(|| Ok(Box::new(T::default()) as Box<dyn MenuItem<C>>)),
        }
    }

    /// Declare `T` under `path` with a fallible constructor
    pub fn with_factory<T, F>(path: &str, factory: F) -> Self
    where
        T: MenuItem<C> + 'static,
        F: FnOnce() -> Result<T, ItemInitError> + 'static,
    {
        Self {
            name: type_name::<T>(),
            path: Some(path.to_string()),
            factory: Box::new(move || factory().map(|item| Box::new(item) as Box<dyn MenuItem<C>>)),
        }
    }

    /// Declare an already constructed item under `path`
    ///
    /// Useful for the closure-backed adapters in [`crate::items`].
    pub fn item<T>(path: &str, item: T) -> Self
    where
        T: MenuItem<C> + 'static,
    {
        Self::with_factory(path, move || Ok(item))
    }

    /// Type name of the described item
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared folder path, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl<C> std::fmt::Debug for ItemDescriptor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemDescriptor")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
