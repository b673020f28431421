//! In-Memory Repository Implementation
//!
//! Keeps plugin locations in memory. Useful for development wiring and
//! tests. Clones share the same storage.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexSet;
use tracing::debug;

use plugin_domain::model::location::PluginLocation;
use plugin_domain::repository::plugin_repository::{PluginRepository, RepositoryError};

/// In-memory Plugin Repository
///
/// Thread-safe implementation using RwLock. Locations are listed in the
/// order they were first inserted.
#[derive(Debug, Clone)]
pub struct InMemoryPluginRepository {
    name: String,
    locations: Arc<RwLock<IndexSet<PluginLocation>>>,
}

impl Default for InMemoryPluginRepository {
    fn default() -> Self {
        Self::new("in-memory")
    }
}

impl InMemoryPluginRepository {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locations: Arc::new(RwLock::new(IndexSet::new())),
        }
    }

    pub fn with_locations<I, L>(name: impl Into<String>, locations: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<PluginLocation>,
    {
        Self {
            name: name.into(),
            locations: Arc::new(RwLock::new(
                locations.into_iter().map(Into::into).collect(),
            )),
        }
    }

    /// Add a location; returns false if it was already present
    pub fn insert(&self, location: impl Into<PluginLocation>) -> Result<bool, RepositoryError> {
        Ok(self.write()?.insert(location.into()))
    }

    pub fn contains(&self, location: &PluginLocation) -> Result<bool, RepositoryError> {
        Ok(self.read()?.contains(location))
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexSet<PluginLocation>>, RepositoryError> {
        self.locations
            .read()
            .map_err(|_| RepositoryError::member(&self.name, "Failed to acquire read lock"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexSet<PluginLocation>>, RepositoryError> {
        self.locations
            .write()
            .map_err(|_| RepositoryError::member(&self.name, "Failed to acquire write lock"))
    }
}

impl PluginRepository for InMemoryPluginRepository {
    fn list_locations(&self) -> Result<Vec<PluginLocation>, RepositoryError> {
        Ok(self.read()?.iter().cloned().collect())
    }

    fn delete(&self, location: &PluginLocation) -> Result<bool, RepositoryError> {
        let removed = self.write()?.shift_remove(location);
        if removed {
            debug!(repository = %self.name, %location, "removed plugin location");
        }
        Ok(removed)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_list() {
        let repo = InMemoryPluginRepository::new("staging");

        assert!(repo.insert("plugins/b").unwrap());
        assert!(repo.insert("plugins/a").unwrap());
        assert!(!repo.insert("plugins/b").unwrap());

        assert_eq!(repo.len().unwrap(), 2);
        assert_eq!(
            repo.list_locations().unwrap(),
            vec![
                PluginLocation::from("plugins/b"),
                PluginLocation::from("plugins/a"),
            ]
        );
    }

    #[test]
    fn test_delete_unknown_location_is_not_applicable() {
        let repo = InMemoryPluginRepository::with_locations("staging", ["plugins/a"]);

        assert!(!repo.delete(&PluginLocation::from("plugins/zzz")).unwrap());
        assert!(repo.delete(&PluginLocation::from("plugins/a")).unwrap());
        assert!(repo.is_empty().unwrap());
    }

    #[test]
    fn test_delete_keeps_remaining_order() {
        let repo = InMemoryPluginRepository::with_locations("staging", ["a", "b", "c"]);

        repo.delete(&PluginLocation::from("a")).unwrap();
        assert_eq!(
            repo.list_locations().unwrap(),
            vec![PluginLocation::from("b"), PluginLocation::from("c")]
        );
    }

    #[test]
    fn test_clones_share_storage() {
        let repo = InMemoryPluginRepository::default();
        let view = repo.clone();

        repo.insert("plugins/a").unwrap();
        assert!(view.contains(&PluginLocation::from("plugins/a")).unwrap());
        assert_eq!(view.name(), "in-memory");
    }
}
