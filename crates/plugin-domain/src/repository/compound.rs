//! CompoundPluginRepository - One repository over many
//!
//! Members are consulted in the order they were added:
//!
//! - `list_locations` merges every member's locations, keeping the first
//!   occurrence of each and dropping later duplicates.
//! - `delete` asks members one by one and stops at the first that
//!   accepts. Later members are never asked, even if they also hold the
//!   location.
//!
//! Any member error aborts the call and is returned unchanged.
//!
//! Registration takes `&mut self`; finish it before sharing the compound
//! (e.g. behind an `Arc`) with concurrent readers.

use indexmap::IndexSet;
use tracing::{debug, trace, warn};

use crate::model::location::PluginLocation;
use crate::repository::plugin_repository::{PluginRepository, RepositoryError, RepositoryHandle};

/// Ordered collection of member repositories
#[derive(Default, Clone)]
pub struct CompoundPluginRepository {
    repositories: Vec<RepositoryHandle>,
}

impl CompoundPluginRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member repository
    ///
    /// Fails with `InvalidArgument` when `repository` is `None`; the member
    /// list is left untouched in that case.
    pub fn add(
        &mut self,
        repository: Option<RepositoryHandle>,
    ) -> Result<&mut Self, RepositoryError> {
        let Some(repository) = repository else {
            warn!("rejected absent repository handle");
            return Err(RepositoryError::invalid_argument("null not allowed"));
        };

        debug!(
            repository = repository.name(),
            position = self.repositories.len(),
            "added member repository"
        );
        self.repositories.push(repository);
        Ok(self)
    }

    /// Append a member repository only if `condition` returns true
    ///
    /// The condition runs once, now. It is not stored.
    pub fn add_if<F>(
        &mut self,
        repository: Option<RepositoryHandle>,
        condition: F,
    ) -> Result<&mut Self, RepositoryError>
    where
        F: FnOnce() -> bool,
    {
        if condition() {
            return self.add(repository);
        }

        debug!(
            repository = repository.as_ref().map(|r| r.name()).unwrap_or("<none>"),
            "condition not met, repository skipped"
        );
        Ok(self)
    }

    /// Member repositories in registration order
    pub fn repositories(&self) -> &[RepositoryHandle] {
        &self.repositories
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

impl core::fmt::Debug for CompoundPluginRepository {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.repositories.iter().map(|r| r.name()))
            .finish()
    }
}

impl PluginRepository for CompoundPluginRepository {
    fn list_locations(&self) -> Result<Vec<PluginLocation>, RepositoryError> {
        let mut locations = IndexSet::new();
        for repository in &self.repositories {
            let found = repository.list_locations().inspect_err(|err| {
                warn!(repository = repository.name(), error = %err, "listing failed");
            })?;
            trace!(
                repository = repository.name(),
                count = found.len(),
                "listed member locations"
            );
            locations.extend(found);
        }

        debug!(count = locations.len(), "merged plugin locations");
        Ok(locations.into_iter().collect())
    }

    fn delete(&self, location: &PluginLocation) -> Result<bool, RepositoryError> {
        for repository in &self.repositories {
            let deleted = repository.delete(location).inspect_err(|err| {
                warn!(
                    repository = repository.name(),
                    %location,
                    error = %err,
                    "delete failed"
                );
            })?;
            if deleted {
                debug!(repository = repository.name(), %location, "plugin deleted");
                return Ok(true);
            }
        }

        debug!(%location, "no repository accepted delete");
        Ok(false)
    }

    fn name(&self) -> &str {
        "compound"
    }
}
