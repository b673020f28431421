//! Plugin Repository - Abstract discovery and removal of plugin artifacts
//!
//! This trait defines what the domain needs from a source of plugins.
//! Whether the source is a directory, an archive, or a remote staging
//! area is not our concern here.

use std::sync::Arc;

use thiserror::Error;

use crate::model::location::PluginLocation;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A caller passed something the repository cannot accept
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A member repository failed while listing or deleting
    #[error("Repository '{repository}' failed: {message}")]
    MemberOperation { repository: String, message: String },
}

impl RepositoryError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RepositoryError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn member(repository: impl Into<String>, message: impl Into<String>) -> Self {
        RepositoryError::MemberOperation {
            repository: repository.into(),
            message: message.into(),
        }
    }
}

/// Plugin Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Implementations must be safe to call from several threads at once;
/// `delete` takes `&self`, so mutable state lives behind a lock.
pub trait PluginRepository: Send + Sync {
    /// List the locations of every plugin this repository can see
    fn list_locations(&self) -> Result<Vec<PluginLocation>, RepositoryError>;

    /// Delete the plugin at `location`
    ///
    /// `Ok(false)` means the location is not managed by this repository.
    fn delete(&self, location: &PluginLocation) -> Result<bool, RepositoryError>;

    /// Name used in logs and error messages
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a repository
pub type RepositoryHandle = Arc<dyn PluginRepository>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::RwLock;

    /// In-memory implementation for testing
    struct SetRepo {
        locations: RwLock<BTreeSet<PluginLocation>>,
    }

    impl SetRepo {
        fn new(paths: &[&str]) -> Self {
            Self {
                locations: RwLock::new(paths.iter().map(|p| PluginLocation::from(*p)).collect()),
            }
        }
    }

    impl PluginRepository for SetRepo {
        fn list_locations(&self) -> Result<Vec<PluginLocation>, RepositoryError> {
            Ok(self.locations.read().unwrap().iter().cloned().collect())
        }

        fn delete(&self, location: &PluginLocation) -> Result<bool, RepositoryError> {
            Ok(self.locations.write().unwrap().remove(location))
        }
    }

    #[test]
    fn test_delete_reports_ownership() {
        let repo = SetRepo::new(&["plugins/a", "plugins/b"]);

        assert!(repo.delete(&PluginLocation::from("plugins/a")).unwrap());
        assert!(!repo.delete(&PluginLocation::from("plugins/a")).unwrap());
        assert_eq!(
            repo.list_locations().unwrap(),
            vec![PluginLocation::from("plugins/b")]
        );
    }

    #[test]
    fn test_default_name_is_type_name() {
        let repo: RepositoryHandle = Arc::new(SetRepo::new(&[]));
        assert!(repo.name().ends_with("SetRepo"));
    }

    #[test]
    fn test_error_display() {
        let err = RepositoryError::member("archive", "corrupt index");
        assert_eq!(err.to_string(), "Repository 'archive' failed: corrupt index");

        let err = RepositoryError::invalid_argument("null not allowed");
        assert_eq!(err.to_string(), "Invalid argument: null not allowed");
    }
}
