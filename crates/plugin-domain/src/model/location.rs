//! PluginLocation - Where a plugin artifact lives
//!
//! A Value Object: two locations are the same if they point at the same
//! place. The domain never looks inside; repositories decide what a
//! location means (a directory, an archive, a staging key).

use std::path::{Path, PathBuf};

/// Opaque location of a plugin artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginLocation(PathBuf);

impl PluginLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl core::fmt::Display for PluginLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for PluginLocation {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for PluginLocation {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl From<&str> for PluginLocation {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

impl AsRef<Path> for PluginLocation {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_follows_path() {
        let a = PluginLocation::new("plugins/hello");
        let b = PluginLocation::from(Path::new("plugins/hello"));
        assert_eq!(a, b);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(!seen.insert(b));
    }

    #[test]
    fn test_display() {
        let location = PluginLocation::from("plugins/hello.zip");
        assert_eq!(location.to_string(), "plugins/hello.zip");
        assert_eq!(location.into_path_buf(), PathBuf::from("plugins/hello.zip"));
    }
}
