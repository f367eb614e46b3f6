//! Safe Path Value Object
//!
//! A project-relative path read from a user document (for example the
//! `rootDir` of a build configuration). Relocation targets are built from
//! it, so it must never point outside the project.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal components (..)")
            }
            PathError::AbsoluteNotAllowed => write!(f, "absolute paths are not allowed"),
            PathError::Empty => write!(f, "path is empty"),
        }
    }
}

impl std::error::Error for PathError {}

/// A validated project-relative path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Validate a relative path. `.` components are dropped.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        // `has_root` catches `/src` on Windows too, where it is not "absolute".
        if path.is_absolute() || path.has_root() {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::CurDir => {}
                Component::Prefix(_) | Component::RootDir => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
                Component::Normal(part) => normalized.push(part),
            }
        }

        Ok(Self(normalized))
    }

    /// Resolve against a project root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    /// True for `.`-only paths, i.e. the project root itself.
    pub fn is_root(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for SafePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, ".");
        }
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_relative_path() {
        let path = SafePath::new("src").unwrap();
        assert_eq!(path.as_path(), Path::new("src"));
    }

    #[test]
    fn strips_current_dir_components() {
        let path = SafePath::new("./src/./app").unwrap();
        assert_eq!(path.as_path(), Path::new("src/app"));
    }

    #[test]
    fn dot_resolves_to_root() {
        let path = SafePath::new(".").unwrap();
        assert!(path.is_root());
        assert_eq!(path.resolve(Path::new("/project")), PathBuf::from("/project"));
        assert_eq!(path.to_string(), ".");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(SafePath::new(""), Err(PathError::Empty)));
    }

    #[test]
    fn rejects_traversal() {
        assert!(matches!(
            SafePath::new("../escape"),
            Err(PathError::ContainsTraversal)
        ));
        assert!(matches!(
            SafePath::new("src/../../escape"),
            Err(PathError::ContainsTraversal)
        ));
    }

    #[test]
    fn rejects_absolute() {
        #[cfg(windows)]
        let absolute_path = "C:\\Windows\\System32";
        #[cfg(not(windows))]
        let absolute_path = "/etc";

        assert!(matches!(
            SafePath::new(absolute_path),
            Err(PathError::AbsoluteNotAllowed)
        ));
    }

    #[test]
    fn resolve_joins_root() {
        let path = SafePath::new("src/app").unwrap();
        assert_eq!(
            path.resolve(Path::new("/project")),
            PathBuf::from("/project/src/app")
        );
    }
}
