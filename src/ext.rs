//! # Extension Traits
//!
//! Convenience methods for path-operation backends.
//!
//! ## Overview
//!
//! [`OpsExt`] provides commonly-needed utility methods that aren't part of
//! the core trait hierarchy. These are implemented as default methods with a
//! blanket implementation, so any [`PathOps`] backend gets them for free.
//!
//! ## Available Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`resolve`](OpsExt::resolve) | Resolve a reference against the local context |
//! | [`ensure_directory`](OpsExt::ensure_directory) | Create a directory, parents included, tolerating existence |
//! | [`remove_if_exists`](OpsExt::remove_if_exists) | Remove, treating an absent path as a no-op |
//! | [`make_readonly`](OpsExt::make_readonly) | Apply the `user_readonly` preset |

use crate::{ModeLabel, OpsError, PathOps};
use std::path::{Path, PathBuf};

/// Extension methods for any path-operation backend.
///
/// Provides convenience methods not in the core traits but commonly needed.
/// All methods have default implementations, so backends get them
/// automatically.
///
/// # Example
///
/// ```rust
/// use pathops_backend::{OpsError, OpsExt, PathOps};
/// use std::path::Path;
///
/// fn reset_workspace<B: PathOps>(ops: &B, dir: &Path) -> Result<(), OpsError> {
///     ops.remove_if_exists(dir, true)?;
///     ops.ensure_directory(dir)
/// }
/// ```
pub trait OpsExt: PathOps {
    /// Resolve a path reference against the local working-directory context.
    ///
    /// Pure convenience over [`Anchored::cwd`](crate::Anchored::cwd) plus
    /// [`WorkDir::resolve`](crate::WorkDir::resolve).
    fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd().resolve(path)
    }

    /// Create a directory, creating missing parents and tolerating an
    /// existing one.
    ///
    /// Equivalent to [`create_directory`](crate::OpsTree::create_directory)
    /// with `force` set.
    fn ensure_directory(&self, path: &Path) -> Result<(), OpsError> {
        self.create_directory(path, true)
    }

    /// Remove a path, treating an absent path as success.
    ///
    /// Returns `Ok(true)` if something was removed, `Ok(false)` if nothing
    /// was there. All other failures propagate.
    fn remove_if_exists(&self, path: &Path, recursive: bool) -> Result<bool, OpsError> {
        match self.remove(path, recursive) {
            Ok(()) => Ok(true),
            Err(OpsError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Apply the [`ModeLabel::UserReadonly`] preset to a path.
    ///
    /// The common "protect this dataset" call in annex-style data
    /// management.
    fn make_readonly(&self, path: &Path, recursive: bool) -> Result<(), OpsError> {
        self.change_permissions(path, ModeLabel::UserReadonly, recursive)
    }
}

// Blanket implementation - any PathOps backend gets OpsExt for free
impl<B: PathOps + ?Sized> OpsExt for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Anchored, GroupLabel, OpsOwner, OpsTree, WorkDir};
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::RwLock;

    /// Mock backend for testing
    struct MockOps {
        cwd: WorkDir,
        dirs: RwLock<HashSet<PathBuf>>,
        modes: RwLock<Vec<(PathBuf, ModeLabel, bool)>>,
    }

    impl MockOps {
        fn new() -> Self {
            Self {
                cwd: WorkDir::new("/work").unwrap(),
                dirs: RwLock::new(HashSet::new()),
                modes: RwLock::new(Vec::new()),
            }
        }
    }

    impl Anchored for MockOps {
        fn cwd(&self) -> &WorkDir {
            &self.cwd
        }
    }

    impl OpsTree for MockOps {
        fn create_directory(&self, path: &Path, _force: bool) -> Result<(), OpsError> {
            self.dirs.write().unwrap().insert(self.cwd.resolve(path));
            Ok(())
        }

        fn exists(&self, path: &Path) -> Result<bool, OpsError> {
            Ok(self.dirs.read().unwrap().contains(&self.cwd.resolve(path)))
        }

        fn remove(&self, path: &Path, _recursive: bool) -> Result<(), OpsError> {
            let resolved = self.cwd.resolve(path);
            if self.dirs.write().unwrap().remove(&resolved) {
                Ok(())
            } else {
                Err(OpsError::NotFound { path: resolved })
            }
        }
    }

    impl OpsOwner for MockOps {
        fn change_permissions(
            &self,
            path: &Path,
            mode: ModeLabel,
            recursive: bool,
        ) -> Result<(), OpsError> {
            self.modes
                .write()
                .unwrap()
                .push((self.cwd.resolve(path), mode, recursive));
            Ok(())
        }

        fn change_group(&self, _: &Path, _: &GroupLabel, _: bool) -> Result<(), OpsError> {
            Ok(())
        }
    }

    #[test]
    fn resolve_uses_local_context() {
        let ops = MockOps::new();
        assert_eq!(ops.resolve(Path::new("out")), PathBuf::from("/work/out"));
    }

    #[test]
    fn ensure_directory_creates() {
        let ops = MockOps::new();
        ops.ensure_directory(Path::new("out")).unwrap();
        assert!(ops.exists(Path::new("out")).unwrap());
    }

    #[test]
    fn remove_if_exists_reports_removal() {
        let ops = MockOps::new();
        ops.ensure_directory(Path::new("out")).unwrap();
        assert!(ops.remove_if_exists(Path::new("out"), false).unwrap());
    }

    #[test]
    fn remove_if_exists_tolerates_missing() {
        let ops = MockOps::new();
        assert!(!ops.remove_if_exists(Path::new("missing"), false).unwrap());
    }

    #[test]
    fn make_readonly_applies_preset() {
        let ops = MockOps::new();
        ops.make_readonly(Path::new("out"), true).unwrap();
        let modes = ops.modes.read().unwrap();
        assert_eq!(modes.len(), 1);
        assert_eq!(
            modes[0],
            (PathBuf::from("/work/out"), ModeLabel::UserReadonly, true)
        );
    }

    #[test]
    fn ops_ext_available_on_dyn_path_ops() {
        let ops: &dyn PathOps = &MockOps::new();
        // OpsExt methods work on trait objects
        assert_eq!(ops.resolve(Path::new("out")), PathBuf::from("/work/out"));
    }
}
