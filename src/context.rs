//! Working-directory context for resolving relative path references.

use std::path::{Component, Path, PathBuf};

use crate::OpsError;

/// An absolute, lexically normalized location that anchors a backend.
///
/// Every backend holds exactly one local `WorkDir`; a remote-aware backend
/// additionally holds one for the remote endpoint. Relative path references
/// passed to any operation are resolved against the active context before use.
/// The context is immutable after construction, so it can be shared for reads
/// across concurrent calls without locking.
///
/// # Examples
///
/// ```rust
/// use pathops_backend::WorkDir;
/// use std::path::{Path, PathBuf};
///
/// let cwd = WorkDir::new("/srv/data")?;
/// assert_eq!(cwd.resolve(Path::new("incoming/raw")), PathBuf::from("/srv/data/incoming/raw"));
/// assert_eq!(cwd.resolve(Path::new("/etc/hosts")), PathBuf::from("/etc/hosts"));
/// # Ok::<(), pathops_backend::OpsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkDir(PathBuf);

impl WorkDir {
    /// Create a context rooted at `path`.
    ///
    /// The path is lexically normalized (`.` removed, `..` folded into its
    /// parent). No filesystem access happens; the location does not have to
    /// exist yet.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidPath`] if `path` is relative — a context must be an
    /// unambiguous anchor.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, OpsError> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(OpsError::InvalidPath {
                path,
                reason: "working directory must be absolute".into(),
            });
        }
        Ok(Self(normalize(&path)))
    }

    /// Create a context from the process's current working directory.
    ///
    /// This is the default context when none is given at backend construction.
    ///
    /// # Errors
    ///
    /// [`OpsError::Io`] if the current directory cannot be determined.
    pub fn from_current_dir() -> Result<Self, OpsError> {
        let cwd = std::env::current_dir().map_err(|source| OpsError::Io {
            operation: "current_dir",
            path: PathBuf::new(),
            source,
        })?;
        Self::new(cwd)
    }

    /// The context's root.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Resolve a path reference against this context.
    ///
    /// Relative references are joined onto the context root; absolute
    /// references pass through. Either way the result is lexically
    /// normalized, with `..` never escaping above the filesystem root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            normalize(path)
        } else {
            normalize(&self.0.join(path))
        }
    }
}

impl AsRef<Path> for WorkDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Lexical normalization: drops `.`, folds `..` into the preceding component.
///
/// Purely textual — symbolic links are not followed. A `..` that would climb
/// above the root is dropped.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::Prefix(_) | Component::RootDir)
                ) {
                    out.pop();
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
