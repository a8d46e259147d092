//! Error types for the path-operations abstraction.

use std::path::PathBuf;

/// Error type for path operations, with contextual variants.
///
/// Variants carry the path and/or operation involved where applicable.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use pathops_backend::OpsError;
/// use std::path::PathBuf;
///
/// let err = OpsError::NotFound { path: PathBuf::from("/missing") };
/// assert!(err.to_string().contains("/missing"));
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    // Path-state mismatches
    /// Path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Path already exists when it shouldn't.
    #[error("already exists: {path}")]
    AlreadyExists {
        /// The path that already exists.
        path: PathBuf,
    },

    /// Directory has content and the operation was not recursive.
    #[error("not empty: {path}")]
    NotEmpty {
        /// The path to the non-empty directory.
        path: PathBuf,
    },

    /// Parent directory is absent and the operation was not forced.
    #[error("missing parent directory for: {path}")]
    MissingParent {
        /// The path whose parent is absent.
        path: PathBuf,
    },

    // Label errors
    /// Symbolic permission mode label is not recognized.
    #[error("unknown mode label: {label:?}")]
    UnknownMode {
        /// The unrecognized label.
        label: String,
    },

    /// Group label is not recognized.
    #[error("unknown group label: {label:?}")]
    UnknownGroup {
        /// The unrecognized label.
        label: String,
    },

    // Permission/Access errors
    /// Caller lacks rights for the requested change.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: PathBuf,
        /// The operation that was denied.
        operation: &'static str,
    },

    // Backend/Operation errors
    /// Requested capability is unavailable on this backend.
    #[error("operation not supported: {operation}")]
    NotSupported {
        /// The unsupported operation.
        operation: &'static str,
    },

    /// Path reference is malformed (e.g. a relative context root).
    #[error("invalid path: {path} ({reason})")]
    InvalidPath {
        /// The malformed path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// Generic backend/channel error.
    #[error("backend error: {0}")]
    Backend(String),

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for OpsError {
    fn from(error: std::io::Error) -> Self {
        // Convert common io::ErrorKind to more specific OpsError variants when possible
        match error.kind() {
            std::io::ErrorKind::NotFound => OpsError::NotFound {
                path: PathBuf::new(),
            },
            std::io::ErrorKind::PermissionDenied => OpsError::PermissionDenied {
                path: PathBuf::new(),
                operation: "io",
            },
            std::io::ErrorKind::AlreadyExists => OpsError::AlreadyExists {
                path: PathBuf::new(),
            },
            _ => OpsError::Io {
                operation: "io",
                path: PathBuf::new(),
                source: error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops_error_not_found_display() {
        let err = OpsError::NotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.to_string(), "not found: /missing");
    }

    #[test]
    fn ops_error_already_exists_display() {
        let err = OpsError::AlreadyExists {
            path: PathBuf::from("/exists"),
        };
        assert_eq!(err.to_string(), "already exists: /exists");
    }

    #[test]
    fn ops_error_missing_parent_display() {
        let err = OpsError::MissingParent {
            path: PathBuf::from("/a/b/c"),
        };
        assert_eq!(err.to_string(), "missing parent directory for: /a/b/c");
    }

    #[test]
    fn ops_error_unknown_mode_display() {
        let err = OpsError::UnknownMode {
            label: "read_backwards".into(),
        };
        assert!(err.to_string().contains("read_backwards"));
    }

    #[test]
    fn ops_error_permission_denied_display() {
        let err = OpsError::PermissionDenied {
            path: PathBuf::from("/secret"),
            operation: "change_group",
        };
        assert_eq!(err.to_string(), "change_group: permission denied: /secret");
    }

    #[test]
    fn ops_error_from_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = OpsError::from(io_err);
        assert!(matches!(err, OpsError::NotFound { .. }));
    }

    #[test]
    fn ops_error_from_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err = OpsError::from(io_err);
        assert!(matches!(err, OpsError::PermissionDenied { .. }));
    }

    #[test]
    fn ops_error_from_io_already_exists() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "test");
        let err = OpsError::from(io_err);
        assert!(matches!(err, OpsError::AlreadyExists { .. }));
    }

    #[test]
    fn ops_error_from_io_other() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "test");
        let err = OpsError::from(io_err);
        assert!(matches!(err, OpsError::Io { .. }));
    }
}
