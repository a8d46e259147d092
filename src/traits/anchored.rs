//! Working-directory anchoring for path-operation backends.

use crate::WorkDir;

/// Access to the working-directory context a backend is anchored to.
///
/// Supertrait of every operation trait: an operation without a context could
/// not resolve relative path references. The context is fixed at backend
/// construction and immutable afterwards.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. The returned [`WorkDir`] is
/// immutable, so concurrent reads need no locking.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn Anchored`.
pub trait Anchored: Send + Sync {
    /// The local working-directory context.
    ///
    /// Relative path references passed to any operation resolve against this
    /// context (remote-aware backends route remote-side references through
    /// [`RemotePathOps::remote_cwd`](crate::RemotePathOps::remote_cwd)
    /// instead).
    fn cwd(&self) -> &WorkDir;
}
