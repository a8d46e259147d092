//! Ownership operations: permission and group changes.

use std::path::Path;

use super::Anchored;
use crate::{GroupLabel, ModeLabel, OpsError};

/// Ownership operations for a path-operation backend.
///
/// Permissions are addressed by symbolic [`ModeLabel`]s and groups by
/// [`GroupLabel`]s, never by raw bits or uids, so the same calls work against
/// POSIX and non-POSIX targets. How a label maps onto the backend's native
/// permission representation is the backend's business.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn OpsOwner`.
pub trait OpsOwner: Anchored {
    /// Change the permissions of the entry at `path` to the given preset.
    ///
    /// With `recursive` set, the change also applies to all content
    /// underneath `path`.
    ///
    /// # Errors
    ///
    /// - [`OpsError::NotFound`] if `path` does not exist
    /// - [`OpsError::UnknownMode`] if the label has no mapping on this backend
    ///   (most malformed labels are already rejected when parsing the
    ///   [`ModeLabel`])
    fn change_permissions(
        &self,
        path: &Path,
        mode: ModeLabel,
        recursive: bool,
    ) -> Result<(), OpsError>;

    /// Change the group ownership of the entry at `path`.
    ///
    /// With `recursive` set, the change also applies to all content
    /// underneath `path`.
    ///
    /// # Errors
    ///
    /// - [`OpsError::NotFound`] if `path` does not exist
    /// - [`OpsError::UnknownGroup`] if the backend does not know the group
    /// - [`OpsError::PermissionDenied`] if the caller lacks rights for the
    ///   change
    fn change_group(&self, path: &Path, group: &GroupLabel, recursive: bool)
    -> Result<(), OpsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops_owner_is_object_safe() {
        fn _check(_: &dyn OpsOwner) {}
    }

    #[test]
    fn ops_owner_requires_send_sync() {
        fn _assert_send_sync<T: Send + Sync>() {}
        fn _check<T: OpsOwner>() {
            _assert_send_sync::<T>();
        }
    }
}
