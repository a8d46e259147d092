//! # Marker Traits
//!
//! Zero-cost marker traits for compile-time behavior selection.
//!
//! ## Overview
//!
//! Marker traits are empty traits that signal compile-time properties
//! without adding runtime overhead. They enable conditional behavior
//! through trait bounds.
//!
//! ## Available Markers
//!
//! | Marker | Purpose |
//! |--------|---------|
//! | [`SelfResolving`] | Backend's channel resolves relative references itself |

/// Marker trait for backends whose underlying channel performs its own
/// working-directory resolution.
///
/// When a backend implements `SelfResolving`, wrappers and middleware must
/// NOT pre-resolve path references against [`WorkDir`](crate::WorkDir).
/// Paths are passed to the backend unchanged.
///
/// # When to Implement
///
/// Implement `SelfResolving` for backends that delegate to a system that
/// already anchors relative references:
///
/// - A shell-session backend: the session's own working directory applies to
///   every command it runs
/// - A native backend that hands paths straight to the OS after `chdir`
///
/// # When NOT to Implement
///
/// Do NOT implement for backends that compose requests from path values, such
/// as a protocol client that must send absolute paths on the wire. Those
/// resolve through their [`WorkDir`](crate::WorkDir) contexts before each
/// request.
///
/// # Example
///
/// ```rust
/// use pathops_backend::SelfResolving;
///
/// /// Runs operations through a persistent shell session.
/// /// The session's working directory anchors relative paths.
/// struct ShellSessionOps {
///     session_id: u64,
/// }
///
/// // Mark as self-resolving - wrappers pass paths through unchanged
/// impl SelfResolving for ShellSessionOps {}
/// ```
///
/// # Thread Safety
///
/// This is a marker trait with no methods, so thread safety is inherited
/// from the implementing type.
pub trait SelfResolving {}

// Note: No blanket implementation - backends must explicitly opt-in
// by implementing this marker trait.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_resolving_is_implementable() {
        struct TestBackend;

        impl SelfResolving for TestBackend {}

        let backend = TestBackend;

        // Verify the marker trait is implemented
        fn _check<T: SelfResolving>(_: &T) {}
        _check(&backend);
    }

    #[test]
    fn can_use_in_trait_bounds() {
        struct MockBackend;
        impl SelfResolving for MockBackend {}

        // Function that only accepts self-resolving backends
        fn passes_paths_through<B: SelfResolving>(_backend: &B) -> bool {
            true
        }

        let backend = MockBackend;
        assert!(passes_paths_through(&backend));
    }
}
