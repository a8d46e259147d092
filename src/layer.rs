//! # Layer Trait
//!
//! Tower-style middleware composition for path-operation backends.
//!
//! ## Overview
//!
//! The [`Layer`] trait enables composable middleware that wraps backends to
//! add functionality like auditing, dry-run interception, or policy
//! enforcement.
//!
//! ## How It Works
//!
//! ```text
//! Backend ──▶ Layer::layer() ──▶ Wrapped Backend
//! ```
//!
//! Each middleware provides:
//! 1. A wrapper struct that implements the operation traits
//! 2. A `Layer` implementation that creates the wrapper
//!
//! ## Example
//!
//! The Layer pattern separates middleware configuration from wrapping:
//!
//! ```rust
//! use pathops_backend::Layer;
//!
//! // The layer holds configuration
//! struct AuditLayer {
//!     log_target: String,
//! }
//!
//! // The middleware wraps any backend
//! struct AuditMiddleware<B> {
//!     inner: B,
//!     log_target: String,
//! }
//!
//! // Layer creates the middleware
//! impl<B> Layer<B> for AuditLayer {
//!     type Backend = AuditMiddleware<B>;
//!
//!     fn layer(self, backend: B) -> Self::Backend {
//!         AuditMiddleware {
//!             inner: backend,
//!             log_target: self.log_target,
//!         }
//!     }
//! }
//! ```
//!
//! ## Fluent Composition
//!
//! Use [`LayerExt`] for fluent chaining:
//!
//! ```rust
//! use pathops_backend::LayerExt;
//!
//! // Hypothetical usage (requires concrete backend):
//! // let backend = ShellOps::new(cwd)
//! //     .layer(DryRunLayer::new())
//! //     .layer(AuditLayer::new(target));
//! ```

use crate::PathOps;

/// A layer that wraps a backend to add functionality.
///
/// Inspired by Tower's `Layer` trait, this enables composable middleware.
/// Each middleware provides a corresponding `Layer` implementation.
///
/// # Type Parameters
///
/// - `B`: The backend type being wrapped (must implement [`PathOps`] for the
///   wrapper to stay useful)
///
/// # Design Notes
///
/// - `layer(self, backend)` consumes both the layer and backend
/// - For middleware that preserves capabilities, the resulting `Backend` type
///   should implement the same traits as the input
/// - Middleware needing the remote contract can add a
///   [`RemotePathOps`](crate::RemotePathOps) bound in its impl
pub trait Layer<B> {
    /// The resulting backend type after applying this layer.
    type Backend;

    /// Wrap the given backend with this layer's functionality.
    ///
    /// Consumes both the layer configuration and the backend,
    /// returning a new wrapped backend.
    fn layer(self, backend: B) -> Self::Backend;
}

/// Extension trait for fluent layer composition.
///
/// Provides the `.layer()` method on any sized [`PathOps`] backend for
/// ergonomic chaining.
///
/// # Example
///
/// ```rust
/// use pathops_backend::{Layer, LayerExt, PathOps};
///
/// fn compose_backend<B: PathOps, L: Layer<B>>(backend: B, layer: L) -> L::Backend {
///     backend.layer(layer)
/// }
/// ```
pub trait LayerExt: PathOps + Sized {
    /// Apply a layer to this backend.
    ///
    /// Returns the wrapped backend with the layer's functionality added.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Backend {
        layer.layer(self)
    }
}

// Blanket implementation - any PathOps backend gets LayerExt for free
impl<B: PathOps> LayerExt for B {}
