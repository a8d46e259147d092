//! # Path-Operation Traits
//!
//! The core trait hierarchy that defines the path-operations contract.
//!
//! ## Trait Layers
//!
//! Capabilities are split so backends implement only what they support:
//!
//! ```text
//! Anchored ──▶ OpsTree  ─┐
//!                        ├─▶ PathOps ──▶ RemotePathOps
//! Anchored ──▶ OpsOwner ─┘
//! ```
//!
//! ## Quick Reference
//!
//! | Trait | Methods | Use Case |
//! |-------|---------|----------|
//! | [`Anchored`] | `cwd` | Working-directory context access |
//! | [`OpsTree`] | `create_directory`, `exists`, `remove` | Entry lifecycle |
//! | [`OpsOwner`] | `change_permissions`, `change_group` | Ownership changes |
//! | [`PathOps`] | all of the above | The full local contract |
//! | [`RemotePathOps`] | + `remote_cwd` | Remote endpoints with a split context |
//!
//! ## Blanket Implementation
//!
//! [`PathOps`] is blanket-implemented: implement the component traits and the
//! composite comes for free.
//!
//! ```rust
//! use pathops_backend::{Anchored, GroupLabel, ModeLabel, OpsError, OpsOwner, OpsTree, PathOps, WorkDir};
//! use std::path::Path;
//!
//! struct MyBackend {
//!     cwd: WorkDir,
//! }
//!
//! impl Anchored for MyBackend {
//!     fn cwd(&self) -> &WorkDir { &self.cwd }
//! }
//! # impl OpsTree for MyBackend {
//! #     fn create_directory(&self, _: &Path, _: bool) -> Result<(), OpsError> { Ok(()) }
//! #     fn exists(&self, _: &Path) -> Result<bool, OpsError> { Ok(false) }
//! #     fn remove(&self, _: &Path, _: bool) -> Result<(), OpsError> { Ok(()) }
//! # }
//! # impl OpsOwner for MyBackend {
//! #     fn change_permissions(&self, _: &Path, _: ModeLabel, _: bool) -> Result<(), OpsError> { Ok(()) }
//! #     fn change_group(&self, _: &Path, _: &GroupLabel, _: bool) -> Result<(), OpsError> { Ok(()) }
//! # }
//!
//! // Now MyBackend automatically implements PathOps
//! fn use_ops<B: PathOps>(_backend: &B) {}
//! let backend = MyBackend { cwd: WorkDir::new("/srv/data").unwrap() };
//! use_ops(&backend);
//! ```
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync`. Methods take `&self` to enable concurrent
//! access; backends use interior mutability for mutable state.
//!
//! ## Object Safety
//!
//! All traits are object-safe and can be used as trait objects:
//!
//! ```rust
//! use pathops_backend::PathOps;
//!
//! fn probe(ops: &dyn PathOps) {
//!     let _ = ops.exists(std::path::Path::new("dataset"));
//! }
//! ```

mod anchored;
mod ops_owner;
mod ops_tree;
mod remote;

pub use anchored::Anchored;
pub use ops_owner::OpsOwner;
pub use ops_tree::OpsTree;
pub use remote::RemotePathOps;

/// The full local path-operation contract.
///
/// Combines working-directory anchoring ([`Anchored`]), tree-shape operations
/// ([`OpsTree`]), and ownership operations ([`OpsOwner`]) — the five-operation
/// surface a higher-level tool programs against when it selects a backend.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type that implements the component
/// traits. You never implement `PathOps` directly.
///
/// # Example
///
/// ```rust
/// use pathops_backend::{OpsError, PathOps};
/// use std::path::Path;
///
/// // Generic function that works with any PathOps implementation
/// fn stage_results<B: PathOps>(ops: &B, dir: &Path) -> Result<(), OpsError> {
///     if ops.exists(dir)? {
///         ops.remove(dir, true)?;
///     }
///     ops.create_directory(dir, true)
/// }
/// ```
pub trait PathOps: OpsTree + OpsOwner {}

// Blanket implementation - any type implementing both components gets PathOps for free
impl<T: OpsTree + OpsOwner> PathOps for T {}
