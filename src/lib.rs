//! # pathops-backend
//!
//! Core traits and types for **pluggable local and remote path-operation
//! backends**.
//!
//! This crate provides the contract that path-operation backends implement:
//! directory creation, existence probing, removal, and permission/group
//! changes, all anchored to a working-directory context. It contains **only
//! trait definitions and types** — concrete backends (native filesystem,
//! shell sessions, remote channels) live downstream.
//!
//! ---
//!
//! ## Quick Start
//!
//! Most users only need [`PathOps`] — the full five-operation contract.
//!
//! ```rust
//! use pathops_backend::{OpsError, PathOps};
//! use std::path::Path;
//!
//! // Generic function that works with any PathOps implementation
//! fn provision<B: PathOps>(ops: &B) -> Result<(), OpsError> {
//!     ops.create_directory(Path::new("dataset/raw"), true)?;
//!     ops.change_permissions(Path::new("dataset"), "user_readonly".parse()?, true)?;
//!     if ops.exists(Path::new("scratch"))? {
//!         ops.remove(Path::new("scratch"), true)?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Relative references like `dataset/raw` resolve against the backend's
//! [`WorkDir`] context; remote-aware backends carry a second context for the
//! remote side.
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`PathOps`] | The full local contract — tree-shape plus ownership operations |
//! | [`RemotePathOps`] | Remote-aware extension with a split working-directory context |
//! | [`WorkDir`] | Absolute, normalized working-directory context |
//! | [`ModeLabel`] | Symbolic permission preset (`user_readonly`, …) |
//! | [`GroupLabel`] | Validated group name for ownership changes |
//! | [`OpsError`] | Error taxonomy with context |
//!
//! ---
//!
//! ## Which Trait Should I Use?
//!
//! **[`PathOps`]** — When you consume a backend.
//! - Methods: `create_directory`, `exists`, `remove`, `change_permissions`,
//!   `change_group`, `cwd`
//! - Blanket-implemented; never implemented directly
//!
//! **[`OpsTree`] / [`OpsOwner`]** — When you write a backend.
//! - Implement the components (plus [`Anchored`]) and the composite comes for
//!   free
//!
//! **[`RemotePathOps`]** — When the backend targets a remote endpoint.
//! - Adds `remote_cwd`; remote-side references resolve against it, local ones
//!   against `cwd` — never mixed
//!
//! ---
//!
//! ## Symbolic Labels
//!
//! Permissions are named presets rather than raw bits, so one vocabulary maps
//! onto differing permission models (POSIX bits, ACLs) without leaking
//! POSIX semantics into the interface:
//!
//! ```rust
//! use pathops_backend::{ModeLabel, OpsError};
//!
//! let mode: ModeLabel = "user_readonly".parse()?;
//! assert!(!mode.writable());
//! assert_eq!(mode.dir_mode(), 0o500); // default POSIX projection
//! # Ok::<(), OpsError>(())
//! ```
//!
//! ---
//!
//! ## Error Handling
//!
//! All operations return `Result<T, OpsError>`. Errors include context:
//!
//! ```rust
//! use pathops_backend::OpsError;
//! use std::path::PathBuf;
//!
//! let err = OpsError::NotFound { path: PathBuf::from("/missing") };
//! assert_eq!(err.to_string(), "not found: /missing");
//!
//! let err = OpsError::PermissionDenied {
//!     path: PathBuf::from("/secret"),
//!     operation: "change_group",
//! };
//! assert_eq!(err.to_string(), "change_group: permission denied: /secret");
//! ```
//!
//! Every failure surfaces to the caller; whether transient conditions (e.g. a
//! flaky remote channel) are retried before surfacing is a backend decision.
//!
//! ---
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync`. Methods take `&self` (not `&mut self`),
//! enabling safe concurrent access. Backends use interior mutability
//! internally; the context values are immutable after construction.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`ModeLabel`] and [`GroupLabel`] |
//!
//! ---
//!
//! ## Crate Organization
//!
//! This crate (`pathops-backend`) contains **only traits and types**.
//! Concrete backends and middleware live in downstream crates; the in-memory
//! backends in this repository's tests and demos exist to prove the hierarchy
//! is implementable.

// Private modules
mod context;
mod error;
mod ext;
mod layer;
mod markers;
mod traits;
mod types;

// Public re-exports - error types
pub use error::OpsError;

// Public re-exports - core types
pub use context::WorkDir;
pub use types::{GroupLabel, ModeLabel};

// Public re-exports - operation traits
pub use traits::{Anchored, OpsOwner, OpsTree, PathOps, RemotePathOps};

// Public re-exports - infrastructure
pub use ext::OpsExt;
pub use layer::{Layer, LayerExt};
pub use markers::SelfResolving;
