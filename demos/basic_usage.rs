//! Basic usage of pathops-backend traits.
//!
//! This example demonstrates the five operations against a minimal in-memory
//! backend, driven through generic functions that work with any `PathOps`
//! implementation.
//!
//! Run with: `cargo run --example basic_usage`

use pathops_backend::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

// =============================================================================
// Step 1: Create a minimal backend implementation
// =============================================================================

/// A simple in-memory backend implementing the component traits.
///
/// Each entry tracks its permission preset and group; that is all the
/// ownership operations need. This is the minimum viable implementation to
/// use pathops-backend.
struct SimpleOps {
    cwd: WorkDir,
    entries: RwLock<HashMap<PathBuf, (ModeLabel, String)>>,
}

impl SimpleOps {
    fn new(cwd: &str) -> Result<Self, OpsError> {
        let ops = Self {
            cwd: WorkDir::new(cwd)?,
            entries: RwLock::new(HashMap::new()),
        };
        let mut entries = ops.entries.write().unwrap();
        let mut dir = Some(ops.cwd.path());
        while let Some(d) = dir {
            entries.insert(
                d.to_path_buf(),
                (ModeLabel::UserWritable, "users".into()),
            );
            dir = d.parent();
        }
        drop(entries);
        Ok(ops)
    }
}

impl Anchored for SimpleOps {
    fn cwd(&self) -> &WorkDir {
        &self.cwd
    }
}

impl OpsTree for SimpleOps {
    fn create_directory(&self, path: &Path, force: bool) -> Result<(), OpsError> {
        let path = self.cwd.resolve(path);
        let mut entries = self.entries.write().unwrap();
        if entries.contains_key(&path) {
            if force {
                return Ok(());
            }
            return Err(OpsError::AlreadyExists { path });
        }
        if let Some(parent) = path.parent() {
            if !entries.contains_key(parent) {
                if !force {
                    return Err(OpsError::MissingParent { path });
                }
                let mut dir = Some(parent);
                while let Some(d) = dir {
                    if entries.contains_key(d) {
                        break;
                    }
                    entries.insert(
                        d.to_path_buf(),
                        (ModeLabel::UserWritable, "users".into()),
                    );
                    dir = d.parent();
                }
            }
        }
        entries.insert(path, (ModeLabel::UserWritable, "users".into()));
        Ok(())
    }

    fn exists(&self, path: &Path) -> Result<bool, OpsError> {
        let path = self.cwd.resolve(path);
        Ok(self.entries.read().unwrap().contains_key(&path))
    }

    fn remove(&self, path: &Path, recursive: bool) -> Result<(), OpsError> {
        let path = self.cwd.resolve(path);
        let mut entries = self.entries.write().unwrap();
        if !entries.contains_key(&path) {
            return Err(OpsError::NotFound { path });
        }
        if !recursive && entries.keys().any(|k| k != &path && k.starts_with(&path)) {
            return Err(OpsError::NotEmpty { path });
        }
        entries.retain(|k, _| !k.starts_with(&path));
        Ok(())
    }
}

impl OpsOwner for SimpleOps {
    fn change_permissions(
        &self,
        path: &Path,
        mode: ModeLabel,
        recursive: bool,
    ) -> Result<(), OpsError> {
        let path = self.cwd.resolve(path);
        let mut entries = self.entries.write().unwrap();
        if !entries.contains_key(&path) {
            return Err(OpsError::NotFound { path });
        }
        for (k, entry) in entries.iter_mut() {
            if k == &path || (recursive && k.starts_with(&path)) {
                entry.0 = mode;
            }
        }
        Ok(())
    }

    fn change_group(
        &self,
        path: &Path,
        group: &GroupLabel,
        recursive: bool,
    ) -> Result<(), OpsError> {
        let path = self.cwd.resolve(path);
        let mut entries = self.entries.write().unwrap();
        if !entries.contains_key(&path) {
            return Err(OpsError::NotFound { path });
        }
        for (k, entry) in entries.iter_mut() {
            if k == &path || (recursive && k.starts_with(&path)) {
                entry.1 = group.as_str().to_string();
            }
        }
        Ok(())
    }
}

// =============================================================================
// Step 2: Write generic functions against the contract
// =============================================================================

/// Lay out a dataset skeleton. Works with any PathOps backend.
fn provision_dataset<B: PathOps>(ops: &B, name: &str) -> Result<(), OpsError> {
    let root = PathBuf::from(name);
    ops.create_directory(&root.join("raw"), true)?;
    ops.create_directory(&root.join("derived"), true)?;
    ops.change_group(&root, &"users".parse()?, true)?;
    ops.change_permissions(&root.join("raw"), ModeLabel::UserReadonly, true)?;
    Ok(())
}

/// Tear down a dataset if present, reporting whether anything was removed.
fn teardown_dataset<B: PathOps>(ops: &B, name: &str) -> Result<bool, OpsError> {
    ops.remove_if_exists(Path::new(name), true)
}

// =============================================================================
// Step 3: Drive the backend
// =============================================================================

fn main() -> Result<(), OpsError> {
    let ops = SimpleOps::new("/work")?;
    println!("anchored at {}", ops.cwd().path().display());

    provision_dataset(&ops, "dataset")?;
    println!("dataset/raw exists: {}", ops.exists(Path::new("dataset/raw"))?);
    println!(
        "relative reference resolves to {}",
        ops.resolve(Path::new("dataset/raw")).display()
    );

    // force=false surfaces the existing directory
    match ops.create_directory(Path::new("dataset/raw"), false) {
        Err(OpsError::AlreadyExists { path }) => println!("already there: {}", path.display()),
        other => println!("unexpected: {other:?}"),
    }

    let removed = teardown_dataset(&ops, "dataset")?;
    println!("removed: {removed}");
    println!("dataset exists: {}", ops.exists(Path::new("dataset"))?);

    Ok(())
}
