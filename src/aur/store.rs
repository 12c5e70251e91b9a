use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::config::Config;
use super::error::AurError;

/// The on-disk store of managed packages.
///
/// A package is managed iff a directory of its name exists directly under
/// the store root; there is no separate index file. The lifecycle
/// commands are the only writers, everything else just reads.
pub struct PackageStore {
    root: PathBuf,
}

impl PackageStore {
    /// Open the store, creating the root directory if it does not exist.
    pub fn open(config: &Config) -> Result<Self> {
        let root = config.packages_root()?;
        fs::create_dir_all(&root)
            .with_context(|| format!("creating package directory at {}", root.display()))?;
        Ok(PackageStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a package of this name lives at. Pure join, no filesystem
    /// access.
    pub fn package_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn is_managed(&self, name: &str) -> bool {
        self.package_path(name).is_dir()
    }

    /// Names of all managed packages, in filesystem enumeration order.
    pub fn list_managed(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("reading package directory {}", self.root.display()))?;
        for entry in entries {
            let entry = entry
                .with_context(|| format!("reading package directory {}", self.root.display()))?;
            if !entry.path().is_dir() {
                continue;
            }
            // A non-UTF-8 name cannot have been created by this tool.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Delete a package's local source tree. Deleting a package that has
    /// no directory is a no-op, so rollback can always run.
    pub fn remove_package_dir(&self, name: &str) -> Result<()> {
        let path = self.package_path(name);
        if path.exists() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("removing {}", path.display()))?;
        }
        Ok(())
    }
}

/// Derive the package name from an install or remove target.
///
/// Targets are repository URLs or bare names; the name is the last '/'-
/// or ':'-separated segment with a trailing ".git" stripped. Anything
/// that does not derive to a usable directory name is rejected before
/// any side effect happens.
pub fn package_name_from_target(target: &str) -> Result<String, AurError> {
    let invalid = |reason| AurError::InvalidTarget {
        target: target.to_string(),
        reason,
    };

    let s = target.trim_end_matches('/').trim_end_matches(".git");
    let name = s
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(s)
        .to_string();

    if name.is_empty() {
        return Err(invalid("derived name is empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("derived name is a relative path component"));
    }
    if name.contains(['\\', '\0']) {
        return Err(invalid("derived name is not filesystem safe"));
    }
    Ok(name)
}
