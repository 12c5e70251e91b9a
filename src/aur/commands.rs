//! Lifecycle flows behind the install/remove/update/list subcommands.
//!
//! Install and remove treat every target independently and keep going
//! past failures; update stops at the first broken package. A failed
//! install is rolled back by deleting the clone, so after any command
//! returns, every directory under the store is a complete source tree.

use anyhow::{Result, anyhow};
use colored::{ColoredString, Colorize};

use super::config::Config;
use super::error::AurError;
use super::store::{self, PackageStore};
use super::{git, makepkg, pacman};

/// Where a package ended up after one lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    AlreadyPresent,
    NoChange,
    NotManaged,
    FetchFailed,
    BuildFailed,
    RemoveFailed,
}

impl Outcome {
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Outcome::FetchFailed | Outcome::BuildFailed | Outcome::RemoveFailed
        )
    }
}

pub fn install(config: &Config, sources: &[String], debug: bool) -> Result<()> {
    preflight(&["git", "makepkg"])?;

    // Derive and validate every name before the first side effect.
    let mut targets = Vec::with_capacity(sources.len());
    for source in sources {
        targets.push((source.as_str(), store::package_name_from_target(source)?));
    }

    let store = PackageStore::open(config)?;

    let mut any_failed = false;
    for (url, name) in &targets {
        if install_one(&store, url, name, debug).is_failure() {
            any_failed = true;
        }
    }

    if any_failed {
        Err(anyhow!(
            "one or more packages failed to install (see error messages above)"
        ))
    } else {
        Ok(())
    }
}

fn install_one(store: &PackageStore, url: &str, name: &str, debug: bool) -> Outcome {
    if store.is_managed(name) {
        println!("Package {name} is already installed, nothing to do");
        return Outcome::AlreadyPresent;
    }

    println!("Installing package: {name}");
    let dest = store.package_path(name);

    if let Err(e) = git::clone(url, &dest, debug) {
        report_error(name, &e);
        rollback(store, name);
        return Outcome::FetchFailed;
    }

    if let Err(e) = makepkg::build_and_install(&dest, debug) {
        report_error(name, &e);
        rollback(store, name);
        return Outcome::BuildFailed;
    }

    println!("Package {name} was successfully installed");
    Outcome::Success
}

/// Undo a partial install by deleting the cloned directory. Safe to call
/// when the clone never produced one.
fn rollback(store: &PackageStore, name: &str) {
    println!("Rolling back installation of {name}");
    if let Err(e) = store.remove_package_dir(name) {
        eprintln!("{} rollback of {name} failed: {e:#}", error_tag());
    }
}

pub fn remove(config: &Config, names: &[String], debug: bool) -> Result<()> {
    preflight(&["pacman"])?;

    let mut targets = Vec::with_capacity(names.len());
    for raw in names {
        targets.push(store::package_name_from_target(raw)?);
    }

    let store = PackageStore::open(config)?;

    let mut any_failed = false;
    for name in &targets {
        if remove_one(config, &store, name, debug).is_failure() {
            any_failed = true;
        }
    }

    if any_failed {
        Err(anyhow!(
            "one or more packages failed to remove (see error messages above)"
        ))
    } else {
        Ok(())
    }
}

fn remove_one(config: &Config, store: &PackageStore, name: &str, debug: bool) -> Outcome {
    if !store.is_managed(name) {
        println!("Package {name} is not managed by aurum, nothing to do");
        return Outcome::NotManaged;
    }

    println!("Removing package: {name}");

    if let Err(e) = pacman::remove(config, name, debug) {
        // The local tree stays in place so a retry still finds the
        // package.
        report_error(name, &e);
        return Outcome::RemoveFailed;
    }

    if let Err(e) = store.remove_package_dir(name) {
        eprintln!("{} {name}: {e:#}", error_tag());
        return Outcome::RemoveFailed;
    }

    println!("Package {name} was successfully removed");
    Outcome::Success
}

pub fn update(config: &Config, debug: bool) -> Result<()> {
    preflight(&["git", "makepkg"])?;
    let store = PackageStore::open(config)?;

    let mut any_changed = false;
    for name in store.list_managed()? {
        match update_one(&store, &name, debug) {
            Outcome::Success => any_changed = true,
            Outcome::NoChange => {}
            // The first failure stops the whole update run.
            _ => {
                return Err(anyhow!(
                    "update stopped at {name}; remaining packages were not attempted"
                ));
            }
        }
    }

    if !any_changed {
        println!("Nothing to do.");
    }
    Ok(())
}

fn update_one(store: &PackageStore, name: &str, debug: bool) -> Outcome {
    println!("Checking updates for: {name}");
    let path = store.package_path(name);

    let pulled = match git::pull(&path, debug) {
        Ok(p) => p,
        Err(e) => {
            report_error(name, &e);
            return Outcome::FetchFailed;
        }
    };

    if !pulled.changed {
        if debug {
            eprintln!("{name} is already up to date");
        }
        return Outcome::NoChange;
    }

    if let Err(e) = makepkg::build_and_install(&path, debug) {
        report_error(name, &e);
        return Outcome::BuildFailed;
    }

    println!("Package {name} was successfully updated");
    Outcome::Success
}

pub fn list(config: &Config) -> Result<()> {
    let store = PackageStore::open(config)?;
    let packages = store.list_managed()?;

    if packages.is_empty() {
        println!("No packages managed by aurum");
        return Ok(());
    }
    for name in packages {
        println!("{name}");
    }
    Ok(())
}

/// Fail early when a required external tool is missing from PATH.
fn preflight(tools: &[&str]) -> Result<()> {
    for tool in tools {
        which::which(tool)
            .map_err(|_| anyhow!("required tool '{tool}' not found in PATH"))?;
    }
    Ok(())
}

fn error_tag() -> ColoredString {
    "==> ERROR:".red().bold()
}

fn report_error(name: &str, err: &AurError) {
    eprintln!("{} {name}: {err}", error_tag());
}
