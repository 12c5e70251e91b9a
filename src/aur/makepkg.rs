use std::path::Path;

use duct::cmd;

use super::error::AurError;
use super::exec;

/// Build and install the package at `path` with makepkg.
///
/// The install step mutates system state outside the managed directory;
/// rollback only ever removes the local clone, never a completed install.
pub fn build_and_install(path: &Path, debug: bool) -> Result<(), AurError> {
    if debug {
        eprintln!("Executing: makepkg -si --noconfirm (in {})", path.display());
    }
    exec::run_quiet(cmd!("makepkg", "-si", "--noconfirm").dir(path), debug)
        .map_err(AurError::Build)
}
