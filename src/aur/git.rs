use std::path::Path;

use duct::cmd;

use super::error::AurError;
use super::exec;

/// Phrase git prints when a pull found nothing new. Update detection
/// keys off this exact wording; see [`pull_brought_changes`].
const UP_TO_DATE_MARKER: &str = "Already up to date.";

/// Result of a `git pull`, reduced to what the updater needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullOutcome {
    pub changed: bool,
}

/// Clone `url` into `dest`.
///
/// A failed clone may leave a partial directory behind; callers are
/// responsible for cleaning up the destination.
pub fn clone(url: &str, dest: &Path, debug: bool) -> Result<(), AurError> {
    if debug {
        eprintln!("Executing: git clone {} {}", url, dest.display());
    }
    exec::run_quiet(cmd!("git", "clone", url, dest), debug).map_err(AurError::Fetch)
}

/// Pull the latest changes in an existing clone.
pub fn pull(path: &Path, debug: bool) -> Result<PullOutcome, AurError> {
    if debug {
        eprintln!("Executing: git pull (in {})", path.display());
    }
    let stdout = exec::run_read(cmd!("git", "pull").dir(path), debug).map_err(AurError::Fetch)?;
    Ok(PullOutcome {
        changed: pull_brought_changes(&stdout),
    })
}

/// Anything other than the up-to-date marker in the pull output counts
/// as new content. Tied to git's human-readable wording; a pull that
/// fails outright never reaches this point.
fn pull_brought_changes(stdout: &str) -> bool {
    !stdout.contains(UP_TO_DATE_MARKER)
}
