//! Child process plumbing shared by the git, makepkg and pacman wrappers.
//!
//! Every external tool is run to completion, one at a time. In debug mode
//! the child inherits the terminal so the user sees tool output live;
//! otherwise the streams are captured and only surface as error text.

use duct::Expression;

const FALLBACK_ERROR: &str = "unknown error";

/// Run an external command, discarding its output on success.
///
/// On non-zero exit the trimmed captured stderr is returned as the error
/// message. In debug mode nothing is captured, so the message falls back
/// to a generic literal (the user already saw the stream).
pub(crate) fn run_quiet(expr: Expression, debug: bool) -> Result<(), String> {
    let expr = if debug {
        expr
    } else {
        expr.stdout_capture().stderr_capture()
    };

    let output = expr.unchecked().run().map_err(|e| e.to_string())?;
    if output.status.success() {
        return Ok(());
    }
    Err(stderr_message(&output.stderr))
}

/// Like [`run_quiet`], but stdout is captured unconditionally and returned
/// on success. In debug mode the captured text is echoed after the run so
/// the user still sees it.
pub(crate) fn run_read(expr: Expression, debug: bool) -> Result<String, String> {
    let expr = expr.stdout_capture();
    let expr = if debug { expr } else { expr.stderr_capture() };

    let output = expr.unchecked().run().map_err(|e| e.to_string())?;
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();

    if debug && !stdout.is_empty() {
        print!("{stdout}");
    }

    if output.status.success() {
        return Ok(stdout);
    }
    Err(stderr_message(&output.stderr))
}

fn stderr_message(stderr: &[u8]) -> String {
    let message = String::from_utf8_lossy(stderr).trim().to_string();
    if message.is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}
