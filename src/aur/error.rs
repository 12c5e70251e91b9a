use thiserror::Error;

/// Errors raised at the boundaries to the external tools this helper
/// drives. The diagnostic strings carry the tool's captured stderr, or a
/// fallback literal when the tool printed nothing.
#[derive(Error, Debug)]
pub enum AurError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("build failed: {0}")]
    Build(String),

    #[error("removal failed: {0}")]
    Remove(String),

    #[error("invalid package target '{target}': {reason}")]
    InvalidTarget {
        target: String,
        reason: &'static str,
    },
}
