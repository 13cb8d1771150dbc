//! Recoverable errors

use thiserror::Error;

/// Failure to render a contour name template. Callers recover by falling
/// back to a generated default name; this never aborts a contour stack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The template references a substitution key outside the recognized
    /// set (`object`, `position`, `index`).
    #[error("unknown substitution key `{{{0}}}`")]
    UnknownKey(String),
    /// A `{` placeholder is never closed.
    #[error("unclosed placeholder at byte {0}")]
    Unclosed(usize),
}
