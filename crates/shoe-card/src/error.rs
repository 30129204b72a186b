//! Card error types.

use thiserror::Error;

/// Errors that can occur while building card inputs.
///
/// Rendering itself is infallible; these surface only when constructing
/// a display record from untrusted data (e.g., the preview tool's
/// embedded samples).
#[derive(Error, Debug, PartialEq)]
pub enum CardError {
    /// Slug is empty.
    #[error("Slug must not be empty")]
    EmptySlug,

    /// Slug contains a character that is not URL-path safe.
    #[error("Invalid character {1:?} in slug {0:?}")]
    InvalidSlugChar(String, char),
}
