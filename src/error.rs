//! Crate-level error type for the pipeline boundary

use thiserror::Error;

use crate::layout::LayoutError;
use crate::profile::ProfileError;

/// Errors surfaced by the top-level pipeline and the CLI
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Error reading or writing a map file
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed map JSON on the wire boundary
    #[error("malformed map JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Error loading a layout profile
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Error during layout computation
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_wraps() {
        let err: AtlasError = LayoutError::too_deep("n1", 16).into();
        assert!(err.to_string().contains("layout error"));
        assert!(err.to_string().contains("n1"));
    }
}
