//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation.
///
/// The layout functions are total over well-typed input: dangling edge or
/// territory references are tolerated, and geometry clamping is reported
/// rather than raised. The only failure modes are the explicit traversal
/// guard and a degenerate configuration.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The depth-resolution recursion bound was exceeded. Callers should
    /// fall back to treating every node as a root rather than abort.
    #[error("depth resolution exceeded {limit} levels at node '{node}'")]
    GraphTooDeep { node: String, limit: usize },

    /// Invalid layout configuration
    #[error("invalid layout configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl LayoutError {
    /// Create a traversal-bound error
    pub fn too_deep(node: impl Into<String>, limit: usize) -> Self {
        Self::GraphTooDeep {
            node: node.into(),
            limit,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Whether the caller can recover by restarting with flat depths
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::GraphTooDeep { .. })
    }
}
