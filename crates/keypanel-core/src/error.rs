//! Error types for canvas backends.

use thiserror::Error;

/// Errors a [`Canvas`](crate::Canvas) backend can report while painting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// The backend failed to execute a draw call.
    #[error("canvas backend error: {0}")]
    Backend(String),

    /// `pop_clip` was called with no clip pushed.
    #[error("clip stack underflow")]
    ClipUnderflow,
}

/// Result of a single canvas operation.
pub type CanvasResult = Result<(), CanvasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = CanvasError::Backend("surface lost".to_string());
        assert!(err.to_string().contains("canvas backend error"));
        assert!(err.to_string().contains("surface lost"));
    }

    #[test]
    fn test_clip_underflow_display() {
        assert_eq!(CanvasError::ClipUnderflow.to_string(), "clip stack underflow");
    }
}
