//! Error taxonomy for the preprocessing transforms.
//!
//! Every error is raised synchronously at the offending call; nothing is
//! retried or recovered internally. A call either returns fully-formed
//! output or fails before producing any.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreprocessError {
    /// An input axis does not have the length the caller's parameters imply
    /// (channel-group sizes that don't sum to the channel count, or a ratings
    /// matrix with a different unit count than the signal tensor).
    #[error("shape mismatch on {axis} axis: expected {expected}, found {found}")]
    ShapeMismatch {
        axis: &'static str,
        expected: usize,
        found: usize,
    },

    /// Zero-length window or step. Both are sample counts and must be ≥ 1.
    #[error("invalid window parameters: window_size={window_size}, step_size={step_size}")]
    InvalidWindowParameters {
        window_size: usize,
        step_size: usize,
    },

    /// A requested rating dimension does not exist in the ratings matrix.
    #[error("rating dimension {dim} out of range for {ncols}-column ratings")]
    IndexOutOfRange { dim: usize, ncols: usize },
}
