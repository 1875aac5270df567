//! Classifier Adapter Errors
//!
//! Load failures (`ModelLoad`, `LabelLoad`) happen once, when the classifier
//! is built, and mean "no classifier this process". Everything else is
//! per-image and leaves the loaded classifier usable.

use thiserror::Error;

/// Result type for the adapter
pub type VisionResult<T> = Result<T, VisionError>;

/// Errors raised by the classifier adapter
#[derive(Error, Debug)]
pub enum VisionError {
    /// Model artifact missing or unreadable
    #[error("failed to load model {path}: {reason}")]
    ModelLoad {
        /// Model file path
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// Label artifact missing, unreadable or empty
    #[error("failed to load labels {path}: {reason}")]
    LabelLoad {
        /// Label file path
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// Model output does not line up with the label list
    #[error("model produced {outputs} scores but {labels} labels are loaded")]
    LabelCountMismatch {
        /// Width of the output vector
        outputs: usize,
        /// Number of labels
        labels: usize,
    },

    /// Forward pass failed
    #[error("inference failed: {0}")]
    Inference(String),

    /// Uploaded bytes are not a supported image
    #[error("cannot decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
}
