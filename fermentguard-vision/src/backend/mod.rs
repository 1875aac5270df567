//! Inference Backends
//!
//! The classifier only needs "tensor in, score vector out". Backends hide the
//! runtime behind that seam: the TFLite runtime in production, fixed score
//! vectors in tests.

use crate::preprocess::InputTensor;
use crate::VisionResult;

#[cfg(feature = "tflite")]
mod tflite;

#[cfg(feature = "tflite")]
pub use tflite::TfliteBackend;

/// One synchronous forward pass
pub trait InferenceBackend: Send + Sync {
    /// Run the model on one NHWC tensor and return the first output row
    fn infer(&self, input: &InputTensor) -> VisionResult<Vec<f32>>;

    /// Short name for logs
    fn name(&self) -> &str {
        "backend"
    }
}

/// Map uint8-quantized class scores (0..=255) onto [0, 1]
///
/// Quantized classifiers emit probabilities scaled by 255; they must not be
/// softmaxed as if they were logits.
pub fn scores_from_u8(raw: &[u8]) -> Vec<f32> {
    raw.iter().map(|&v| f32::from(v) / 255.0).collect()
}

impl<B: InferenceBackend + ?Sized> InferenceBackend for Box<B> {
    fn infer(&self, input: &InputTensor) -> VisionResult<Vec<f32>> {
        (**self).infer(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
