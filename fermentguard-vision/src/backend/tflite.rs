//! TFLite flat-buffer models via `tract-tflite`.

use std::path::Path;

use tract_core::prelude::*;

use super::InferenceBackend;
use crate::preprocess::InputTensor;
use crate::{VisionError, VisionResult};

/// TFLite model, optimized once at load time
pub struct TfliteBackend {
    plan: TypedRunnableModel<TypedModel>,
    model_name: String,
}

impl TfliteBackend {
    /// Load and optimize a `.tflite` model.
    ///
    /// # Errors
    /// Returns `VisionError::ModelLoad` if the file is missing or cannot be
    /// parsed as a TFLite model.
    pub fn load(model_path: impl AsRef<Path>) -> VisionResult<Self> {
        let path = model_path.as_ref();
        let load_error = |reason: String| VisionError::ModelLoad {
            path: path.display().to_string(),
            reason,
        };

        if !path.exists() {
            return Err(load_error("model file not found".to_string()));
        }

        let plan = tract_tflite::tflite()
            .model_for_path(path)
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| load_error(e.to_string()))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("tflite-model")
            .to_string();

        log::info!("TFLite model '{}' loaded from {}", model_name, path.display());

        Ok(Self { plan, model_name })
    }
}

impl InferenceBackend for TfliteBackend {
    fn infer(&self, input: &InputTensor) -> VisionResult<Vec<f32>> {
        let tensor = Tensor::from_shape(&input.shape(), input.as_slice())
            .map_err(|e| VisionError::Inference(format!("tensor creation error: {e}")))?;

        let outputs = self
            .plan
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| VisionError::Inference(e.to_string()))?;

        let first = outputs
            .first()
            .ok_or_else(|| VisionError::Inference("no output tensor".to_string()))?;

        let extraction = |e: TractError| VisionError::Inference(format!("tensor extraction failed: {e}"));

        if first.datum_type().unquantized() == u8::datum_type() {
            let raw = first.as_slice::<u8>().map_err(extraction)?;
            log::debug!("dequantizing {} uint8 scores", raw.len());
            return Ok(super::scores_from_u8(raw));
        }

        let scores = first.cast_to::<f32>().map_err(extraction)?;
        let scores = scores.as_slice::<f32>().map_err(extraction)?;

        Ok(scores.to_vec())
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
