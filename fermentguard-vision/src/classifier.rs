//! Image Classifier
//!
//! ## Post-processing
//!
//! The model's first output row is one score per label. Exported classifiers
//! normally end in a softmax, but some emit raw logits; if any score falls
//! outside [0, 1] the row is softmax-normalized first so the reported
//! confidence is always a probability. Arg-max picks the class and the first
//! index wins ties.
//!
//! A row whose width differs from the label count is an error, never a
//! silent truncation.

use std::fmt;

use fermentguard_core::Classification;
use image::DynamicImage;

use crate::backend::InferenceBackend;
use crate::config::ClassifierConfig;
use crate::labels::load_labels;
use crate::preprocess::{preprocess_to, InputTensor};
use crate::{constants::INPUT_SIZE, VisionError, VisionResult};

/// Labels plus a loaded model
pub struct Classifier {
    labels: Vec<String>,
    backend: Box<dyn InferenceBackend>,
    input_size: u32,
}

impl Classifier {
    /// Pair a label list with a backend
    pub fn new(labels: Vec<String>, backend: impl InferenceBackend + 'static) -> VisionResult<Self> {
        if labels.is_empty() {
            return Err(VisionError::LabelLoad {
                path: "<memory>".to_string(),
                reason: "no labels found".to_string(),
            });
        }

        Ok(Self {
            labels,
            backend: Box::new(backend),
            input_size: INPUT_SIZE,
        })
    }

    /// Override the square input side
    pub fn with_input_size(mut self, input_size: u32) -> Self {
        self.input_size = input_size;
        self
    }

    /// Load both artifacts named by `config`.
    ///
    /// Labels are read first. Without the `tflite` feature there is no model
    /// runtime and this always ends in `VisionError::ModelLoad`.
    pub fn from_config(config: &ClassifierConfig) -> VisionResult<Self> {
        let labels = load_labels(&config.labels_path, config.label_format)?;
        Self::with_runtime(labels, config)
    }

    #[cfg(feature = "tflite")]
    fn with_runtime(labels: Vec<String>, config: &ClassifierConfig) -> VisionResult<Self> {
        let backend = crate::backend::TfliteBackend::load(&config.model_path)?;
        let classifier = Self::new(labels, backend)?.with_input_size(config.input_size);
        log::info!(
            "classifier ready: {} labels, {}x{} input",
            classifier.labels.len(),
            config.input_size,
            config.input_size
        );
        Ok(classifier)
    }

    #[cfg(not(feature = "tflite"))]
    fn with_runtime(labels: Vec<String>, config: &ClassifierConfig) -> VisionResult<Self> {
        log::warn!("discarding {} labels, no model runtime compiled in", labels.len());
        Err(VisionError::ModelLoad {
            path: config.model_path.display().to_string(),
            reason: "built without the `tflite` feature".to_string(),
        })
    }

    /// Class names in output order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Square input side
    pub fn input_size(&self) -> u32 {
        self.input_size
    }

    /// Classify one RGB image
    pub fn classify(&self, image: &DynamicImage) -> VisionResult<Classification> {
        let tensor = preprocess_to(image, self.input_size);
        self.classify_tensor(&tensor)
    }

    /// Classify an already preprocessed tensor
    pub fn classify_tensor(&self, tensor: &InputTensor) -> VisionResult<Classification> {
        let scores = self.backend.infer(tensor)?;
        self.interpret(&scores)
    }

    fn interpret(&self, scores: &[f32]) -> VisionResult<Classification> {
        if scores.len() != self.labels.len() {
            log::warn!(
                "{} returned {} scores for {} labels",
                self.backend.name(),
                scores.len(),
                self.labels.len()
            );
            return Err(VisionError::LabelCountMismatch {
                outputs: scores.len(),
                labels: self.labels.len(),
            });
        }

        if scores.iter().any(|s| !s.is_finite()) {
            return Err(VisionError::Inference("model produced a non-finite score".to_string()));
        }

        let probabilities = if scores.iter().all(|s| (0.0..=1.0).contains(s)) {
            scores.to_vec()
        } else {
            log::warn!("{} output is not a probability vector, applying softmax", self.backend.name());
            softmax(scores)
        };

        let (class_index, confidence) = argmax(&probabilities);
        let label = &self.labels[class_index];

        log::debug!("classified as '{}' (index {}, confidence {:.3})", label, class_index, confidence);
        Ok(Classification::new(label.clone(), class_index, confidence))
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("labels", &self.labels)
            .field("backend", &self.backend.name())
            .field("input_size", &self.input_size)
            .finish()
    }
}

/// Index and value of the largest score; earliest index on ties.
/// `scores` must be non-empty.
fn argmax(scores: &[f32]) -> (usize, f32) {
    let mut best = (0, scores[0]);
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > best.1 {
            best = (i, score);
        }
    }
    best
}

fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<f32>);

    impl InferenceBackend for Fixed {
        fn infer(&self, _input: &InputTensor) -> VisionResult<Vec<f32>> {
            Ok(self.0.clone())
        }
    }

    fn labels() -> Vec<String> {
        ["Banana", "Papaya", "Pumpkin"].map(String::from).to_vec()
    }

    fn image() -> DynamicImage {
        DynamicImage::new_rgb8(64, 48)
    }

    #[test]
    fn picks_highest_probability() {
        let classifier = Classifier::new(labels(), Fixed(vec![0.1, 0.7, 0.2])).unwrap();
        let result = classifier.classify(&image()).unwrap();
        assert_eq!(result.label, "Papaya");
        assert_eq!(result.class_index, 1);
        assert!((result.confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn first_index_wins_ties() {
        let classifier = Classifier::new(labels(), Fixed(vec![0.4, 0.4, 0.2])).unwrap();
        assert_eq!(classifier.classify(&image()).unwrap().class_index, 0);
    }

    #[test]
    fn logits_are_softmaxed() {
        let classifier = Classifier::new(labels(), Fixed(vec![2.0, -1.0, 0.5])).unwrap();
        let result = classifier.classify(&image()).unwrap();
        assert_eq!(result.label, "Banana");
        assert!(result.confidence > 0.0 && result.confidence < 1.0);

        let expected = 1.0 / (1.0 + (-3.0f32).exp() + (-1.5f32).exp());
        assert!((result.confidence - expected).abs() < 1e-5);
    }

    #[test]
    fn width_mismatch_is_an_error() {
        let classifier = Classifier::new(labels(), Fixed(vec![0.5, 0.5])).unwrap();
        assert!(matches!(
            classifier.classify(&image()),
            Err(VisionError::LabelCountMismatch { outputs: 2, labels: 3 })
        ));
    }

    #[test]
    fn nan_scores_are_rejected() {
        let classifier = Classifier::new(labels(), Fixed(vec![f32::NAN, 0.5, 0.5])).unwrap();
        assert!(matches!(classifier.classify(&image()), Err(VisionError::Inference(_))));
    }

    #[test]
    fn empty_labels_rejected() {
        assert!(matches!(
            Classifier::new(Vec::new(), Fixed(vec![])),
            Err(VisionError::LabelLoad { .. })
        ));
    }
}
