//! Classifier output as seen by the evaluator

/// Predicted class for one image
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// Class name from the label list
    pub label: String,
    /// Position of `label` in the label list
    pub class_index: usize,
    /// Score of the predicted class, in `[0, 1]`
    pub confidence: f32,
}

impl Classification {
    /// Build a classification; confidence is clamped into `[0, 1]`
    pub fn new(label: impl Into<String>, class_index: usize, confidence: f32) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            label: label.into(),
            class_index,
            confidence,
        }
    }

    /// Confidence as a percentage for display
    pub fn confidence_percent(&self) -> f32 {
        self.confidence * 100.0
    }
}
