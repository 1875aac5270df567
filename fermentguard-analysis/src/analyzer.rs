//! The analysis boundary
//!
//! ```text
//! AnalysisRequest
//!     │
//!     ├─ classifier loaded? ────────── no ─► ClassifierUnavailable
//!     ├─ photo attached? ───────────── no ─► MissingImage
//!     ├─ readings valid? ───────────── no ─► InvalidInput
//!     ├─ decode upload ─────────── error ─► ImageRejected
//!     ├─ classify ──────────────── error ─► ClassificationFailed
//!     └─ evaluate ──── unknown standard ─► NoStandard
//!                 ──── no odor score ───► MissingOdorScore
//!                 ──── verdict ─────────► Evaluated
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use fermentguard_core::{EvaluationError, Evaluator};
use fermentguard_schemas::{ProfileError, StandardsProfile};
use fermentguard_vision::{decode_image, Classifier, ClassifierConfig, ClassifierHandle};
use image::DynamicImage;

use crate::outcome::{Analysis, AnalysisOutcome};
use crate::report::{Report, StandardsReference};
use crate::request::{AnalysisRequest, ImageInput};

/// Classifier plus evaluator, shared read-only across requests
#[derive(Debug, Clone)]
pub struct Analyzer {
    evaluator: Evaluator,
    classifier: Option<Arc<Classifier>>,
}

impl Analyzer {
    /// Combine an evaluator with an optional classifier
    pub fn new(evaluator: Evaluator, classifier: Option<Arc<Classifier>>) -> Self {
        Self { evaluator, classifier }
    }

    /// Build the evaluator from `profile`, resolving ready classes against
    /// the classifier's labels
    pub fn from_profile(profile: &StandardsProfile, classifier: Option<Arc<Classifier>>) -> Result<Self, ProfileError> {
        let labels = classifier.as_ref().map(|c| c.labels());
        let evaluator = profile.build_evaluator(labels)?;

        if let Some(labels) = labels {
            for fruit in evaluator.standards().fruits() {
                if !labels.iter().any(|label| label == fruit) {
                    log::warn!("standard '{fruit}' has no matching classifier label");
                }
            }
        }

        Ok(Self::new(evaluator, classifier))
    }

    /// Load the process-wide classifier and build from `profile`.
    ///
    /// A classifier that fails to load does not fail the analyzer: it is
    /// built without one and every analysis reports
    /// `AnalysisOutcome::ClassifierUnavailable`.
    pub fn load(profile: &StandardsProfile, config: &ClassifierConfig) -> Result<Self, ProfileError> {
        let classifier = match ClassifierHandle::init(config) {
            Ok(classifier) => Some(classifier),
            Err(e) => {
                log::error!("classifier unavailable: {e}");
                None
            }
        };
        Self::from_profile(profile, classifier)
    }

    /// Whether analyses can run (the presentation layer disables its action otherwise)
    pub fn is_available(&self) -> bool {
        self.classifier.is_some()
    }

    /// Evaluator in use
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Loaded classifier
    pub fn classifier(&self) -> Option<&Arc<Classifier>> {
        self.classifier.as_ref()
    }

    /// Fruit names for the selector
    pub fn fruit_options(&self) -> Vec<&str> {
        self.evaluator.standards().fruits().collect()
    }

    /// Reference table for display
    pub fn standards_reference(&self) -> StandardsReference {
        StandardsReference::from_table(self.evaluator.standards())
    }

    /// Run one analysis
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        let outcome = self.run(request);
        match &outcome {
            AnalysisOutcome::Evaluated(analysis) => {
                log::info!("analysis complete: {}", analysis.verdict.status);
            }
            other => log::warn!("analysis stopped: {}", other.message()),
        }
        outcome
    }

    fn run(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        let Some(classifier) = self.classifier.as_ref() else {
            return AnalysisOutcome::ClassifierUnavailable;
        };

        let Some(image_input) = request.image.as_ref() else {
            return AnalysisOutcome::MissingImage;
        };

        let chemistry = match request.chemistry() {
            Ok(chemistry) => chemistry,
            Err(e) => return AnalysisOutcome::invalid_input(e),
        };

        let image: Cow<'_, DynamicImage> = match image_input {
            ImageInput::Decoded(image) => Cow::Borrowed(image),
            ImageInput::Encoded(bytes) => match decode_image(bytes) {
                Ok(image) => Cow::Owned(image),
                Err(e) => return AnalysisOutcome::ImageRejected { reason: e.to_string() },
            },
        };

        let classification = match classifier.classify(&image) {
            Ok(classification) => classification,
            Err(e) => return AnalysisOutcome::ClassificationFailed { reason: e.to_string() },
        };

        let selected = request.selected_fruit.as_deref();
        match self.evaluator.evaluate_with_selection(&classification, &chemistry, selected) {
            Ok(verdict) => {
                let report = Report::new(&classification, &chemistry, &verdict);
                AnalysisOutcome::Evaluated(Analysis {
                    classification,
                    verdict,
                    report,
                })
            }
            Err(EvaluationError::UnknownStandard { label }) => AnalysisOutcome::NoStandard { label, classification },
            Err(EvaluationError::MissingOdorScore) => AnalysisOutcome::MissingOdorScore,
        }
    }
}
