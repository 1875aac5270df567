//! Analysis outcomes
//!
//! Every way an analysis can end, as a value. The presentation layer matches
//! on the variant; it never sees an error type or a panic.

use fermentguard_core::{Classification, Quantity, Severity, ValidationError, Verdict};
use serde::Serialize;

use crate::report::Report;

/// Successful evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Classifier output
    pub classification: Classification,
    /// Readiness verdict
    pub verdict: Verdict,
    /// Formatted for display
    pub report: Report,
}

/// Result of [`Analyzer::analyze`](crate::Analyzer::analyze)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// Verdict produced
    Evaluated(Analysis),
    /// No classifier loaded in this process
    ClassifierUnavailable,
    /// Request carried no photo
    MissingImage,
    /// Table lookup needs an odor score and none was given
    MissingOdorScore,
    /// A reading is outside its domain or not a number
    InvalidInput {
        /// Offending reading
        quantity: Quantity,
        /// Operator-facing message
        message: String,
    },
    /// Upload could not be decoded
    ImageRejected {
        /// Decoder message
        reason: String,
    },
    /// Inference failed or its output did not match the labels
    ClassificationFailed {
        /// Adapter message
        reason: String,
    },
    /// Detected or selected fruit has no reference standard
    NoStandard {
        /// Label that failed the lookup
        label: String,
        /// Classifier output, for display
        classification: Classification,
    },
}

impl AnalysisOutcome {
    pub(crate) fn invalid_input(error: ValidationError) -> Self {
        let quantity = match error {
            ValidationError::OutOfRange { quantity, .. } | ValidationError::InvalidValue { quantity } => quantity,
        };
        AnalysisOutcome::InvalidInput {
            quantity,
            message: error.to_string(),
        }
    }

    /// The successful analysis, if any
    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            AnalysisOutcome::Evaluated(analysis) => Some(analysis),
            _ => None,
        }
    }

    /// The verdict, if one was produced
    pub fn verdict(&self) -> Option<&Verdict> {
        self.analysis().map(|analysis| &analysis.verdict)
    }

    /// How prominently to show this outcome
    pub fn severity(&self) -> Severity {
        match self {
            AnalysisOutcome::Evaluated(analysis) => analysis.verdict.status.severity(),
            AnalysisOutcome::MissingImage | AnalysisOutcome::MissingOdorScore | AnalysisOutcome::InvalidInput { .. } => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    /// One-line message for the operator
    pub fn message(&self) -> String {
        match self {
            AnalysisOutcome::Evaluated(analysis) => {
                format!("{}: {}", analysis.report.headline, analysis.report.status.text)
            }
            AnalysisOutcome::ClassifierUnavailable => "Classifier is not loaded, analysis is disabled".to_string(),
            AnalysisOutcome::MissingImage => "Please upload an image".to_string(),
            AnalysisOutcome::MissingOdorScore => "Please rate the odor before analyzing".to_string(),
            AnalysisOutcome::InvalidInput { message, .. } => message.clone(),
            AnalysisOutcome::ImageRejected { reason } => format!("Cannot read the uploaded image: {reason}"),
            AnalysisOutcome::ClassificationFailed { reason } => format!("Classification failed: {reason}"),
            AnalysisOutcome::NoStandard { label, .. } => format!("No standard found for '{label}'"),
        }
    }
}
