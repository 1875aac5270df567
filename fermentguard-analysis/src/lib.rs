//! # FermentGuard Analysis
//!
//! The one call a dashboard makes: hand over the photo and the readings, get
//! back an [`AnalysisOutcome`]. Load failures, missing inputs, unknown fruit
//! and bad readings all arrive as outcome variants, so the caller only has to
//! render them.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use fermentguard_analysis::{AnalysisOutcome, AnalysisRequest, Analyzer};
//! use fermentguard_schemas::default_profile;
//! use fermentguard_vision::{Classifier, InferenceBackend, InputTensor, VisionResult};
//! use image::DynamicImage;
//!
//! struct Fixed;
//!
//! impl InferenceBackend for Fixed {
//!     fn infer(&self, _input: &InputTensor) -> VisionResult<Vec<f32>> {
//!         Ok(vec![0.9, 0.05, 0.02, 0.02, 0.01])
//!     }
//! }
//!
//! let labels = ["Banana", "Papaya", "Pumpkin", "Pineapple", "Watermelon"].map(String::from).to_vec();
//! let classifier = Arc::new(Classifier::new(labels, Fixed)?);
//! let analyzer = Analyzer::from_profile(&default_profile(), Some(classifier))?;
//!
//! let request = AnalysisRequest::new(3.8, 6.5)
//!     .with_odor(4)
//!     .with_image(DynamicImage::new_rgb8(400, 300));
//!
//! match analyzer.analyze(&request) {
//!     AnalysisOutcome::Evaluated(analysis) => println!("{}", analysis.report.to_json()?),
//!     other => println!("{}", other.message()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod outcome;
pub mod report;
pub mod request;

pub use analyzer::Analyzer;
pub use outcome::{Analysis, AnalysisOutcome};
pub use report::{Badge, EcBar, MetricsSummary, Report, StandardsReference, StandardsRow};
pub use request::{AnalysisRequest, ImageInput};
