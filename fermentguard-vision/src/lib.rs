//! # FermentGuard Vision
//!
//! Classifier adapter: turns a photo of a fermented liquid into a
//! [`Classification`](fermentguard_core::Classification) the readiness
//! evaluator can judge.
//!
//! ## Components
//!
//! - [`preprocess`]: decode uploads, centre-fit to 224x224 (Lanczos3),
//!   normalize to -1..=1 and lay out as an NHWC tensor. Also the 300x300
//!   display preview.
//! - [`labels`]: label files, with or without index prefixes.
//! - [`InferenceBackend`]: one synchronous forward pass. The TFLite runtime
//!   lives behind the `tflite` feature.
//! - [`Classifier`]: labels + backend + post-processing.
//! - [`ClassifierHandle`]: load once per process, share everywhere.
//!
//! ## Example
//!
//! ```rust
//! use fermentguard_vision::{Classifier, InferenceBackend, InputTensor, VisionResult};
//! use image::DynamicImage;
//!
//! struct AlwaysBanana;
//!
//! impl InferenceBackend for AlwaysBanana {
//!     fn infer(&self, _input: &InputTensor) -> VisionResult<Vec<f32>> {
//!         Ok(vec![0.9, 0.1])
//!     }
//! }
//!
//! let classifier = Classifier::new(vec!["Banana".into(), "Papaya".into()], AlwaysBanana)?;
//! let result = classifier.classify(&DynamicImage::new_rgb8(640, 480))?;
//! assert_eq!(result.label, "Banana");
//! # Ok::<(), fermentguard_vision::VisionError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handle;
pub mod labels;
pub mod preprocess;

pub use backend::InferenceBackend;
#[cfg(feature = "tflite")]
pub use backend::TfliteBackend;
pub use classifier::Classifier;
pub use config::ClassifierConfig;
pub use errors::{VisionError, VisionResult};
pub use handle::ClassifierHandle;
pub use labels::{load_labels, LabelFormat};
pub use preprocess::{decode_image, fit_square, preprocess, preview, InputTensor};
