//! Analyze one synthetic sample against both built-in profiles.
//!
//! Pass a profile path as the first argument to use it instead of the
//! built-in table-lookup profile. The classifier is a stand-in that always
//! answers "Banana"; build with `--features tflite` and swap in
//! `Analyzer::load` to use a real model.

use std::sync::Arc;

use anyhow::Result;
use fermentguard_analysis::{AnalysisRequest, Analyzer};
use fermentguard_schemas::{default_profile, hybrid_profile, StandardsProfile};
use fermentguard_vision::{Classifier, InferenceBackend, InputTensor, VisionResult};
use image::{DynamicImage, Rgb, RgbImage};

struct StandIn;

impl InferenceBackend for StandIn {
    fn infer(&self, _input: &InputTensor) -> VisionResult<Vec<f32>> {
        Ok(vec![0.87, 0.05, 0.04, 0.02, 0.02])
    }

    fn name(&self) -> &str {
        "stand-in"
    }
}

fn main() -> Result<()> {
    let profile = match std::env::args().nth(1) {
        Some(path) => StandardsProfile::from_path(path)?,
        None => default_profile(),
    };

    let labels = ["Banana", "Papaya", "Pumpkin", "Pineapple", "Watermelon"]
        .map(String::from)
        .to_vec();
    let classifier = Arc::new(Classifier::new(labels, StandIn)?);

    let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(800, 600, Rgb([196, 164, 92])));

    println!("=== {} profile ===", profile.name);
    let analyzer = Analyzer::from_profile(&profile, Some(Arc::clone(&classifier)))?;
    for (ph, ec, odor) in [(3.8, 6.5, 5), (4.6, 5.2, 3), (6.1, 1.0, 1)] {
        let request = AnalysisRequest::new(ph, ec).with_odor(odor).with_image(photo.clone());
        let outcome = analyzer.analyze(&request);
        println!("pH {ph:.2}, EC {ec:.2}, odor {odor}: {}", outcome.message());
        if let Some(analysis) = outcome.analysis() {
            for reason in &analysis.report.reasons {
                println!("  - {reason}");
            }
        }
    }

    println!("\n=== hybrid profile ===");
    let hybrid = Analyzer::from_profile(&hybrid_profile(), Some(classifier))?;
    let request = AnalysisRequest::new(3.5, 2.5)
        .with_image(photo)
        .with_selected_fruit("Pineapple");
    let outcome = hybrid.analyze(&request);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    println!("\n=== reference table ===");
    for row in hybrid.standards_reference().rows {
        println!("{:<12} {:>6} {:>6} {:>6}", row.fruit, row.ph_min, row.ph_max, row.ec_min);
    }

    Ok(())
}
