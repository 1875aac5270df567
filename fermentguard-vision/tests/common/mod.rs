#![allow(dead_code)]

use fermentguard_vision::{InferenceBackend, InputTensor, VisionResult};
use image::{DynamicImage, Rgb, RgbImage};

pub const LABELS: [&str; 5] = ["Banana", "Papaya", "Pumpkin", "Pineapple", "Watermelon"];

/// Returns the same scores for every image
pub struct StubBackend(pub Vec<f32>);

impl InferenceBackend for StubBackend {
    fn infer(&self, input: &InputTensor) -> VisionResult<Vec<f32>> {
        assert_eq!(input.shape()[0], 1);
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Scores derived from the mean of the tensor, to prove the pixels arrive
pub struct MeanBackend;

impl InferenceBackend for MeanBackend {
    fn infer(&self, input: &InputTensor) -> VisionResult<Vec<f32>> {
        let data = input.as_slice();
        let mean = data.iter().sum::<f32>() / data.len() as f32;
        Ok(vec![mean, -mean])
    }
}

pub fn labels() -> Vec<String> {
    LABELS.iter().map(|s| s.to_string()).collect()
}

pub fn photo(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, 128])
    }))
}
