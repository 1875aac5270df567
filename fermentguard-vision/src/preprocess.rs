//! Image Preprocessing
//!
//! ## Pipeline
//!
//! ```text
//! upload bytes ──decode_image──► RGB image ──fit_square(224)──► to_tensor ──► [1, 224, 224, 3] f32
//!                                    │
//!                                    └──fit_square(300)──► preview thumbnail
//! ```
//!
//! `fit_square` crops the centred square and scales it to the target with
//! Lanczos3 resampling, so the subject is never stretched. An image that
//! is already the target size is returned untouched, which makes the whole
//! pipeline idempotent on 224x224 inputs.
//!
//! Every channel value `p` in 0..=255 becomes `p / 127.5 - 1`, i.e. -1..=1.

use image::{imageops::FilterType, DynamicImage, RgbImage};

use crate::constants::{CHANNELS, INPUT_SIZE, NORMALIZATION_SCALE, PREVIEW_SIZE};
use crate::VisionResult;

/// Dense NHWC input tensor with a batch of one
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    shape: [usize; 4],
    data: Vec<f32>,
}

impl InputTensor {
    /// `[batch, height, width, channels]`
    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    /// Row-major values
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Take the buffer
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

/// Decode an uploaded jpg/jpeg/png, guessing the format from its content
pub fn decode_image(bytes: &[u8]) -> VisionResult<DynamicImage> {
    let decoded = image::load_from_memory(bytes)?;
    log::debug!("decoded {}x{} upload", decoded.width(), decoded.height());
    Ok(DynamicImage::ImageRgb8(decoded.to_rgb8()))
}

/// Centre-crop to a square, then resize to `size` x `size` RGB
///
/// Cropping first bounds the resampling work by `size`, whatever the aspect
/// ratio of the upload.
pub fn fit_square(image: &DynamicImage, size: u32) -> RgbImage {
    let (width, height) = (image.width(), image.height());
    if width == size && height == size {
        return image.to_rgb8();
    }

    let side = width.min(height);
    if side == 0 {
        return RgbImage::new(size, size);
    }

    image
        .crop_imm((width - side) / 2, (height - side) / 2, side, side)
        .resize_exact(size, size, FilterType::Lanczos3)
        .to_rgb8()
}

/// Display thumbnail, same fit as the classifier input
pub fn preview(image: &DynamicImage) -> RgbImage {
    fit_square(image, PREVIEW_SIZE)
}

/// Normalize an RGB image into the model's input tensor
pub fn to_tensor(image: &RgbImage) -> InputTensor {
    let (width, height) = image.dimensions();
    let data = image
        .as_raw()
        .iter()
        .map(|&p| f32::from(p) / NORMALIZATION_SCALE - 1.0)
        .collect();

    InputTensor {
        shape: [1, height as usize, width as usize, CHANNELS],
        data,
    }
}

/// Full preprocessing for the classifier
pub fn preprocess(image: &DynamicImage) -> InputTensor {
    preprocess_to(image, INPUT_SIZE)
}

/// Preprocess for a model with a non-default input size
pub fn preprocess_to(image: &DynamicImage, size: u32) -> InputTensor {
    let fitted = fit_square(image, size);
    log::debug!(
        "preprocessed {}x{} image to {}x{}",
        image.width(),
        image.height(),
        size,
        size
    );
    to_tensor(&fitted)
}
