//! Image geometry and normalization constants

/// Side length of the square classifier input, in pixels
pub const INPUT_SIZE: u32 = 224;

/// Side length of the square display thumbnail, in pixels
pub const PREVIEW_SIZE: u32 = 300;

/// RGB channels per pixel
pub const CHANNELS: usize = 3;

/// Half of the 8-bit range; `p / NORMALIZATION_SCALE - 1` maps 0..=255 onto -1..=1
pub const NORMALIZATION_SCALE: f32 = 127.5;

/// Default model artifact path
pub const DEFAULT_MODEL_PATH: &str = "model.tflite";

/// Default label artifact path
pub const DEFAULT_LABELS_PATH: &str = "labels.txt";
