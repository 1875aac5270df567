//! Classifier configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LABELS_PATH, DEFAULT_MODEL_PATH, INPUT_SIZE};
use crate::labels::LabelFormat;

/// Where the two artifacts live and how to read them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// TFLite model file
    pub model_path: PathBuf,
    /// Label list, one class per line
    pub labels_path: PathBuf,
    /// Whether label lines carry an index prefix
    pub label_format: LabelFormat,
    /// Square input side the model expects
    pub input_size: u32,
}

impl ClassifierConfig {
    /// Config for the given artifacts with default format and size
    pub fn new(model_path: impl Into<PathBuf>, labels_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            labels_path: labels_path.into(),
            ..Self::default()
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            labels_path: PathBuf::from(DEFAULT_LABELS_PATH),
            label_format: LabelFormat::IndexPrefixed,
            input_size: INPUT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: ClassifierConfig = serde_json::from_str(r#"{ "model_path": "models/v2.tflite" }"#).unwrap();
        assert_eq!(config.model_path, PathBuf::from("models/v2.tflite"));
        assert_eq!(config.labels_path, PathBuf::from("labels.txt"));
        assert_eq!(config.label_format, LabelFormat::IndexPrefixed);
        assert_eq!(config.input_size, 224);
    }

    #[test]
    fn label_format_is_snake_case() {
        let config: ClassifierConfig = serde_json::from_str(r#"{ "label_format": "plain" }"#).unwrap();
        assert_eq!(config.label_format, LabelFormat::Plain);
    }
}
