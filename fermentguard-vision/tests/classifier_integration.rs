//! Adapter behaviour end to end with stub backends

mod common;

use std::io::{Cursor, Write};

use common::{labels, photo, MeanBackend, StubBackend};
use fermentguard_vision::{
    decode_image, fit_square, load_labels, preprocess, Classifier, ClassifierConfig, LabelFormat,
    VisionError,
};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use proptest::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn index_prefixed_label_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "0 Banana\n1 Papaya\n\n2 Pumpkin").unwrap();

    let labels = load_labels(file.path(), LabelFormat::IndexPrefixed).unwrap();
    assert_eq!(labels, ["Banana", "Papaya", "Pumpkin"]);
}

#[test]
fn empty_label_file_is_a_load_error() {
    let file = NamedTempFile::new().unwrap();
    assert!(matches!(
        load_labels(file.path(), LabelFormat::Plain),
        Err(VisionError::LabelLoad { .. })
    ));
}

#[test]
fn missing_label_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClassifierConfig::new(dir.path().join("model.tflite"), dir.path().join("labels.txt"));
    assert!(matches!(
        Classifier::from_config(&config),
        Err(VisionError::LabelLoad { .. })
    ));
}

#[test]
fn missing_model_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let labels_path = dir.path().join("labels.txt");
    std::fs::write(&labels_path, "0 Banana\n1 Papaya\n").unwrap();

    let config = ClassifierConfig::new(dir.path().join("absent.tflite"), labels_path);
    assert!(matches!(
        Classifier::from_config(&config),
        Err(VisionError::ModelLoad { .. })
    ));
}

#[test]
fn classifies_uploaded_png() {
    let mut bytes = Vec::new();
    photo(320, 240)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .unwrap();

    let image = decode_image(&bytes).unwrap();
    assert_eq!((image.width(), image.height()), (320, 240));

    let classifier = Classifier::new(labels(), StubBackend(vec![0.05, 0.05, 0.8, 0.05, 0.05])).unwrap();
    let result = classifier.classify(&image).unwrap();
    assert_eq!(result.label, "Pumpkin");
    assert_eq!(result.class_index, 2);
}

#[test]
fn pixels_reach_the_backend() {
    let white = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 80, Rgb([255, 255, 255])));
    let black = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 80, Rgb([0, 0, 0])));
    let classifier = Classifier::new(vec!["Bright".into(), "Dark".into()], MeanBackend).unwrap();

    assert_eq!(classifier.classify(&white).unwrap().label, "Bright");
    assert_eq!(classifier.classify(&black).unwrap().label, "Dark");
}

#[test]
fn preprocessing_is_idempotent_on_input_sized_images() {
    let original = photo(224, 224);
    let refit = DynamicImage::ImageRgb8(fit_square(&original, 224));
    assert_eq!(preprocess(&refit), preprocess(&original));
}

proptest! {
    #[test]
    fn confidence_is_always_a_probability(scores in prop::collection::vec(-50.0f32..50.0, 5)) {
        let classifier = Classifier::new(labels(), StubBackend(scores)).unwrap();
        let result = classifier.classify(&photo(16, 16)).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert!(result.class_index < 5);
        prop_assert_eq!(result.label.as_str(), common::LABELS[result.class_index]);
    }
}
