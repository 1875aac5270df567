//! Analysis requests

use fermentguard_core::{ChemistryInput, OdorScore, ValidationResult};
use image::DynamicImage;

/// Photo attached to a request
#[derive(Debug, Clone)]
pub enum ImageInput {
    /// Already decoded
    Decoded(DynamicImage),
    /// Raw jpg/jpeg/png upload, decoded during analysis
    Encoded(Vec<u8>),
}

/// Everything the operator submits for one analysis
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Photo of the liquid; required
    pub image: Option<ImageInput>,
    /// Measured pH
    pub ph: f32,
    /// Measured EC in mS/cm
    pub ec: f32,
    /// Smell rating 1-5
    pub odor: Option<u8>,
    /// Fruit picked from the selector (fixed-threshold profiles)
    pub selected_fruit: Option<String>,
}

impl AnalysisRequest {
    /// Request with chemistry readings only
    pub fn new(ph: f32, ec: f32) -> Self {
        Self {
            image: None,
            ph,
            ec,
            odor: None,
            selected_fruit: None,
        }
    }

    /// Attach a decoded photo
    pub fn with_image(mut self, image: DynamicImage) -> Self {
        self.image = Some(ImageInput::Decoded(image));
        self
    }

    /// Attach an encoded upload
    pub fn with_upload(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.image = Some(ImageInput::Encoded(bytes.into()));
        self
    }

    /// Attach a smell rating
    pub fn with_odor(mut self, odor: u8) -> Self {
        self.odor = Some(odor);
        self
    }

    /// Attach a fruit selection
    pub fn with_selected_fruit(mut self, fruit: impl Into<String>) -> Self {
        self.selected_fruit = Some(fruit.into());
        self
    }

    /// Validated chemistry readings
    pub(crate) fn chemistry(&self) -> ValidationResult<ChemistryInput> {
        let chemistry = ChemistryInput::new(self.ph, self.ec)?;
        match self.odor {
            Some(score) => Ok(chemistry.with_odor(OdorScore::new(score)?)),
            None => Ok(chemistry),
        }
    }
}
