//! Fermentation phase
//!
//! An informational label derived from pH alone. It never gates readiness.

use crate::constants::phases::{ACTIVE_PHASE_PH_MAX, ACTIVE_PHASE_PH_MIN};

/// Coarse fermentation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FermentationPhase {
    /// pH above 5.0: sugars not yet broken down
    Initial,
    /// pH 4.0 to 5.0 inclusive: active decomposition
    Active,
    /// pH below 4.0: acidity has settled
    Stationary,
}

impl FermentationPhase {
    /// Step function of pH; both Active boundaries are inclusive
    pub fn from_ph(ph: f32) -> Self {
        if ph > ACTIVE_PHASE_PH_MAX {
            FermentationPhase::Initial
        } else if ph >= ACTIVE_PHASE_PH_MIN {
            FermentationPhase::Active
        } else {
            FermentationPhase::Stationary
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            FermentationPhase::Initial => "Initial Phase",
            FermentationPhase::Active => "Active Phase",
            FermentationPhase::Stationary => "Stationary Phase",
        }
    }

    /// Display color used by the dashboard
    pub const fn color(&self) -> &'static str {
        match self {
            FermentationPhase::Initial => "blue",
            FermentationPhase::Active => "orange",
            FermentationPhase::Stationary => "green",
        }
    }
}

impl core::fmt::Display for FermentationPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
