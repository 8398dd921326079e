//! Data layers
//!
//! Each layer is a refinement stage with its own directory under `data/`.
//! Only [`Layer::Raw`] has behavior attached to it (file staging).

use serde::{Deserialize, Serialize};

/// A data refinement stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Unmodified, first-staged copies of input files
    #[default]
    Raw,
    /// Cleaned but not yet modeled data
    Intermediate,
    /// Domain-level tables
    Primary,
    /// Engineered features
    Feature,
    /// Inputs ready for modeling
    ModelInput,
}

impl Layer {
    /// All layers in refinement order
    pub const ALL: [Self; 5] =
        [Self::Raw, Self::Intermediate, Self::Primary, Self::Feature, Self::ModelInput];

    /// Short name used in config files (`raw`, `model_input`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Intermediate => "intermediate",
            Self::Primary => "primary",
            Self::Feature => "feature",
            Self::ModelInput => "model_input",
        }
    }

    /// Directory name under `data/` (`01_raw`, `05_model_input`, ...)
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Raw => "01_raw",
            Self::Intermediate => "02_intermediate",
            Self::Primary => "03_primary",
            Self::Feature => "04_feature",
            Self::ModelInput => "05_model_input",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|layer| normalized == layer.as_str() || normalized == layer.dir_name())
            .ok_or_else(|| {
                format!(
                    "Invalid layer: {s}. Use: raw, intermediate, primary, feature, model_input"
                )
            })
    }
}
