use serde::{Deserialize, Serialize};

/// Qualitative humidity level.
///
/// Above 70 is high, above 40 is moderate, anything else is low. No range
/// check is made, so 150 is still "High moisture".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumidityBand {
    High,
    Moderate,
    Low,
}

impl HumidityBand {
    pub fn from_percent(humidity: i64) -> Self {
        if humidity > 70 {
            Self::High
        } else if humidity > 40 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High moisture",
            Self::Moderate => "Moderate",
            Self::Low => "Low moisture",
        }
    }
}

/// Qualitative cloud cover level: above 70, above 30, or at most 30 percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudBand {
    MostlyCloudy,
    PartlyCloudy,
    Clear,
}

impl CloudBand {
    pub fn from_percent(cloud_cover: i64) -> Self {
        if cloud_cover > 70 {
            Self::MostlyCloudy
        } else if cloud_cover > 30 {
            Self::PartlyCloudy
        } else {
            Self::Clear
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MostlyCloudy => "Mostly cloudy",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Clear => "Clear skies",
        }
    }
}
