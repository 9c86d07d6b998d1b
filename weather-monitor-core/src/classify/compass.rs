use serde::{Deserialize, Serialize};

/// One of the eight principal compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    const CLOCKWISE: [CompassPoint; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Nearest point for a bearing in degrees.
    ///
    /// The bearing is wrapped into [0, 360) first, so negative and
    /// over-range values are accepted. Non-finite bearings map to N.
    pub fn from_bearing(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Self::N;
        }

        let normalized = degrees.rem_euclid(360.0);
        // Rounding 337.5..360 gives 8, which wraps back to N.
        let index = (normalized / 45.0).round() as usize % 8;
        Self::CLOCKWISE[index]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn wind_direction_label(degrees: f64) -> &'static str {
    CompassPoint::from_bearing(degrees).as_str()
}
