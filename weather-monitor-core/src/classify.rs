//! Pure mappings from raw readings to display labels.
//!
//! Every function here is total: any input, including out-of-range values
//! sent by a misbehaving upstream, yields a label.

pub mod bands;
pub mod compass;
pub mod condition;

pub use bands::{CloudBand, HumidityBand};
pub use compass::{CompassPoint, wind_direction_label};
pub use condition::{WeatherCondition, describe_weather_code};
