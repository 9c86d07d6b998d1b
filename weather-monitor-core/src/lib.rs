//! Core library for the `weather-monitor` CLI.
//!
//! This crate defines:
//! - The weather reading model received from the API
//! - Pure classifiers (weather codes, wind compass points, humidity and cloud bands)
//! - The presentation assembler producing display-ready views
//! - Providers that fetch readings, and the search cycle driving them
//! - Configuration handling
//!
//! It is used by `weather-monitor-cli`, but can also be reused by other front ends.

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod provider;
pub mod search;
pub mod view;

pub use config::Config;
pub use error::{FetchError, SearchError};
pub use model::WeatherReading;
pub use notify::{NoticeKind, Notifier};
pub use provider::{ProviderId, WeatherProvider};
pub use search::WeatherSearch;
pub use view::{Classification, WeatherView, assemble};
