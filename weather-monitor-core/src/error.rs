use thiserror::Error;

/// Fallback text when a failed response carries no `detail`.
pub const GENERIC_FETCH_FAILURE: &str = "Failed to fetch weather data";

/// A failed attempt to obtain a reading from a provider.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success HTTP status. `detail` is the server's message, shown verbatim.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Unable to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from the weather service: {0}")]
    Decode(String),
}

/// Why a search produced no weather view.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Location Required")]
    LocationRequired,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl SearchError {
    /// Text for the notification body.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::LocationRequired => {
                "Please enter a city name to get weather data".to_string()
            }
            SearchError::Fetch(e) => e.to_string(),
        }
    }
}
