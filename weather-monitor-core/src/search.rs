//! One search cycle: validate the city, fetch, assemble, report.

use crate::{
    error::SearchError,
    notify::{NoticeKind, Notifier},
    provider::WeatherProvider,
    view::{WeatherView, assemble},
};

/// Holds the view currently on screen and replaces it on each submission.
///
/// Every outcome other than success clears the view, so a failed search
/// never leaves the previous city's data displayed.
#[derive(Debug)]
pub struct WeatherSearch<N> {
    provider: Box<dyn WeatherProvider>,
    notifier: N,
    current: Option<WeatherView>,
}

impl<N: Notifier> WeatherSearch<N> {
    pub fn new(provider: Box<dyn WeatherProvider>, notifier: N) -> Self {
        Self { provider, notifier, current: None }
    }

    pub async fn submit(&mut self, city: &str) -> Result<&WeatherView, SearchError> {
        let city = city.trim();

        if city.is_empty() {
            self.current = None;
            return Err(self.report(NoticeKind::Validation, SearchError::LocationRequired));
        }

        match self.provider.get_weather(city).await {
            Ok(reading) => {
                tracing::debug!(city = %reading.city, "weather received");
                Ok(self.current.insert(assemble(&reading)))
            }
            Err(e) => {
                self.current = None;
                Err(self.report(NoticeKind::Failure, e.into()))
            }
        }
    }

    pub fn current(&self) -> Option<&WeatherView> {
        self.current.as_ref()
    }

    fn report(&self, kind: NoticeKind, err: SearchError) -> SearchError {
        let message = err.user_message();
        tracing::warn!(%kind, %message, "search failed");
        self.notifier.notify(kind, &message);
        err
    }
}
