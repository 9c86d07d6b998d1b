use std::fmt::Write;

use weather_monitor_core::{NoticeKind, Notifier, WeatherView};

/// Prints notifications to stderr as `title: message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        eprintln!("{}: {message}", kind.title());
    }
}

/// Plain-text dashboard, one card per line.
pub fn render_dashboard(view: &WeatherView) -> String {
    let mut out = String::new();
    let labels = &view.labels;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", view.location);
    let _ = writeln!(out, "  {}", view.coordinates);
    let _ = writeln!(
        out,
        "  {}  {}  ({})",
        view.headline_temperature, labels.description, view.feels_like
    );
    let _ = writeln!(out);

    let rows = [
        (
            "Temperature",
            view.temperature.clone(),
            format!("Apparent: {}", view.apparent_temperature),
        ),
        ("Humidity", view.humidity.clone(), labels.humidity_band.clone()),
        ("Precipitation", view.rain.clone(), format!("Total: {}", view.precipitation)),
        (
            "Wind Speed",
            view.wind_speed.clone(),
            format!("{} ({})", view.wind_direction, labels.wind_compass),
        ),
        ("Cloud Cover", view.cloud_cover.clone(), labels.cloud_band.clone()),
        ("Pressure", view.pressure.clone(), "Surface pressure".to_string()),
    ];

    for (name, value, note) in rows {
        let _ = writeln!(out, "  {name:<14}{value:<14}{note}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Last updated: {}", view.updated_at);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_monitor_core::{WeatherReading, assemble};

    #[test]
    fn dashboard_lists_every_card() {
        let reading = WeatherReading {
            city: "London".into(),
            country: "United Kingdom".into(),
            temperature: Some(11.26),
            humidity: Some(82),
            cloud_cover: Some(90),
            wind_direction: Some(200.0),
            weather_code: Some(61),
            timestamp: "2025-03-02T08:15".into(),
            ..WeatherReading::default()
        };

        let text = render_dashboard(&assemble(&reading));

        assert!(text.starts_with("London, United Kingdom\n"));
        assert!(text.contains("11°  Slight rain"));
        assert!(text.contains("High moisture"));
        assert!(text.contains("Mostly cloudy"));
        assert!(text.contains("(S)"));
        assert!(text.contains("Pressure      --"));
        assert!(text.ends_with("Last updated: 2025-03-02 08:15\n"));
    }
}
