use tracing::error;

use crate::{
    dom::Container,
    geolocation::{Locator, resolve_coordinate},
    model::{Coordinate, WeatherObservation},
    render::{WeatherPanel, render_error, render_success},
    weather::WeatherProvider,
};

pub const WEATHER_ERROR_MESSAGE: &str = "Unable to fetch weather data";

/// What the widget ended up showing.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState {
    Loaded { at: Coordinate, observation: WeatherObservation, panel: WeatherPanel },
    Failed { at: Coordinate },
}

/// Composes location lookup, the weather request and rendering.
#[derive(Debug)]
pub struct WeatherWidget<'a> {
    locator: Option<&'a dyn Locator>,
    provider: &'a dyn WeatherProvider,
}

impl<'a> WeatherWidget<'a> {
    pub fn new(locator: Option<&'a dyn Locator>, provider: &'a dyn WeatherProvider) -> Self {
        Self { locator, provider }
    }

    /// Fill `container` with current conditions. Failures are logged and
    /// rendered as a fixed message; they never reach the caller.
    pub async fn initialize<C: Container + ?Sized>(&self, container: &mut C) -> WidgetState {
        let at = resolve_coordinate(self.locator).await;

        match self.provider.current(at).await {
            Ok(observation) => {
                let panel = WeatherPanel::from_observation(&observation);
                render_success(container, &panel);
                WidgetState::Loaded { at, observation, panel }
            }
            Err(err) => {
                error!(error = %err, lat = at.latitude, lon = at.longitude, "weather fetch failed");
                render_error(container, WEATHER_ERROR_MESSAGE);
                WidgetState::Failed { at }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dom::Element,
        geolocation::{DeniedLocator, FixedLocator},
        weather::{
            OpenMeteoProvider,
            open_meteo::tests::{SAMPLE_BODY, serve_once},
        },
    };

    #[tokio::test]
    async fn renders_panel_for_device_location() {
        let (addr, handle) = serve_once("200 OK", SAMPLE_BODY).await;
        let provider = OpenMeteoProvider::with_endpoint(format!("http://{addr}/v1/forecast"));
        let here = FixedLocator(Coordinate::new(50.0, 10.0));

        let mut container = Element::new("weatherWidget");
        let state = WeatherWidget::new(Some(&here as &dyn Locator), &provider)
            .initialize(&mut container)
            .await;

        assert!(matches!(state, WidgetState::Loaded { at, .. } if at == Coordinate::new(50.0, 10.0)));
        assert!(container.inner_html.contains("⛅"));
        assert!(container.inner_html.contains("24°C"));

        let request_line = handle.await.expect("stub task");
        assert!(request_line.contains("latitude=50"));
    }

    #[tokio::test]
    async fn non_ok_response_renders_fixed_message() {
        let (addr, _handle) = serve_once("500 Internal Server Error", "boom").await;
        let provider = OpenMeteoProvider::with_endpoint(format!("http://{addr}/v1/forecast"));

        let mut container = Element::new("weatherWidget");
        let state = WeatherWidget::new(Some(&DeniedLocator as &dyn Locator), &provider)
            .initialize(&mut container)
            .await;

        assert_eq!(state, WidgetState::Failed { at: Coordinate::FALLBACK });
        assert_eq!(
            container.inner_html,
            r#"<div class="weather-error">Unable to fetch weather data</div>"#
        );
    }

    #[tokio::test]
    async fn malformed_body_renders_fixed_message() {
        let (addr, _handle) = serve_once("200 OK", "not json").await;
        let provider = OpenMeteoProvider::with_endpoint(format!("http://{addr}/v1/forecast"));

        let mut container = Element::new("weatherWidget");
        let state = WeatherWidget::new(None, &provider).initialize(&mut container).await;

        assert!(matches!(state, WidgetState::Failed { .. }));
        assert!(container.inner_html.contains(WEATHER_ERROR_MESSAGE));
    }
}
