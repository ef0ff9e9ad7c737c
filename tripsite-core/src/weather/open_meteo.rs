use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{Coordinate, WeatherObservation};

use super::{WeatherError, WeatherProvider};

pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    endpoint: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), http: Client::new() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    time: Option<String>,
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: i64,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current: OmCurrent,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current(&self, at: Coordinate) -> Result<WeatherObservation, WeatherError> {
        debug!(lat = at.latitude, lon = at.longitude, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", at.latitude.to_string()),
                ("longitude", at.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .send()
            .await
            .map_err(WeatherError::Network)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Network)?;

        if !status.is_success() {
            return Err(WeatherError::NonOkResponse { status, body: truncate_body(&body) });
        }

        parse_current(&body)
    }
}

fn parse_current(body: &str) -> Result<WeatherObservation, WeatherError> {
    let parsed: OmResponse = serde_json::from_str(body).map_err(WeatherError::Parse)?;
    let current = parsed.current;

    // Open-Meteo reports local time without seconds, e.g. "2024-06-01T12:15".
    let observed_at = current
        .time
        .as_deref()
        .and_then(|t| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M").ok());

    Ok(WeatherObservation {
        temperature_celsius: current.temperature_2m,
        humidity_percent: current.relative_humidity_2m,
        wind_kph: current.wind_speed_10m,
        weather_code: current.weather_code,
        observed_at,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
