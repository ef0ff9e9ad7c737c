use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::{Coordinate, WeatherObservation};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// Glyph shown for weather codes missing from [`glyph_for_code`]'s table.
pub const DEFAULT_GLYPH: &str = "🌡️";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("weather request failed with status {status}: {body}")]
    NonOkResponse { status: StatusCode, body: String },

    #[error("failed to parse weather response: {0}")]
    Parse(#[source] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, at: Coordinate) -> Result<WeatherObservation, WeatherError>;
}

/// Map a WMO weather code to the glyph displayed in the widget.
pub fn glyph_for_code(code: i64) -> &'static str {
    match code {
        0 => "☀️",
        1 => "🌤️",
        2 => "⛅",
        3 => "☁️",
        45 => "🌫️",
        51 | 61 => "🌧️",
        65 | 95 => "⛈️",
        71 => "❄️",
        _ => DEFAULT_GLYPH,
    }
}
