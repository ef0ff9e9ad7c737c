//! Core library for the tripsite front end.
//!
//! This crate defines:
//! - Booking form validation
//! - The weather widget flow (location, Open-Meteo client, rendering)
//! - Page toggles: navigation menu, scroll-to-top, cookie consent
//! - Element and storage handles the behaviors are given, plus configuration
//!
//! It is used by `tripsite-cli`, but any host that can provide the element
//! handles in [`dom`] can drive it.

pub mod config;
pub mod dom;
pub mod geolocation;
pub mod model;
pub mod render;
pub mod storage;
pub mod ui;
pub mod validation;
pub mod weather;
pub mod widget;

pub use config::Config;
pub use geolocation::{Locator, resolve_coordinate};
pub use model::{
    BookingRequest, ConsentFlag, Coordinate, Severity, ValidationResult, WeatherObservation,
};
pub use render::WeatherPanel;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use validation::{ValidationError, validate};
pub use weather::{OpenMeteoProvider, WeatherError, WeatherProvider};
pub use widget::{WEATHER_ERROR_MESSAGE, WeatherWidget, WidgetState};
