use std::fmt;

use crate::{dom::Container, model::WeatherObservation, weather::glyph_for_code};

/// Display-ready values for the weather widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    pub glyph: &'static str,
    pub temperature: i64,
    pub humidity: i64,
    pub wind: f64,
}

impl WeatherPanel {
    pub fn from_observation(obs: &WeatherObservation) -> Self {
        Self {
            glyph: glyph_for_code(obs.weather_code),
            temperature: round_half_up(obs.temperature_celsius),
            humidity: round_half_up(obs.humidity_percent),
            wind: obs.wind_kph,
        }
    }

    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity)
    }

    pub fn wind_label(&self) -> String {
        format!("{} km/h", one_decimal(self.wind))
    }

    pub fn to_markup(&self) -> String {
        format!(
            r#"<div class="weather-info">
  <div class="weather-icon">{glyph}</div>
  <div class="weather-details-main">
    <div class="temperature">{temp}</div>
    <div class="weather-stats">
      <span>💧 {humidity}</span>
      <span>💨 {wind}</span>
    </div>
  </div>
</div>"#,
            glyph = self.glyph,
            temp = self.temperature_label(),
            humidity = self.humidity_label(),
            wind = self.wind_label(),
        )
    }
}

impl fmt::Display for WeatherPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}  💧 {}  💨 {}",
            self.glyph,
            self.temperature_label(),
            self.humidity_label(),
            self.wind_label()
        )
    }
}

/// Nearest integer, halves toward positive infinity (-2.5 becomes -2).
fn round_half_up(value: f64) -> i64 {
    // `as` maps -0.0 to 0
    (value + 0.5).floor() as i64
}

/// One decimal place, exact ties rounded away from zero (10.25 becomes 10.3).
fn one_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    // A tie at one decimal is m/4 with m odd; only those are exact in binary.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value.abs() * 10.0 + 0.5).floor().copysign(value);
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

pub fn render_success<C: Container + ?Sized>(container: &mut C, panel: &WeatherPanel) {
    container.set_inner_html(panel.to_markup());
}

pub fn render_error<C: Container + ?Sized>(container: &mut C, message: &str) {
    container.set_inner_html(error_markup(message));
}

pub fn error_markup(message: &str) -> String {
    format!(r#"<div class="weather-error">{}</div>"#, escape_html(message))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
