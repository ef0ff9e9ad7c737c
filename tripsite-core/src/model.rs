use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Raw values of the booking form, one per input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub place: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub party_size: String,
    pub email: String,
    pub password: String,
}

impl BookingRequest {
    /// Name of the first empty field, in form order.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("place", &self.place),
            ("checkin", &self.check_in_date),
            ("checkout", &self.check_out_date),
            ("persons", &self.party_size),
            ("email", &self.email),
            ("password", &self.password),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub message: String,
    pub severity: Severity,
}

/// Current conditions as reported by the weather API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub wind_kph: f64,
    pub weather_code: i64,
    pub observed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Tbilisi; used whenever the device location is unavailable.
    pub const FALLBACK: Coordinate = Coordinate { latitude: 41.7151, longitude: 44.8271 };

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// The user's answer to the cookie banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsentFlag {
    Accepted,
    Rejected,
}

impl ConsentFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentFlag::Accepted => "accepted",
            ConsentFlag::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ConsentFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ConsentFlag {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "accepted" => Ok(ConsentFlag::Accepted),
            "rejected" => Ok(ConsentFlag::Rejected),
            _ => Err(anyhow::anyhow!(
                "Unknown consent value '{value}'. Expected: accepted, rejected."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_missing_field_follows_form_order() {
        let req = BookingRequest {
            place: "Tbilisi".into(),
            check_in_date: String::new(),
            password: String::new(),
            ..Default::default()
        };

        assert_eq!(req.first_missing_field(), Some("checkin"));
    }

    #[test]
    fn consent_flag_parses_stored_values() {
        assert_eq!(ConsentFlag::try_from("accepted").unwrap(), ConsentFlag::Accepted);
        assert_eq!(ConsentFlag::try_from("rejected").unwrap(), ConsentFlag::Rejected);

        let err = ConsentFlag::try_from("maybe").unwrap_err();
        assert!(err.to_string().contains("Unknown consent value"));
    }
}
