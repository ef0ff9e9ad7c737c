use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::{
    dom::{Color, StatusLine},
    model::{BookingRequest, Severity, ValidationResult},
};

pub const SUCCESS_MESSAGE: &str = "Booking successful ✅";

/// Counted in UTF-16 code units, as browsers measure form input.
const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Why a booking form was rejected. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("fill in all fields!")]
    MissingField,

    #[error("Invalid email format!")]
    InvalidEmailFormat,

    #[error("Password must be at least 8 characters and include a number!")]
    WeakPassword,
}

/// Check the booking form. Rules run in order and the first failure wins.
pub fn check(request: &BookingRequest) -> Result<(), ValidationError> {
    if let Some(field) = request.first_missing_field() {
        debug!(field, "booking form has an empty field");
        return Err(ValidationError::MissingField);
    }

    if !is_valid_email(&request.email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    if !is_strong_password(&request.password) {
        return Err(ValidationError::WeakPassword);
    }

    Ok(())
}

pub fn validate(request: &BookingRequest) -> ValidationResult {
    match check(request) {
        Ok(()) => ValidationResult {
            ok: true,
            message: SUCCESS_MESSAGE.to_string(),
            severity: Severity::Success,
        },
        Err(err) => ValidationResult {
            ok: false,
            message: err.to_string(),
            severity: Severity::Error,
        },
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least eight characters on a single line, with an ASCII digit anywhere.
pub fn is_strong_password(password: &str) -> bool {
    !password.contains(is_line_terminator)
        && password.encode_utf16().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_digit())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

impl ValidationResult {
    /// Show the outcome on the form's status element.
    pub fn apply<S: StatusLine + ?Sized>(&self, status: &mut S) {
        let color = match self.severity {
            Severity::Error => Color::Red,
            Severity::Success => Color::Green,
        };
        status.set_color(color);
        status.set_text(&self.message);
    }
}
