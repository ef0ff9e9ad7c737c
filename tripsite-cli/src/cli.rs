use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use std::path::PathBuf;
use tracing::info;

use tripsite_core::{
    BookingRequest, Config, Coordinate, Severity, WeatherWidget, WidgetState,
    dom::{Color, Element},
    geolocation::{FixedLocator, Locator},
    ui::ConsentBanner,
    validate,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tripsite", version, about = "Tripsite page behaviors from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a booking form submission.
    Book {
        #[command(flatten)]
        form: BookingArgs,

        /// Prompt for any field not given on the command line.
        #[arg(long, short)]
        interactive: bool,
    },

    /// Show current weather for a location (Tbilisi when none is given).
    Weather {
        /// Latitude of the device location.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude of the device location.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Print the widget markup instead of a one-line summary.
        #[arg(long)]
        html: bool,
    },

    /// Inspect or answer the cookie banner.
    Consent {
        #[command(subcommand)]
        action: ConsentAction,
    },

    /// Update the stored configuration.
    Configure {
        /// Weather API URL to use instead of the public Open-Meteo endpoint.
        #[arg(long)]
        endpoint: Option<String>,

        /// File to persist the consent flag in.
        #[arg(long)]
        storage: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConsentAction {
    /// Show whether the banner would be displayed.
    Status,
    /// Accept cookies and hide the banner.
    Accept,
    /// Reject cookies and hide the banner.
    Reject,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct BookingArgs {
    #[arg(long)]
    pub place: Option<String>,
    #[arg(long)]
    pub checkin: Option<String>,
    #[arg(long)]
    pub checkout: Option<String>,
    #[arg(long)]
    pub persons: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}

impl BookingArgs {
    fn into_request(self, interactive: bool) -> Result<BookingRequest> {
        let field = |value: Option<String>, label: &str| -> Result<String> {
            match value {
                Some(v) => Ok(v),
                None if interactive => Text::new(label)
                    .prompt()
                    .with_context(|| format!("Failed to read {label}")),
                None => Ok(String::new()),
            }
        };

        let place = field(self.place, "Place:")?;
        let check_in_date = field(self.checkin, "Check-in date:")?;
        let check_out_date = field(self.checkout, "Check-out date:")?;
        let party_size = field(self.persons, "Persons:")?;
        let email = field(self.email, "Email:")?;
        let password = match self.password {
            Some(v) => v,
            None if interactive => Password::new("Password:")
                .with_display_mode(PasswordDisplayMode::Masked)
                .without_confirmation()
                .prompt()
                .context("Failed to read password")?,
            None => String::new(),
        };

        Ok(BookingRequest { place, check_in_date, check_out_date, party_size, email, password })
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Book { form, interactive } => book(form, interactive),
            Command::Weather { lat, lon, html } => weather(lat.zip(lon), html).await,
            Command::Consent { action } => consent(action),
            Command::Configure { endpoint, storage } => configure(endpoint, storage),
        }
    }
}

fn book(form: BookingArgs, interactive: bool) -> Result<()> {
    let request = form.into_request(interactive)?;
    let result = validate(&request);

    let mut status = Element::new("errorMsg");
    result.apply(&mut status);

    let color = status.color.unwrap_or(Color::Red);
    println!("[{}] {}", color.as_css(), status.text);

    if result.severity == Severity::Error {
        bail!("booking rejected");
    }
    Ok(())
}

async fn weather(device: Option<(f64, f64)>, html: bool) -> Result<()> {
    let config = Config::load()?;
    let provider = config.weather_provider();
    let locator = device.map(|(lat, lon)| FixedLocator(Coordinate::new(lat, lon)));

    let mut container = Element::new("weatherWidget");
    let widget = WeatherWidget::new(locator.as_ref().map(|l| l as &dyn Locator), &provider);
    let state = widget.initialize(&mut container).await;

    if html {
        println!("{}", container.inner_html);
        return Ok(());
    }

    match state {
        WidgetState::Loaded { at, observation, panel } => {
            println!("{panel}");
            let when = observation
                .observed_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "now".to_string());
            println!("at {:.4}, {:.4} ({when})", at.latitude, at.longitude);
        }
        WidgetState::Failed { .. } => println!("{}", tripsite_core::WEATHER_ERROR_MESSAGE),
    }

    Ok(())
}

fn consent(action: ConsentAction) -> Result<()> {
    let config = Config::load()?;
    let store = config.consent_store()?;
    info!(path = %store.path().display(), "using consent storage");

    let mut banner = ConsentBanner::new(Element::new("cookieNotification"), store);
    banner.on_load();

    match action {
        ConsentAction::Status => {}
        ConsentAction::Accept => banner.accept(),
        ConsentAction::Reject => banner.reject(),
    }

    let recorded = banner.recorded().map(|f| f.to_string()).unwrap_or_else(|| "none".into());
    let shown = if banner.is_visible() { "shown" } else { "hidden" };
    println!("cookie banner: {shown} (consent: {recorded})");

    Ok(())
}

fn configure(endpoint: Option<String>, storage: Option<PathBuf>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(endpoint) = endpoint {
        config.weather_endpoint = Some(endpoint);
    }
    if let Some(storage) = storage {
        config.storage_path = Some(storage);
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
