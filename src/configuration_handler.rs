use crate::configuration::Configuration;
use chrono::Weekday;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(about = "Barbershop appointment booking client")]
pub struct ConfigurationHandler {
    /// Base URL of the barbershop API
    #[arg(long, default_value = "http://localhost:8080")]
    backend_url: String,

    /// Weekday on which the shop is closed, e.g. "sunday"
    #[arg(long, default_value = "sunday", value_parser = parse_weekday)]
    closed_weekday: Weekday,

    /// Authenticated user id, as issued at login
    #[arg(long)]
    pub user_id: Option<uuid::Uuid>,

    /// Bearer token belonging to the user id
    #[arg(long)]
    pub access_token: Option<String>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

fn parse_weekday(raw: &str) -> Result<Weekday, String> {
    raw.parse()
        .map_err(|_| format!("'{raw}' is not a weekday"))
}

impl Configuration for ConfigurationHandler {
    fn backend_url(&self) -> String {
        self.backend_url.trim_end_matches('/').to_string()
    }

    fn closed_weekday(&self) -> Weekday {
        self.closed_weekday
    }
}
