use chrono::Weekday;

pub trait Configuration: Clone + Send + Sync + 'static {
    /// Base URL of the barbershop API, without a trailing slash.
    fn backend_url(&self) -> String;
    /// Weekday on which the shop takes no appointments.
    fn closed_weekday(&self) -> Weekday;
}
