use chrono::Weekday;
use thiserror::Error;

/// Why a candidate booking date was turned down. Local to the client,
/// recovered by clearing the field; no network effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRejection {
    #[error("You cannot select a past date for an appointment!")]
    PastDate,
    #[error("We are closed on {}s!", full_weekday_name(.0))]
    ClosedWeekday(Weekday),
}

/// Availability lookups are non-fatal: the failure is logged and the slot
/// list cleared, the user retries implicitly by changing date or service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    #[error("availability request failed: {0}")]
    Transport(String),
    #[error("availability endpoint answered with status {0}")]
    Status(u16),
    #[error("availability endpoint returned an unreadable slot: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The server refused the booking and said why; the message is shown
    /// to the user verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("booking request failed: {0}")]
    Transport(String),
}

fn full_weekday_name(weekday: &Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
