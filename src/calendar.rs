use crate::error::DateRejection;
use chrono::{Datelike, NaiveDate, Weekday};

/// Business-calendar gate for appointment dates. Runs before a date is
/// committed to the selection; it only accepts or rejects, never adjusts.
/// Comparison is by calendar day, time-of-day plays no part.
pub fn validate_booking_date(
    candidate: NaiveDate,
    today: NaiveDate,
    closed_weekday: Weekday,
) -> Result<(), DateRejection> {
    if candidate < today {
        return Err(DateRejection::PastDate);
    }
    if candidate.weekday() == closed_weekday {
        return Err(DateRejection::ClosedWeekday(closed_weekday));
    }
    Ok(())
}
