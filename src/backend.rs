use crate::error::{AvailabilityError, BookingError};
use crate::types::{BookingRequest, ServiceType};
use chrono::{NaiveDate, NaiveTime};

/// The two network operations the workflow depends on. The production
/// implementation lives in [`crate::http`]; tests substitute a mock.
#[allow(async_fn_in_trait)]
pub trait AppointmentBackend: Clone + Send + Sync + 'static {
    /// Open slots for the given day and service, already normalized to
    /// plain times of day.
    async fn available_slots(
        &self,
        date: NaiveDate,
        service: ServiceType,
    ) -> Result<Vec<NaiveTime>, AvailabilityError>;

    /// Submit a booking on behalf of the authenticated user. The server
    /// is the single source of truth for whether the appointment exists.
    async fn create_appointment(
        &self,
        request: &BookingRequest,
        access_token: &str,
    ) -> Result<(), BookingError>;
}
