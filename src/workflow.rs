use crate::backend::AppointmentBackend;
use crate::calendar;
use crate::configuration::Configuration;
use crate::error::{AvailabilityError, BookingError, DateRejection};
use crate::ports::UserInterface;
use crate::types::{BookingRequest, Identity, Selection, ServiceType};
use chrono::{Local, NaiveDate, NaiveTime};
use tracing::{debug, error, warn};

const CONFIRM_PROMPT: &str = "Are you sure you want to book this appointment?";
const CREATED_MESSAGE: &str = "The appointment is created successfully!";
const GENERIC_BOOKING_ERROR: &str = "Error creating appointment. Please try again.";

/// One in-flight availability lookup, tagged with the selection that
/// triggered it. [`BookingWorkflow::apply_fetch`] compares the tag against
/// the current state so a superseded lookup can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotQuery {
    generation: u64,
    pub date: NaiveDate,
    pub service: ServiceType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Selection incomplete or a submission already outstanding; nothing
    /// was sent.
    NotReady,
    /// The user answered no at the confirmation prompt; nothing was sent.
    Declined,
    /// The server acknowledged the appointment.
    Booked,
    /// The server or transport failed; the selection is kept for a retry.
    Failed,
}

/// The appointment-booking state machine. One instance per user session;
/// every mutation happens through `&mut self` on a discrete user or
/// network-completion event.
pub struct BookingWorkflow<B, C, U> {
    backend: B,
    configuration: C,
    ui: U,
    identity: Identity,
    selection: Selection,
    available_times: Vec<NaiveTime>,
    fetch_generation: u64,
    submitting: bool,
}

impl<B, C, U> BookingWorkflow<B, C, U>
where
    B: AppointmentBackend,
    C: Configuration,
    U: UserInterface,
{
    pub fn new(backend: B, configuration: C, ui: U, identity: Identity) -> Self {
        Self {
            backend,
            configuration,
            ui,
            identity,
            selection: Selection::default(),
            available_times: Vec::new(),
            fetch_generation: 0,
            submitting: false,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Open slots for the current (date, service) pair, as last reported
    /// by the backend. Never mutated directly by the caller.
    pub fn available_times(&self) -> &[NaiveTime] {
        &self.available_times
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Booking is offered only once service, date and time are all chosen
    /// and no submission is outstanding.
    pub fn can_submit(&self) -> bool {
        self.selection.is_complete() && !self.submitting
    }

    /// Picking a service invalidates any previously chosen time, since
    /// slot applicability differs per service. Re-fetches availability
    /// when a date is already present.
    pub async fn set_service(&mut self, service: ServiceType) {
        self.selection.service = Some(service);
        self.selection.time = None;
        self.refresh_slots().await;
    }

    /// Commits the date only if the business calendar accepts it. On
    /// rejection the field reverts to empty, the reason is surfaced, and
    /// no fetch is issued.
    pub async fn set_date(&mut self, date: NaiveDate) -> Result<(), DateRejection> {
        let today = Local::now().date_naive();
        if let Err(rejection) =
            calendar::validate_booking_date(date, today, self.configuration.closed_weekday())
        {
            self.selection.date = None;
            self.available_times.clear();
            self.ui.notify_error(&rejection.to_string());
            return Err(rejection);
        }
        self.selection.date = Some(date);
        self.refresh_slots().await;
        Ok(())
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.selection.time = Some(time);
    }

    /// Cancel: back to the initial empty state. No confirmation, no
    /// network call. Bumps the fetch generation so an in-flight lookup
    /// cannot repopulate the cleared slot list.
    pub fn reset(&mut self) {
        self.selection = Selection::default();
        self.available_times.clear();
        self.fetch_generation += 1;
    }

    /// First half of the availability rule: when both date and service
    /// are set, stamp a new generation and hand back the query to run.
    pub fn begin_fetch(&mut self) -> Option<SlotQuery> {
        let date = self.selection.date?;
        let service = self.selection.service?;
        self.fetch_generation += 1;
        Some(SlotQuery {
            generation: self.fetch_generation,
            date,
            service,
        })
    }

    /// Second half: apply a lookup result, unless a newer selection has
    /// superseded it. Failed lookups clear the list rather than leaving
    /// stale slots on display; the user retries implicitly by changing
    /// date or service.
    pub fn apply_fetch(
        &mut self,
        query: SlotQuery,
        outcome: Result<Vec<NaiveTime>, AvailabilityError>,
    ) {
        let superseded = query.generation != self.fetch_generation
            || self.selection.date != Some(query.date)
            || self.selection.service != Some(query.service);
        if superseded {
            debug!(?query, "discarding superseded availability result");
            return;
        }
        match outcome {
            Ok(times) => self.available_times = times,
            Err(err) => {
                warn!(%err, date = %query.date, "failed to fetch available slots");
                self.available_times.clear();
            }
        }
    }

    async fn refresh_slots(&mut self) {
        let Some(query) = self.begin_fetch() else {
            return;
        };
        let outcome = self.backend.available_slots(query.date, query.service).await;
        self.apply_fetch(query, outcome);
    }

    /// Confirmation-gated submission. The server is the single source of
    /// truth: no local state changes before its acknowledgment, and the
    /// selection survives a failure so the user can retry as-is.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::NotReady;
        }
        let Some(request) = BookingRequest::from_selection(&self.selection, self.identity.id)
        else {
            return SubmitOutcome::NotReady;
        };
        if !self.ui.confirm_booking(CONFIRM_PROMPT) {
            return SubmitOutcome::Declined;
        }

        self.submitting = true;
        let result = self
            .backend
            .create_appointment(&request, &self.identity.access_token)
            .await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.ui.notify_success(CREATED_MESSAGE);
                self.ui.open_appointments();
                SubmitOutcome::Booked
            }
            Err(BookingError::Rejected(message)) => {
                warn!(%message, "booking rejected by the server");
                self.ui.notify_error(&message);
                SubmitOutcome::Failed
            }
            Err(err) => {
                error!(%err, "failed to create appointment");
                self.ui.notify_error(GENERIC_BOOKING_ERROR);
                SubmitOutcome::Failed
            }
        }
    }
}
