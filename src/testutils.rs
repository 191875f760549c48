use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};
use uuid::Uuid;

use crate::backend::AppointmentBackend;
use crate::configuration::Configuration;
use crate::error::{AvailabilityError, BookingError};
use crate::ports::UserInterface;
use crate::types::{BookingRequest, Identity, ServiceType};

pub struct MockBackendInner {
    pub slots_result: Mutex<Result<Vec<NaiveTime>, AvailabilityError>>,
    pub booking_result: Mutex<Result<(), BookingError>>,
    pub calls_to_available_slots: AtomicU64,
    pub calls_to_create_appointment: AtomicU64,
    pub last_slot_query: Mutex<Option<(NaiveDate, ServiceType)>>,
    pub last_booking: Mutex<Option<BookingRequest>>,
    pub last_access_token: Mutex<Option<String>>,
}

#[derive(Clone)]
pub struct MockBackend(pub Arc<MockBackendInner>);

impl MockBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBackendInner {
            slots_result: Mutex::new(Ok(Vec::new())),
            booking_result: Mutex::new(Ok(())),
            calls_to_available_slots: AtomicU64::default(),
            calls_to_create_appointment: AtomicU64::default(),
            last_slot_query: Mutex::default(),
            last_booking: Mutex::default(),
            last_access_token: Mutex::default(),
        }))
    }

    pub fn set_slots(&self, times: Vec<NaiveTime>) {
        *self.0.slots_result.lock().unwrap() = Ok(times);
    }

    pub fn fail_slots(&self, err: AvailabilityError) {
        *self.0.slots_result.lock().unwrap() = Err(err);
    }

    pub fn fail_booking(&self, err: BookingError) {
        *self.0.booking_result.lock().unwrap() = Err(err);
    }
}

impl AppointmentBackend for MockBackend {
    async fn available_slots(
        &self,
        date: NaiveDate,
        service: ServiceType,
    ) -> Result<Vec<NaiveTime>, AvailabilityError> {
        self.0
            .calls_to_available_slots
            .fetch_add(1, Ordering::SeqCst);
        *self.0.last_slot_query.lock().unwrap() = Some((date, service));
        self.0.slots_result.lock().unwrap().clone()
    }

    async fn create_appointment(
        &self,
        request: &BookingRequest,
        access_token: &str,
    ) -> Result<(), BookingError> {
        self.0
            .calls_to_create_appointment
            .fetch_add(1, Ordering::SeqCst);
        *self.0.last_booking.lock().unwrap() = Some(request.clone());
        *self.0.last_access_token.lock().unwrap() = Some(access_token.to_string());
        self.0.booking_result.lock().unwrap().clone()
    }
}

pub struct MockUserInterfaceInner {
    pub confirm_answer: AtomicBool,
    pub calls_to_confirm: AtomicU64,
    pub calls_to_open_appointments: AtomicU64,
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

#[derive(Clone)]
pub struct MockUserInterface(pub Arc<MockUserInterfaceInner>);

impl MockUserInterface {
    pub fn new() -> Self {
        Self(Arc::new(MockUserInterfaceInner {
            confirm_answer: AtomicBool::new(true),
            calls_to_confirm: AtomicU64::default(),
            calls_to_open_appointments: AtomicU64::default(),
            successes: Mutex::default(),
            errors: Mutex::default(),
        }))
    }
}

impl UserInterface for MockUserInterface {
    fn confirm_booking(&self, _prompt: &str) -> bool {
        self.0.calls_to_confirm.fetch_add(1, Ordering::SeqCst);
        self.0.confirm_answer.load(Ordering::SeqCst)
    }

    fn notify_success(&self, message: &str) {
        self.0.successes.lock().unwrap().push(message.to_string());
    }

    fn notify_error(&self, message: &str) {
        self.0.errors.lock().unwrap().push(message.to_string());
    }

    fn open_appointments(&self) {
        self.0
            .calls_to_open_appointments
            .fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct FixedConfiguration {
    pub backend_url: String,
    pub closed_weekday: Weekday,
}

impl Default for FixedConfiguration {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".into(),
            closed_weekday: Weekday::Sun,
        }
    }
}

impl Configuration for FixedConfiguration {
    fn backend_url(&self) -> String {
        self.backend_url.clone()
    }

    fn closed_weekday(&self) -> Weekday {
        self.closed_weekday
    }
}

pub fn identity() -> Identity {
    Identity {
        id: Uuid::new_v4(),
        access_token: "token-123".into(),
    }
}

/// First occurrence of `weekday` strictly after today, so tests always
/// work with future dates regardless of when they run.
pub fn next_weekday(weekday: Weekday) -> NaiveDate {
    let mut date = Local::now().date_naive() + Duration::days(1);
    while date.weekday() != weekday {
        date += Duration::days(1);
    }
    date
}
