//! Client-side appointment booking for a barbershop: the selection state
//! machine, the availability-fetch policy with its stale-response guard,
//! the date rules, and the confirmation-gated submission protocol. The
//! rendering layer, session handling and the slot computation itself live
//! elsewhere.

pub mod backend;
pub mod calendar;
pub mod configuration;
pub mod configuration_handler;
pub mod console;
pub mod error;
pub mod http;
pub mod ports;
#[cfg(test)]
mod testutils;
pub mod types;
pub mod workflow;

pub use backend::AppointmentBackend;
pub use configuration::Configuration;
pub use error::{AvailabilityError, BookingError, DateRejection};
pub use ports::UserInterface;
pub use types::{BookingRequest, Identity, Selection, ServiceType};
pub use workflow::{BookingWorkflow, SubmitOutcome};
