use crate::backend::AppointmentBackend;
use crate::error::{AvailabilityError, BookingError};
use crate::types::{slot_time, BookingRequest, ServiceType};
use chrono::{NaiveDate, NaiveTime};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
struct AvailableSlotsRequest {
    date: NaiveDate,
    #[serde(rename = "eBarberService")]
    e_barber_service: ServiceType,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    message: String,
}

/// The barbershop REST API. Slot times travel as "HH:MM" strings; the
/// legacy `[hour, minute]` array form is not supported.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/users/appointments/{path}", self.base_url)
    }
}

impl AppointmentBackend for HttpBackend {
    async fn available_slots(
        &self,
        date: NaiveDate,
        service: ServiceType,
    ) -> Result<Vec<NaiveTime>, AvailabilityError> {
        let response = self
            .client
            .post(self.endpoint("available"))
            .json(&AvailableSlotsRequest {
                date,
                e_barber_service: service,
            })
            .send()
            .await
            .map_err(|err| AvailabilityError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AvailabilityError::Status(response.status().as_u16()));
        }

        let raw: Vec<String> = response
            .json()
            .await
            .map_err(|err| AvailabilityError::Transport(err.to_string()))?;

        // %H tolerates a missing leading zero, so "9:00" normalizes to 09:00.
        raw.into_iter()
            .map(|slot| {
                NaiveTime::parse_from_str(&slot, slot_time::FORMAT)
                    .map_err(|_| AvailabilityError::Malformed(slot))
            })
            .collect()
    }

    async fn create_appointment(
        &self,
        request: &BookingRequest,
        access_token: &str,
    ) -> Result<(), BookingError> {
        let response = self
            .client
            .post(self.endpoint("create"))
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await
            .map_err(|err| BookingError::Transport(err.to_string()))?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            status => {
                // Prefer the server's own wording when it sent one.
                match response.json::<ErrorBody>().await {
                    Ok(body) => Err(BookingError::Rejected(body.message)),
                    Err(_) => Err(BookingError::Transport(format!(
                        "server answered with status {status}"
                    ))),
                }
            }
        }
    }
}
