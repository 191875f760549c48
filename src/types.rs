use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Services offered by the shop, with the wire names the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    Haircut,
    Beard,
    HaircutAndBeard,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Haircut => "Haircut",
            ServiceType::Beard => "Beard",
            ServiceType::HaircutAndBeard => "Haircut and Beard",
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        match self {
            ServiceType::Haircut | ServiceType::Beard => 30,
            ServiceType::HaircutAndBeard => 60,
        }
    }

    pub fn price_lv(&self) -> u32 {
        match self {
            ServiceType::Haircut => 20,
            ServiceType::Beard => 10,
            ServiceType::HaircutAndBeard => 30,
        }
    }
}

/// The user's current picks. `time` is only meaningful once both `service`
/// and `date` are set; the workflow clears it when `service` changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub service: Option<ServiceType>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        self.service.is_some() && self.date.is_some() && self.time.is_some()
    }
}

/// Authenticated user handed in by the session layer. Read-only here;
/// obtaining or refreshing it is not this crate's job.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub service: ServiceType,
    pub date: NaiveDate,
    #[serde(with = "slot_time")]
    pub time: NaiveTime,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

impl BookingRequest {
    /// A request is only ever built from a fully populated selection.
    pub fn from_selection(selection: &Selection, user_id: Uuid) -> Option<Self> {
        Some(Self {
            service: selection.service?,
            date: selection.date?,
            time: selection.time?,
            user_id,
        })
    }
}

/// Slot times travel as zero-padded 24-hour "HH:MM" strings.
pub mod slot_time {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn display(time: &NaiveTime) -> String {
        time.format(FORMAT).to_string()
    }

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&display(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
