// libs/appointment-cell/src/models.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shared_models::error::AppError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked appointment.
///
/// `specialist_name` and `specialty` are copied from the directory at booking
/// time and are not kept in sync with it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub specialist_id: String,
    pub specialist_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    #[serde(with = "hour_minute")]
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Postponed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Postponed,
    ];

    /// Badge text shown to clinic staff and patients.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Programada",
            AppointmentStatus::Completed => "Completada",
            AppointmentStatus::Cancelled => "Cancelada",
            AppointmentStatus::Postponed => "Aplazada",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Postponed => write!(f, "postponed"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppointmentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.to_string() == raw)
            .ok_or_else(|| AppointmentError::InvalidStatus(raw.to_string()))
    }
}

// ==============================================================================
// LEDGER INPUTS
// ==============================================================================

/// Everything needed to book, with the specialist fields already denormalized.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: String,
    pub patient_name: String,
    pub specialist_id: String,
    pub specialist_name: String,
    pub specialty: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: AppointmentStatus,
    pub reason: Option<String>,
    pub new_date: Option<NaiveDate>,
    pub new_time: Option<NaiveTime>,
}

impl StatusUpdate {
    pub fn to(status: AppointmentStatus) -> Self {
        Self {
            status,
            reason: None,
            new_date: None,
            new_time: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn rescheduled_to(mut self, date: NaiveDate, time: NaiveTime) -> Self {
        self.new_date = Some(date);
        self.new_time = Some(time);
        self
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub specialist_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: String,
    pub reason: Option<String>,
    pub new_date: Option<String>,
    pub new_time: Option<String>,
}

impl UpdateStatusRequest {
    /// Empty date/time fields count as not supplied.
    pub fn into_status_update(self) -> Result<StatusUpdate, AppointmentError> {
        Ok(StatusUpdate {
            status: self.status.parse()?,
            reason: self.reason,
            new_date: parse_optional_date(self.new_date.as_deref().unwrap_or_default())?,
            new_time: parse_optional_time(self.new_time.as_deref().unwrap_or_default())?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentCounts {
    pub total: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl AppointmentCounts {
    /// Postponed appointments count towards `total` only.
    pub fn tally(appointments: &[Appointment]) -> Self {
        let count = |status: AppointmentStatus| {
            appointments.iter().filter(|a| a.status == status).count()
        };

        Self {
            total: appointments.len(),
            scheduled: count(AppointmentStatus::Scheduled),
            completed: count(AppointmentStatus::Completed),
            cancelled: count(AppointmentStatus::Cancelled),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid appointment status: {0}")]
    InvalidStatus(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            AppointmentError::InvalidStatus(_) => AppError::ValidationError(err.to_string()),
            AppointmentError::InvalidStatusTransition { .. } => AppError::Conflict(err.to_string()),
        }
    }
}

// ==============================================================================
// DATE/TIME PARSING
// ==============================================================================

pub fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, AppointmentError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppointmentError::ValidationError(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}

pub fn parse_optional_time(raw: &str) -> Result<Option<NaiveTime>, AppointmentError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    hour_minute::parse(raw)
        .map(Some)
        .map_err(|_| AppointmentError::ValidationError(format!("Invalid time '{}', expected HH:MM", raw)))
}

/// Time of day on the wire as `HH:MM`.
pub mod hour_minute {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn parse(raw: &str) -> chrono::ParseResult<NaiveTime> {
        NaiveTime::parse_from_str(raw, FORMAT)
    }

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
