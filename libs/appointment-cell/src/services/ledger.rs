// libs/appointment-cell/src/services/ledger.rs
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info, warn};

use shared_database::MemoryTable;
use shared_utils::ids::TimeBasedIds;

use crate::models::{
    Appointment, AppointmentCounts, AppointmentError, AppointmentStatus, NewAppointment,
    StatusUpdate,
};
use crate::services::lifecycle::TransitionPolicy;

/// Every appointment in the clinic, in booking order.
///
/// No slot or double-booking checks: two patients may hold the same
/// specialist, date and time.
pub struct AppointmentLedger {
    table: MemoryTable<Appointment>,
    ids: TimeBasedIds,
    policy: TransitionPolicy,
}

impl AppointmentLedger {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self::with_appointments(Vec::new(), policy)
    }

    pub fn with_appointments(appointments: Vec<Appointment>, policy: TransitionPolicy) -> Self {
        Self {
            table: MemoryTable::with_rows("appointments", appointments),
            ids: TimeBasedIds::new(),
            policy,
        }
    }

    /// Ledger seeded with the four demo appointments (a1-a4).
    pub fn demo(policy: TransitionPolicy) -> Self {
        let appointment = |id: &str,
                           patient: (&str, &str),
                           specialist: (&str, &str, &str),
                           date: (i32, u32, u32),
                           time: (u32, u32),
                           status: AppointmentStatus| {
            Appointment {
                id: id.to_string(),
                patient_id: patient.0.to_string(),
                patient_name: patient.1.to_string(),
                specialist_id: specialist.0.to_string(),
                specialist_name: specialist.1.to_string(),
                specialty: specialist.2.to_string(),
                date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
                time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap_or_default(),
                status,
                reason: None,
            }
        };

        Self::with_appointments(
            vec![
                appointment(
                    "a1",
                    ("1", "María González"),
                    ("s1", "Dr. Juan Pérez", "Cardiología"),
                    (2026, 3, 5),
                    (10, 0),
                    AppointmentStatus::Scheduled,
                ),
                appointment(
                    "a2",
                    ("1", "María González"),
                    ("s2", "Dra. Ana Martínez", "Dermatología"),
                    (2026, 2, 20),
                    (14, 30),
                    AppointmentStatus::Completed,
                ),
                appointment(
                    "a3",
                    ("3", "Pedro Rodríguez"),
                    ("s3", "Dr. Roberto Sánchez", "Neurología"),
                    (2026, 3, 10),
                    (9, 0),
                    AppointmentStatus::Scheduled,
                ),
                appointment(
                    "a4",
                    ("4", "Lucía Morales"),
                    ("s5", "Dr. Miguel Torres", "Traumatología"),
                    (2026, 3, 8),
                    (11, 30),
                    AppointmentStatus::Scheduled,
                ),
            ],
            policy,
        )
    }

    pub fn policy(&self) -> &TransitionPolicy {
        &self.policy
    }

    /// Book a new appointment. It always starts out scheduled, with no reason.
    pub fn book_appointment(&self, request: NewAppointment) -> Result<Appointment, AppointmentError> {
        debug!(
            "Booking appointment for patient {} with specialist {}",
            request.patient_id, request.specialist_id
        );

        let (Some(date), Some(time)) = (request.date, request.time) else {
            warn!("Booking rejected for patient {}: missing date or time", request.patient_id);
            return Err(AppointmentError::ValidationError(
                "Date and time are required".to_string(),
            ));
        };

        let appointment = self.table.replace(|rows| {
            let mut id = self.ids.next_with_prefix("a");
            while rows.iter().any(|existing| existing.id == id) {
                id = self.ids.next_with_prefix("a");
            }

            let appointment = Appointment {
                id,
                patient_id: request.patient_id,
                patient_name: request.patient_name,
                specialist_id: request.specialist_id,
                specialist_name: request.specialist_name,
                specialty: request.specialty,
                date,
                time,
                status: AppointmentStatus::Scheduled,
                reason: None,
            };
            rows.push(appointment.clone());
            Ok::<_, AppointmentError>(appointment)
        })?;

        info!(
            "Appointment {} booked for patient {} on {} at {}",
            appointment.id,
            appointment.patient_id,
            appointment.date,
            appointment.time.format("%H:%M")
        );
        Ok(appointment)
    }

    /// Change the status of one appointment.
    ///
    /// The reason is replaced (an absent or empty reason clears it). Date and
    /// time move only when the new status is postponed and both are supplied;
    /// a postponement without a full new slot keeps the old one.
    pub fn update_status(
        &self,
        appointment_id: &str,
        update: StatusUpdate,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Updating appointment {} to {}", appointment_id, update.status);

        let reschedule = match (update.status, update.new_date, update.new_time) {
            (AppointmentStatus::Postponed, Some(date), Some(time)) => Some((date, time)),
            _ => None,
        };

        let updated = self.table.replace(|rows| {
            let appointment = rows
                .iter_mut()
                .find(|appointment| appointment.id == appointment_id)
                .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))?;

            self.policy
                .validate_status_transition(appointment.status, update.status)?;

            appointment.status = update.status;
            appointment.reason = update.reason.filter(|reason| !reason.is_empty());
            if let Some((date, time)) = reschedule {
                appointment.date = date;
                appointment.time = time;
            }

            Ok(appointment.clone())
        })?;

        info!("Appointment {} is now {}", updated.id, updated.status);
        Ok(updated)
    }

    pub fn get(&self, appointment_id: &str) -> Result<Appointment, AppointmentError> {
        self.table
            .find(|appointment| appointment.id == appointment_id)
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))
    }

    pub fn list_all(&self) -> Vec<Appointment> {
        self.table.snapshot().as_ref().clone()
    }

    /// A patient's appointments in booking order (not sorted by date).
    pub fn list_by_patient(&self, patient_id: &str) -> Vec<Appointment> {
        self.table.filter(|appointment| appointment.patient_id == patient_id)
    }

    pub fn aggregate_counts(&self) -> AppointmentCounts {
        AppointmentCounts::tally(&self.table.snapshot())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
