// libs/appointment-cell/src/handlers.rs
use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::auth::{Role, User};
use shared_models::error::AppError;
use shared_utils::extractor::require_role;

use crate::models::{
    parse_optional_date, parse_optional_time, Appointment, AppointmentCounts,
    BookAppointmentRequest, NewAppointment, UpdateStatusRequest,
};
use crate::router::AppointmentState;

// ==============================================================================
// PATIENT HANDLERS
// ==============================================================================

/// Book an appointment for the signed-in patient with the chosen specialist
pub async fn book_appointment(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_role(&user, Role::Patient)?;

    let specialist = state.directory.find(&request.specialist_id)?;

    let appointment = state.ledger.book_appointment(NewAppointment {
        patient_id: user.id.clone(),
        patient_name: user.name.clone(),
        specialist_id: specialist.id.clone(),
        specialist_name: specialist.name.clone(),
        specialty: specialist.specialty.clone(),
        date: parse_optional_date(&request.date)?,
        time: parse_optional_time(&request.time)?,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "appointment": appointment,
            "message": "Appointment booked successfully"
        })),
    ))
}

pub async fn list_my_appointments(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, Role::Patient)?;
    debug!("Listing appointments for patient {}", user.id);

    let appointments = state.ledger.list_by_patient(&user.id);

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

// ==============================================================================
// ADMIN HANDLERS
// ==============================================================================

pub async fn list_appointments(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, Role::Admin)?;

    let appointments = state.ledger.list_all();

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

pub async fn get_patient_appointments(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, Role::Admin)?;

    let appointments = state.ledger.list_by_patient(&patient_id);

    Ok(Json(json!({
        "patient_id": patient_id,
        "appointments": appointments,
        "total": appointments.len()
    })))
}

/// Admins see any appointment, patients only their own
pub async fn get_appointment(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state.ledger.get(&appointment_id)?;

    if !user.is_admin() && appointment.patient_id != user.id {
        return Err(AppError::Forbidden(
            "Not authorized to view this appointment".to_string(),
        ));
    }

    Ok(Json(appointment))
}

pub async fn update_appointment_status(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
    Path(appointment_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, Role::Admin)?;

    let update = request.into_status_update()?;
    let appointment = state.ledger.update_status(&appointment_id, update)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment status updated"
    })))
}

pub async fn get_appointment_stats(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
) -> Result<Json<AppointmentCounts>, AppError> {
    require_role(&user, Role::Admin)?;

    Ok(Json(state.ledger.aggregate_counts()))
}
