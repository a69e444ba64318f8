use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{Specialist, SpecialistSearchQuery, SpecialtyFilter};
use crate::services::catalog::{BOOKING_TIME_SLOTS, SPECIALTIES};
use crate::services::directory::SpecialistDirectory;

pub async fn search_specialists(
    State(directory): State<Arc<SpecialistDirectory>>,
    Query(query): Query<SpecialistSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let filter = SpecialtyFilter::parse(query.specialty.as_deref());
    let specialists = directory.search(query.q.as_deref().unwrap_or_default(), &filter);

    Ok(Json(json!({
        "specialists": specialists,
        "total": specialists.len()
    })))
}

pub async fn get_specialist(
    State(directory): State<Arc<SpecialistDirectory>>,
    Path(specialist_id): Path<String>,
) -> Result<Json<Specialist>, AppError> {
    let specialist = directory.find(&specialist_id)?;
    Ok(Json(specialist.clone()))
}

pub async fn list_specialties() -> Json<Value> {
    Json(json!({
        "specialties": SPECIALTIES
    }))
}

pub async fn list_time_slots() -> Json<Value> {
    Json(json!({
        "time_slots": BOOKING_TIME_SLOTS
    }))
}
