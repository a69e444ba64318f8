use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::services::directory::SpecialistDirectory;

pub fn directory_routes(state: Arc<SpecialistDirectory>) -> Router {
    // The roster is reference data: no authentication required
    Router::new()
        .route("/search", get(handlers::search_specialists))
        .route("/specialties", get(handlers::list_specialties))
        .route("/time-slots", get(handlers::list_time_slots))
        .route("/{specialist_id}", get(handlers::get_specialist))
        .with_state(state)
}
