// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
    middleware,
};

use directory_cell::SpecialistDirectory;
use shared_utils::extractor::auth_middleware;
use shared_utils::session::AuthContext;

use crate::handlers;
use crate::services::ledger::AppointmentLedger;

#[derive(Clone)]
pub struct AppointmentState {
    pub auth: AuthContext,
    pub ledger: Arc<AppointmentLedger>,
    pub directory: Arc<SpecialistDirectory>,
}

pub fn appointment_routes(state: AppointmentState) -> Router {
    // All appointment operations require authentication
    let protected_routes = Router::new()
        // Patient booking flow
        .route("/", post(handlers::book_appointment).get(handlers::list_appointments))
        .route("/mine", get(handlers::list_my_appointments))

        // Admin views
        .route("/stats", get(handlers::get_appointment_stats))
        .route("/patients/{patient_id}", get(handlers::get_patient_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/status", patch(handlers::update_appointment_status))

        .layer(middleware::from_fn_with_state(state.auth.clone(), auth_middleware));

    Router::new()
        .merge(protected_routes)
        .with_state(state)
}
