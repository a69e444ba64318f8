use axum::{
    Router,
    routing::get,
};

use appointment_cell::appointment_routes;
use auth_cell::auth_routes;
use directory_cell::directory_routes;
use sanction_cell::sanction_routes;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic Booking API is running!" }))
        .nest("/auth", auth_routes(state.auth_state()))
        .nest("/specialists", directory_routes(state.directory.clone()))
        .nest("/appointments", appointment_routes(state.appointment_state()))
        .nest("/sanctions", sanction_routes(state.sanction_state()))
}
