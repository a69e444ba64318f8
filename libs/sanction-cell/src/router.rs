// libs/sanction-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::post,
    middleware,
};

use shared_utils::extractor::auth_middleware;
use shared_utils::session::AuthContext;

use crate::handlers;
use crate::services::ledger::SanctionLedger;

#[derive(Clone)]
pub struct SanctionState {
    pub auth: AuthContext,
    pub ledger: Arc<SanctionLedger>,
}

pub fn sanction_routes(state: SanctionState) -> Router {
    // Administrators only; the role check happens in the handlers
    let protected_routes = Router::new()
        .route("/", post(handlers::add_sanction).get(handlers::list_sanctions))
        .layer(middleware::from_fn_with_state(state.auth.clone(), auth_middleware));

    Router::new()
        .merge(protected_routes)
        .with_state(state)
}
