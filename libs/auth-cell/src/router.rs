use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware,
};

use shared_utils::extractor::auth_middleware;
use shared_utils::session::AuthContext;

use crate::handlers;
use crate::services::identity::CredentialTable;

#[derive(Clone)]
pub struct AuthState {
    pub auth: AuthContext,
    pub credentials: Arc<CredentialTable>,
}

impl AuthState {
    pub fn new(auth: AuthContext, credentials: CredentialTable) -> Self {
        Self {
            auth,
            credentials: Arc::new(credentials),
        }
    }
}

pub fn auth_routes(state: AuthState) -> Router {
    let public_routes = Router::new()
        .route("/login", post(handlers::login));

    let protected_routes = Router::new()
        .route("/logout", post(handlers::logout))
        .route("/me", get(handlers::current_user))
        .layer(middleware::from_fn_with_state(state.auth.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
