use axum::{
    extract::{Extension, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_models::auth::{LoginRequest, LoginResponse, Session, User};
use shared_models::error::AppError;

use crate::models::CurrentUserResponse;
use crate::router::AuthState;
use crate::services::identity::IdentityStore;

pub async fn login(
    State(state): State<AuthState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    debug!("Login attempt for {}", request.email);

    let mut identity = IdentityStore::new(state.credentials.clone());
    let user = identity.authenticate(&request.email, &request.password)?;

    let (session, token) = state.auth.start_session(user).map_err(|e| {
        error!("Failed to start session: {}", e);
        AppError::Internal("Could not start session".to_string())
    })?;

    Ok(Json(LoginResponse {
        token,
        dashboard: session.user.role.dashboard(),
        expires_at: session.expires_at,
        user: session.user,
    }))
}

pub async fn logout(
    State(state): State<AuthState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Value>, AppError> {
    debug!("Logging out user {}", session.user.id);

    let ended = state.auth.end_session(&session.id);

    Ok(Json(json!({
        "success": true,
        "ended": ended
    })))
}

pub async fn current_user(
    Extension(user): Extension<User>,
) -> Result<Json<CurrentUserResponse>, AppError> {
    Ok(Json(CurrentUserResponse {
        dashboard: user.role.dashboard(),
        user,
    }))
}
