use axum::{
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
    body::Body,
};
use tracing::warn;

use shared_models::auth::{Role, User};
use shared_models::error::AppError;

use crate::session::AuthContext;

pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    auth_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Auth("Invalid authorization header format".to_string()))
}

// Resolves the bearer token to a live session and exposes it to handlers
pub async fn auth_middleware(
    State(auth): State<AuthContext>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;

    let session = auth.resolve(token).map_err(AppError::Auth)?;

    request.extensions_mut().insert(session.user.clone());
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

pub fn require_role(user: &User, role: Role) -> Result<(), AppError> {
    if user.role != role {
        warn!("User {} with role {} attempted a {} operation", user.id, user.role, role);
        return Err(AppError::Forbidden(format!("This operation requires the {} role", role)));
    }
    Ok(())
}
