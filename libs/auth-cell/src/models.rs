use serde::{Deserialize, Serialize};

use shared_models::auth::{Dashboard, User};
use shared_models::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    // Same message for unknown email and wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Auth(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: User,
    pub dashboard: Dashboard,
}
