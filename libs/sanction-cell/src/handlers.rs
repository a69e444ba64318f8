// libs/sanction-cell/src/handlers.rs
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::auth::{Role, User};
use shared_models::error::AppError;
use shared_utils::extractor::require_role;

use crate::models::AddSanctionRequest;
use crate::router::SanctionState;

pub async fn add_sanction(
    State(state): State<SanctionState>,
    Extension(user): Extension<User>,
    Json(request): Json<AddSanctionRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_role(&user, Role::Admin)?;

    let sanction_type = request.parsed_type()?;
    let sanction = state
        .ledger
        .add_sanction(&request.patient_name, &request.reason, sanction_type)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "sanction": sanction,
            "message": "Sanction recorded"
        })),
    ))
}

pub async fn list_sanctions(
    State(state): State<SanctionState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, Role::Admin)?;

    let sanctions = state.ledger.list_sanctions();

    Ok(Json(json!({
        "sanctions": sanctions,
        "total": sanctions.len()
    })))
}
