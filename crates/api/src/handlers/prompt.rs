//! Handlers for the `/prompts` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use prompt_vault_core::error::CoreError;
use prompt_vault_core::prompt::{ENTITY, MSG_DELETED};
use prompt_vault_core::types::DbId;
use prompt_vault_db::models::prompt::{CreatePromptRequest, Prompt, UpdatePrompt};
use prompt_vault_db::repositories::PromptRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /api/prompts
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePromptRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Prompt>)> {
    let Json(request) = payload?;
    let input = request.into_create()?;
    let prompt = PromptRepo::create(&state.pool, &input).await?;
    tracing::info!(id = prompt.id, "Prompt created");
    Ok((StatusCode::CREATED, Json(prompt)))
}

/// GET /api/prompts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Prompt>>> {
    let prompts = PromptRepo::list(&state.pool).await?;
    Ok(Json(prompts))
}

/// GET /api/prompts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Prompt>> {
    let prompt = PromptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(prompt))
}

/// PUT /api/prompts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<UpdatePrompt>, JsonRejection>,
) -> AppResult<Json<Prompt>> {
    let Json(input) = payload?;
    input.validate()?;
    let prompt = PromptRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(prompt))
}

/// DELETE /api/prompts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = PromptRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Prompt deleted");
        Ok(Json(MessageResponse::new(MSG_DELETED)))
    } else {
        Err(not_found(id))
    }
}
