use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};

use crate::{
    model::block::CreateTimeBlockDto,
    server::{error::AppError, service::block::TimeBlockService, state::AppState},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_blocks).post(create_block))
        .route("/{id}", delete(delete_block))
}

/// GET /blocks
/// List all blocked periods, earliest first.
pub async fn list_blocks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TimeBlockService::new(&state.db);
    let blocks = service.list().await?;

    Ok((StatusCode::OK, Json(blocks)))
}

/// POST /blocks
/// Block out a period during which no class may be scheduled.
pub async fn create_block(
    State(state): State<AppState>,
    Json(dto): Json<CreateTimeBlockDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TimeBlockService::new(&state.db);
    let block = service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(block)))
}

/// DELETE /blocks/{id}
/// Remove a blocked period.
pub async fn delete_block(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TimeBlockService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
