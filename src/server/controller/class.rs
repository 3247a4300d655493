use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::class::{CreateClassDto, UpdateClassDto},
    server::{
        controller::PaginationQuery, error::AppError, service::class::ClassService,
        state::AppState,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes).post(create_class))
        .route(
            "/{id}",
            get(get_class).put(update_class).delete(delete_class),
        )
}

/// GET /classes
/// List classes ordered by start time, with seat counts.
pub async fn list_classes(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClassService::new(&state.db, &state.events);
    let page = service.list(pagination.page, pagination.per_page).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /classes/{id}
/// Get a single class.
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClassService::new(&state.db, &state.events);
    let class = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(class)))
}

/// POST /classes
/// Publish a new class.
pub async fn create_class(
    State(state): State<AppState>,
    Json(dto): Json<CreateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClassService::new(&state.db, &state.events);
    let class = service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(class)))
}

/// PUT /classes/{id}
/// Update an existing class.
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClassService::new(&state.db, &state.events);
    let class = service.update(id, dto).await?;

    Ok((StatusCode::OK, Json(class)))
}

/// DELETE /classes/{id}
/// Remove a class; its bookings and feedback cascade.
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClassService::new(&state.db, &state.events);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
