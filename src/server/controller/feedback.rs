use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::feedback::CreateFeedbackDto,
    server::{
        controller::{ClassFilterQuery, PaginationQuery},
        error::AppError,
        service::feedback::FeedbackService,
        state::AppState,
    },
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_feedback).post(create_feedback))
}

/// GET /feedback
/// List feedback, newest first, optionally filtered with `?class_id=`.
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(filter): Query<ClassFilterQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);
    let page = service
        .list(filter.class_id, pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// POST /feedback
/// Record feedback for a class.
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(dto): Json<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);
    let feedback = service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(feedback)))
}
